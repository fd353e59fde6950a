//! Request extractors and response middleware for the film routes.
//!
//! - [`address::FilmAddress`] -- Builds collection and item addresses for the request.
//! - [`film_body::FilmBody`] -- Decodes a submitted film (JSON or `data=` form).
//! - [`status_mode::apply_status_mode`] -- Applies the configured error status mode.

pub mod address;
pub mod film_body;
pub mod status_mode;
