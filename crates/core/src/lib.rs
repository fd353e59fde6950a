//! Film collection core: the film record, its wire codec, and the in-memory
//! film store. Nothing in here knows about HTTP.

pub mod codec;
pub mod error;
pub mod film;
pub mod store;
pub mod types;
