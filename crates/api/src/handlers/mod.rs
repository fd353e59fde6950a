pub mod films;
