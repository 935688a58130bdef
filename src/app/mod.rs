mod runner;

pub use runner::{run, window_from_args};
