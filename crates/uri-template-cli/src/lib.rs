pub mod args;
pub mod entry;
pub mod errors;
pub mod logging;
