pub mod log;

pub use log::{GitLog, FIELD_SEPARATOR};
