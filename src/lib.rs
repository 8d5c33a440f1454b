pub mod bars;
pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod observability;
pub mod util;
