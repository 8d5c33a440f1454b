pub mod aggregate;
pub mod exec;
pub mod output;
pub mod parse;
pub mod render;

pub use aggregate::{bucketize, BucketCounts};
pub use exec::{exec, BarsOptions};
pub use output::{header, write_report, Order};
pub use parse::{parse_record, parse_records};
pub use render::{bar_length, count_column, render, BarLine, RenderConfig, DEFAULT_BLOCK, DEFAULT_WIDTH};
