use super::aggregate::BucketCounts;
use super::render::{render, RenderConfig};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Most recent bucket first.
    #[default]
    NewestFirst,
    OldestFirst,
}

impl Order {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Order::OldestFirst
        } else {
            Order::NewestFirst
        }
    }
}

pub fn header(counts: &BucketCounts) -> String {
    if counts.is_empty() {
        return "0 commits".to_string();
    }
    format!(
        "{} commits over {} {}(s)",
        counts.total(),
        counts.len(),
        counts.granularity().unit()
    )
}

pub fn write_report<W: Write>(
    out: &mut W,
    counts: &BucketCounts,
    config: &RenderConfig,
    order: Order,
) -> io::Result<()> {
    writeln!(out, "{}", header(counts))?;

    let mut lines = render(counts, config);
    if order == Order::NewestFirst {
        lines.reverse();
    }
    for line in &lines {
        writeln!(out, "{}", line.format(config))?;
    }

    out.flush()
}
