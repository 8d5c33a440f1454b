use super::aggregate::BucketCounts;
use crate::model::Granularity;
use console::style;

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_BLOCK: char = '\u{2580}';

/// Minimum columns for the commit count between the label and the bar.
pub const COUNT_COLUMNS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Bar length of the busiest bucket.
    pub width: usize,
    pub block: char,
    /// Draw weekend day buckets in a different colour (only has an effect when colours are enabled).
    pub colour_weekends: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            block: DEFAULT_BLOCK,
            colour_weekends: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLine {
    pub label: String,
    pub count: u64,
    /// Width of the count column, shared by every line of one chart.
    pub count_width: usize,
    pub length: usize,
    pub weekend: bool,
}

impl BarLine {
    pub fn format(&self, config: &RenderConfig) -> String {
        let bar: String = std::iter::repeat(config.block).take(self.length).collect();
        let bar = if self.weekend && config.colour_weekends {
            style(bar).blue().bright().to_string()
        } else {
            bar
        };
        format!(
            "{}  {:<width$}{}",
            self.label,
            self.count,
            bar,
            width = self.count_width
        )
    }
}

/// Count column wide enough for `max` plus one space before the bar.
pub fn count_column(max: u64) -> usize {
    (max.to_string().len() + 1).max(COUNT_COLUMNS)
}

/// `round(count / max * width)`, at least one glyph for any non-zero count and never over `width`.
pub fn bar_length(count: u64, max: u64, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = (count as f64 / max as f64 * width as f64).round() as usize;
    scaled.max(1).min(width)
}

/// One line per bucket, oldest first.
pub fn render(counts: &BucketCounts, config: &RenderConfig) -> Vec<BarLine> {
    let granularity = counts.granularity();
    let max = counts.max();
    let count_width = count_column(max);

    counts
        .iter()
        .map(|(key, count)| BarLine {
            label: granularity.label(key),
            count,
            count_width,
            length: bar_length(count, max, config.width),
            weekend: granularity == Granularity::Day && key.is_weekend(),
        })
        .collect()
}
