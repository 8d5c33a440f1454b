use super::aggregate::bucketize;
use super::output::{write_report, Order};
use super::parse::parse_records;
use super::render::{count_column, RenderConfig};
use crate::git::GitLog;
use crate::model::{Granularity, LogQuery};
use crate::util::{fit_width, terminal_columns};
use anyhow::Context;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct BarsOptions {
    pub repo: Option<PathBuf>,
    pub query: LogQuery,
    pub granularity: Granularity,
    pub order: Order,
    pub render: RenderConfig,
    pub fill_gaps: bool,
}

pub fn exec(options: BarsOptions) -> anyhow::Result<()> {
    let log = GitLog::open(options.repo.as_ref()).context("Failed to open git repository")?;

    let lines = log
        .read_lines(&options.query)
        .context("Failed to read git log")?;
    debug!(lines = lines.len(), path = %log.path().display(), "read git log");

    let records = parse_records(lines.iter().map(String::as_str));
    let mut counts = bucketize(records, options.granularity);
    if options.fill_gaps {
        counts.fill_gaps();
    }
    debug!(
        commits = counts.total(),
        buckets = counts.len(),
        granularity = options.granularity.unit(),
        "aggregated commits"
    );

    let label_width = counts
        .iter()
        .map(|(key, _)| options.granularity.label(key).len())
        .max()
        .unwrap_or(0);
    let config = RenderConfig {
        width: fit_width(
            options.render.width,
            terminal_columns(),
            label_width,
            count_column(counts.max()),
        ),
        ..options.render
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &counts, &config, options.order).context("Failed to write report")?;

    Ok(())
}
