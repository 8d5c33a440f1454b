use crate::bars::{BarsOptions, Order, RenderConfig, DEFAULT_BLOCK, DEFAULT_WIDTH};
use crate::model::{DateRange, Granularity, LogQuery};
use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-bars")]
#[command(about = "Shows git commit count bars. Weekends are coloured.")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(short, long, value_enum, default_value_t = Granularity::Month, help = "Bucket size")]
    pub periodicity: Granularity,

    #[arg(short, long, help = "Reverse date order (oldest first)")]
    pub reverse: bool,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from),
        help = "Bar width of the busiest period"
    )]
    pub width: usize,

    #[arg(long, default_value_t = DEFAULT_BLOCK, help = "Character used to draw bars")]
    pub block: char,

    #[arg(long, help = "Show periods without commits between the first and last one")]
    pub fill_gaps: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More log output (-vv for trace)")]
    pub verbose: u8,

    #[arg(short, long, help = "Only log errors")]
    pub quiet: bool,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(short = 'u', long, help = "Filter by author name or e-mail (substring)")]
    pub author: Option<String>,

    #[arg(short, long, help = "After date (yyyy-mm-dd hh:mm, or anything git log accepts)")]
    pub after: Option<String>,

    #[arg(short, long, help = "Before date (yyyy-mm-dd hh:mm, or anything git log accepts)")]
    pub before: Option<String>,
}

impl CommonArgs {
    pub fn query(&self) -> LogQuery {
        let mut range = DateRange::new();
        if let Some(after) = &self.after {
            range = range.with_after(after.as_str());
        }
        if let Some(before) = &self.before {
            range = range.with_before(before.as_str());
        }

        LogQuery {
            range,
            author: self.author.clone(),
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn options(&self) -> BarsOptions {
        BarsOptions {
            repo: self.common.repo.clone(),
            query: self.common.query(),
            granularity: self.periodicity,
            order: Order::from_reverse(self.reverse),
            render: RenderConfig {
                width: self.width,
                block: self.block,
                ..RenderConfig::default()
            },
            fill_gaps: self.fill_gaps,
        }
    }

    pub fn execute(self) -> Result<()> {
        crate::observability::init_logging(self.quiet, self.verbose);
        crate::bars::exec(self.options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        <Cli as Parser>::try_parse_from(std::iter::once("git-bars").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let options = parse(&[]).options();
        assert_eq!(options.granularity, Granularity::Month);
        assert_eq!(options.order, Order::NewestFirst);
        assert_eq!(options.render, RenderConfig::default());
        assert_eq!(options.query, LogQuery::default());
        assert!(!options.fill_gaps);
    }

    #[test]
    fn flags_map_to_options() {
        let options = parse(&[
            "-p", "day", "-u", "dev@", "-a", "2018-10-01", "-b", "2018-12-01", "-r", "-w", "20",
            "--block", "#", "--fill-gaps",
        ])
        .options();
        assert_eq!(options.granularity, Granularity::Day);
        assert_eq!(options.order, Order::OldestFirst);
        assert_eq!(options.render.width, 20);
        assert_eq!(options.render.block, '#');
        assert!(options.fill_gaps);
        assert_eq!(
            options.query,
            LogQuery {
                range: DateRange::new().with_after("2018-10-01").with_before("2018-12-01"),
                author: Some("dev@".to_string()),
            }
        );
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(<Cli as Parser>::try_parse_from(["git-bars", "-w", "0"]).is_err());
    }

    #[test]
    fn unknown_periodicity_is_rejected() {
        assert!(<Cli as Parser>::try_parse_from(["git-bars", "-p", "fortnight"]).is_err());
    }
}
