use chrono::{DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, Weekday};
use clap::ValueEnum;

/// One commit as read from the log: author date (with the offset git reported) and author e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Granularity {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

/// Start date of the bucket a commit falls into. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey(NaiveDate);

impl BucketKey {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl Granularity {
    pub fn truncate(self, date: NaiveDate) -> BucketKey {
        let start = match self {
            Granularity::Day => Some(date),
            Granularity::Week => date.checked_sub_days(Days::new(u64::from(
                date.weekday().num_days_from_monday(),
            ))),
            Granularity::Month => date.with_day(1),
            Granularity::Year => date.with_ordinal(1),
        };
        BucketKey(start.unwrap_or(date))
    }

    /// The bucket immediately after `key`, or `None` past the end of the calendar.
    pub fn next(self, key: BucketKey) -> Option<BucketKey> {
        let date = key.0;
        let next = match self {
            Granularity::Day => date.succ_opt(),
            Granularity::Week => date.checked_add_days(Days::new(7)),
            Granularity::Month => date.checked_add_months(Months::new(1)),
            Granularity::Year => date.checked_add_months(Months::new(12)),
        };
        next.map(BucketKey)
    }

    pub fn label(self, key: BucketKey) -> String {
        let fmt = match self {
            Granularity::Day => "%Y-%m-%d",
            Granularity::Week => "%G-W%V",
            Granularity::Month => "%Y-%m",
            Granularity::Year => "%Y",
        };
        key.0.format(fmt).to_string()
    }

    pub fn unit(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }
}

/// Date bounds handed to `git log` as-is, so any date syntax git accepts works here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub after: Option<String>,
    pub before: Option<String>,
}

impl DateRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub range: DateRange,
    /// Substring of the author name or e-mail. Empty means no filter.
    pub author: Option<String>,
}

impl LogQuery {
    pub fn author_filter(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn truncates_to_period_start() {
        let date = ymd(2018, 11, 3);
        assert_eq!(Granularity::Day.truncate(date).date(), date);
        assert_eq!(Granularity::Week.truncate(date).date(), ymd(2018, 10, 29));
        assert_eq!(Granularity::Month.truncate(date).date(), ymd(2018, 11, 1));
        assert_eq!(Granularity::Year.truncate(date).date(), ymd(2018, 1, 1));
    }

    #[test]
    fn labels_follow_granularity() {
        let key = Granularity::Day.truncate(ymd(2018, 11, 2));
        assert_eq!(Granularity::Day.label(key), "2018-11-02");
        assert_eq!(Granularity::Month.label(Granularity::Month.truncate(ymd(2018, 11, 2))), "2018-11");
        assert_eq!(Granularity::Year.label(Granularity::Year.truncate(ymd(2018, 11, 2))), "2018");
    }

    #[test]
    fn week_label_uses_iso_week_year() {
        // 2018-12-31 is a Monday in ISO week 1 of 2019.
        let key = Granularity::Week.truncate(ymd(2019, 1, 2));
        assert_eq!(key.date(), ymd(2018, 12, 31));
        assert_eq!(Granularity::Week.label(key), "2019-W01");
    }

    #[test]
    fn next_steps_one_period() {
        let day = Granularity::Day.truncate(ymd(2018, 2, 28));
        assert_eq!(Granularity::Day.next(day).unwrap().date(), ymd(2018, 3, 1));

        let week = Granularity::Week.truncate(ymd(2018, 12, 27));
        assert_eq!(Granularity::Week.next(week).unwrap().date(), ymd(2018, 12, 31));

        let month = Granularity::Month.truncate(ymd(2018, 12, 15));
        assert_eq!(Granularity::Month.next(month).unwrap().date(), ymd(2019, 1, 1));

        let year = Granularity::Year.truncate(ymd(2016, 2, 29));
        assert_eq!(Granularity::Year.next(year).unwrap().date(), ymd(2017, 1, 1));
    }

    #[test]
    fn weekend_detection() {
        assert!(BucketKey(ymd(2018, 11, 3)).is_weekend());
        assert!(BucketKey(ymd(2018, 11, 4)).is_weekend());
        assert!(!BucketKey(ymd(2018, 11, 2)).is_weekend());
    }

    #[test]
    fn empty_author_is_no_filter() {
        let query = LogQuery {
            author: Some(String::new()),
            ..LogQuery::default()
        };
        assert_eq!(query.author_filter(), None);
    }
}
