use crate::model::{BucketKey, CommitRecord, Granularity};
use std::collections::BTreeMap;

/// Commit counts per bucket, kept in chronological key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCounts {
    granularity: Granularity,
    counts: BTreeMap<BucketKey, u64>,
}

impl BucketCounts {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            counts: BTreeMap::new(),
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn add(&mut self, record: &CommitRecord) {
        let key = self.granularity.truncate(record.timestamp.date_naive());
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: BucketKey) -> u64 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn max(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Oldest bucket first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (BucketKey, u64)> + '_ {
        self.counts.iter().map(|(key, count)| (*key, *count))
    }

    /// Adds zero-count buckets for every period between the oldest and newest bucket.
    pub fn fill_gaps(&mut self) {
        let (Some(first), Some(last)) = (
            self.counts.keys().next().copied(),
            self.counts.keys().next_back().copied(),
        ) else {
            return;
        };

        let mut key = first;
        while key < last {
            self.counts.entry(key).or_insert(0);
            match self.granularity.next(key) {
                Some(next) => key = next,
                None => break,
            }
        }
    }
}

pub fn bucketize<I>(records: I, granularity: Granularity) -> BucketCounts
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut counts = BucketCounts::new(granularity);
    for record in records {
        counts.add(&record);
    }
    counts
}
