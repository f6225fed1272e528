use crate::{CountRecord, RecordError};

/// Sums runs of equal consecutive keys in a single pass.
///
/// Input is expected to be grouped by key; nothing is sorted here. A key that
/// shows up in two separate runs produces two output records.
#[derive(Debug, Default)]
pub struct GroupedAggregator {
    current: Option<CountRecord>,
}

impl GroupedAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one record. Returns the completed run when `record` starts a new key.
    pub fn push(&mut self, record: CountRecord) -> Result<Option<CountRecord>, RecordError> {
        match self.current.as_mut() {
            Some(current) if current.key == record.key => {
                current.count = current
                    .count
                    .checked_add(record.count)
                    .ok_or_else(|| RecordError::Overflow {
                        key: record.key.clone(),
                    })?;
                Ok(None)
            }
            _ => Ok(self.current.replace(record)),
        }
    }

    /// Closes the pending run when `key` does not continue it.
    ///
    /// Lets a caller settle run boundaries before the rest of a line is parsed.
    pub fn take_if_other_key(&mut self, key: &str) -> Option<CountRecord> {
        if self.current.as_ref().is_some_and(|current| current.key != key) {
            self.current.take()
        } else {
            None
        }
    }

    /// Returns the last pending run, if any.
    pub fn finish(self) -> Option<CountRecord> {
        self.current
    }
}

/// Iterator adapter over fallible records; see [`group_sums`].
#[derive(Debug)]
pub struct GroupSums<I> {
    inner: I,
    aggregator: Option<GroupedAggregator>,
    failed: Option<RecordError>,
}

impl<I> Iterator for GroupSums<I>
where
    I: Iterator<Item = Result<CountRecord, RecordError>>,
{
    type Item = Result<CountRecord, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.failed.take() {
            return Some(Err(err));
        }
        loop {
            let aggregator = self.aggregator.as_mut()?;
            match self.inner.next() {
                Some(Ok(record)) => match aggregator.push(record) {
                    Ok(Some(done)) => return Some(Ok(done)),
                    Ok(None) => {}
                    Err(err) => {
                        self.aggregator = None;
                        return Some(Err(err));
                    }
                },
                Some(Err(err)) => {
                    // The first failure ends the pass, but a failing line with a
                    // new key still closes the run before it.
                    let closed = self
                        .aggregator
                        .take()
                        .and_then(|mut aggregator| aggregator.take_if_other_key(err.key()));
                    return match closed {
                        Some(done) => {
                            self.failed = Some(err);
                            Some(Ok(done))
                        }
                        None => Some(Err(err)),
                    };
                }
                None => {
                    return self
                        .aggregator
                        .take()
                        .and_then(GroupedAggregator::finish)
                        .map(Ok);
                }
            }
        }
    }
}

/// Lazily sums runs of equal keys, yielding at most one error and then stopping.
pub fn group_sums<I>(records: I) -> GroupSums<I::IntoIter>
where
    I: IntoIterator<Item = Result<CountRecord, RecordError>>,
{
    GroupSums {
        inner: records.into_iter(),
        aggregator: Some(GroupedAggregator::new()),
        failed: None,
    }
}

/// Collects the run sums of already-parsed records.
pub fn aggregate_grouped<I>(records: I) -> Result<Vec<CountRecord>, RecordError>
where
    I: IntoIterator<Item = CountRecord>,
{
    group_sums(records.into_iter().map(Ok)).collect()
}
