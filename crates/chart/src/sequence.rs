//! Ordered key sequences over a chart: fixed-length lists around the middle size and
//! inclusive ranges between two keys.

use crate::chain::SizeNode;
use crate::chart::SizeChart;
use crate::error::ChartError;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::trace;

/// Upper bound on list lengths and on the number of keys a range walk may emit.
pub const MAX_SEQUENCE_LENGTH: usize = 1_000;

impl SizeChart {
    /// Returns `length` keys in ascending order, centred on the chart's middle size
    /// (index `(len - 1) / 2`). `None` means the chart's current length.
    ///
    /// Shrinking drops sizes from both ends, the larger share from the large end. Growing walks
    /// outward through the neighbor links, the larger share on the large end. The chart itself
    /// is never modified, even with the dynamic-size cache enabled.
    ///
    /// # Errors
    /// * [`ChartError::BoundsExceeded`] if `length` is above [`MAX_SEQUENCE_LENGTH`].
    /// * [`ChartError::ChainExhausted`] if an end without an anchor has to be extended.
    pub fn lengthed_list(&self, length: Option<usize>) -> Result<Vec<String>, ChartError> {
        let length = length.unwrap_or_else(|| self.len());
        if length > MAX_SEQUENCE_LENGTH {
            return Err(ChartError::bounds(length, MAX_SEQUENCE_LENGTH));
        }

        let mut keys: VecDeque<String> = self.sizes().map(|s| s.key().to_owned()).collect();
        let count = keys.len();

        if length < count {
            let excess = count - length;
            let low = excess / 2;
            keys.truncate(count - (excess - low));
            keys.drain(..low);
        } else if length > count {
            let deficit = length - count;
            let low = deficit / 2;

            for _ in 0..low {
                let edge = self.edge(keys.front())?;
                let previous = edge
                    .previous_size_key()
                    .ok_or_else(|| ChartError::exhausted(edge.key(), "previous"))?;
                trace!(key = previous, "Extending list downward");
                keys.push_front(previous.to_owned());
            }
            for _ in 0..deficit - low {
                let edge = self.edge(keys.back())?;
                let next =
                    edge.next_size_key().ok_or_else(|| ChartError::exhausted(edge.key(), "next"))?;
                trace!(key = next, "Extending list upward");
                keys.push_back(next.to_owned());
            }
        }

        Ok(keys.into())
    }

    fn edge(&self, key: Option<&String>) -> Result<SizeNode, ChartError> {
        let key = key.map_or("", String::as_str);
        self.resolve(key).map(|(node, _)| node)
    }

    /// Lazily walks `start` to `end` (inclusive) along the next-size links.
    ///
    /// Both endpoints are resolved up front. Each visited key goes through
    /// [`SizeChart::get_or_create`], so the cache policy applies to the walk.
    ///
    /// # Errors
    /// Fails immediately if either endpoint cannot be resolved. Later failures are yielded as
    /// the final item of the iterator: [`ChartError::ChainExhausted`] when the links end
    /// before `end`, [`ChartError::BoundsExceeded`] when `end` is not reached within
    /// [`MAX_SEQUENCE_LENGTH`] keys.
    pub fn range_iter(&mut self, start: &str, end: &str) -> Result<RangeIter<'_>, ChartError> {
        let start = self.get_or_create(start)?;
        let end_key = self.get_or_create(end)?.key().to_owned();

        Ok(RangeIter { chart: self, current: start, end_key, emitted: 0, finished: false })
    }

    /// Collects [`Self::range_iter`] into a list.
    ///
    /// # Errors
    /// Same as [`Self::range_iter`], including errors raised during the walk.
    pub fn range_list(&mut self, start: &str, end: &str) -> Result<Vec<String>, ChartError> {
        self.range_iter(start, end)?.collect()
    }
}

/// Iterator returned by [`SizeChart::range_iter`]. Fused after the end key or the first error.
#[derive(Debug)]
pub struct RangeIter<'a> {
    chart: &'a mut SizeChart,
    current: SizeNode,
    end_key: String,
    emitted: usize,
    finished: bool,
}

impl RangeIter<'_> {
    fn advance(&mut self) -> Result<(), ChartError> {
        if self.emitted >= MAX_SEQUENCE_LENGTH {
            return Err(ChartError::bounds(self.emitted + 1, MAX_SEQUENCE_LENGTH));
        }
        let next = self
            .current
            .next_size_key()
            .ok_or_else(|| ChartError::exhausted(self.current.key(), "next"))?
            .to_owned();
        self.current = self.chart.get_or_create(&next)?;
        Ok(())
    }
}

impl Iterator for RangeIter<'_> {
    type Item = Result<String, ChartError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.emitted > 0 {
            if self.current.key() == self.end_key {
                self.finished = true;
                return None;
            }
            if let Err(err) = self.advance() {
                self.finished = true;
                return Some(Err(err));
            }
        }

        self.emitted += 1;
        trace!(key = self.current.key(), step = self.emitted, "Range step");
        Some(Ok(self.current.key().to_owned()))
    }
}

impl FusedIterator for RangeIter<'_> {}
