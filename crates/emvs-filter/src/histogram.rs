//! Sliding-window gray-level histogram
//!
//! The histogram has one bucket per 8-bit sample value. The median is read
//! back with a linear scan over the buckets, so extraction costs the same
//! for every window size.

/// Number of distinct 8-bit sample values.
pub const GRAY_LEVELS: usize = 1 << u8::BITS;

/// Return the median sample value of a histogram holding `n` samples.
///
/// The median is the smallest value `v` whose cumulative count reaches
/// `⌈n / 2⌉`. For an even count this selects the lower of the two
/// middle samples, so `{10: 2, 20: 2}` yields 10.
///
/// An empty histogram (`n == 0`) yields 0. That value carries no meaning;
/// it only marks a window without valid samples.
pub fn histogram_median(counts: &[u32; GRAY_LEVELS], n: u32) -> u8 {
    let middle = n.div_ceil(2);
    let mut sum = 0u32;
    for (val, &count) in counts.iter().enumerate() {
        sum += count;
        if sum >= middle {
            return val as u8;
        }
    }
    // Unreachable while `n` equals the bucket total.
    debug_assert!(false, "histogram holds {sum} samples, fewer than n = {n}");
    u8::MAX
}

/// Histogram of the valid samples inside the current filter window.
#[derive(Debug, Clone)]
pub struct WindowHistogram {
    counts: [u32; GRAY_LEVELS],
    total: u32,
}

impl Default for WindowHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; GRAY_LEVELS],
            total: 0,
        }
    }

    /// Number of samples currently held.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Per-value counts.
    #[inline]
    pub fn counts(&self) -> &[u32; GRAY_LEVELS] {
        &self.counts
    }

    /// Add one sample.
    #[inline]
    pub fn insert(&mut self, val: u8) {
        self.counts[val as usize] += 1;
        self.total += 1;
    }

    /// Remove one sample previously inserted.
    #[inline]
    pub fn remove(&mut self, val: u8) {
        debug_assert!(self.counts[val as usize] > 0, "removing absent value {val}");
        self.counts[val as usize] -= 1;
        self.total -= 1;
    }

    /// Replace a sample leaving the window with one entering it.
    ///
    /// Either side may be absent (out of bounds or masked out). When both
    /// are present and equal the counts are already correct and nothing
    /// is touched.
    #[inline]
    pub fn exchange(&mut self, leaving: Option<u8>, entering: Option<u8>) {
        if entering.is_some() && leaving == entering {
            return;
        }
        if let Some(val) = leaving {
            self.remove(val);
        }
        if let Some(val) = entering {
            self.insert(val);
        }
    }

    /// Median of the held samples, see [`histogram_median`].
    #[inline]
    pub fn median(&self) -> u8 {
        histogram_median(&self.counts, self.total)
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.counts.fill(0);
        self.total = 0;
    }
}
