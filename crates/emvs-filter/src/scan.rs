//! Serpentine histogram scan
//!
//! Walks every pixel of an image in boustrophedon order: row 0 left to
//! right, row 1 right to left, and so on. Consecutive pixels differ by one
//! column (inside a row) or one row (at a turn), so the window histogram is
//! updated by exchanging a single column or row of samples instead of
//! being rebuilt. Either kind of step reads `2(2p + 1)` samples, and the
//! median extraction is a fixed 256-bucket scan independent of the window
//! area.
//!
//! The scan is an explicit state machine:
//!
//! ```text
//! Initializing --(corner window built)--> ScanningRow
//! ScanningRow  --(row exhausted, more rows)--> ShiftingRow
//! ShiftingRow  --(first pixel of next row)--> ScanningRow
//! ScanningRow  --(last row exhausted)--> Done
//! ```
//!
//! # Reference
//!
//! T. Huang, G. Yang, G. Tang, "A Fast Two-Dimensional Median Filtering
//! Algorithm", IEEE Trans. ASSP 27(1), 1979.

use crate::histogram::WindowHistogram;
use crate::sample::SampleSource;
use crate::{FilterError, FilterResult};

/// Window radius for `patch_size`, clamped so the window never extends
/// past the image by more than it takes to cover every in-bounds sample.
///
/// A window of radius `max(rows, cols)` already covers the whole image
/// from any pixel, so larger radii only add out-of-bounds lookups and
/// leave every median unchanged.
pub(crate) fn window_radius(patch_size: u32, rows: u32, cols: u32) -> i64 {
    i64::from((patch_size / 2).min(rows.max(cols)))
}

/// Validate that the window side length is odd and positive.
pub(crate) fn check_patch_size(patch_size: u32) -> FilterResult<()> {
    if patch_size % 2 == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "patch size must be odd and positive, got {patch_size}"
        )));
    }
    Ok(())
}

/// Horizontal scan direction within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing column index
    Forward,
    /// Decreasing column index
    Backward,
}

impl Direction {
    /// Column increment for one step.
    #[inline]
    fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[inline]
    fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// State of a [`SerpentineScan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No pixel emitted yet
    Initializing,
    /// Moving along the current row
    ScanningRow,
    /// Current row exhausted; next step moves down one row
    ShiftingRow,
    /// Every pixel emitted
    Done,
}

/// One filtered output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    /// Row (y) of the pixel
    pub row: u32,
    /// Column (x) of the pixel
    pub col: u32,
    /// Median of the valid samples in the window around the pixel
    pub value: u8,
}

/// Iterator yielding the window median of every pixel in serpentine order.
///
/// Each pixel is yielded exactly once.
///
/// # Examples
///
/// ```
/// use emvs_core::Pix;
/// use emvs_filter::{SampleSource, SerpentineScan};
///
/// let pix = Pix::from_gray_bytes(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
/// let source = SampleSource::new(&pix).unwrap();
/// let order: Vec<(u32, u32)> = SerpentineScan::new(source, 1)
///     .unwrap()
///     .map(|step| (step.row, step.col))
///     .collect();
/// assert_eq!(order, [(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct SerpentineScan<'a> {
    source: SampleSource<'a>,
    radius: i64,
    histogram: WindowHistogram,
    state: ScanState,
    direction: Direction,
    row: i64,
    col: i64,
    remaining: usize,
}

impl<'a> SerpentineScan<'a> {
    /// Prepare a scan with a square window of side `patch_size`.
    ///
    /// No samples are read until the first call to `next`. Windows larger
    /// than the image are clamped; see [`SerpentineScan::radius`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `patch_size` is even
    /// (including 0).
    pub fn new(source: SampleSource<'a>, patch_size: u32) -> FilterResult<Self> {
        check_patch_size(patch_size)?;

        Ok(Self {
            source,
            radius: window_radius(patch_size, source.rows(), source.cols()),
            histogram: WindowHistogram::new(),
            state: ScanState::Initializing,
            direction: Direction::Forward,
            row: 0,
            col: 0,
            remaining: (source.rows() as usize) * (source.cols() as usize),
        })
    }

    /// Current state of the scan.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Window radius `p`; the window spans `2p + 1` pixels per side.
    ///
    /// This is `patch_size / 2` clamped to the larger image dimension.
    pub fn radius(&self) -> u32 {
        self.radius as u32
    }

    /// Histogram of the window around the last yielded pixel.
    pub fn histogram(&self) -> &WindowHistogram {
        &self.histogram
    }

    /// Fill the histogram with the window centered at (0, 0).
    fn build_corner_window(&mut self) {
        let p = self.radius;
        self.histogram.clear();
        for r in -p..=p {
            for c in -p..=p {
                if let Some(val) = self.source.sample(r, c) {
                    self.histogram.insert(val);
                }
            }
        }
    }

    /// Move the window one column in the scan direction, to `self.col`.
    fn shift_horizontal(&mut self) {
        let p = self.radius;
        let d = self.direction.step();
        let leaving = self.col - d * (p + 1);
        let entering = self.col + d * p;
        for r in (self.row - p)..=(self.row + p) {
            self.histogram.exchange(
                self.source.sample(r, leaving),
                self.source.sample(r, entering),
            );
        }
    }

    /// Move the window one row down, from `self.row` to `self.row + 1`.
    fn shift_vertical(&mut self) {
        let p = self.radius;
        let leaving = self.row - p;
        let entering = self.row + p + 1;
        for c in (self.col - p)..=(self.col + p) {
            self.histogram.exchange(
                self.source.sample(leaving, c),
                self.source.sample(entering, c),
            );
        }
    }

    fn emit(&mut self) -> ScanStep {
        self.remaining -= 1;
        ScanStep {
            row: self.row as u32,
            col: self.col as u32,
            value: self.histogram.median(),
        }
    }
}

impl Iterator for SerpentineScan<'_> {
    type Item = ScanStep;

    fn next(&mut self) -> Option<ScanStep> {
        loop {
            match self.state {
                ScanState::Initializing => {
                    self.build_corner_window();
                    self.state = ScanState::ScanningRow;
                    return Some(self.emit());
                }
                ScanState::ScanningRow => {
                    let next_col = self.col + self.direction.step();
                    if (0..i64::from(self.source.cols())).contains(&next_col) {
                        self.col = next_col;
                        self.shift_horizontal();
                        return Some(self.emit());
                    }
                    self.state = if self.row + 1 == i64::from(self.source.rows()) {
                        ScanState::Done
                    } else {
                        ScanState::ShiftingRow
                    };
                }
                ScanState::ShiftingRow => {
                    self.direction = self.direction.reversed();
                    self.shift_vertical();
                    self.row += 1;
                    self.state = ScanState::ScanningRow;
                    return Some(self.emit());
                }
                ScanState::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SerpentineScan<'_> {}

impl std::iter::FusedIterator for SerpentineScan<'_> {}
