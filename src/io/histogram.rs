//! Text histogram of a probability mass function over `0..=n`
//!
//! Building and printing are separate steps. [`Histogram::build`] samples the function and
//! decides, for every row threshold, which columns are filled. [`Histogram::write_to`] turns
//! those rows into text one line at a time.
//!
//! Row thresholds are `ymax / height * i` for `i in 0..height` plus `ymax` itself, printed from
//! the top down, so the tallest sample always gets a row of its own. A column is filled on a row
//! when its sample is at least the row threshold.

use crate::io::configuration::{BLANK_CHAR, DEFAULT_FILL_CHAR, DEFAULT_HEIGHT, LABEL_SCALE};
use crate::io::error::{Result, WithContext, computation_error, invalid_parameter};
use crate::math::distributions::ProbabilityMass;
use bitvec::vec::BitVec;
use ndarray::Array1;
use std::io::Write;

/// Layout options for a rendered histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramOptions {
    /// Number of evenly spaced thresholds below the maximum row
    pub height: usize,
    /// Character drawn for filled cells
    pub fill: char,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            fill: DEFAULT_FILL_CHAR,
        }
    }
}

impl HistogramOptions {
    /// Options with the given height and the default fill character
    pub const fn with_height(height: usize) -> Self {
        Self {
            height,
            fill: DEFAULT_FILL_CHAR,
        }
    }
}

/// One horizontal band of the histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramRow {
    threshold: f64,
    marks: BitVec,
}

impl HistogramRow {
    /// Value a sample must reach for its column to be filled on this row
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Threshold as printed in the row label
    pub fn label_percent(&self) -> f64 {
        self.threshold * LABEL_SCALE
    }

    /// Fill state of every column, in outcome order
    pub fn marks(&self) -> &BitVec {
        &self.marks
    }

    /// Whether column `x` is filled; false for columns outside the domain
    pub fn is_filled(&self, x: usize) -> bool {
        self.marks.get(x).is_some_and(|bit| *bit)
    }
}

/// Sampled function plus its computed rows, top row first
#[derive(Debug, Clone)]
pub struct Histogram {
    samples: Array1<f64>,
    max_value: f64,
    rows: Vec<HistogramRow>,
    fill: char,
}

impl Histogram {
    /// Sample `f` at every outcome in `0..=n` and compute `options.height + 1` rows
    ///
    /// When every sample is 0 all thresholds are 0 and every row is completely filled.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `options.height` is 0 or `n` exceeds
    /// `i64::MAX`, and a computation error if any sample is NaN or infinite
    pub fn build<F>(f: &F, n: u64, options: &HistogramOptions) -> Result<Self>
    where
        F: ProbabilityMass + ?Sized,
    {
        if options.height == 0 {
            return Err(invalid_parameter(
                "height",
                &options.height,
                &"histogram needs at least one step",
            ));
        }
        let last = i64::try_from(n)
            .map_err(|e| invalid_parameter("n", &n, &format!("domain too large: {e}")))?;

        let samples: Array1<f64> = (0..=last).map(|x| f.probability(x)).collect();
        if let Some(bad) = samples.iter().find(|y| !y.is_finite()) {
            return Err(computation_error(
                "histogram sampling",
                &format!("sample {bad} is not finite"),
            ));
        }

        let max_value = samples.fold(f64::NEG_INFINITY, |acc, &y| acc.max(y));
        if is_zero(max_value) {
            log::warn!("every sample over 0..={n} is zero; all rows will be filled");
        }

        let step_size = max_value / options.height as f64;
        let rows: Vec<HistogramRow> = (0..options.height)
            .map(|i| step_size * i as f64)
            .chain(std::iter::once(max_value))
            .rev()
            .map(|threshold| HistogramRow {
                threshold,
                marks: samples.iter().map(|&y| threshold <= y).collect(),
            })
            .collect();

        log::debug!(
            "built histogram: {} rows x {} columns, max sample {max_value}",
            rows.len(),
            samples.len()
        );

        Ok(Self {
            samples,
            max_value,
            rows,
            fill: options.fill,
        })
    }

    /// Sampled values, indexed by outcome
    pub const fn samples(&self) -> &Array1<f64> {
        &self.samples
    }

    /// Largest sampled value
    pub const fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Whether every sample is exactly 0, which fills every row
    pub fn is_degenerate(&self) -> bool {
        is_zero(self.max_value)
    }

    /// Rows from the highest threshold down to the lowest
    pub fn rows(&self) -> &[HistogramRow] {
        &self.rows
    }

    /// Text of a single row, without the line terminator
    ///
    /// A four character wide percentage with one decimal, then `% `, then one fill or
    /// blank character per column, each followed by a space.
    pub fn format_row(&self, row: &HistogramRow) -> String {
        let mut line = format!("{:04.1}% ", row.label_percent());
        for filled in row.marks().iter().by_vals() {
            line.push(if filled { self.fill } else { BLANK_CHAR });
            line.push(' ');
        }
        line
    }

    /// Write every row, one line at a time, top row first
    ///
    /// # Errors
    ///
    /// Returns an output error if writing to `out` fails
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for row in &self.rows {
            writeln!(out, "{}", self.format_row(row)).with_operation("write histogram row")?;
        }
        out.flush().with_operation("flush histogram output")
    }
}

// Only an exact zero maximum collapses all thresholds to 0
#[allow(clippy::float_cmp)]
fn is_zero(value: f64) -> bool {
    value == 0.0
}

/// Render the histogram of `f` over `0..=n` to standard output
///
/// # Errors
///
/// Returns the errors of [`Histogram::build`], or an output error if standard
/// output cannot be written
pub fn render<F>(f: &F, n: u64, options: &HistogramOptions) -> Result<()>
where
    F: ProbabilityMass + ?Sized,
{
    let histogram = Histogram::build(f, n, options)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    histogram.write_to(&mut handle)
}
