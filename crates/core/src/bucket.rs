//! Equal-width bucketing of a numeric column
//!
//! A column is split into `level_count` bins of equal width between the
//! smallest and largest reported value. Bins are closed on the right, so a
//! value sitting on an interior edge falls into the lower bin; the minimum
//! belongs to bin 0 and the maximum to the last bin. Rows without a value are
//! left [`Bucket::Unbucketed`] and take no part in computing the edges.

use crate::feed::{Column, Dataset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Palette index in `0..level_count`
    Level(usize),
    /// No palette entry, the marker keeps its default style
    Unbucketed,
}

impl Bucket {
    pub fn level(self) -> Option<usize> {
        match self {
            Bucket::Level(index) => Some(index),
            Bucket::Unbucketed => None,
        }
    }

    /// Look the bucket up in a palette, falling back to `default`
    pub fn pick<T: Copy>(self, palette: &[T], default: T) -> T {
        self.level()
            .and_then(|index| palette.get(index).copied())
            .unwrap_or(default)
    }
}

/// Assign each value a bin index
///
/// Never fails: a `level_count` of 0 is treated as 1, a constant column puts
/// every present value in bin 0 and an all-missing column is left unbucketed.
/// NaN and infinities count as missing.
pub fn bucketize(values: &[Option<f64>], level_count: usize) -> Vec<Bucket> {
    let levels = level_count.max(1);
    let present = || values.iter().flatten().copied().filter(|v| v.is_finite());

    let (min, max) = match present().fold(None, |range: Option<(f64, f64)>, v| match range {
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        None => Some((v, v)),
    }) {
        Some(range) => range,
        None => return vec![Bucket::Unbucketed; values.len()],
    };

    let edges = interior_edges(min, max, levels);
    values
        .iter()
        .map(|value| match value {
            Some(v) if v.is_finite() => Bucket::Level(edges.partition_point(|edge| v > edge)),
            _ => Bucket::Unbucketed,
        })
        .collect()
}

/// The `levels - 1` edges between the first and last bin, `min + k * (max - min) / levels`
///
/// Values are compared against these directly so a value equal to an edge
/// stays in the lower bin whatever the rounding of the division.
fn interior_edges(min: f64, max: f64, levels: usize) -> Vec<f64> {
    let span = max - min;
    let n = levels as f64;
    (1..levels)
        .map(|k| {
            let k = k as f64;
            if span.is_finite() {
                min + k * span / n
            } else {
                // range wider than f64::MAX
                min + k * (max / n - min / n)
            }
        })
        .collect()
}

/// Buckets for every row of a dataset under one selector
#[derive(Debug, Clone, PartialEq)]
pub struct BucketAssignment {
    column: Option<Column>,
    buckets: Vec<Bucket>,
}

impl BucketAssignment {
    /// `None` selects no column and leaves every row unbucketed
    pub fn for_selection(dataset: &Dataset, column: Option<Column>, level_count: usize) -> Self {
        let buckets = match column {
            Some(column) => bucketize(&dataset.column(column), level_count),
            None => vec![Bucket::Unbucketed; dataset.len()],
        };
        Self { column, buckets }
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn get(&self, row: usize) -> Bucket {
        self.buckets.get(row).copied().unwrap_or(Bucket::Unbucketed)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
