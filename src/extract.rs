use log::{debug, info};

use crate::error::DatasetError;
use crate::table::VisTable;

/// Upper bound on the up-front allocation; longer tables grow as rows arrive.
const MAX_PREALLOCATED_ROWS: usize = 1 << 20;

/// Index-aligned U and V sequences, one entry per table row in row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UvCoverage {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl UvCoverage {
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    pub fn v(&self) -> &[f64] {
        &self.v
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// `(U[i], V[i])` in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.u.iter().copied().zip(self.v.iter().copied())
    }

    /// `(-U[i], -V[i])`, the conjugate of every measured point.
    pub fn conjugate_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points().map(|(u, v)| (-u, -v))
    }
}

/// Reads every row of `table` once, in increasing index order. Any decode
/// failure aborts the pass and discards what was collected so far.
pub fn extract_uv<T: VisTable + ?Sized>(table: &mut T) -> Result<UvCoverage, DatasetError> {
    let n_rows = table.n_rows();
    debug!("reading {} rows from table {}", n_rows, table.name());

    let capacity = usize::try_from(n_rows)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED_ROWS);
    let mut u = Vec::with_capacity(capacity);
    let mut v = Vec::with_capacity(capacity);
    for row in 0..n_rows {
        let record = table.read_row(row)?.validated(row)?;
        u.push(record.u);
        v.push(record.v);
    }

    info!("extracted {} uv points from {}", u.len(), table.name());
    Ok(UvCoverage { u, v })
}
