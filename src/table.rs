use crate::error::DatasetError;

/// Name of the root table holding one row per visibility.
pub const MAIN_TABLE: &str = "MAIN";

pub const UVW_COLUMN: &str = "UVW";
pub const U_COLUMN: &str = "U";
pub const V_COLUMN: &str = "V";

/// The two spatial-frequency coordinates read from one table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRow {
    pub u: f64,
    pub v: f64,
}

impl UvRow {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Rejects rows whose coordinates are NaN or infinite.
    pub fn validated(self, row: u64) -> Result<Self, DatasetError> {
        for (name, value) in [("u", self.u), ("v", self.v)] {
            if !value.is_finite() {
                return Err(DatasetError::MalformedRow {
                    row,
                    reason: format!("{name} is not a finite value ({value})"),
                });
            }
        }
        Ok(self)
    }
}

/// Where a table keeps its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// MeasurementSet style: a 3-element `UVW` array per row.
    Uvw,
    /// Separate scalar `U` and `V` columns.
    Scalar,
}

impl ColumnLayout {
    pub fn detect(table: &str, columns: &[String]) -> Result<Self, DatasetError> {
        let has = |name: &str| columns.iter().any(|c| c == name);
        if has(UVW_COLUMN) {
            Ok(ColumnLayout::Uvw)
        } else if has(U_COLUMN) && has(V_COLUMN) {
            Ok(ColumnLayout::Scalar)
        } else {
            Err(DatasetError::MissingColumns {
                table: table.to_string(),
                columns: columns.to_vec(),
            })
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ColumnLayout::Uvw => "UVW array column",
            ColumnLayout::Scalar => "scalar U/V columns",
        }
    }
}

/// Row-addressable source of `(u, v)` coordinates.
pub trait VisTable {
    fn name(&self) -> &str;

    /// Row count at the moment the table was opened.
    fn n_rows(&self) -> u64;

    fn read_row(&mut self, row: u64) -> Result<UvRow, DatasetError>;
}

/// In-memory table; `None` entries decode as malformed rows. Every read is
/// recorded so tests can check the visiting order.
#[cfg(test)]
pub struct MemoryTable {
    rows: Vec<Option<UvRow>>,
    pub reads: Vec<u64>,
}

#[cfg(test)]
impl MemoryTable {
    pub fn new(rows: &[(f64, f64)]) -> Self {
        Self::with_gaps(rows.iter().map(|&(u, v)| Some(UvRow::new(u, v))).collect())
    }

    pub fn with_gaps(rows: Vec<Option<UvRow>>) -> Self {
        Self {
            rows,
            reads: Vec::new(),
        }
    }
}

#[cfg(test)]
impl VisTable for MemoryTable {
    fn name(&self) -> &str {
        MAIN_TABLE
    }

    fn n_rows(&self) -> u64 {
        self.rows.len() as u64
    }

    fn read_row(&mut self, row: u64) -> Result<UvRow, DatasetError> {
        self.reads.push(row);
        self.rows
            .get(row as usize)
            .copied()
            .flatten()
            .ok_or_else(|| DatasetError::MalformedRow {
                row,
                reason: "missing u/v fields".to_string(),
            })
    }
}
