//! casacore-backed visibility tables, read through `rubbl_casatables`.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use rubbl_casatables::{Table, TableOpenMode};

use crate::error::DatasetError;
use crate::table::{ColumnLayout, UvRow, VisTable, MAIN_TABLE, UVW_COLUMN, U_COLUMN, V_COLUMN};

/// A casacore table tree (usually a MeasurementSet) opened read-only.
/// The root table is the `MAIN` table; other tables live in sub-directories.
pub struct CasaDataset {
    path: PathBuf,
    root: Table,
}

impl CasaDataset {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref().to_path_buf();
        let root = open_read_only(&path, MAIN_TABLE)?;
        debug!("opened {} ({} rows)", path.display(), root.n_rows());
        Ok(Self { path, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a named table of the dataset, consuming the dataset handle.
    pub fn into_table(self, name: &str) -> Result<CasaTable, DatasetError> {
        if name == MAIN_TABLE {
            return CasaTable::new(self.path, name, self.root);
        }
        let sub_path = self.path.join(name);
        let table = open_read_only(&sub_path, name)?;
        CasaTable::new(sub_path, name, table)
    }
}

fn open_read_only(path: &Path, name: &str) -> Result<Table, DatasetError> {
    Table::open(path, TableOpenMode::Read).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        table: name.to_string(),
        source,
    })
}

pub struct CasaTable {
    path: PathBuf,
    name: String,
    table: Table,
    columns: Vec<String>,
    layout: ColumnLayout,
    n_rows: u64,
}

impl CasaTable {
    fn new(path: PathBuf, name: &str, mut table: Table) -> Result<Self, DatasetError> {
        let columns = table.column_names()?;
        let layout = ColumnLayout::detect(name, &columns)?;
        let n_rows = table.n_rows();
        debug!("table {} uses {}", name, layout.describe());
        Ok(Self {
            path,
            name: name.to_string(),
            table,
            columns,
            layout,
            n_rows,
        })
    }

    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            path: self.path.clone(),
            name: self.name.clone(),
            n_rows: self.n_rows,
            columns: self.columns.clone(),
            layout: self.layout,
        }
    }

    fn read_scalar(&mut self, column: &str, row: u64) -> Result<f64, DatasetError> {
        self.table
            .get_cell::<f64>(column, row)
            .map_err(|e| DatasetError::MalformedRow {
                row,
                reason: format!("cannot read {column}: {e}"),
            })
    }
}

impl VisTable for CasaTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_rows(&self) -> u64 {
        self.n_rows
    }

    fn read_row(&mut self, row: u64) -> Result<UvRow, DatasetError> {
        match self.layout {
            ColumnLayout::Uvw => {
                let uvw = self
                    .table
                    .get_cell_as_vec::<f64>(UVW_COLUMN, row)
                    .map_err(|e| DatasetError::MalformedRow {
                        row,
                        reason: format!("cannot read {UVW_COLUMN}: {e}"),
                    })?;
                match uvw.as_slice() {
                    [u, v, ..] => Ok(UvRow::new(*u, *v)),
                    short => Err(DatasetError::MalformedRow {
                        row,
                        reason: format!(
                            "{UVW_COLUMN} holds {} values, need at least 2",
                            short.len()
                        ),
                    }),
                }
            }
            ColumnLayout::Scalar => {
                let u = self.read_scalar(U_COLUMN, row)?;
                let v = self.read_scalar(V_COLUMN, row)?;
                Ok(UvRow::new(u, v))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableSummary {
    pub path: PathBuf,
    pub name: String,
    pub n_rows: u64,
    pub columns: Vec<String>,
    pub layout: ColumnLayout,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table summary:")?;
        writeln!(f, "--------------------------------------------------")?;
        writeln!(f, "  path:       {}", self.path.display())?;
        writeln!(f, "  table:      {}", self.name)?;
        writeln!(f, "  rows:       {}", self.n_rows)?;
        writeln!(f, "  columns:    {} ({})", self.columns.len(), self.columns.join(", "))?;
        write!(f, "  uv source:  {}", self.layout.describe())
    }
}
