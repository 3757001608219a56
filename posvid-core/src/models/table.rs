use fxhash::FxHashMap as HashMap;

use crate::errors::PositionError;
use crate::models::Value;

///
/// One named column of a [Table].
///
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new<N: Into<String>>(name: N, values: Vec<Value>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    ///
    /// Number of cells that are not null.
    ///
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }
}

///
/// In-memory representation of a delimited metadata file: ordered, uniquely
/// named columns of equal length.
///
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    n_rows: usize,
}

impl Table {
    ///
    /// Build a table from a header and row-major records.
    ///
    /// Rows shorter than the header are padded with nulls, longer rows are an error.
    ///
    /// # Arguments
    /// - header: column names, in order
    /// - rows: one `Vec<Value>` per record
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, PositionError> {
        let width = header.len();
        let n_rows = rows.len();

        let mut columns: Vec<Column> = header
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(n_rows)))
            .collect();

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(PositionError::RowLength {
                    row: i + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            let found = row.len();
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
            for column in columns.iter_mut().skip(found) {
                column.values.push(Value::Null);
            }
        }

        let mut table = Table {
            columns: Vec::with_capacity(width),
            index: HashMap::default(),
            n_rows,
        };
        for column in columns {
            table.push_column(column)?;
        }

        Ok(table)
    }

    ///
    /// Build a table directly from columns. All columns must have the same length.
    ///
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, PositionError> {
        let n_rows = columns.first().map_or(0, |c| c.values.len());
        let mut table = Table {
            columns: Vec::with_capacity(columns.len()),
            index: HashMap::default(),
            n_rows,
        };
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    ///
    /// Append a new column at the end of the table.
    ///
    pub fn push_column(&mut self, column: Column) -> Result<(), PositionError> {
        if self.index.contains_key(&column.name) {
            return Err(PositionError::DuplicateColumn(column.name));
        }
        self.check_length(&column)?;

        if self.columns.is_empty() && self.n_rows == 0 {
            self.n_rows = column.values.len();
        }
        self.index.insert(column.name.clone(), self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    ///
    /// Replace the values of an existing column in place, or append it if the
    /// name is new. Returns `true` when an existing column was replaced.
    ///
    pub fn set_column(&mut self, column: Column) -> Result<bool, PositionError> {
        self.check_length(&column)?;
        match self.index.get(&column.name) {
            Some(&i) => {
                self.columns[i].values = column.values;
                Ok(true)
            }
            None => {
                self.push_column(column)?;
                Ok(false)
            }
        }
    }

    ///
    /// Iterate over the table row by row, each row in column order.
    ///
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.n_rows).map(move |r| self.columns.iter().map(|c| &c.values[r]).collect())
    }

    fn check_length(&self, column: &Column) -> Result<(), PositionError> {
        // a table with no columns yet takes its height from the first one
        if self.columns.is_empty() && self.n_rows == 0 {
            return Ok(());
        }
        if column.values.len() != self.n_rows {
            return Err(PositionError::ColumnLength {
                column: column.name.clone(),
                expected: self.n_rows,
                found: column.values.len(),
            });
        }
        Ok(())
    }
}
