//! Tabular data model shared by pages and the table renderer.
//!
//! DESIGN
//! ======
//! A `Dataset` pairs an ordered column set with ordered rows. Every row gets a
//! `RowKey` when it is pushed; the key travels with the row, so reordering or
//! inserting rows never changes which key identifies which cells. Keys come
//! from a per-dataset counter, which keeps them identical between the server
//! render and client hydration.
//!
//! Rows are expected to be as wide as the column set. Nothing here enforces
//! that; `is_rectangular` exists so callers can check it.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

/// Stable identifier for a row, assigned at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey(u32);

/// One table row: its key plus cell values in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub cells: Vec<String>,
}

/// Column labels and the rows shown under them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
    next_key: u32,
}

impl Dataset {
    /// Create an empty dataset with the given column labels.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { columns: columns.into_iter().map(Into::into).collect(), rows: Vec::new(), next_key: 0 }
    }

    /// Builder form of [`Dataset::push_row`].
    #[must_use]
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(cells);
        self
    }

    /// Append a row and return the key assigned to it.
    pub fn push_row<I, S>(&mut self, cells: I) -> RowKey
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.push(Row { key, cells: cells.into_iter().map(Into::into).collect() });
        key
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when every row has exactly one cell per column.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.cells.len() == self.columns.len())
    }

    /// Split into the column labels and rows the table renderer takes.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<Row>) {
        (self.columns, self.rows)
    }
}

#[cfg(test)]
impl Dataset {
    pub(crate) fn columns(&self) -> &[String] {
        &self.columns
    }

    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Look up a row by key regardless of its current position.
    pub(crate) fn row(&self, key: RowKey) -> Option<&Row> {
        self.rows.iter().find(|row| row.key == key)
    }
}
