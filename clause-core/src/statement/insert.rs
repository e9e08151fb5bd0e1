use crate::{Context, IntoRow, Result, Row, WriteQuery, writer::SqlWriter};

/// Multi row `INSERT INTO`, every row must have the same columns.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub rows: Vec<Row>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            rows: Vec::new(),
        }
    }
    pub fn from_rows<R: IntoRow>(
        table: impl Into<String>,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self> {
        Ok(Self {
            table: table.into(),
            rows: rows
                .into_iter()
                .map(IntoRow::into_row)
                .collect::<Result<_>>()?,
        })
    }
    pub fn row(mut self, row: impl IntoRow) -> Result<Self> {
        self.rows.push(row.into_row()?);
        Ok(self)
    }
    pub fn push_row(&mut self, row: impl IntoRow) -> Result<&mut Self> {
        self.rows.push(row.into_row()?);
        Ok(self)
    }
}

impl WriteQuery for Insert {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_insert(context, out, self)
    }
}
