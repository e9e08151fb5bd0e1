use crate::{
    Context, IntoRow, Predicate, Result, Row, WhereStatements, WriteQuery, writer::SqlWriter,
};

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub row: Row,
    pub condition: WhereStatements,
}

impl Update {
    pub fn new(table: impl Into<String>, row: impl IntoRow) -> Result<Self> {
        Ok(Self {
            table: table.into(),
            row: row.into_row()?,
            condition: Default::default(),
        })
    }
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.condition.push(predicate);
        self
    }
}

impl WriteQuery for Update {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_update(context, out, self)
    }
}
