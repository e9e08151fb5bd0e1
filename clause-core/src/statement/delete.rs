use crate::{Context, Predicate, Result, WhereStatements, WriteQuery, writer::SqlWriter};

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub condition: WhereStatements,
}

impl Delete {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            condition: Default::default(),
        }
    }
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.condition.push(predicate);
        self
    }
}

impl WriteQuery for Delete {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_delete(context, out, self)
    }
}
