use crate::{
    Context, Join, Ordered, Predicate, Result, WhereStatements, WriteQuery, writer::SqlWriter,
};

/// `SELECT` statement, also used as the subquery of a predicate.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    /// Projection, `*` when empty.
    pub columns: Vec<String>,
    pub joins: Vec<Join>,
    pub condition: WhereStatements,
    pub group_by: Vec<String>,
    pub order_by: Vec<Ordered>,
    /// Omitted when `None` or zero.
    pub limit: Option<u32>,
    /// Omitted when `None` or zero.
    pub offset: Option<u32>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }
    pub fn columns<C: Into<String>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.condition.push(predicate);
        self
    }
    pub fn group_by<C: Into<String>>(mut self, fields: impl IntoIterator<Item = C>) -> Self {
        self.group_by.extend(fields.into_iter().map(Into::into));
        self
    }
    pub fn order_by(mut self, ordered: Ordered) -> Self {
        self.order_by.push(ordered);
        self
    }
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl WriteQuery for Select {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_select(context, out, self)
    }
}
