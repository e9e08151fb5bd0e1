use crate::{Context, Delete, Error, Insert, Result, Select, Update, WriteQuery, writer::SqlWriter};

/// Any of the four statement shapes.
///
/// The default `Empty` variant is what an unpopulated builder produces, writing
/// it is an error.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Statement {
    #[default]
    Empty,
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        matches!(self, Statement::Empty)
    }
}

impl WriteQuery for Statement {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        match self {
            Statement::Empty => Err(Error::msg(
                "No valid statement: expected one of select, insert, update or delete",
            )),
            Statement::Select(v) => v.write_query(writer, context, out),
            Statement::Insert(v) => v.write_query(writer, context, out),
            Statement::Update(v) => v.write_query(writer, context, out),
            Statement::Delete(v) => v.write_query(writer, context, out),
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
