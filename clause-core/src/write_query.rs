use crate::{
    Predicate, Result, WhereStatements,
    writer::{Context, SqlWriter},
};

/// A renderable clause node.
pub trait WriteQuery {
    /// Serialize the node into the output string, binding its values into the context.
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()>;
}

impl<T: WriteQuery + ?Sized> WriteQuery for &T {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        (*self).write_query(writer, context, out)
    }
}

impl WriteQuery for Predicate {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_predicate(context, out, self)
    }
}

impl WriteQuery for WhereStatements {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_where_statements(context, out, self)
    }
}
