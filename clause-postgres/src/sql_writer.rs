use clause_core::{Context, SqlWriter};

/// Postgres dialect: `"identifier"` quoting and `$1, $2, ...` placeholders.
///
/// Numbering follows the order placeholders are written during one render,
/// across subqueries included, and restarts at `$1` on every render.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostgresSqlWriter {}

impl PostgresSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn quote_left(&self) -> &str {
        "\""
    }

    fn quote_right(&self) -> &str {
        "\""
    }

    fn write_placeholder(&self, context: &mut Context, out: &mut String) {
        let mut buffer = itoa::Buffer::new();
        out.push('$');
        out.push_str(buffer.format(context.next_counter()));
        if context.counter == u16::MAX as u32 + 1 {
            log::warn!(
                "Statement has more than {} placeholders, Postgres rejects it",
                u16::MAX
            );
        }
    }
}
