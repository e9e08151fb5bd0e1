use crate::{
    Context, Delete, Error, Insert, Join, JoinType, Operand, Operator, Ordered,
    Predicate, Result, Select, Statement, Update, Value, ValueList, WhereStatements, WriteQuery,
    separated_by, sorted_columns, truncate_long, try_separated_by,
};
use anyhow::Context as _;

/// Dialect printer converting the clause model into SQL text and bound arguments.
///
/// A dialect decides how identifiers are quoted and which placeholder token
/// stands for a bound value, every other method has a default producing the
/// canonical text. The default quoting and placeholder are the MySQL / SQLite
/// ones: backticks and `?`.
///
/// Writers are stateless: everything that changes while rendering lives in the
/// [`Context`], a new one is created by every `render*` call.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Opening identifier quote.
    fn quote_left(&self) -> &str {
        "`"
    }

    /// Closing identifier quote.
    fn quote_right(&self) -> &str {
        "`"
    }

    /// Write the placeholder of the next bound value.
    fn write_placeholder(&self, _context: &mut Context, out: &mut String) {
        out.push('?');
    }

    /// Placeholder token of the next bound value, as a standalone string.
    fn next_placeholder(&self, context: &mut Context) -> String {
        let mut out = String::new();
        self.write_placeholder(context, &mut out);
        out
    }

    /// Write a placeholder and bind its value, the only way arguments enter the context.
    fn write_bound_value(&self, context: &mut Context, out: &mut String, value: &Value) {
        self.write_placeholder(context, out);
        context.push_arg(value.clone());
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &str,
        search: char,
        replace: &str,
    ) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote an identifier, doubling the closing quote if it appears inside.
    fn write_identifier_quoted(&self, context: &mut Context, out: &mut String, value: &str) {
        let left = self.quote_left();
        let right = self.quote_right();
        out.push_str(left);
        let mut chars = right.chars();
        match (chars.next(), chars.next()) {
            (Some(quote), None) if value.contains(quote) => {
                let doubled = [right, right].concat();
                self.write_escaped(context, out, value, quote, &doubled);
            }
            _ => out.push_str(value),
        }
        out.push_str(right);
    }

    /// Write a possibly qualified name (`table.column`), quoting every part but `*`.
    fn write_field(&self, context: &mut Context, out: &mut String, value: &str) {
        separated_by(
            out,
            value.split('.'),
            |out, part| {
                if part == "*" {
                    out.push('*');
                } else {
                    self.write_identifier_quoted(&mut *context, out, part);
                }
            },
            ".",
        );
    }

    /// Write a projected column, `*` and aliased expressions are left untouched.
    fn write_column(&self, context: &mut Context, out: &mut String, value: &str) {
        if value == "*" || value.to_ascii_lowercase().contains(" as ") {
            out.push_str(value);
        } else {
            self.write_field(context, out, value);
        }
    }

    fn write_operator(&self, _context: &mut Context, out: &mut String, value: &Operator) {
        out.push_str(value.as_str());
    }

    /// Render join keyword(s) for the given join type.
    fn write_join_type(&self, _context: &mut Context, out: &mut String, join_type: &JoinType) {
        out.push_str(match join_type {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
        });
    }

    /// Render a JOIN clause.
    fn write_join(&self, context: &mut Context, out: &mut String, join: &Join) -> Result<()> {
        self.write_join_type(context, out, &join.join);
        out.push(' ');
        self.write_identifier_quoted(context, out, &join.rhs);
        out.push_str(" ON ");
        self.write_identifier_quoted(context, out, &join.lhs);
        out.push('.');
        self.write_identifier_quoted(context, out, &join.on.lhs_field);
        out.push(' ');
        self.write_operator(context, out, &join.on.operator);
        out.push(' ');
        self.write_identifier_quoted(context, out, &join.rhs);
        out.push('.');
        self.write_identifier_quoted(context, out, &join.on.rhs_field);
        Ok(())
    }

    /// Render a parenthesized subquery sharing the enclosing context.
    fn write_subquery(&self, context: &mut Context, out: &mut String, value: &Select) -> Result<()> {
        out.push('(');
        self.write_select(context, out, value)
            .with_context(|| format!("While writing the subquery on `{}`", value.table))?;
        out.push(')');
        Ok(())
    }

    /// Render a single predicate.
    fn write_predicate(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &Predicate,
    ) -> Result<()> {
        match value {
            Predicate::Simple {
                field,
                operator,
                operand,
                ..
            } => match operand {
                Operand::Value(..) if operator.is_existential() => {
                    return Err(Error::msg(format!(
                        "Operator `{}` requires a subquery, found a value",
                        operator
                    )));
                }
                Operand::Value(v) => {
                    self.write_field(context, out, field);
                    out.push(' ');
                    self.write_operator(context, out, operator);
                    out.push(' ');
                    self.write_bound_value(context, out, v);
                }
                Operand::Subquery(subquery) => {
                    if !operator.is_existential() {
                        self.write_field(context, out, field);
                        out.push(' ');
                    }
                    self.write_operator(context, out, operator);
                    out.push(' ');
                    self.write_subquery(context, out, subquery)?;
                }
            },
            Predicate::In { field, values, .. } => {
                self.write_predicate_in(context, out, field, values, false)?
            }
            Predicate::NotIn { field, values, .. } => {
                self.write_predicate_in(context, out, field, values, true)?
            }
            Predicate::Between {
                field, start, end, ..
            } => self.write_predicate_between(context, out, field, start, end, false),
            Predicate::NotBetween {
                field, start, end, ..
            } => self.write_predicate_between(context, out, field, start, end, true),
            Predicate::Group { predicates, .. } => {
                out.push('(');
                self.write_where_statements(context, out, predicates)?;
                out.push(')');
            }
        }
        Ok(())
    }

    /// Render `field [NOT] IN(?,?)` or `field [NOT] IN (subquery)`.
    fn write_predicate_in(
        &self,
        context: &mut Context,
        out: &mut String,
        field: &str,
        values: &ValueList,
        negated: bool,
    ) -> Result<()> {
        self.write_field(context, out, field);
        out.push_str(if negated { " NOT IN" } else { " IN" });
        match values {
            ValueList::Values(values) => {
                if values.is_empty() {
                    return Err(Error::msg(format!(
                        "The list of values of `{}{}IN` is empty",
                        field,
                        if negated { " NOT " } else { " " }
                    )));
                }
                out.push('(');
                separated_by(
                    out,
                    values,
                    |out, v| self.write_bound_value(&mut *context, out, v),
                    ",",
                );
                out.push(')');
            }
            ValueList::Subquery(subquery) => {
                out.push(' ');
                self.write_subquery(context, out, subquery)?;
            }
        }
        Ok(())
    }

    /// Render `field [NOT] BETWEEN ? AND ?`.
    fn write_predicate_between(
        &self,
        context: &mut Context,
        out: &mut String,
        field: &str,
        start: &Value,
        end: &Value,
        negated: bool,
    ) {
        self.write_field(context, out, field);
        out.push_str(if negated { " NOT BETWEEN " } else { " BETWEEN " });
        self.write_bound_value(context, out, start);
        out.push_str(" AND ");
        self.write_bound_value(context, out, end);
    }

    /// Render the predicates joined by their conjunctions.
    ///
    /// Predicates come in [`WhereStatements::rendering_order`], each one is
    /// prefixed by its own conjunction except the first one, whose conjunction
    /// is discarded.
    fn write_where_statements(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &WhereStatements,
    ) -> Result<()> {
        for (i, predicate) in value.rendering_order().into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(predicate.conjunction().as_str());
                out.push(' ');
            }
            self.write_predicate(context, out, predicate)?;
        }
        Ok(())
    }

    /// Render ` WHERE ...`, nothing when there are no predicates.
    fn write_where(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &WhereStatements,
    ) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        out.push_str(" WHERE ");
        self.write_where_statements(context, out, value)
    }

    fn write_group_by(&self, context: &mut Context, out: &mut String, fields: &[String]) {
        if fields.is_empty() {
            return;
        }
        out.push_str(" GROUP BY ");
        separated_by(
            out,
            fields,
            |out, v| self.write_field(&mut *context, out, v),
            ",",
        );
    }

    fn write_order_by(&self, _context: &mut Context, out: &mut String, value: &[Ordered]) {
        if value.is_empty() {
            return;
        }
        out.push_str(" ORDER BY ");
        separated_by(
            out,
            value,
            |out, v| {
                out.push_str(&v.field);
                out.push(' ');
                out.push_str(v.order.as_str());
            },
            ", ",
        );
    }

    fn write_limit(&self, context: &mut Context, out: &mut String, limit: Option<u32>) {
        if let Some(limit) = limit.filter(|v| *v > 0) {
            out.push_str(" LIMIT ");
            self.write_bound_value(context, out, &Value::Int64(Some(limit as i64)));
        }
    }

    fn write_offset(&self, context: &mut Context, out: &mut String, offset: Option<u32>) {
        if let Some(offset) = offset.filter(|v| *v > 0) {
            out.push_str(" OFFSET ");
            self.write_bound_value(context, out, &Value::Int64(Some(offset as i64)));
        }
    }

    /// Emit SELECT statement (projection, FROM, JOIN, WHERE, GROUP BY, ORDER BY, LIMIT, OFFSET).
    fn write_select(&self, context: &mut Context, out: &mut String, value: &Select) -> Result<()> {
        out.reserve(64 + value.columns.len() * 16 + value.joins.len() * 48);
        out.push_str("SELECT ");
        if value.columns.is_empty() {
            out.push('*');
        }
        separated_by(
            out,
            &value.columns,
            |out, v| self.write_column(&mut *context, out, v),
            ",",
        );
        out.push_str(" FROM ");
        self.write_field(context, out, &value.table);
        if !value.joins.is_empty() {
            out.push(' ');
            try_separated_by(
                out,
                &value.joins,
                |out, join| join.write_query(self.as_dyn(), &mut *context, out),
                " ",
            )?;
        }
        self.write_where(context, out, &value.condition)?;
        self.write_group_by(context, out, &value.group_by);
        self.write_order_by(context, out, &value.order_by);
        self.write_limit(context, out, value.limit);
        self.write_offset(context, out, value.offset);
        Ok(())
    }

    /// Emit multi-row INSERT, columns in lexicographic order.
    fn write_insert(&self, context: &mut Context, out: &mut String, value: &Insert) -> Result<()> {
        let Some(first) = value.rows.first() else {
            return Err(Error::msg(format!(
                "Cannot insert into `{}` without any row",
                value.table
            )));
        };
        let columns = sorted_columns(first);
        if columns.is_empty() {
            return Err(Error::msg(format!(
                "Cannot insert into `{}` a row without columns",
                value.table
            )));
        }
        for (i, row) in value.rows.iter().enumerate().skip(1) {
            if row.len() != columns.len() || !columns.iter().all(|c| row.contains_key(*c)) {
                return Err(Error::msg(format!(
                    "Row {} inserted into `{}` has columns {:?}, expected the same columns as the first row {:?}",
                    i,
                    value.table,
                    sorted_columns(row),
                    columns,
                )));
            }
        }
        for column in &columns {
            let mut values = value
                .rows
                .iter()
                .filter_map(|row| row.get(*column))
                .filter(|v| !v.is_null());
            let Some(sample) = values.next() else {
                continue;
            };
            if let Some(other) = values.find(|v| !v.same_type(sample)) {
                log::warn!(
                    "Column `{}` inserted into `{}` mixes {} and {} values",
                    column,
                    value.table,
                    sample.type_name(),
                    other.type_name(),
                );
            }
        }
        out.reserve(32 + columns.len() * (16 + value.rows.len() * 4));
        out.push_str("INSERT INTO ");
        out.push_str(&value.table);
        out.push('(');
        separated_by(
            out,
            &columns,
            |out, v| self.write_identifier_quoted(&mut *context, out, v),
            ",",
        );
        out.push_str(") VALUES");
        separated_by(
            out,
            &value.rows,
            |out, row| {
                out.push('(');
                separated_by(
                    out,
                    &columns,
                    |out, column| {
                        if let Some(v) = row.get(*column) {
                            self.write_bound_value(&mut *context, out, v);
                        }
                    },
                    ",",
                );
                out.push(')');
            },
            ",",
        );
        Ok(())
    }

    /// Emit UPDATE with columns in lexicographic order and optional WHERE clause.
    fn write_update(&self, context: &mut Context, out: &mut String, value: &Update) -> Result<()> {
        let columns = sorted_columns(&value.row);
        if columns.is_empty() {
            return Err(Error::msg(format!(
                "Cannot update `{}` without any column to set",
                value.table
            )));
        }
        out.reserve(32 + columns.len() * 16);
        out.push_str("UPDATE ");
        out.push_str(&value.table);
        out.push_str(" SET ");
        separated_by(
            out,
            &columns,
            |out, column| {
                if let Some(v) = value.row.get(*column) {
                    self.write_identifier_quoted(&mut *context, out, column);
                    out.push_str(" = ");
                    self.write_bound_value(&mut *context, out, v);
                }
            },
            ", ",
        );
        self.write_where(context, out, &value.condition)
    }

    /// Emit DELETE statement with optional WHERE clause.
    fn write_delete(&self, context: &mut Context, out: &mut String, value: &Delete) -> Result<()> {
        out.reserve(32 + value.table.len());
        out.push_str("DELETE FROM ");
        self.write_field(context, out, &value.table);
        self.write_where(context, out, &value.condition)
    }

    /// Render any query in a fresh context, returning the text and its arguments.
    fn render_query(&self, query: &dyn WriteQuery) -> Result<(String, Vec<Value>)> {
        let mut context = Context::default();
        let mut out = String::new();
        if let Err(e) = query.write_query(self.as_dyn(), &mut context, &mut out) {
            log::error!("{:#}", e);
            return Err(e);
        }
        let args = context.into_args();
        log::debug!(
            "Rendered `{}` with {} argument(s)",
            truncate_long!(out),
            args.len()
        );
        Ok((out, args))
    }

    fn render(&self, statement: &Statement) -> Result<(String, Vec<Value>)> {
        self.render_query(statement)
    }

    fn render_select(&self, select: &Select) -> Result<(String, Vec<Value>)> {
        self.render_query(select)
    }

    fn render_insert(&self, insert: &Insert) -> Result<(String, Vec<Value>)> {
        self.render_query(insert)
    }

    fn render_update(&self, update: &Update) -> Result<(String, Vec<Value>)> {
        self.render_query(update)
    }

    fn render_delete(&self, delete: &Delete) -> Result<(String, Vec<Value>)> {
        self.render_query(delete)
    }
}

/// Generic writer: MySQL / SQLite conventions, quoting and placeholder token configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericSqlWriter {
    placeholder: &'static str,
    quote_left: &'static str,
    quote_right: &'static str,
}

impl GenericSqlWriter {
    /// Backtick quoting and `?` placeholders.
    pub const fn new() -> Self {
        Self {
            placeholder: "?",
            quote_left: "`",
            quote_right: "`",
        }
    }
    pub const fn with_quotes(quote_left: &'static str, quote_right: &'static str) -> Self {
        Self {
            placeholder: "?",
            quote_left,
            quote_right,
        }
    }
    /// Identifiers written as they are.
    pub const fn unquoted() -> Self {
        Self::with_quotes("", "")
    }
    /// Same token for every bound value.
    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Default for GenericSqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn quote_left(&self) -> &str {
        self.quote_left
    }

    fn quote_right(&self) -> &str {
        self.quote_right
    }

    fn write_placeholder(&self, _context: &mut Context, out: &mut String) {
        out.push_str(self.placeholder);
    }
}
