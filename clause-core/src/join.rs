use crate::{Context, Operator, Result, WriteQuery, writer::SqlWriter};

/// `<type> JOIN rhs ON lhs.lhs_field <op> rhs.rhs_field`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join: JoinType,
    pub lhs: String,
    pub rhs: String,
    pub on: JoinOn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinOn {
    pub lhs_field: String,
    pub operator: Operator,
    pub rhs_field: String,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
}

impl Join {
    pub fn new(
        join: JoinType,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
        lhs_field: impl Into<String>,
        operator: Operator,
        rhs_field: impl Into<String>,
    ) -> Self {
        Self {
            join,
            lhs: lhs.into(),
            rhs: rhs.into(),
            on: JoinOn {
                lhs_field: lhs_field.into(),
                operator,
                rhs_field: rhs_field.into(),
            },
        }
    }
    pub fn inner(
        lhs: impl Into<String>,
        rhs: impl Into<String>,
        lhs_field: impl Into<String>,
        rhs_field: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Inner, lhs, rhs, lhs_field, Operator::Equal, rhs_field)
    }
    pub fn left(
        lhs: impl Into<String>,
        rhs: impl Into<String>,
        lhs_field: impl Into<String>,
        rhs_field: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Left, lhs, rhs, lhs_field, Operator::Equal, rhs_field)
    }
    pub fn right(
        lhs: impl Into<String>,
        rhs: impl Into<String>,
        lhs_field: impl Into<String>,
        rhs_field: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Right, lhs, rhs, lhs_field, Operator::Equal, rhs_field)
    }
}

impl WriteQuery for Join {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_join(context, out, self)
    }
}
