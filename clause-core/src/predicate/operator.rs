use std::fmt::{self, Display, Formatter};

/// Comparison operator of a simple predicate or a join condition.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    #[default]
    Equal,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    NotEqual,
    Like,
    NotLike,
    Exists,
    NotExists,
}

impl Operator {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::NotEqual => "!=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::Exists => "EXISTS",
            Operator::NotExists => "NOT EXISTS",
        }
    }

    /// `EXISTS` and `NOT EXISTS` take no left hand field.
    pub const fn is_existential(&self) -> bool {
        matches!(self, Operator::Exists | Operator::NotExists)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword joining a predicate to the text preceding it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

impl Display for Conjunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
