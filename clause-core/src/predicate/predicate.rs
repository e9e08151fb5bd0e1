use crate::{Conjunction, Operator, Select, Value, WhereStatements};

/// Right hand side of a simple predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Value),
    Subquery(Box<Select>),
}

/// Right hand side of an `IN` / `NOT IN` predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueList {
    Values(Vec<Value>),
    Subquery(Box<Select>),
}

/// Discriminant of [`Predicate`], ordered as the kinds are rendered inside a
/// [`WhereStatements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PredicateKind {
    Simple,
    In,
    NotIn,
    Between,
    NotBetween,
    Group,
}

impl PredicateKind {
    /// Every kind, in rendering order.
    pub const ALL: [PredicateKind; 6] = [
        PredicateKind::Simple,
        PredicateKind::In,
        PredicateKind::NotIn,
        PredicateKind::Between,
        PredicateKind::NotBetween,
        PredicateKind::Group,
    ];
}

/// One condition of a `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field op ?`, `field op (subquery)` or `[NOT] EXISTS (subquery)`.
    Simple {
        field: String,
        operator: Operator,
        operand: Operand,
        conjunction: Conjunction,
    },
    In {
        field: String,
        values: ValueList,
        conjunction: Conjunction,
    },
    NotIn {
        field: String,
        values: ValueList,
        conjunction: Conjunction,
    },
    Between {
        field: String,
        start: Value,
        end: Value,
        conjunction: Conjunction,
    },
    NotBetween {
        field: String,
        start: Value,
        end: Value,
        conjunction: Conjunction,
    },
    /// Parenthesized nested conditions.
    Group {
        predicates: WhereStatements,
        conjunction: Conjunction,
    },
}

impl Predicate {
    pub fn simple(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Predicate::Simple {
            field: field.into(),
            operator,
            operand: Operand::Value(value.into()),
            conjunction: Conjunction::default(),
        }
    }
    pub fn subquery(field: impl Into<String>, operator: Operator, subquery: Select) -> Self {
        Predicate::Simple {
            field: field.into(),
            operator,
            operand: Operand::Subquery(subquery.into()),
            conjunction: Conjunction::default(),
        }
    }
    pub fn exists(subquery: Select) -> Self {
        Self::subquery("", Operator::Exists, subquery)
    }
    pub fn not_exists(subquery: Select) -> Self {
        Self::subquery("", Operator::NotExists, subquery)
    }
    pub fn is_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Predicate::In {
            field: field.into(),
            values: ValueList::Values(values.into_iter().map(Into::into).collect()),
            conjunction: Conjunction::default(),
        }
    }
    pub fn in_subquery(field: impl Into<String>, subquery: Select) -> Self {
        Predicate::In {
            field: field.into(),
            values: ValueList::Subquery(subquery.into()),
            conjunction: Conjunction::default(),
        }
    }
    pub fn not_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Predicate::NotIn {
            field: field.into(),
            values: ValueList::Values(values.into_iter().map(Into::into).collect()),
            conjunction: Conjunction::default(),
        }
    }
    pub fn not_in_subquery(field: impl Into<String>, subquery: Select) -> Self {
        Predicate::NotIn {
            field: field.into(),
            values: ValueList::Subquery(subquery.into()),
            conjunction: Conjunction::default(),
        }
    }
    pub fn between(
        field: impl Into<String>,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        Predicate::Between {
            field: field.into(),
            start: start.into(),
            end: end.into(),
            conjunction: Conjunction::default(),
        }
    }
    pub fn not_between(
        field: impl Into<String>,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        Predicate::NotBetween {
            field: field.into(),
            start: start.into(),
            end: end.into(),
            conjunction: Conjunction::default(),
        }
    }
    pub fn group(predicates: impl Into<WhereStatements>) -> Self {
        Predicate::Group {
            predicates: predicates.into(),
            conjunction: Conjunction::default(),
        }
    }

    /// Join this predicate to the preceding one with `OR`.
    pub fn or(self) -> Self {
        self.with_conjunction(Conjunction::Or)
    }

    pub fn with_conjunction(mut self, value: Conjunction) -> Self {
        match &mut self {
            Predicate::Simple { conjunction, .. }
            | Predicate::In { conjunction, .. }
            | Predicate::NotIn { conjunction, .. }
            | Predicate::Between { conjunction, .. }
            | Predicate::NotBetween { conjunction, .. }
            | Predicate::Group { conjunction, .. } => *conjunction = value,
        }
        self
    }

    pub fn conjunction(&self) -> Conjunction {
        match self {
            Predicate::Simple { conjunction, .. }
            | Predicate::In { conjunction, .. }
            | Predicate::NotIn { conjunction, .. }
            | Predicate::Between { conjunction, .. }
            | Predicate::NotBetween { conjunction, .. }
            | Predicate::Group { conjunction, .. } => *conjunction,
        }
    }

    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::Simple { .. } => PredicateKind::Simple,
            Predicate::In { .. } => PredicateKind::In,
            Predicate::NotIn { .. } => PredicateKind::NotIn,
            Predicate::Between { .. } => PredicateKind::Between,
            Predicate::NotBetween { .. } => PredicateKind::NotBetween,
            Predicate::Group { .. } => PredicateKind::Group,
        }
    }

    /// Whether rendering this predicate produces any text.
    pub fn is_empty(&self) -> bool {
        match self {
            Predicate::Group { predicates, .. } => predicates.is_empty(),
            _ => false,
        }
    }
}
