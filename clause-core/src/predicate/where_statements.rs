use crate::{Predicate, PredicateKind};

/// The conditions of a `WHERE` clause.
///
/// Predicates keep their insertion order inside each [`PredicateKind`], the
/// kinds themselves are rendered in `PredicateKind` order: all the simple
/// comparisons first, then `IN`, `NOT IN`, `BETWEEN`, `NOT BETWEEN` and
/// finally the parenthesized groups.
///
/// Each predicate carries the conjunction joining it to the predicate written
/// before it. The first predicate in rendering order has nothing before it, so
/// its conjunction is discarded: `not_between("price", ..)` followed by
/// `not_in("category", ..).or()` renders `category NOT IN(..) AND price NOT
/// BETWEEN ..`, the `OR` of the `NOT IN` moved to the front is dropped.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct WhereStatements {
    predicates: Vec<Predicate>,
}

impl WhereStatements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, predicate: Predicate) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// No predicate would produce any text.
    pub fn is_empty(&self) -> bool {
        self.predicates.iter().all(Predicate::is_empty)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Predicates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter()
    }

    pub fn of_kind(&self, kind: PredicateKind) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter().filter(move |v| v.kind() == kind)
    }

    /// Predicates in the order they are written, empty ones skipped.
    pub fn rendering_order(&self) -> Vec<&Predicate> {
        PredicateKind::ALL
            .into_iter()
            .flat_map(|kind| self.of_kind(kind))
            .filter(|v| !v.is_empty())
            .collect()
    }
}

impl From<Vec<Predicate>> for WhereStatements {
    fn from(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }
}

impl<const N: usize> From<[Predicate; N]> for WhereStatements {
    fn from(value: [Predicate; N]) -> Self {
        Self {
            predicates: value.into(),
        }
    }
}

impl From<Predicate> for WhereStatements {
    fn from(value: Predicate) -> Self {
        Self {
            predicates: vec![value],
        }
    }
}

impl FromIterator<Predicate> for WhereStatements {
    fn from_iter<T: IntoIterator<Item = Predicate>>(iter: T) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Predicate> for WhereStatements {
    fn extend<T: IntoIterator<Item = Predicate>>(&mut self, iter: T) {
        self.predicates.extend(iter);
    }
}
