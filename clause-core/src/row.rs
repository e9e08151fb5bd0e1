use crate::{Error, Result, Value};
use std::collections::{BTreeMap, HashMap, hash_map::Entry};

/// Column name to value payload of an insert or update.
///
/// The map is unordered, writers sort the column names before rendering.
pub type Row = HashMap<String, Value>;

/// Payload that can be turned into a [`Row`].
pub trait IntoRow {
    fn into_row(self) -> Result<Row>;
}

/// Explicit mapping of a struct to its columns.
///
/// ```rust
/// use clause_core::{Record, Value};
/// struct User {
///     name: String,
///     age: u32,
/// }
/// impl Record for User {
///     fn row(&self) -> Vec<(&'static str, Value)> {
///         vec![("name", self.name.clone().into()), ("age", self.age.into())]
///     }
/// }
/// ```
pub trait Record {
    fn row(&self) -> Vec<(&'static str, Value)>;
}

fn collect_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Row>
where
    K: Into<String>,
    V: Into<Value>,
{
    let pairs = pairs.into_iter();
    let mut row = Row::with_capacity(pairs.size_hint().0);
    for (k, v) in pairs {
        match row.entry(k.into()) {
            Entry::Occupied(entry) => {
                return Err(Error::msg(format!(
                    "Column `{}` appears more than once, the payload is not a key-value map",
                    entry.key()
                )));
            }
            Entry::Vacant(entry) => {
                entry.insert(v.into());
            }
        }
    }
    Ok(row)
}

impl<K: Into<String>, V: Into<Value>> IntoRow for HashMap<K, V> {
    fn into_row(self) -> Result<Row> {
        collect_pairs(self)
    }
}

impl<K: Into<String>, V: Into<Value>> IntoRow for BTreeMap<K, V> {
    fn into_row(self) -> Result<Row> {
        collect_pairs(self)
    }
}

impl<K: Into<String>, V: Into<Value>> IntoRow for Vec<(K, V)> {
    fn into_row(self) -> Result<Row> {
        collect_pairs(self)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> IntoRow for [(K, V); N] {
    fn into_row(self) -> Result<Row> {
        collect_pairs(self)
    }
}

impl<T: Record> IntoRow for &T {
    fn into_row(self) -> Result<Row> {
        collect_pairs(self.row())
    }
}

/// Column names of the row, sorted.
pub fn sorted_columns(row: &Row) -> Vec<&str> {
    let mut result: Vec<_> = row.keys().map(String::as_str).collect();
    result.sort_unstable();
    result
}
