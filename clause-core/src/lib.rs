mod as_value;
mod join;
mod order;
mod predicate;
mod row;
mod statement;
mod util;
mod value;
mod write_query;
mod writer;

pub use ::anyhow::Context as ErrorContext;
pub use as_value::*;
pub use join::*;
pub use order::*;
pub use predicate::*;
pub use row::*;
pub use statement::*;
pub use util::*;
pub use value::*;
pub use write_query::*;
pub use writer::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
