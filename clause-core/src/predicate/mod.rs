mod operator;
mod predicate;
mod where_statements;

pub use operator::*;
pub use predicate::*;
pub use where_statements::*;
