mod backend;

pub use backend::*;
pub use clause_core::*;
pub use clause_postgres::*;
