use clause_core::{Error, GenericSqlWriter, Result, SqlWriter};
use clause_postgres::PostgresSqlWriter;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// SQL dialect selected by name at run time.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Backtick quoting and `?` placeholders: MySQL, MariaDB, SQLite.
    #[default]
    Generic,
    /// Double quote quoting and `$n` placeholders.
    Postgres,
}

impl Backend {
    pub const fn name(&self) -> &'static str {
        match self {
            Backend::Generic => "generic",
            Backend::Postgres => "postgres",
        }
    }

    pub fn sql_writer(&self) -> Box<dyn SqlWriter> {
        match self {
            Backend::Generic => Box::new(GenericSqlWriter::new()),
            Backend::Postgres => Box::new(PostgresSqlWriter::new()),
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let backend = match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "mysql" | "mariadb" | "sqlite" | "sqlite3" => Backend::Generic,
            "postgres" | "postgresql" | "pg" => Backend::Postgres,
            _ => {
                let error = Error::msg(format!(
                    "Unknown backend `{}`, expected one of generic, mysql, mariadb, sqlite, postgres",
                    s
                ));
                log::error!("{:#}", error);
                return Err(error);
            }
        };
        log::debug!("Backend `{}` renders as {}", s, backend);
        Ok(backend)
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
