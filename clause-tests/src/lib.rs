mod determinism;
mod errors;
mod predicates;
mod subqueries;
mod users;

pub use crate::{
    determinism::determinism, errors::errors, predicates::predicates, subqueries::subqueries,
    users::users,
};
use clause_core::{SqlWriter, Value};
use log::LevelFilter;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Declare one `#[test]` per scenario, each rendering with the writer `$writer` evaluates to.
///
/// ```ignore
/// mod postgres {
///     clause_tests::conformance_tests!(clause_postgres::PostgresSqlWriter::new());
/// }
/// ```
#[macro_export]
macro_rules! conformance_tests {
    ($writer:expr) => {
        $crate::conformance_tests!($writer; users, predicates, subqueries, determinism, errors);
    };
    ($writer:expr; $($scenario:ident),+ $(,)?) => {
        $(
            #[test]
            fn $scenario() {
                $crate::init_logs();
                $crate::$scenario(&$writer);
            }
        )+
    };
}

/// Rewrite dialect text into the canonical form: backtick quotes and `?` placeholders.
///
/// Lets the suite compare against a single expected string per case, the test
/// data never contains quotes, `?` or `$` inside identifiers or literals.
pub fn canonical(writer: &dyn SqlWriter, sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let (left, right) = (writer.quote_left(), writer.quote_right());
    let mut rest = sql;
    while let Some(c) = rest.chars().next() {
        if !left.is_empty() && rest.starts_with(left) {
            out.push('`');
            rest = &rest[left.len()..];
        } else if !right.is_empty() && rest.starts_with(right) {
            out.push('`');
            rest = &rest[right.len()..];
        } else if c == '$' && rest[1..].starts_with(|v: char| v.is_ascii_digit()) {
            out.push('?');
            rest = rest[1..].trim_start_matches(|v: char| v.is_ascii_digit());
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// Assert the placeholders of `sql` match the arguments one to one.
///
/// Numbered placeholders must be `$1..$k` in order of appearance.
pub fn check_placeholders(sql: &str, args: &[Value]) {
    let mut numbered = Vec::new();
    let mut positional = 0;
    for (i, c) in sql.char_indices() {
        match c {
            '?' => positional += 1,
            '$' => {
                let digits: String = sql[i + 1..]
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                if let Ok(n) = digits.parse::<usize>() {
                    numbered.push(n);
                }
            }
            _ => {}
        }
    }
    if numbered.is_empty() {
        assert_eq!(
            positional,
            args.len(),
            "`{}` has {} placeholders but {} arguments",
            sql,
            positional,
            args.len()
        );
    } else {
        assert_eq!(positional, 0, "`{}` mixes placeholder styles", sql);
        let expected: Vec<_> = (1..=args.len()).collect();
        assert_eq!(
            numbered, expected,
            "`{}` placeholders are not numbered 1..{}",
            sql,
            args.len()
        );
    }
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
