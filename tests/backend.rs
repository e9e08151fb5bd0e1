#[cfg(test)]
mod tests {
    use clause::{Backend, Operator, Predicate, Select, Value};
    use clause_tests::silent_logs;
    use std::str::FromStr;

    #[test]
    fn backend_names() {
        for name in ["generic", "MySQL", "mariadb", " sqlite ", "SQLITE3"] {
            assert_eq!(Backend::from_str(name).unwrap(), Backend::Generic);
        }
        for name in ["postgres", "PostgreSQL", "pg"] {
            assert_eq!(name.parse::<Backend>().unwrap(), Backend::Postgres);
        }
        silent_logs! {
            let error = Backend::from_str("oracle").unwrap_err();
            assert!(format!("{:#}", error).contains("`oracle`"));
        }
        assert_eq!(Backend::default(), Backend::Generic);
        assert_eq!(Backend::Postgres.to_string(), "postgres");
    }

    #[test]
    fn backend_writers() {
        let select = Select::new("users").filter(Predicate::simple(
            "email",
            Operator::Equal,
            "a@x.com",
        ));
        let (sql, args) = Backend::Generic.sql_writer().render_select(&select).unwrap();
        assert_eq!(sql, "SELECT * FROM `users` WHERE `email` = ?");
        assert_eq!(args, [Value::Varchar(Some("a@x.com".into()))]);

        let (sql, args) = Backend::Postgres
            .sql_writer()
            .render_select(&select)
            .unwrap();
        assert_eq!(sql, r#"SELECT * FROM "users" WHERE "email" = $1"#);
        assert_eq!(args, [Value::Varchar(Some("a@x.com".into()))]);
    }

    mod generic {
        use clause::Backend;
        clause_tests::conformance_tests!(*Backend::Generic.sql_writer());
    }

    mod postgres {
        use clause::Backend;
        clause_tests::conformance_tests!(*Backend::Postgres.sql_writer());
    }
}
