#[cfg(test)]
mod tests {
    use clause_core::{
        Context, Insert, Join, Operator, Predicate, Select, SqlWriter, Update, Value,
    };
    use clause_postgres::PostgresSqlWriter;
    use clause_tests::check_placeholders;
    use indoc::indoc;

    const WRITER: PostgresSqlWriter = PostgresSqlWriter::new();

    mod conformance {
        use super::WRITER;
        clause_tests::conformance_tests!(WRITER);
    }

    #[test]
    fn between_and_in() {
        let select = Select::new("users")
            .filter(Predicate::is_in("name", ["alice", "bob"]))
            .filter(Predicate::between("age", 18i32, 30i32));
        let (sql, args) = WRITER.render_select(&select).unwrap();
        assert_eq!(
            sql,
            r#"SELECT * FROM "users" WHERE "name" IN($1,$2) AND "age" BETWEEN $3 AND $4"#
        );
        assert_eq!(
            args,
            [
                Value::Varchar(Some("alice".into())),
                Value::Varchar(Some("bob".into())),
                Value::Int32(Some(18)),
                Value::Int32(Some(30)),
            ]
        );
    }

    #[test]
    fn insert_numbering() {
        let insert = Insert::from_rows(
            "users",
            [
                [("name", Value::from("alice")), ("age", 30i32.into())],
                [("name", Value::from("bob")), ("age", 25i32.into())],
            ],
        )
        .unwrap();
        let (sql, args) = WRITER.render_insert(&insert).unwrap();
        assert_eq!(
            sql,
            r#"INSERT INTO users("age","name") VALUES($1,$2),($3,$4)"#
        );
        check_placeholders(&sql, &args);
    }

    #[test]
    fn join_where() {
        let select = Select::new("users")
            .columns(["users.id", "users.name", "orders.total"])
            .join(Join::inner("users", "orders", "id", "user_id"))
            .filter(Predicate::simple("orders.total", Operator::Greater, 100i64));
        let (sql, args) = WRITER.render_select(&select).unwrap();
        assert_eq!(
            sql,
            indoc! {r#"
                SELECT "users"."id","users"."name","orders"."total" FROM "users" INNER JOIN "orders" ON "users"."id" = "orders"."user_id" WHERE "orders"."total" > $1"#}
        );
        assert_eq!(args, [Value::Int64(Some(100))]);
    }

    #[test]
    fn subquery_numbering() {
        let roles = Select::new("roles")
            .columns(["id"])
            .filter(Predicate::is_in("name", ["admin", "owner"]));
        let select = Select::new("users")
            .filter(Predicate::simple("active", Operator::Equal, true))
            .filter(Predicate::in_subquery("role_id", roles))
            .limit(10)
            .offset(5);
        let (sql, args) = WRITER.render_select(&select).unwrap();
        assert_eq!(
            sql,
            r#"SELECT * FROM "users" WHERE "active" = $1 AND "role_id" IN (SELECT "id" FROM "roles" WHERE "name" IN($2,$3)) LIMIT $4 OFFSET $5"#
        );
        assert_eq!(args.len(), 5);
        check_placeholders(&sql, &args);
    }

    #[test]
    fn update_numbering() {
        let update = Update::new("users", [("name", Value::from("x")), ("age", 1i32.into())])
            .unwrap()
            .filter(Predicate::simple("id", Operator::Equal, 3i64));
        let (sql, _) = WRITER.render_update(&update).unwrap();
        assert_eq!(sql, r#"UPDATE users SET "age" = $1, "name" = $2 WHERE "id" = $3"#);
    }

    #[test]
    fn shared_writer_restarts() {
        let select = Select::new("users").filter(Predicate::simple("id", Operator::Equal, 1i64));
        let (first, _) = WRITER.render_select(&select).unwrap();
        let (second, _) = WRITER.render_select(&select).unwrap();
        assert_eq!(first, r#"SELECT * FROM "users" WHERE "id" = $1"#);
        assert_eq!(first, second);

        let mut context = Context::default();
        assert_eq!(WRITER.next_placeholder(&mut context), "$1");
        assert_eq!(WRITER.next_placeholder(&mut context), "$2");
        context.reset();
        assert_eq!(WRITER.next_placeholder(&mut context), "$1");
    }

    #[test]
    fn quoted_identifiers() {
        let (sql, _) = WRITER
            .render_select(&Select::new(r#"odd"name"#).columns(["a.b"]))
            .unwrap();
        assert_eq!(sql, r#"SELECT "a"."b" FROM "odd""name""#);
    }
}
