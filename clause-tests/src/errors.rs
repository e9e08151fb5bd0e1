use clause_core::{Delete, Insert, Operator, Predicate, Select, SqlWriter, Statement, Update, Value};

pub fn errors(writer: &dyn SqlWriter) {
    crate::silent_logs! {
        assert!(
            writer.render(&Statement::Empty).is_err(),
            "An empty statement must not render"
        );
        assert!(
            writer.render_insert(&Insert::new("users")).is_err(),
            "An insert without rows must not render"
        );
        let insert = Insert::new("users")
            .row([("a", 1i64), ("b", 2i64)])
            .expect("Failed to build the first row")
            .row([("a", 1i64)])
            .expect("Failed to build the second row");
        assert!(
            writer.render_insert(&insert).is_err(),
            "Rows with different columns must not render"
        );
        let update = Update::new("users", Vec::<(&str, Value)>::new())
            .expect("Failed to build the update");
        assert!(
            writer.render_update(&update).is_err(),
            "An update without columns must not render"
        );
        let select = Select::new("users").filter(Predicate::is_in("id", Vec::<i64>::new()));
        assert!(
            writer.render_select(&select).is_err(),
            "An empty IN list must not render"
        );
        let nested = Select::new("users").filter(Predicate::in_subquery(
            "id",
            Select::new("admins").filter(Predicate::simple("", Operator::Exists, 1i64)),
        ));
        assert!(
            writer.render(&nested.into()).is_err(),
            "EXISTS over a value must not render"
        );
        let delete = Delete::new("users").filter(Predicate::not_in("id", Vec::<i64>::new()));
        assert!(
            writer.render_delete(&delete).is_err(),
            "An empty NOT IN list must not render"
        );
    }
}
