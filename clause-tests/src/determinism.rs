use crate::check_placeholders;
use clause_core::{Insert, Operator, Predicate, Select, SqlWriter, Update, Value};
use std::collections::{BTreeMap, HashMap};

pub fn determinism(writer: &dyn SqlWriter) {
    // Same payload, different construction order
    let forward = Insert::new("events")
        .row([
            ("kind", Value::from("login")),
            ("at", 1i64.into()),
            ("user", 7i64.into()),
        ])
        .expect("Failed to build the forward row");
    let backward = Insert::new("events")
        .row(HashMap::from([
            ("user", Value::from(7i64)),
            ("at", 1i64.into()),
            ("kind", "login".into()),
        ]))
        .expect("Failed to build the backward row");
    let sorted = Insert::new("events")
        .row(BTreeMap::from([
            ("at", Value::from(1i64)),
            ("kind", "login".into()),
            ("user", 7i64.into()),
        ]))
        .expect("Failed to build the sorted row");
    let expected = writer
        .render_insert(&forward)
        .expect("Failed to render the forward insert");
    check_placeholders(&expected.0, &expected.1);
    assert_eq!(
        expected.1,
        [
            Value::Int64(Some(1)),
            Value::Varchar(Some("login".into())),
            Value::Int64(Some(7)),
        ]
    );
    for insert in [&backward, &sorted] {
        let actual = writer
            .render_insert(insert)
            .expect("Failed to render the insert");
        assert_eq!(actual, expected);
    }

    let first = Update::new("events", [("b", 2i64), ("a", 1i64), ("c", 3i64)])
        .expect("Failed to build the update")
        .filter(Predicate::simple("id", Operator::Equal, 5i64));
    let second = Update::new("events", [("c", 3i64), ("b", 2i64), ("a", 1i64)])
        .expect("Failed to build the update")
        .filter(Predicate::simple("id", Operator::Equal, 5i64));
    assert_eq!(
        writer
            .render_update(&first)
            .expect("Failed to render the first update"),
        writer
            .render_update(&second)
            .expect("Failed to render the second update"),
    );

    // Rendering twice restarts numbering and binds the same values again
    let select = Select::new("events")
        .filter(Predicate::is_in("kind", ["login", "logout"]))
        .limit(3);
    let one = writer
        .render_select(&select)
        .expect("Failed to render the select");
    let two = writer
        .render_select(&select)
        .expect("Failed to render the select again");
    check_placeholders(&one.0, &one.1);
    assert_eq!(one, two);
}
