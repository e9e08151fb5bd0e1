use crate::{canonical, check_placeholders};
use clause_core::{
    Delete, Insert, Operator, Ordered, Predicate, Record, Select, SqlWriter, Update, Value,
};
use rust_decimal::Decimal;
use time::macros::date;
use uuid::Uuid;

struct User {
    id: Uuid,
    name: String,
    email: Option<String>,
    balance: Decimal,
    born: time::Date,
}

impl Record for User {
    fn row(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", self.id.into()),
            ("name", self.name.clone().into()),
            ("email", self.email.clone().into()),
            ("balance", self.balance.into()),
            ("born", self.born.into()),
        ]
    }
}

pub fn users(writer: &dyn SqlWriter) {
    let alice = User {
        id: Uuid::parse_str("b8a2f1de-4b8e-4a4c-9a53-3f6f0a8f2c11").expect("Invalid uuid"),
        name: "alice".into(),
        email: Some("alice@example.com".into()),
        balance: Decimal::new(1050, 2),
        born: date!(1990 - 04 - 12),
    };
    let bob = User {
        id: Uuid::parse_str("0e1d7c57-58f4-4f0d-8d6e-2b0bd2f8f2a4").expect("Invalid uuid"),
        name: "bob".into(),
        email: None,
        balance: Decimal::ZERO,
        born: date!(1985 - 11 - 30),
    };

    // Paginated projection
    let select = Select::new("users")
        .columns(["id", "email", "name"])
        .limit(10)
        .offset(20);
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the paginated select");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT `id`,`email`,`name` FROM `users` LIMIT ? OFFSET ?"
    );
    assert_eq!(args, [Value::Int64(Some(10)), Value::Int64(Some(20))]);

    // Insert records
    let insert = Insert::from_rows("users", [&alice, &bob]).expect("Failed to build the insert");
    let (sql, args) = writer
        .render_insert(&insert)
        .expect("Failed to render the insert");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "INSERT INTO users(`balance`,`born`,`email`,`id`,`name`) VALUES(?,?,?,?,?),(?,?,?,?,?)"
    );
    assert_eq!(
        args,
        [
            Value::Decimal(Some(Decimal::new(1050, 2))),
            Value::Date(Some(date!(1990 - 04 - 12))),
            Value::Varchar(Some("alice@example.com".into())),
            Value::Uuid(Some(alice.id)),
            Value::Varchar(Some("alice".into())),
            Value::Decimal(Some(Decimal::ZERO)),
            Value::Date(Some(date!(1985 - 11 - 30))),
            Value::Varchar(None),
            Value::Uuid(Some(bob.id)),
            Value::Varchar(Some("bob".into())),
        ]
    );

    // Update one
    let update = Update::new(
        "users",
        [("name", Value::from("alicia")), ("balance", Decimal::ONE.into())],
    )
    .expect("Failed to build the update")
    .filter(Predicate::simple("id", Operator::Equal, alice.id));
    let (sql, args) = writer
        .render_update(&update)
        .expect("Failed to render the update");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "UPDATE users SET `balance` = ?, `name` = ? WHERE `id` = ?"
    );
    assert_eq!(
        args,
        [
            Value::Decimal(Some(Decimal::ONE)),
            Value::Varchar(Some("alicia".into())),
            Value::Uuid(Some(alice.id)),
        ]
    );

    // Ordered search
    let select = Select::new("users")
        .columns(["name"])
        .filter(Predicate::simple("name", Operator::NotLike, "%test%"))
        .filter(Predicate::simple("born", Operator::Less, date!(2000 - 01 - 01)))
        .order_by(Ordered::asc("name"))
        .limit(5);
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the ordered select");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT `name` FROM `users` WHERE `name` NOT LIKE ? AND `born` < ? ORDER BY name ASC LIMIT ?"
    );
    assert_eq!(args.len(), 3);

    // Delete one
    let delete = Delete::new("users").filter(Predicate::simple("id", Operator::Equal, bob.id));
    let (sql, args) = writer
        .render_delete(&delete)
        .expect("Failed to render the delete");
    check_placeholders(&sql, &args);
    assert_eq!(canonical(writer, &sql), "DELETE FROM `users` WHERE `id` = ?");
    assert_eq!(args, [Value::Uuid(Some(bob.id))]);
}
