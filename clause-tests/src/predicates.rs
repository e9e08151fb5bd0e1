use crate::{canonical, check_placeholders};
use clause_core::{Join, Operator, Predicate, Select, SqlWriter, Value};

pub fn predicates(writer: &dyn SqlWriter) {
    // Kinds are written simple first, then IN, NOT IN, BETWEEN, NOT BETWEEN, groups
    let select = Select::new("users")
        .filter(Predicate::group([
            Predicate::simple("role", Operator::Equal, "admin"),
            Predicate::simple("role", Operator::Equal, "owner").or(),
        ]))
        .filter(Predicate::between("age", 18i64, 65i64))
        .filter(Predicate::is_in("name", ["alice", "bob"]))
        .filter(Predicate::simple("active", Operator::Equal, true));
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the mixed predicates");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT * FROM `users` WHERE `active` = ? AND `name` IN(?,?) AND `age` BETWEEN ? AND ? AND (`role` = ? OR `role` = ?)"
    );
    assert_eq!(
        args,
        [
            Value::Boolean(Some(true)),
            Value::Varchar(Some("alice".into())),
            Value::Varchar(Some("bob".into())),
            Value::Int64(Some(18)),
            Value::Int64(Some(65)),
            Value::Varchar(Some("admin".into())),
            Value::Varchar(Some("owner".into())),
        ]
    );

    // Negated kinds, the OR of the predicate sorted first has nothing to join
    let select = Select::new("products")
        .columns(["sku"])
        .filter(Predicate::not_between("price", 10u32, 20u32))
        .filter(Predicate::not_in("category", ["toys"]).or());
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the negated predicates");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT `sku` FROM `products` WHERE `category` NOT IN(?) AND `price` NOT BETWEEN ? AND ?"
    );
    assert_eq!(args.len(), 3);

    // Joins and qualified names
    let select = Select::new("users")
        .columns(["users.id", "users.name", "orders.total"])
        .join(Join::inner("users", "orders", "id", "user_id"))
        .filter(Predicate::simple("orders.total", Operator::Greater, 100i64));
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the join");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT `users`.`id`,`users`.`name`,`orders`.`total` FROM `users` INNER JOIN `orders` ON `users`.`id` = `orders`.`user_id` WHERE `orders`.`total` > ?"
    );
    assert_eq!(args, [Value::Int64(Some(100))]);

    // Aggregates
    let select = Select::new("users")
        .columns(["role", "COUNT(*) as total"])
        .join(Join::left("users", "roles", "role_id", "id"))
        .group_by(["role", "roles.name"]);
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the aggregate");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT `role`,COUNT(*) as total FROM `users` LEFT JOIN `roles` ON `users`.`role_id` = `roles`.`id` GROUP BY `role`,`roles`.`name`"
    );
    assert!(args.is_empty());
}
