use crate::{canonical, check_placeholders};
use clause_core::{Operator, Predicate, Select, SqlWriter, Value};

pub fn subqueries(writer: &dyn SqlWriter) {
    // Scalar subquery
    let roles = Select::new("roles")
        .columns(["id"])
        .filter(Predicate::simple("roles.id", Operator::Equal, 3i64));
    let select =
        Select::new("users").filter(Predicate::subquery("roles_id", Operator::Equal, roles));
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the scalar subquery");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT * FROM `users` WHERE `roles_id` = (SELECT `id` FROM `roles` WHERE `roles`.`id` = ?)"
    );
    assert_eq!(args, [Value::Int64(Some(3))]);

    // Values before, inside and after the subqueries keep the written order
    let banned = Select::new("banned_users")
        .columns(["user_id"])
        .filter(Predicate::simple("reason", Operator::Equal, "spam"));
    let orders = Select::new("orders")
        .filter(Predicate::is_in("status", ["open", "late"]))
        .limit(1);
    let select = Select::new("users")
        .filter(Predicate::simple("active", Operator::Equal, true))
        .filter(Predicate::not_in_subquery("id", banned))
        .filter(Predicate::between("age", 20i64, 30i64))
        .filter(Predicate::exists(orders))
        .limit(50);
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the nested subqueries");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT * FROM `users` WHERE `active` = ? AND EXISTS (SELECT * FROM `orders` WHERE `status` IN(?,?) LIMIT ?) AND `id` NOT IN (SELECT `user_id` FROM `banned_users` WHERE `reason` = ?) AND `age` BETWEEN ? AND ? LIMIT ?"
    );
    assert_eq!(
        args,
        [
            Value::Boolean(Some(true)),
            Value::Varchar(Some("open".into())),
            Value::Varchar(Some("late".into())),
            Value::Int64(Some(1)),
            Value::Varchar(Some("spam".into())),
            Value::Int64(Some(20)),
            Value::Int64(Some(30)),
            Value::Int64(Some(50)),
        ]
    );

    // Two levels deep
    let inner = Select::new("teams")
        .columns(["id"])
        .filter(Predicate::simple("name", Operator::Equal, "core"));
    let middle = Select::new("members")
        .columns(["user_id"])
        .filter(Predicate::in_subquery("team_id", inner))
        .filter(Predicate::simple("since", Operator::GreaterEqual, 2020i64));
    let select = Select::new("users")
        .columns(["name"])
        .filter(Predicate::in_subquery("id", middle))
        .filter(Predicate::not_exists(Select::new("bans")));
    let (sql, args) = writer
        .render_select(&select)
        .expect("Failed to render the deep subquery");
    check_placeholders(&sql, &args);
    assert_eq!(
        canonical(writer, &sql),
        "SELECT `name` FROM `users` WHERE NOT EXISTS (SELECT * FROM `bans`) AND `id` IN (SELECT `user_id` FROM `members` WHERE `since` >= ? AND `team_id` IN (SELECT `id` FROM `teams` WHERE `name` = ?))"
    );
    assert_eq!(
        args,
        [
            Value::Int64(Some(2020)),
            Value::Varchar(Some("core".into()))
        ]
    );
}
