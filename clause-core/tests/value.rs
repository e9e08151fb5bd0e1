#[cfg(test)]
mod tests {
    use clause_core::{AsValue, IntoRow, Record, Value, sorted_columns};
    use rust_decimal::Decimal;
    use std::{
        borrow::Cow,
        collections::{BTreeMap, HashMap},
        rc::Rc,
        sync::Arc,
    };
    use time::{Date, Month, Time};
    use uuid::Uuid;

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::default(), Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int32(None).is_null());
        assert!(!Value::Int32(Some(0)).is_null());
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        let var: bool = AsValue::try_from_value(val).unwrap();
        assert!(var);
        assert!(bool::try_from_value(Value::Int8(Some(1))).is_err());
    }

    #[test]
    fn value_integers() {
        assert_eq!(Value::from(-3i8), Value::Int8(Some(-3)));
        assert_eq!(Value::from(300i16), Value::Int16(Some(300)));
        assert_eq!(Value::from(42i32), Value::Int32(Some(42)));
        assert_eq!(Value::from(1i64 << 40), Value::Int64(Some(1 << 40)));
        assert_eq!(Value::from(7u8), Value::UInt8(Some(7)));
        assert_eq!(Value::from(7u16), Value::UInt16(Some(7)));
        assert_eq!(Value::from(7u32), Value::UInt32(Some(7)));
        assert_eq!(Value::from(u64::MAX), Value::UInt64(Some(u64::MAX)));
        assert_eq!(i64::try_from_value(Value::Int64(Some(5))).unwrap(), 5);
        assert!(i64::try_from_value(Value::Int32(Some(5))).is_err());
        assert!(i32::try_from_value(Value::Int32(None)).is_err());
    }

    #[test]
    fn value_floats_and_decimal() {
        assert_eq!(Value::from(1.5f32), Value::Float32(Some(1.5)));
        assert_eq!(Value::from(2.25f64), Value::Float64(Some(2.25)));
        let decimal = Decimal::new(12345, 2);
        assert_eq!(Value::from(decimal), Value::Decimal(Some(decimal)));
        assert_eq!(
            Decimal::try_from_value(Value::Decimal(Some(decimal))).unwrap(),
            decimal
        );
    }

    #[test]
    fn value_strings() {
        assert_eq!(Value::from("alice"), Value::Varchar(Some("alice".into())));
        assert_eq!(
            Value::from(String::from("bob")),
            Value::Varchar(Some("bob".into()))
        );
        assert_eq!(
            Value::from(Cow::Borrowed("carol")),
            Value::Varchar(Some("carol".into()))
        );
        let s: String = AsValue::try_from_value(Value::Varchar(Some("dave".into()))).unwrap();
        assert_eq!(s, "dave");
        assert!(<&str>::try_from_value(Value::Varchar(Some("x".into()))).is_err());
    }

    #[test]
    fn value_blob() {
        let bytes: &[u8] = &[1, 2, 3];
        assert_eq!(
            Value::from(bytes),
            Value::Blob(Some(vec![1, 2, 3].into_boxed_slice()))
        );
    }

    #[test]
    fn value_time_and_uuid() {
        let date = Date::from_calendar_date(2024, Month::March, 9).unwrap();
        assert_eq!(Value::from(date), Value::Date(Some(date)));
        let time = Time::from_hms(12, 30, 0).unwrap();
        assert_eq!(Value::from(time), Value::Time(Some(time)));
        let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(Value::from(uuid), Value::Uuid(Some(uuid)));
        assert_eq!(Value::from(uuid).type_name(), "UUID");
    }

    #[test]
    fn value_wrappers() {
        assert_eq!(Value::from(Some(3i32)), Value::Int32(Some(3)));
        assert_eq!(Value::from(None::<i32>), Value::Int32(None));
        assert_eq!(Value::from(Box::new(4u8)), Value::UInt8(Some(4)));
        assert_eq!(Value::from(Rc::new(5u16)), Value::UInt16(Some(5)));
        assert_eq!(Value::from(Arc::new(6u32)), Value::UInt32(Some(6)));
        let v: Option<i32> = AsValue::try_from_value(Value::Null).unwrap();
        assert_eq!(v, None);
        let v: Option<i32> = AsValue::try_from_value(Value::Int32(Some(9))).unwrap();
        assert_eq!(v, Some(9));
        assert!(Value::Int32(Some(1)).same_type(&Value::Int32(None)));
        assert!(!Value::Int32(Some(1)).same_type(&Value::Int64(Some(1))));
    }

    #[test]
    fn rows_from_payloads() {
        let row = [("name", Value::from("alice")), ("age", 30i32.into())]
            .into_row()
            .unwrap();
        assert_eq!(sorted_columns(&row), ["age", "name"]);

        let row = BTreeMap::from([("b", 1i32), ("a", 2i32)]).into_row().unwrap();
        assert_eq!(row.get("a"), Some(&Value::Int32(Some(2))));

        let row = HashMap::from([("z".to_string(), true)]).into_row().unwrap();
        assert_eq!(sorted_columns(&row), ["z"]);

        let error = vec![("id", 1i32), ("id", 2i32)].into_row().unwrap_err();
        assert!(format!("{:#}", error).contains("`id`"));
    }

    #[test]
    fn rows_from_record() {
        struct User {
            name: String,
            age: u32,
        }
        impl Record for User {
            fn row(&self) -> Vec<(&'static str, Value)> {
                vec![("name", self.name.clone().into()), ("age", self.age.into())]
            }
        }
        let user = User {
            name: "eve".into(),
            age: 41,
        };
        let row = (&user).into_row().unwrap();
        assert_eq!(sorted_columns(&row), ["age", "name"]);
        assert_eq!(row["age"], Value::UInt32(Some(41)));
    }
}
