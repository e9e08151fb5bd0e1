#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    ASC,
    DESC,
}

impl Order {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Order::ASC => "ASC",
            Order::DESC => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordered {
    pub field: String,
    pub order: Order,
}

impl Ordered {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: Order::ASC,
        }
    }
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: Order::DESC,
        }
    }
}
