//! Sample record collections as served by a remote source.

/// Three food products, ids 10, 20 and 30.
pub const PRODUCTS: &str = r#"[
  {"id": 10, "name": "Pizza slice", "icon": "fas fa-pizza-slice"},
  {"id": 20, "name": "Ice cream", "icon": "fas fa-ice-cream"},
  {"id": 30, "name": "Cheese", "icon": "fas fa-cheese"}
]"#;

/// The single-product collection used throughout the accessor tests.
pub const PIZZA_ONLY: &str =
    r#"[{"id":10,"name":"Pizza slice","icon":"fas fa-pizza-slice"}]"#;

/// Two customers, ids 1 and 2.
pub const CUSTOMERS: &str = r#"[
  {"id": 1, "name": "Ada Lovelace"},
  {"id": 2, "name": "Grace Hopper"}
]"#;

/// Records sharing an id, in a deliberately unsorted order.
pub const DUPLICATE_IDS: &str = r#"[
  {"id": 5, "name": "first five"},
  {"id": 3, "name": "three"},
  {"id": 5, "name": "second five"}
]"#;

/// Products where the second one has an empty icon.
pub const PRODUCTS_WITH_INVALID: &str = r#"[
  {"id": 10, "name": "Pizza slice", "icon": "fas fa-pizza-slice"},
  {"id": 11, "name": "Mystery", "icon": ""}
]"#;
