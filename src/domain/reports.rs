//! Join specifications behind the reporting endpoints.
//!
//! Every report is a two-table join described as plain data: which tables,
//! which key pair, which join kind, which columns to project and under which
//! aliases. [`JoinSpec::to_sql`] renders a specification into a single
//! `SELECT`; the aliases line up with the fields of the row types in
//! `crate::models::reports`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    FullOuter,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::FullOuter => "FULL OUTER JOIN",
        }
    }

    /// Left rows without a partner are kept, so right-side columns may be null.
    pub fn keeps_unmatched_left(self) -> bool {
        matches!(self, JoinKind::Left | JoinKind::FullOuter)
    }

    /// Right rows without a partner are kept, so left-side columns may be null.
    pub fn keeps_unmatched_right(self) -> bool {
        matches!(self, JoinKind::FullOuter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub table: &'static str,
    pub name: &'static str,
}

impl Column {
    pub const fn new(table: &'static str, name: &'static str) -> Self {
        Self { table, name }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr {
    Column(Column),
    /// First non-null of two columns; used for the shared key of a full
    /// outer join.
    Coalesce(Column, Column),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub expr: Expr,
    pub alias: &'static str,
}

impl Field {
    fn to_sql(self) -> String {
        match self.expr {
            Expr::Column(c) => format!("{c} AS {}", self.alias),
            Expr::Coalesce(a, b) => format!("COALESCE({a}, {b}) AS {}", self.alias),
        }
    }
}

const fn field(table: &'static str, name: &'static str, alias: &'static str) -> Field {
    Field {
        expr: Expr::Column(Column::new(table, name)),
        alias,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`, compared exactly; `"Completed"` does not match
    /// `"completed"`.
    Equals(Column, &'static str),
}

impl Filter {
    fn to_sql(self) -> String {
        match self {
            Filter::Equals(c, value) => format!("{c} = '{value}'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinSpec {
    /// Report name; also the route segment.
    pub name: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub kind: JoinKind,
    pub on: (Column, Column),
    pub fields: &'static [Field],
    pub filter: Option<Filter>,
}

impl JoinSpec {
    pub fn to_sql(&self) -> String {
        let projection = self
            .fields
            .iter()
            .map(|f| f.to_sql())
            .collect::<Vec<_>>()
            .join(", ");
        let (l, r) = self.on;
        let mut sql = format!(
            "SELECT {projection} FROM {} {} {} ON {l} = {r}",
            self.left,
            self.kind.keyword(),
            self.right
        );
        if let Some(filter) = self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql());
        }
        sql.push_str(&format!(" ORDER BY {}.id, {}.id", self.left, self.right));
        sql
    }

    /// Aliases of the projected fields that can come back null under this
    /// join kind.
    pub fn nullable_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| match f.expr {
                Expr::Column(c) if c.table == self.right => self.kind.keeps_unmatched_left(),
                Expr::Column(c) if c.table == self.left => self.kind.keeps_unmatched_right(),
                _ => false,
            })
            .map(|f| f.alias)
            .collect()
    }
}

const PRODUCTS: &str = "products";
const INVENTORY: &str = "inventory";
const ORDERS: &str = "orders";
const PAYMENTS: &str = "payments";
const CUSTOMERS: &str = "customers";
const SUPPLIERS: &str = "suppliers";
const SHIPMENTS: &str = "shipments";

pub static PRODUCTS_WITH_INVENTORY: JoinSpec = JoinSpec {
    name: "products_with_inventory",
    left: PRODUCTS,
    right: INVENTORY,
    kind: JoinKind::Inner,
    on: (Column::new(PRODUCTS, "id"), Column::new(INVENTORY, "product_id")),
    fields: &[
        field(PRODUCTS, "id", "product_id"),
        field(PRODUCTS, "name", "product_name"),
        field(PRODUCTS, "price", "price"),
        field(INVENTORY, "stock", "stock"),
    ],
    filter: None,
};

pub static ORDERS_WITH_PAYMENTS: JoinSpec = JoinSpec {
    name: "orders_with_payments",
    left: ORDERS,
    right: PAYMENTS,
    kind: JoinKind::Left,
    on: (Column::new(ORDERS, "id"), Column::new(PAYMENTS, "order_id")),
    fields: &[
        field(ORDERS, "id", "order_id"),
        field(ORDERS, "customer_id", "customer_id"),
        field(ORDERS, "total_price", "total_price"),
        field(PAYMENTS, "payment_status", "payment_status"),
        field(PAYMENTS, "payment_method", "payment_method"),
    ],
    filter: None,
};

pub static ORDERS_WITH_CUSTOMERS: JoinSpec = JoinSpec {
    name: "orders_with_customers",
    left: ORDERS,
    right: CUSTOMERS,
    kind: JoinKind::Inner,
    on: (Column::new(ORDERS, "customer_id"), Column::new(CUSTOMERS, "id")),
    fields: &[
        field(ORDERS, "id", "order_id"),
        field(CUSTOMERS, "name", "customer_name"),
        field(CUSTOMERS, "email", "customer_email"),
        field(ORDERS, "total_price", "total_price"),
    ],
    filter: None,
};

// Suppliers carry no product reference; these joins match supplier ids
// against product ids as the source data model does.
pub static SUPPLIERS_WITH_INVENTORY: JoinSpec = JoinSpec {
    name: "suppliers_with_inventory",
    left: SUPPLIERS,
    right: INVENTORY,
    kind: JoinKind::Left,
    on: (Column::new(SUPPLIERS, "id"), Column::new(INVENTORY, "product_id")),
    fields: &[
        field(SUPPLIERS, "name", "supplier_name"),
        field(SUPPLIERS, "contact", "supplier_contact"),
        field(INVENTORY, "product_id", "product_id"),
        field(INVENTORY, "stock", "stock"),
    ],
    filter: None,
};

pub static SHIPMENTS_WITH_ORDERS: JoinSpec = JoinSpec {
    name: "shipments_with_orders",
    left: SHIPMENTS,
    right: ORDERS,
    kind: JoinKind::Inner,
    on: (Column::new(SHIPMENTS, "order_id"), Column::new(ORDERS, "id")),
    fields: &[
        field(SHIPMENTS, "id", "shipment_id"),
        field(SHIPMENTS, "tracking_number", "tracking_number"),
        field(ORDERS, "id", "order_id"),
        field(ORDERS, "total_price", "total_price"),
    ],
    filter: None,
};

pub static CUSTOMERS_WITH_ORDERS: JoinSpec = JoinSpec {
    name: "customers_with_orders",
    left: CUSTOMERS,
    right: ORDERS,
    kind: JoinKind::Left,
    on: (Column::new(CUSTOMERS, "id"), Column::new(ORDERS, "customer_id")),
    fields: &[
        field(CUSTOMERS, "id", "customer_id"),
        field(CUSTOMERS, "name", "customer_name"),
        field(CUSTOMERS, "email", "customer_email"),
        field(ORDERS, "id", "order_id"),
        field(ORDERS, "total_price", "total_price"),
    ],
    filter: None,
};

pub static SUPPLIERS_WITH_PRODUCTS: JoinSpec = JoinSpec {
    name: "suppliers_with_products",
    left: SUPPLIERS,
    right: PRODUCTS,
    kind: JoinKind::Left,
    on: (Column::new(SUPPLIERS, "id"), Column::new(PRODUCTS, "id")),
    fields: &[
        field(SUPPLIERS, "id", "supplier_id"),
        field(SUPPLIERS, "name", "supplier_name"),
        field(PRODUCTS, "name", "product_name"),
        field(PRODUCTS, "price", "price"),
    ],
    filter: None,
};

pub static COMPLETED_PAYMENTS: JoinSpec = JoinSpec {
    name: "completed_payments",
    left: PAYMENTS,
    right: ORDERS,
    kind: JoinKind::Inner,
    on: (Column::new(PAYMENTS, "order_id"), Column::new(ORDERS, "id")),
    fields: &[
        field(PAYMENTS, "id", "payment_id"),
        field(PAYMENTS, "order_id", "order_id"),
        field(PAYMENTS, "payment_method", "payment_method"),
        field(PAYMENTS, "payment_status", "payment_status"),
        field(ORDERS, "total_price", "total_price"),
    ],
    filter: Some(Filter::Equals(
        Column::new(PAYMENTS, "payment_status"),
        "completed",
    )),
};

pub static ORDERS_WITH_SHIPMENTS: JoinSpec = JoinSpec {
    name: "orders_with_shipments",
    left: ORDERS,
    right: SHIPMENTS,
    kind: JoinKind::Left,
    on: (Column::new(ORDERS, "id"), Column::new(SHIPMENTS, "order_id")),
    fields: &[
        field(ORDERS, "id", "order_id"),
        field(ORDERS, "total_price", "total_price"),
        field(SHIPMENTS, "tracking_number", "tracking_number"),
    ],
    filter: None,
};

pub static PAYMENTS_WITH_SHIPMENTS: JoinSpec = JoinSpec {
    name: "payments_with_shipments",
    left: PAYMENTS,
    right: SHIPMENTS,
    kind: JoinKind::Left,
    on: (
        Column::new(PAYMENTS, "order_id"),
        Column::new(SHIPMENTS, "order_id"),
    ),
    fields: &[
        field(PAYMENTS, "id", "payment_id"),
        field(PAYMENTS, "order_id", "order_id"),
        field(PAYMENTS, "payment_method", "payment_method"),
        field(SHIPMENTS, "tracking_number", "tracking_number"),
    ],
    filter: None,
};

pub static PRODUCTS_WITH_INVENTORY_STATUS: JoinSpec = JoinSpec {
    name: "products_with_inventory_status",
    left: PRODUCTS,
    right: INVENTORY,
    kind: JoinKind::FullOuter,
    on: (Column::new(PRODUCTS, "id"), Column::new(INVENTORY, "product_id")),
    fields: &[
        Field {
            expr: Expr::Coalesce(
                Column::new(PRODUCTS, "id"),
                Column::new(INVENTORY, "product_id"),
            ),
            alias: "product_id",
        },
        field(PRODUCTS, "name", "product_name"),
        field(PRODUCTS, "price", "price"),
        field(INVENTORY, "stock", "stock"),
    ],
    filter: None,
};

pub static ORDERS_WITH_PAYMENT_STATUS: JoinSpec = JoinSpec {
    name: "orders_with_payment_status",
    left: ORDERS,
    right: PAYMENTS,
    kind: JoinKind::Left,
    on: (Column::new(ORDERS, "id"), Column::new(PAYMENTS, "order_id")),
    fields: &[
        field(ORDERS, "id", "order_id"),
        field(ORDERS, "total_price", "total_price"),
        field(PAYMENTS, "payment_status", "payment_status"),
    ],
    filter: None,
};

pub static INVENTORY_WITH_SUPPLIERS: JoinSpec = JoinSpec {
    name: "inventory_with_suppliers",
    left: INVENTORY,
    right: SUPPLIERS,
    kind: JoinKind::Inner,
    on: (Column::new(INVENTORY, "product_id"), Column::new(SUPPLIERS, "id")),
    fields: &[
        field(INVENTORY, "id", "inventory_id"),
        field(INVENTORY, "stock", "stock"),
        field(INVENTORY, "product_id", "product_id"),
        field(SUPPLIERS, "name", "supplier_name"),
        field(SUPPLIERS, "contact", "contact"),
    ],
    filter: None,
};

pub static CATALOG: [&JoinSpec; 13] = [
    &PRODUCTS_WITH_INVENTORY,
    &ORDERS_WITH_PAYMENTS,
    &ORDERS_WITH_CUSTOMERS,
    &SUPPLIERS_WITH_INVENTORY,
    &SHIPMENTS_WITH_ORDERS,
    &CUSTOMERS_WITH_ORDERS,
    &SUPPLIERS_WITH_PRODUCTS,
    &COMPLETED_PAYMENTS,
    &ORDERS_WITH_SHIPMENTS,
    &PAYMENTS_WITH_SHIPMENTS,
    &PRODUCTS_WITH_INVENTORY_STATUS,
    &ORDERS_WITH_PAYMENT_STATUS,
    &INVENTORY_WITH_SUPPLIERS,
];
