use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::application::customer_service::CreateCustomerService;
use crate::application::order_service::{CreateOrderService, FindOrderService};
use crate::application::product_service::CreateProductService;
use crate::domain::customer::NewCustomer;
use crate::domain::order::CreateOrderRequest;
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::NewProduct;
use crate::errors::AppError;

// ── Command DTOs ─────────────────────────────────────────────────────────────

/// One unit of work read by the binary, tagged by `"command"`:
///
/// ```json
/// {"command": "create_order", "customer_id": "…", "products": [{"id": "…", "quantity": 2}]}
/// ```
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    CreateCustomer(NewCustomer),
    CreateProduct(NewProduct),
    CreateOrder(CreateOrderRequest),
    FindOrder { id: Uuid },
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(input)?)
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────────────

pub struct Handlers<O, P, C> {
    create_customer: CreateCustomerService<C>,
    create_product: CreateProductService<P>,
    create_order: CreateOrderService<O, P, C>,
    find_order: FindOrderService<O>,
}

impl<O, P, C> Handlers<O, P, C>
where
    O: OrderRepository + Clone,
    P: ProductRepository + Clone,
    C: CustomerRepository + Clone,
{
    pub fn new(orders: O, products: P, customers: C) -> Self {
        Self {
            create_customer: CreateCustomerService::new(customers.clone()),
            create_product: CreateProductService::new(products.clone()),
            create_order: CreateOrderService::new(orders.clone(), products, customers),
            find_order: FindOrderService::new(orders),
        }
    }

    /// Runs `command` and returns the created or loaded record as JSON.
    pub fn handle(&self, command: Command) -> Result<Value, AppError> {
        let value = match command {
            Command::CreateCustomer(c) => serde_json::to_value(self.create_customer.execute(c)?)?,
            Command::CreateProduct(p) => serde_json::to_value(self.create_product.execute(p)?)?,
            Command::CreateOrder(o) => serde_json::to_value(self.create_order.execute(o)?)?,
            Command::FindOrder { id } => serde_json::to_value(self.find_order.execute(id)?)?,
        };
        Ok(value)
    }
}
