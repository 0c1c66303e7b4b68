use log::{info, warn};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{CreateOrderRequest, NewOrderedProduct, Order};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};

/// Places an order: checks the customer, snapshots product prices, takes the
/// units out of stock and stores the order.
///
/// Stock is decremented before the order row is written, so running out of
/// stock aborts the order. The two writes are not atomic: if storing the order
/// fails the decrement stays in place.
pub struct CreateOrderService<O, P, C> {
    orders: O,
    products: P,
    customers: C,
}

impl<O, P, C> CreateOrderService<O, P, C>
where
    O: OrderRepository,
    P: ProductRepository,
    C: CustomerRepository,
{
    pub fn new(orders: O, products: P, customers: C) -> Self {
        Self {
            orders,
            products,
            customers,
        }
    }

    pub fn execute(&self, request: CreateOrderRequest) -> Result<Order, DomainError> {
        let customer = self
            .customers
            .find_by_id(request.customer_id)?
            .ok_or_else(|| {
                warn!("order rejected: customer {} does not exist", request.customer_id);
                DomainError::CustomerNotFound
            })?;

        validate(&request)?;

        let ids: Vec<Uuid> = request.products.iter().map(|p| p.id).collect();
        let products_to_order = self.products.find_all_by_id(&ids)?;

        let ordered: Vec<NewOrderedProduct> = products_to_order
            .into_iter()
            .map(|product| {
                let quantity = request
                    .products
                    .iter()
                    .find(|r| r.id == product.id)
                    .map(|r| r.quantity)
                    .unwrap_or(0);
                NewOrderedProduct {
                    product_id: product.id,
                    price: product.price,
                    quantity,
                }
            })
            .collect();

        self.products
            .update_quantity(&request.products)
            .inspect_err(|e| warn!("order rejected for customer {}: {}", customer.id, e))?;

        let order = self.orders.create(customer, ordered)?;
        info!(
            "order {} created for customer {} with {} line item(s)",
            order.id,
            order.customer.id,
            order.order_products.len()
        );
        Ok(order)
    }
}

fn validate(request: &CreateOrderRequest) -> Result<(), DomainError> {
    if request.products.is_empty() {
        return Err(DomainError::InvalidInput(
            "an order needs at least one product".to_string(),
        ));
    }
    if let Some(p) = request.products.iter().find(|p| p.quantity < 0) {
        return Err(DomainError::InvalidInput(format!(
            "quantity for product {} must not be negative",
            p.id
        )));
    }
    Ok(())
}

pub struct FindOrderService<O> {
    orders: O,
}

impl<O: OrderRepository> FindOrderService<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    pub fn execute(&self, id: Uuid) -> Result<Order, DomainError> {
        self.orders.find_by_id(id)?.ok_or(DomainError::OrderNotFound)
    }
}
