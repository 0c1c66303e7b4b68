//! In-memory port implementations for service tests. Clones share state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bigdecimal::BigDecimal;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrderedProduct, Order, OrderedProduct};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::{NewProduct, Product, ProductQuantity};
use crate::domain::stock::{decrement_stock, ensure_all_found};

#[derive(Clone, Default)]
pub struct InMemoryCustomers {
    rows: Arc<Mutex<Vec<Customer>>>,
}

impl InMemoryCustomers {
    pub fn with(&self, name: &str, email: &str) -> Customer {
        self.create(NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
        })
        .expect("in-memory create")
    }
}

impl CustomerRepository for InMemoryCustomers {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.email == email).cloned())
    }

    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let now = Utc::now();
        let created = Customer {
            id: Uuid::new_v4(),
            name: customer.name,
            email: customer.email,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProducts {
    rows: Arc<Mutex<Vec<Product>>>,
}

impl InMemoryProducts {
    pub fn with(&self, name: &str, price: i64, quantity: i32) -> Product {
        self.create(NewProduct {
            name: name.to_string(),
            price: BigDecimal::from(price),
            quantity,
        })
        .expect("in-memory create")
    }

    pub fn stock_of(&self, id: Uuid) -> i32 {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|p| p.id == id)
            .map(|p| p.quantity)
            .expect("product exists")
    }

    pub fn set_price(&self, id: Uuid, price: i64) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(p) = rows.iter_mut().find(|p| p.id == id) {
            p.price = BigDecimal::from(price);
        }
    }
}

impl ProductRepository for InMemoryProducts {
    fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let now = Utc::now();
        let created = Product {
            id: Uuid::new_v4(),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.name == name).cloned())
    }

    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let rows = self.rows.lock().unwrap();
        let found: Vec<Product> = rows.iter().filter(|p| ids.contains(&p.id)).cloned().collect();
        ensure_all_found(ids, &found)?;
        Ok(found)
    }

    fn update_quantity(&self, products: &[ProductQuantity]) -> Result<Vec<Product>, DomainError> {
        let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let current = self.find_all_by_id(&ids)?;
        let updated = decrement_stock(current, products)?;

        let mut rows = self.rows.lock().unwrap();
        for product in &updated {
            if let Some(row) = rows.iter_mut().find(|r| r.id == product.id) {
                row.quantity = product.quantity;
                row.updated_at = Utc::now();
            }
        }
        Ok(updated)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOrders {
    rows: Arc<Mutex<HashMap<Uuid, Order>>>,
}

impl InMemoryOrders {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl OrderRepository for InMemoryOrders {
    fn create(
        &self,
        customer: Customer,
        products: Vec<NewOrderedProduct>,
    ) -> Result<Order, DomainError> {
        let now = Utc::now();
        let order_id = Uuid::new_v4();
        let order = Order {
            id: order_id,
            customer,
            order_products: products
                .into_iter()
                .map(|p| OrderedProduct {
                    id: Uuid::new_v4(),
                    order_id,
                    product_id: p.product_id,
                    price: p.price,
                    quantity: p.quantity,
                })
                .collect(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(order_id, order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }
}

/// Order store whose writes always fail, for exercising partial failures.
pub struct BrokenOrders;

impl OrderRepository for BrokenOrders {
    fn create(&self, _: Customer, _: Vec<NewOrderedProduct>) -> Result<Order, DomainError> {
        Err(DomainError::Internal("connection reset".to_string()))
    }

    fn find_by_id(&self, _: Uuid) -> Result<Option<Order>, DomainError> {
        Err(DomainError::Internal("connection reset".to_string()))
    }
}
