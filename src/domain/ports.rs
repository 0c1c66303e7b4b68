use uuid::Uuid;

use super::customer::{Customer, NewCustomer};
use super::errors::DomainError;
use super::order::{NewOrderedProduct, Order};
use super::product::{NewProduct, Product, ProductQuantity};

pub trait CustomerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;
    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn create(&self, product: NewProduct) -> Result<Product, DomainError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;

    /// Loads every product in `ids`. Fails with `ProductsNotFound` unless one
    /// product comes back per requested id.
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;

    /// Decrements stock for each requested product and returns the updated
    /// records. Nothing is written if any product fails validation.
    fn update_quantity(&self, products: &[ProductQuantity]) -> Result<Vec<Product>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn create(
        &self,
        customer: Customer,
        products: Vec<NewOrderedProduct>,
    ) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}
