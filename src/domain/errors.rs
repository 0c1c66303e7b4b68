use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer does not exist")]
    CustomerNotFound,
    #[error("One or more products were not found")]
    ProductsNotFound,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Quantity of product in stock is insufficient")]
    InsufficientStock,
    #[error("Order not found")]
    OrderNotFound,
    #[error("This e-mail is already in use")]
    EmailAlreadyInUse,
    #[error("A product with this name already exists")]
    ProductNameTaken,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::CustomerNotFound
                | DomainError::ProductsNotFound
                | DomainError::ProductNotFound
                | DomainError::OrderNotFound
        )
    }
}
