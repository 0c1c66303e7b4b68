use bigdecimal::BigDecimal;
use log::{info, warn};

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product};

const PRICE_SCALE: i64 = 2;

pub struct CreateProductService<P> {
    products: P,
}

impl<P: ProductRepository> CreateProductService<P> {
    pub fn new(products: P) -> Self {
        Self { products }
    }

    pub fn execute(&self, product: NewProduct) -> Result<Product, DomainError> {
        let name = product.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("product name is required".to_string()));
        }
        if product.price < BigDecimal::from(0) {
            return Err(DomainError::InvalidInput(
                "product price must not be negative".to_string(),
            ));
        }
        // Prices are stored as NUMERIC(10, 2); extra digits would be rounded away.
        if product.price.with_scale(PRICE_SCALE) != product.price {
            return Err(DomainError::InvalidInput(format!(
                "product price must have at most {} decimal places",
                PRICE_SCALE
            )));
        }
        if product.quantity < 0 {
            return Err(DomainError::InvalidInput(
                "product quantity must not be negative".to_string(),
            ));
        }

        if self.products.find_by_name(name)?.is_some() {
            warn!("product rejected: name {} already taken", name);
            return Err(DomainError::ProductNameTaken);
        }

        let created = self.products.create(NewProduct {
            name: name.to_string(),
            price: product.price,
            quantity: product.quantity,
        })?;
        info!("product {} created with {} unit(s)", created.id, created.quantity);
        Ok(created)
    }
}
