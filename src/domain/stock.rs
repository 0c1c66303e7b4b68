//! Stock rules shared by every `ProductRepository` adapter.

use uuid::Uuid;

use super::errors::DomainError;
use super::product::{Product, ProductQuantity};

/// Fails with `ProductsNotFound` unless exactly one product was loaded per
/// requested id. Duplicate ids in the request therefore also fail.
pub fn ensure_all_found(requested: &[Uuid], found: &[Product]) -> Result<(), DomainError> {
    if requested.len() != found.len() {
        return Err(DomainError::ProductsNotFound);
    }
    Ok(())
}

/// Applies the requested decrements to the loaded products.
///
/// A request equal to the remaining stock is rejected: stock must stay above
/// the ordered quantity, not merely cover it. The whole batch is validated
/// before it is returned, so callers persist either every update or none.
pub fn decrement_stock(
    current: Vec<Product>,
    requested: &[ProductQuantity],
) -> Result<Vec<Product>, DomainError> {
    current
        .into_iter()
        .map(|mut product| {
            let wanted = requested
                .iter()
                .find(|r| r.id == product.id)
                .ok_or(DomainError::ProductNotFound)?;

            if wanted.quantity < 0 {
                return Err(DomainError::InvalidInput(format!(
                    "quantity for product {} must not be negative",
                    product.id
                )));
            }
            if wanted.quantity >= product.quantity {
                return Err(DomainError::InsufficientStock);
            }

            product.quantity -= wanted.quantity;
            Ok(product)
        })
        .collect()
}
