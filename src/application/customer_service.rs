use log::{info, warn};

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

pub struct CreateCustomerService<C> {
    customers: C,
}

impl<C: CustomerRepository> CreateCustomerService<C> {
    pub fn new(customers: C) -> Self {
        Self { customers }
    }

    pub fn execute(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let name = customer.name.trim();
        let email = customer.email.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("customer name is required".to_string()));
        }
        if email.is_empty() {
            return Err(DomainError::InvalidInput("customer e-mail is required".to_string()));
        }

        if self.customers.find_by_email(email)?.is_some() {
            warn!("customer rejected: e-mail {} already in use", email);
            return Err(DomainError::EmailAlreadyInUse);
        }

        let created = self.customers.create(NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
        })?;
        info!("customer {} created", created.id);
        Ok(created)
    }
}
