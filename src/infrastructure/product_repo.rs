use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::debug;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product, ProductQuantity};
use crate::domain::stock::{decrement_stock, ensure_all_found};
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};

#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn load_all(conn: &mut PgConnection, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
    let rows = products::table
        .filter(products::id.eq_any(ids))
        .select(ProductRow::as_select())
        .load(conn)?;
    let found: Vec<Product> = rows.into_iter().map(Product::from).collect();

    ensure_all_found(ids, &found)?;
    Ok(found)
}

impl ProductRepository for DieselProductRepository {
    fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(products::table)
            .values(&NewProductRow {
                id: Uuid::new_v4(),
                name: product.name,
                price: product.price,
                quantity: product.quantity,
            })
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)?;
        debug!("inserted product {}", row.id);

        Ok(row.into())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .filter(products::name.eq(name))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;
        load_all(&mut conn, ids)
    }

    fn update_quantity(&self, requested: &[ProductQuantity]) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;
        let ids: Vec<Uuid> = requested.iter().map(|p| p.id).collect();

        // Read and write share one transaction so a failing row leaves the
        // batch unwritten. Rows are not locked: concurrent orders can still
        // read the same stock.
        conn.transaction::<_, DomainError, _>(|conn| {
            let current = load_all(conn, &ids)?;
            let updated = decrement_stock(current, requested)?;

            let now = Utc::now();
            for product in &updated {
                diesel::update(products::table.find(product.id))
                    .set((
                        products::quantity.eq(product.quantity),
                        products::updated_at.eq(now),
                    ))
                    .execute(conn)?;
                debug!("product {} stock now {}", product.id, product.quantity);
            }

            Ok(updated)
        })
    }
}
