use diesel::prelude::*;
use log::debug;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrderedProduct, Order, OrderedProduct};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, orders, orders_products};

use super::models::{CustomerRow, NewOrderRow, NewOrderedProductRow, OrderRow, OrderedProductRow};

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(
        &self,
        customer: Customer,
        products: Vec<NewOrderedProduct>,
    ) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order
            let order = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: Uuid::new_v4(),
                    customer_id: customer.id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            // 2. Insert the line items with their snapshot prices
            let new_lines: Vec<NewOrderedProductRow> = products
                .into_iter()
                .zip(0..)
                .map(|(p, position)| NewOrderedProductRow {
                    id: Uuid::new_v4(),
                    order_id: order.id,
                    product_id: p.product_id,
                    position,
                    price: p.price,
                    quantity: p.quantity,
                })
                .collect();
            let mut lines: Vec<OrderedProductRow> = diesel::insert_into(orders_products::table)
                .values(&new_lines)
                .returning(OrderedProductRow::as_returning())
                .get_results(conn)?;
            // RETURNING does not promise insertion order.
            lines.sort_by_key(|l| l.position);
            debug!("inserted order {} with {} line(s)", order.id, lines.len());

            Ok(Order {
                id: order.id,
                customer,
                order_products: lines.into_iter().map(OrderedProduct::from).collect(),
                created_at: order.created_at,
                updated_at: order.updated_at,
            })
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let found = orders::table
            .inner_join(customers::table)
            .filter(orders::id.eq(id))
            .select((OrderRow::as_select(), CustomerRow::as_select()))
            .first::<(OrderRow, CustomerRow)>(&mut conn)
            .optional()?;

        let Some((order, customer)) = found else {
            return Ok(None);
        };

        let lines = OrderedProductRow::belonging_to(&order)
            .select(OrderedProductRow::as_select())
            .order(orders_products::position.asc())
            .load(&mut conn)?;

        Ok(Some(Order {
            id: order.id,
            customer: customer.into(),
            order_products: lines.into_iter().map(OrderedProduct::from).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }))
    }
}
