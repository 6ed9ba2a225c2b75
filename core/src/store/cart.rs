use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::models::{CartItem, NewCartItem};
use crate::store::{CartClearer, StoreError};

#[derive(Clone, Debug)]
pub struct CartStore {
    db_pool: Pool,
}

const CART_COLUMNS: &str = "cart_item_id, user_id, course_id, price, quantity, added_at";

impl CartStore {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }

    pub async fn add_item(&self, item: &NewCartItem) -> Result<CartItem, StoreError> {
        let client = self.db_pool.get().await?;

        let row = client.query_one(
            &format!(
                "INSERT INTO cart_items (user_id, course_id, price, quantity)
                 VALUES ($1, $2, $3, $4)
                 RETURNING {}",
                CART_COLUMNS
            ),
            &[&item.user_id, &item.course_id, &item.price, &item.quantity],
        ).await?;

        Ok(cart_item(&row)?)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<CartItem>, StoreError> {
        let client = self.db_pool.get().await?;

        let rows = client.query(
            &format!("SELECT {} FROM cart_items WHERE user_id = $1 ORDER BY added_at, cart_item_id", CART_COLUMNS),
            &[&user_id],
        ).await?;

        rows.iter().map(cart_item).collect::<Result<_, _>>().map_err(StoreError::from)
    }

    /// Returns false when no line item has that id.
    pub async fn remove_item(&self, cart_item_id: i64) -> Result<bool, StoreError> {
        let client = self.db_pool.get().await?;

        let removed = client.execute(
            "DELETE FROM cart_items WHERE cart_item_id = $1",
            &[&cart_item_id],
        ).await?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl CartClearer for CartStore {
    async fn clear_cart(&self, user_id: i64) -> Result<u64, StoreError> {
        let client = self.db_pool.get().await?;

        let removed = client.execute(
            "DELETE FROM cart_items WHERE user_id = $1",
            &[&user_id],
        ).await?;

        Ok(removed)
    }
}

fn cart_item(row: &Row) -> Result<CartItem, tokio_postgres::Error> {
    Ok(CartItem {
        cart_item_id: row.try_get("cart_item_id")?,
        user_id: row.try_get("user_id")?,
        course_id: row.try_get("course_id")?,
        price: row.try_get("price")?,
        quantity: row.try_get("quantity")?,
        added_at: row.try_get("added_at")?,
    })
}
