use tracing::info;

use crate::error::AppError;
use crate::models::{CartItem, NewCartItem};
use crate::store::{CartClearer, CartStore};

#[derive(Clone, Debug)]
pub struct ManageCart {
    cart_store: CartStore,
}

impl ManageCart {
    pub fn new(cart_store: CartStore) -> Self {
        Self { cart_store }
    }

    pub async fn add(&self, item: NewCartItem) -> Result<CartItem, AppError> {
        item.validate()?;
        Ok(self.cart_store.add_item(&item).await?)
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<CartItem>, AppError> {
        Ok(self.cart_store.list_by_user(user_id).await?)
    }

    pub async fn remove(&self, cart_item_id: i64) -> Result<(), AppError> {
        if !self.cart_store.remove_item(cart_item_id).await? {
            return Err(AppError::not_found("Cart item"));
        }
        Ok(())
    }

    pub async fn clear(&self, user_id: i64) -> Result<u64, AppError> {
        let removed = self.cart_store.clear_cart(user_id).await?;
        info!("Cart cleared for user {} ({} items)", user_id, removed);
        Ok(removed)
    }
}
