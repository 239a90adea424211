//! # Seed Data
//!
//! Initial table contents. The built-in dataset is a small marketplace
//! (users, products, orders, subscriptions); a JSON document of the form
//! `{"<table>": [{...}, ...]}` can be used instead.

use serde_json::{json, Value};

use super::errors::{StoreError, StoreResult};
use super::record::Record;
use super::Store;

/// Tables served when no seed file is configured
pub const MARKETPLACE_TABLES: [&str; 4] = ["users", "products", "orders", "subscriptions"];

/// Store holding the built-in marketplace dataset
pub fn marketplace() -> StoreResult<Store> {
    Store::new([
        ("users", records(users())),
        ("products", records(products())),
        ("orders", records(orders())),
        ("subscriptions", records(subscriptions())),
    ])
}

/// Build a store from a seed document.
///
/// Every top-level key becomes a table; its value must be an array of
/// objects, each with a unique string `id`.
pub fn from_json(document: Value) -> StoreResult<Store> {
    let Value::Object(tables) = document else {
        return Err(StoreError::invalid_seed(
            "*",
            "seed document must be a JSON object keyed by table name",
        ));
    };

    let mut parsed = Vec::with_capacity(tables.len());
    for (name, rows) in tables {
        let Value::Array(rows) = rows else {
            return Err(StoreError::invalid_seed(&name, "table must be a JSON array"));
        };
        let mut table = Vec::with_capacity(rows.len());
        for (pos, row) in rows.into_iter().enumerate() {
            if !row.is_object() {
                return Err(StoreError::invalid_seed(
                    &name,
                    format!("record at position {} is not an object", pos),
                ));
            }
            table.push(Record::from_value(row));
        }
        parsed.push((name, table));
    }

    Store::new(parsed)
}

fn records(rows: Vec<Value>) -> Vec<Record> {
    rows.into_iter().map(Record::from_value).collect()
}

fn users() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "email": "owner@millo.com",
            "password": "admin123",
            "full_name": "Platform Owner",
            "role": "admin",
            "status": "active",
            "created_at": "2024-01-01T00:00:00.000Z"
        }),
        json!({
            "id": "2",
            "email": "seller1@example.com",
            "password": "seller123",
            "full_name": "John Seller",
            "role": "seller",
            "status": "active",
            "created_at": "2024-01-15T00:00:00.000Z"
        }),
        json!({
            "id": "3",
            "email": "seller2@example.com",
            "password": "seller123",
            "full_name": "Jane Merchant",
            "role": "seller",
            "status": "active",
            "created_at": "2024-02-01T00:00:00.000Z"
        }),
    ]
}

fn products() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "seller_id": "2",
            "name": "Premium Cotton T-Shirt",
            "description": "Comfortable, breathable cotton t-shirt perfect for everyday wear. Made from 100% organic cotton.",
            "price": 29.99,
            "colors": ["Red", "Blue", "Black", "White"],
            "image_url": "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500",
            "category": "Clothing",
            "stock": 50,
            "status": "active",
            "subscription_status": "active",
            "created_at": "2024-02-15T00:00:00.000Z"
        }),
        json!({
            "id": "2",
            "seller_id": "2",
            "name": "Wireless Bluetooth Headphones",
            "description": "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
            "price": 149.99,
            "colors": ["Black", "Silver", "Blue"],
            "image_url": "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
            "category": "Electronics",
            "stock": 25,
            "status": "active",
            "subscription_status": "active",
            "created_at": "2024-03-01T00:00:00.000Z"
        }),
        json!({
            "id": "3",
            "seller_id": "3",
            "name": "Leather Messenger Bag",
            "description": "Genuine leather messenger bag with multiple compartments. Perfect for work or travel.",
            "price": 199.99,
            "colors": ["Brown", "Black"],
            "image_url": "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=500",
            "category": "Accessories",
            "stock": 15,
            "status": "active",
            "subscription_status": "active",
            "created_at": "2024-03-10T00:00:00.000Z"
        }),
        json!({
            "id": "4",
            "seller_id": "3",
            "name": "Smart Fitness Watch",
            "description": "Track your fitness goals with this advanced smartwatch. Heart rate monitor, GPS, and waterproof.",
            "price": 249.99,
            "colors": ["Black", "Rose Gold", "Silver"],
            "image_url": "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
            "category": "Electronics",
            "stock": 30,
            "status": "active",
            "subscription_status": "active",
            "created_at": "2024-03-20T00:00:00.000Z"
        }),
    ]
}

fn orders() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "customer_email": "customer1@example.com",
            "customer_name": "Alice Customer",
            "product_id": "1",
            "product_name": "Premium Cotton T-Shirt",
            "color": "Blue",
            "quantity": 2,
            "price": 29.99,
            "total": 59.98,
            "seller_id": "2",
            "commission": 8.99,
            "seller_amount": 50.99,
            "status": "delivered",
            "shipping_address": "123 Main St, Toronto, ON M5V 1A1",
            "created_at": "2024-03-25T00:00:00.000Z"
        }),
        json!({
            "id": "2",
            "customer_email": "customer2@example.com",
            "customer_name": "Bob Buyer",
            "product_id": "2",
            "product_name": "Wireless Bluetooth Headphones",
            "color": "Black",
            "quantity": 1,
            "price": 149.99,
            "total": 149.99,
            "seller_id": "2",
            "commission": 22.50,
            "seller_amount": 127.49,
            "status": "shipped",
            "shipping_address": "456 Oak Ave, Vancouver, BC V6B 2K9",
            "created_at": "2024-03-28T00:00:00.000Z"
        }),
    ]
}

fn subscriptions() -> Vec<Value> {
    [
        ("1", "2", "1", "2024-02-15", "2024-04-15"),
        ("2", "2", "2", "2024-03-01", "2024-04-01"),
        ("3", "3", "3", "2024-03-10", "2024-04-10"),
        ("4", "3", "4", "2024-03-20", "2024-04-20"),
    ]
    .into_iter()
    .map(|(id, seller_id, product_id, start, next_billing)| {
        json!({
            "id": id,
            "seller_id": seller_id,
            "product_id": product_id,
            "amount": 25,
            "status": "active",
            "start_date": format!("{start}T00:00:00.000Z"),
            "next_billing_date": format!("{next_billing}T00:00:00.000Z"),
            "created_at": format!("{start}T00:00:00.000Z")
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketplace_tables() {
        let store = marketplace().unwrap();
        let names: Vec<_> = store.table_names().collect();
        assert_eq!(names, vec!["orders", "products", "subscriptions", "users"]);
        for name in MARKETPLACE_TABLES {
            assert!(store.contains_table(name));
        }

        let counts = store.summary();
        assert_eq!(
            counts,
            vec![
                ("orders".to_string(), 2),
                ("products".to_string(), 4),
                ("subscriptions".to_string(), 4),
                ("users".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_subscription_dates() {
        let store = marketplace().unwrap();
        let sub = store.get("subscriptions", "3").unwrap();
        assert_eq!(sub.get("start_date"), Some(&json!("2024-03-10T00:00:00.000Z")));
        assert_eq!(
            sub.get("next_billing_date"),
            Some(&json!("2024-04-10T00:00:00.000Z"))
        );
    }

    #[test]
    fn test_from_json() {
        let store = from_json(json!({
            "notes": [{"id": "a", "text": "hi"}, {"id": "7"}],
            "empty": []
        }))
        .unwrap();

        assert!(store.contains_table("notes"));
        assert!(store.contains_table("empty"));
        assert_eq!(store.table("notes").unwrap().next_id(), "8");
        assert_eq!(store.table("empty").unwrap().next_id(), "1");
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        assert!(from_json(json!([1, 2])).is_err());
        assert!(from_json(json!({"t": {"id": "1"}})).is_err());
        assert!(from_json(json!({"t": [1]})).is_err());
        assert!(from_json(json!({"t": [{"id": "1"}, {"id": "1"}]})).is_err());
    }
}
