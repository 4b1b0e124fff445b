//! Shared test helper functions
//!
//! Seeding goes straight through the query layer rather than the POST
//! endpoint, so list/get/update/delete tests do not depend on the create
//! handler being correct.

use bookstore::models::books::{Book, NewBook};
use bookstore::models::sellers::{IncomingSeller, Seller};
use bookstore::queries;
use bookstore::DbPool;
use nanoid::nanoid;

/// Generates a unique email so parallel tests never collide on fixtures.
pub fn generate_test_email() -> String {
    format!("test_{}@example.com", nanoid!(10))
}

/// Inserts a seller directly into storage.
pub async fn seed_seller(pool: &DbPool, first_name: &str, last_name: &str, email: &str) -> Seller {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    queries::sellers::create_seller(
        conn.as_mut(),
        IncomingSeller {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: "password".to_string(),
        },
    )
    .await
    .expect("Failed to seed seller")
}

/// Inserts a book owned by the given seller directly into storage.
pub async fn seed_book(
    pool: &DbPool,
    seller_id: i64,
    title: &str,
    author: &str,
    year: i64,
    count_pages: i64,
) -> Book {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    queries::books::create_book(
        conn.as_mut(),
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
            year,
            count_pages,
            seller_id,
        },
    )
    .await
    .expect("Failed to seed book")
}
