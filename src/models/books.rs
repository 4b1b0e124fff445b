use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database row for a book. Every book belongs to exactly one seller.
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub count_pages: i64,
    pub seller_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a book.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub count_pages: i64,
    pub seller_id: i64,
}

/// Book as seen through a seller's detail view: no seller back-reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReturnedBookWithoutSellerId {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub count_pages: i64,
}

impl From<Book> for ReturnedBookWithoutSellerId {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            count_pages: book.count_pages,
        }
    }
}
