//! Database queries for books owned by sellers.

use chrono::Utc;
use sqlx::Sqlite;

use crate::database::DbConn;
use crate::error::Result;
use crate::models::books::{Book, NewBook};

/// Creates a new book owned by a seller.
pub async fn create_book(conn: &mut DbConn, new_book: NewBook) -> Result<Book> {
    let now = Utc::now();
    let book = sqlx::query_as::<Sqlite, Book>(
        r#"
        INSERT INTO books (title, author, year, count_pages, seller_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&new_book.title)
    .bind(&new_book.author)
    .bind(new_book.year)
    .bind(new_book.count_pages)
    .bind(new_book.seller_id)
    .bind(now)
    .bind(now)
    .fetch_one(conn)
    .await?;

    Ok(book)
}

/// Lists the books owned by one seller, in insertion order.
pub async fn list_books_by_seller(conn: &mut DbConn, seller_id: i64) -> Result<Vec<Book>> {
    let books = sqlx::query_as::<Sqlite, Book>(
        r#"
        SELECT * FROM books WHERE seller_id = $1 ORDER BY id
        "#,
    )
    .bind(seller_id)
    .fetch_all(conn)
    .await?;

    Ok(books)
}
