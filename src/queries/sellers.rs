//! Database queries for sellers.

use chrono::Utc;
use sqlx::Sqlite;

use crate::database::DbConn;
use crate::error::Result;
use crate::models::sellers::{IncomingSeller, Seller};

/// Creates a new seller. The id is assigned by storage.
pub async fn create_seller(conn: &mut DbConn, incoming: IncomingSeller) -> Result<Seller> {
    let now = Utc::now();
    let seller = sqlx::query_as::<Sqlite, Seller>(
        r#"
        INSERT INTO sellers (first_name, last_name, email, password, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&incoming.first_name)
    .bind(&incoming.last_name)
    .bind(&incoming.email)
    .bind(&incoming.password)
    .bind(now)
    .bind(now)
    .fetch_one(conn)
    .await?;

    Ok(seller)
}

/// Gets a single seller by id. The seller may not exist.
pub async fn get_seller_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Seller>> {
    let seller = sqlx::query_as::<Sqlite, Seller>(
        r#"
        SELECT * FROM sellers WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(seller)
}

/// Lists all sellers in insertion order.
pub async fn list_sellers(conn: &mut DbConn) -> Result<Vec<Seller>> {
    let sellers = sqlx::query_as::<Sqlite, Seller>(
        r#"
        SELECT * FROM sellers ORDER BY id
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(sellers)
}

/// Updates an existing seller's details. The id never changes.
pub async fn update_seller(conn: &mut DbConn, seller: &Seller) -> Result<Seller> {
    let updated = sqlx::query_as::<Sqlite, Seller>(
        r#"
        UPDATE sellers
        SET first_name = $1, last_name = $2, email = $3, updated_at = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&seller.first_name)
    .bind(&seller.last_name)
    .bind(&seller.email)
    .bind(Utc::now())
    .bind(seller.id)
    .fetch_one(conn)
    .await?;

    Ok(updated)
}

/// Deletes a seller by id, returning the number of rows removed.
pub async fn delete_seller(conn: &mut DbConn, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM sellers WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
