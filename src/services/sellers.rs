//! Seller business logic: validate input, then delegate to the query layer.

use crate::database::DbConn;
use crate::error::{Error, Result};
use crate::models::books::Book;
use crate::models::sellers::{IncomingSeller, Seller, UpdateSeller};
use crate::queries::{books, sellers};
use crate::validation::{validate_email, validate_required_text};

/// Registers a new seller after validating all incoming fields.
pub async fn create_seller(conn: &mut DbConn, incoming: IncomingSeller) -> Result<Seller> {
    validate_required_text("first_name", &incoming.first_name)?;
    validate_required_text("last_name", &incoming.last_name)?;
    validate_email(&incoming.email)?;
    validate_required_text("password", &incoming.password)?;

    sellers::create_seller(conn, incoming).await
}

/// Lists all sellers in insertion order.
pub async fn list_sellers(conn: &mut DbConn) -> Result<Vec<Seller>> {
    sellers::list_sellers(conn).await
}

/// Fetches one seller together with the books it owns.
pub async fn get_seller_with_books(conn: &mut DbConn, id: i64) -> Result<(Seller, Vec<Book>)> {
    let seller = sellers::get_seller_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let books = books::list_books_by_seller(conn, id).await?;

    Ok((seller, books))
}

/// Applies a partial update to a seller. Absent fields keep their stored
/// values; the id and password are untouched.
pub async fn update_seller(conn: &mut DbConn, id: i64, update: UpdateSeller) -> Result<Seller> {
    let mut seller = sellers::get_seller_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(first_name) = update.first_name {
        validate_required_text("first_name", &first_name)?;
        seller.first_name = first_name;
    }
    if let Some(last_name) = update.last_name {
        validate_required_text("last_name", &last_name)?;
        seller.last_name = last_name;
    }
    if let Some(email) = update.email {
        validate_email(&email)?;
        seller.email = email;
    }

    sellers::update_seller(conn, &seller).await
}

/// Deletes a seller; owned books go with it via the cascade.
pub async fn delete_seller(conn: &mut DbConn, id: i64) -> Result<()> {
    let removed = sellers::delete_seller(conn, id).await?;
    if removed == 0 {
        return Err(not_found(id));
    }
    Ok(())
}

fn not_found(id: i64) -> Error {
    Error::NotFound(format!("Seller with id {} not found", id))
}
