//! Seller CRUD handlers.
//!
//! Handlers follow the thin-layer pattern: they validate inputs, delegate to
//! the service layer, and shape the response. All business logic lives in
//! `services::sellers`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{Error, Result},
    models::sellers::{
        IncomingSeller, ReturnedAllSellers, ReturnedSeller, ReturnedSellerWithBooks, UpdateSeller,
    },
    services::sellers,
    state::AppState,
};

/// POST /api/v1/sellers/
///
/// Creates a new seller. Returns 201 with the stored seller; the password
/// is not part of the response shape.
pub async fn create_seller(
    State(state): State<AppState>,
    Json(incoming): Json<IncomingSeller>,
) -> Result<impl IntoResponse> {
    let mut conn = acquire(&state).await?;

    let seller = sellers::create_seller(conn.as_mut(), incoming).await?;
    tracing::info!(seller_id = seller.id, "seller created");

    Ok((StatusCode::CREATED, Json(ReturnedSeller::from(seller))))
}

/// GET /api/v1/sellers/
///
/// Lists all sellers in insertion order, wrapped under `"sellers"`.
pub async fn list_sellers(State(state): State<AppState>) -> Result<Json<ReturnedAllSellers>> {
    let mut conn = acquire(&state).await?;

    let sellers = sellers::list_sellers(conn.as_mut()).await?;

    Ok(Json(ReturnedAllSellers {
        sellers: sellers.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/sellers/{id}
///
/// Returns one seller together with the books it owns. 404 if unknown.
pub async fn get_seller(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReturnedSellerWithBooks>> {
    let mut conn = acquire(&state).await?;

    let (seller, books) = sellers::get_seller_with_books(conn.as_mut(), id).await?;

    Ok(Json(ReturnedSellerWithBooks::from_parts(seller, books)))
}

/// PUT /api/v1/sellers/{id}
///
/// Applies a partial update; omitted fields keep their stored values.
/// Returns the updated seller. 404 if unknown.
pub async fn update_seller(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateSeller>,
) -> Result<Json<ReturnedSeller>> {
    let mut conn = acquire(&state).await?;

    let seller = sellers::update_seller(conn.as_mut(), id, update).await?;
    tracing::info!(seller_id = seller.id, "seller updated");

    Ok(Json(ReturnedSeller::from(seller)))
}

/// DELETE /api/v1/sellers/{id}
///
/// Removes the seller and, via cascade, its books. Returns 204 with an
/// empty body. 404 if unknown.
pub async fn delete_seller(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let mut conn = acquire(&state).await?;

    sellers::delete_seller(conn.as_mut(), id).await?;
    tracing::info!(seller_id = id, "seller deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn acquire(state: &AppState) -> Result<sqlx::pool::PoolConnection<sqlx::Sqlite>> {
    state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))
}
