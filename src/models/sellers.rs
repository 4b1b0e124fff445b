use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::books::{Book, ReturnedBookWithoutSellerId};

/// Database row for a seller. The `password` column stays inside the crate;
/// none of the outbound schemas below carry it.
#[derive(Debug, Clone, FromRow)]
pub struct Seller {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for POST /api/v1/sellers/. No `id`: storage assigns it.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Request body for PUT /api/v1/sellers/{id}. All fields optional; absent
/// fields keep their stored values. Password updates are not supported here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSeller {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Outbound seller representation. Enumerates exactly the visible fields,
/// so no serialization path can leak the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReturnedSeller {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Seller> for ReturnedSeller {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
        }
    }
}

/// Outbound representation for GET /api/v1/sellers/{id}: the seller plus
/// the books it owns, each without a seller back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnedSellerWithBooks {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub books: Vec<ReturnedBookWithoutSellerId>,
}

impl ReturnedSellerWithBooks {
    pub fn from_parts(seller: Seller, books: Vec<Book>) -> Self {
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
            books: books.into_iter().map(Into::into).collect(),
        }
    }
}

/// Wrapper for the list endpoint, keyed `"sellers"` in the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnedAllSellers {
    pub sellers: Vec<ReturnedSeller>,
}
