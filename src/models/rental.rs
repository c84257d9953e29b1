//! Rental model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A rental record
///
/// Created in the Active state (`is_returned == false`) and transitions to
/// Returned exactly once; records are never deleted. Renting the same book
/// again after a return creates a fresh record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: Uuid,
    pub rented_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<Utc>>,
    pub is_returned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_fee: Option<f64>,
}

impl Rental {
    /// An open rental has not been returned yet
    pub fn is_open(&self) -> bool {
        !self.is_returned
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_open() && now > self.due_date
    }
}

/// A user's active rental joined with the book it refers to, for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalView {
    /// Book ID
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub cover_image: String,
    pub genre: String,
    pub rental_id: Uuid,
    pub rented_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Computed against the clock at response time
    pub is_overdue: bool,
}

/// Create rental request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    /// The ID of the book to rent
    pub book_id: Uuid,
    /// Optional; must match the authenticated caller when present
    pub user_id: Option<Uuid>,
}
