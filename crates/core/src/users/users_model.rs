//! User domain model.

use chrono::NaiveDateTime;
use serde::Serialize;

/// A registered account holder.
///
/// The password hash never leaves the backend; API responses expose only
/// id and email.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
