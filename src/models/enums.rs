//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of identity document a user registered with, stored as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum IdType {
    NationalId,
    Passport,
    DriversLicense,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::NationalId => "national_id",
            IdType::Passport => "passport",
            IdType::DriversLicense => "drivers_license",
        }
    }
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
