use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored template of role-specific interview configuration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleKitRow {
    pub id: Uuid,
    pub name: String,
    pub role_title: String,
    /// entry | mid | senior | ...
    pub level: String,
    pub domain: Option<String>,
    /// engineering | data | product | business | design | other
    pub category: Option<String>,
    /// e.g. core_software_engineer
    pub archetype: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}
