use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};
use utoipa::ToSchema;

/// Allowed attendance values. Parsing is exact and case-sensitive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumString, Display, IntoStaticStr, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One ledger row as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = "2024-01-01")]
    pub date: String,
    #[schema(example = "Present")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "E1", value_type = String)]
    pub employee_id: Option<String>,
    /// Free-form; stored exactly as sent
    #[schema(example = "2024-01-01", value_type = String)]
    pub date: Option<String>,
    #[schema(example = "Present", value_type = String)]
    pub status: Option<String>,
}
