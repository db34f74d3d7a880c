use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a stored employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "E1",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = "E1")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

/// Request body for adding an employee. Every field is required; absent
/// and `null` values are reported the same way.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "E1", value_type = String)]
    pub employee_id: Option<String>,
    #[schema(example = "John Doe", value_type = String)]
    pub full_name: Option<String>,
    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: Option<String>,
    #[schema(example = "Engineering", value_type = String)]
    pub department: Option<String>,
}
