use crate::{
    error::{AppError, AppResult},
    model::employee::{CreateEmployee, Employee},
    service::required,
};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::{debug, info, warn};

pub const DUPLICATE_ID: &str = "Employee ID already exists";
pub const DUPLICATE_EMAIL: &str = "Email already exists";
pub const NOT_FOUND: &str = "Employee not found";

// anchored at the start only: anything may follow the first `x@y.z`
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl CreateEmployee {
    /// Checks presence of every field first, then the email shape.
    pub fn validate(self) -> AppResult<Employee> {
        let employee = Employee {
            employee_id: required(self.employee_id)?,
            full_name: required(self.full_name)?,
            email: required(self.email)?,
            department: required(self.department)?,
        };

        if !is_valid_email(&employee.email) {
            return Err(AppError::validation("Invalid email format"));
        }

        Ok(employee)
    }
}

/// true when an employee with this identifier is currently stored.
pub async fn exists<'e, E>(executor: E, employee_id: &str) -> AppResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM employee WHERE employee_id = ? LIMIT 1)",
    )
    .bind(employee_id)
    .fetch_one(executor)
    .await?;

    Ok(found)
}

async fn email_taken<'e, E>(executor: E, email: &str) -> AppResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM employee WHERE email = ? LIMIT 1)",
    )
    .bind(email)
    .fetch_one(executor)
    .await?;

    Ok(found)
}

/// Maps a UNIQUE violation raised by the insert itself onto the same
/// conflict the pre-insert checks report.
fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            warn!(error = %db_err, "Unique constraint hit after pre-insert check");
            return if db_err.message().contains("employee.email") {
                AppError::conflict(DUPLICATE_EMAIL)
            } else {
                AppError::conflict(DUPLICATE_ID)
            };
        }
    }
    AppError::Database(e)
}

/// The existence checks run in autocommit; the UNIQUE constraints settle
/// any create that slips in between a check and the insert.
pub async fn create(pool: &SqlitePool, payload: CreateEmployee) -> AppResult<Employee> {
    let employee = payload.validate()?;

    if exists(pool, &employee.employee_id).await? {
        return Err(AppError::conflict(DUPLICATE_ID));
    }

    if email_taken(pool, &employee.email).await? {
        return Err(AppError::conflict(DUPLICATE_EMAIL));
    }

    sqlx::query(
        r#"
        INSERT INTO employee (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&employee.employee_id)
    .bind(&employee.full_name)
    .bind(&employee.email)
    .bind(&employee.department)
    .execute(pool)
    .await
    .map_err(map_insert_error)?;

    info!(employee_id = %employee.employee_id, "Employee added");
    Ok(employee)
}

pub async fn list(pool: &SqlitePool) -> AppResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT employee_id, full_name, email, department FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    debug!(count = employees.len(), "Listed employees");
    Ok(employees)
}

/// Removes the employee. Attendance rows referencing it are left in place.
pub async fn delete(pool: &SqlitePool, employee_id: &str) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM employee WHERE employee_id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(NOT_FOUND));
    }

    info!(employee_id, "Employee deleted");
    Ok(())
}
