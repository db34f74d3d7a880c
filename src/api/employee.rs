use crate::{
    error::AppError,
    model::employee::{CreateEmployee, Employee},
    service::employee as directory,
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;

/// Add Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee added", body = Object, example = json!({
            "message": "Employee added successfully"
        })),
        (status = 400, description = "Missing field or invalid email", body = Object, example = json!({
            "error": "All fields are required"
        })),
        (status = 409, description = "Duplicate employee_id or email", body = Object, example = json!({
            "error": "Employee ID already exists"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, AppError> {
    directory::create(pool.get_ref(), payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee added successfully"
    })))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let employees = directory::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Public employee identifier")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = Object, example = json!({
            "message": "Employee deleted"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    directory::delete(pool.get_ref(), &employee_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted"
    })))
}
