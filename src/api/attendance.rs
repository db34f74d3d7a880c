use crate::{
    error::AppError,
    model::attendance::{AttendanceRecord, MarkAttendance},
    service::attendance as ledger,
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = Object, example = json!({
            "message": "Attendance marked"
        })),
        (status = 400, description = "Missing field or invalid status", body = Object, example = json!({
            "error": "Status must be Present or Absent"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, AppError> {
    ledger::record(pool.get_ref(), payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Attendance marked"
    })))
}

/// Attendance for one employee
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Public employee identifier")
    ),
    responses(
        (status = 200, description = "Attendance entries, empty when none match", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let records = ledger::list_for(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}
