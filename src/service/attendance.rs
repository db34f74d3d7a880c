use crate::{
    error::{AppError, AppResult},
    model::attendance::{AttendanceRecord, AttendanceStatus, MarkAttendance},
    service::{employee, required},
};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

pub const INVALID_STATUS: &str = "Status must be Present or Absent";

/// A ledger entry that passed field and status checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl MarkAttendance {
    pub fn validate(self) -> AppResult<NewAttendance> {
        let employee_id = required(self.employee_id)?;
        let date = required(self.date)?;
        let status = required(self.status)?;

        let status =
            AttendanceStatus::from_str(&status).map_err(|_| AppError::validation(INVALID_STATUS))?;

        Ok(NewAttendance {
            employee_id,
            date,
            status,
        })
    }
}

/// Appends one attendance row. The employee must exist at this moment;
/// same-day entries are not deduplicated.
pub async fn record(pool: &SqlitePool, payload: MarkAttendance) -> AppResult<NewAttendance> {
    let entry = payload.validate()?;

    if !employee::exists(pool, &entry.employee_id).await? {
        return Err(AppError::not_found(employee::NOT_FOUND));
    }

    sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
        .bind(&entry.employee_id)
        .bind(&entry.date)
        .bind(<&'static str>::from(entry.status))
        .execute(pool)
        .await?;

    info!(
        employee_id = %entry.employee_id,
        date = %entry.date,
        status = %entry.status,
        "Attendance marked"
    );
    Ok(entry)
}

/// Rows for `employee_id` in insertion order. The id is not checked against
/// the directory, so unknown or deleted ids just yield what is stored.
pub async fn list_for(pool: &SqlitePool, employee_id: &str) -> AppResult<Vec<AttendanceRecord>> {
    let records = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT date, status FROM attendance WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    debug!(employee_id, count = records.len(), "Listed attendance");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::init_memory_db, model::employee::CreateEmployee};

    async fn pool_with_employee(id: &str) -> SqlitePool {
        let pool = init_memory_db().await.unwrap();
        employee::create(
            &pool,
            CreateEmployee {
                employee_id: Some(id.to_string()),
                full_name: Some("Jane Roe".to_string()),
                email: Some(format!("{}@example.com", id.to_lowercase())),
                department: Some("Finance".to_string()),
            },
        )
        .await
        .unwrap();
        pool
    }

    fn mark(id: &str, date: &str, status: &str) -> MarkAttendance {
        MarkAttendance {
            employee_id: Some(id.to_string()),
            date: Some(date.to_string()),
            status: Some(status.to_string()),
        }
    }

    fn rec(date: &str, status: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: date.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn every_field_is_required() {
        let strip: [fn(&mut MarkAttendance); 3] = [
            |m| m.employee_id = None,
            |m| m.date = None,
            |m| m.status = None,
        ];

        for clear in strip {
            let mut m = mark("E1", "2024-01-01", "Present");
            clear(&mut m);
            let err = m.validate().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(err.to_string(), "All fields are required");
        }
    }

    #[test]
    fn status_is_case_sensitive() {
        for bad in ["present", "absent", "Late", " Present", ""] {
            let err = mark("E1", "2024-01-01", bad).validate().unwrap_err();
            assert_eq!(err.to_string(), INVALID_STATUS);
        }
    }

    #[test]
    fn date_is_opaque() {
        let entry = mark("E1", "next tuesday", "Absent").validate().unwrap();
        assert_eq!(entry.date, "next tuesday");
        assert_eq!(entry.status, AttendanceStatus::Absent);
    }

    #[actix_web::test]
    async fn record_then_list() {
        let pool = pool_with_employee("E1").await;

        record(&pool, mark("E1", "2024-01-01", "Present")).await.unwrap();

        assert_eq!(
            list_for(&pool, "E1").await.unwrap(),
            vec![rec("2024-01-01", "Present")]
        );
    }

    #[actix_web::test]
    async fn keeps_every_entry_in_order() {
        let pool = pool_with_employee("E1").await;

        record(&pool, mark("E1", "2024-01-01", "Present")).await.unwrap();
        record(&pool, mark("E1", "2024-01-02", "Absent")).await.unwrap();
        record(&pool, mark("E1", "2024-01-02", "Absent")).await.unwrap();

        assert_eq!(
            list_for(&pool, "E1").await.unwrap(),
            vec![
                rec("2024-01-01", "Present"),
                rec("2024-01-02", "Absent"),
                rec("2024-01-02", "Absent"),
            ]
        );
    }

    #[actix_web::test]
    async fn unknown_employee_is_not_found() {
        let pool = pool_with_employee("E1").await;

        let err = record(&pool, mark("E2", "2024-01-01", "Present")).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(list_for(&pool, "E2").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn invalid_status_persists_nothing() {
        let pool = pool_with_employee("E1").await;

        let err = record(&pool, mark("E1", "2024-01-01", "Late")).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(list_for(&pool, "E1").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn status_checked_before_existence() {
        let pool = init_memory_db().await.unwrap();

        let err = record(&pool, mark("ghost", "2024-01-01", "Late")).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[actix_web::test]
    async fn records_are_scoped_per_employee() {
        let pool = pool_with_employee("E1").await;
        employee::create(
            &pool,
            CreateEmployee {
                employee_id: Some("E2".to_string()),
                full_name: Some("John Doe".to_string()),
                email: Some("john@example.com".to_string()),
                department: Some("Sales".to_string()),
            },
        )
        .await
        .unwrap();

        record(&pool, mark("E1", "2024-01-01", "Present")).await.unwrap();
        record(&pool, mark("E2", "2024-01-01", "Absent")).await.unwrap();

        assert_eq!(list_for(&pool, "E2").await.unwrap(), vec![rec("2024-01-01", "Absent")]);
    }

    #[actix_web::test]
    async fn deleting_employee_orphans_records() {
        let pool = pool_with_employee("E1").await;
        record(&pool, mark("E1", "2024-01-01", "Present")).await.unwrap();

        employee::delete(&pool, "E1").await.unwrap();

        assert_eq!(
            list_for(&pool, "E1").await.unwrap(),
            vec![rec("2024-01-01", "Present")]
        );
        // the write path still refuses the deleted id
        let err = record(&pool, mark("E1", "2024-01-02", "Present")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn unknown_id_lists_empty() {
        let pool = init_memory_db().await.unwrap();
        assert!(list_for(&pool, "nobody").await.unwrap().is_empty());
    }
}
