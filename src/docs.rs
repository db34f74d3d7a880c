use crate::model::attendance::{AttendanceRecord, AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "0.1.0",
        description = r#"
## HRMS Lite

A small record-keeper for employees and their daily attendance.

### Key Features
- **Employee Management**
  - Add, list and delete employees
- **Attendance Management**
  - Mark a day as `Present` or `Absent` and view an employee's history

### Response Format
- Success bodies are JSON; errors are always `{"error": "<message>"}`

Paths below assume the default `/api` prefix; deployments that set
`API_PREFIX` serve the same routes under that prefix instead.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            AttendanceRecord,
            AttendanceStatus,
            MarkAttendance
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
    )
)]
pub struct ApiDoc;
