use crate::{
    api::{attendance, employee, home},
    config::Config,
    error::AppError,
};
use actix_web::web;
use tracing::debug;

/// Malformed or mistyped JSON bodies get the same `{"error": ...}` shape as
/// every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "Rejected request body");
        AppError::validation(format!("Invalid JSON body: {err}")).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.app_data(json_config()).service(home::index);

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
                    // /attendance/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(attendance::get_attendance)),
                    ),
            ),
    );
}
