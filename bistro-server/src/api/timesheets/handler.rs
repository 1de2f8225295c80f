//! Timesheet API Handlers
//!
//! Nested under an employee. Listing does not check the employee; every other
//! route resolves it first and only reaches that employee's timesheets.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use shared::models::{
    Employee, Timesheet, TimesheetFields, TimesheetListResponse, TimesheetRequest,
    TimesheetResponse,
};

use crate::api::Resolved;
use crate::core::ServerState;
use crate::db::repository::timesheet;
use crate::utils::validation::{require_body, require_integer, require_number};
use crate::utils::{AppError, AppResult};

fn ensure_owned_by(timesheet: &Timesheet, employee: &Employee) -> AppResult<()> {
    if timesheet.employee_id == employee.id {
        Ok(())
    } else {
        Err(AppError::not_found(format!(
            "Timesheet {} not owned by Employee {}",
            timesheet.id, employee.id
        )))
    }
}

fn validate(body: TimesheetRequest) -> AppResult<TimesheetFields> {
    let payload = require_body(body.timesheet, "timesheet")?;
    Ok(TimesheetFields {
        hours: require_number(payload.hours, "hours")?,
        rate: require_number(payload.rate, "rate")?,
        date: require_integer(payload.date, "date")?,
    })
}

/// GET /api/employees/{employee_id}/timesheets
pub async fn list(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<TimesheetListResponse>> {
    let Path(employee_id) = path?;
    let timesheets = timesheet::find_by_employee(state.pool(), employee_id).await?;
    Ok(Json(TimesheetListResponse { timesheets }))
}

/// POST /api/employees/{employee_id}/timesheets
pub async fn create(
    State(state): State<ServerState>,
    Resolved(employee): Resolved<Employee>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<TimesheetResponse>)> {
    let Json(body) = payload?;
    let fields = validate(body)?;

    let timesheet = timesheet::create(state.pool(), employee.id, &fields).await?;
    Ok((StatusCode::CREATED, Json(TimesheetResponse { timesheet })))
}

/// GET /api/employees/{employee_id}/timesheets/{timesheet_id}
pub async fn get_by_id(
    Resolved(employee): Resolved<Employee>,
    Resolved(timesheet): Resolved<Timesheet>,
) -> AppResult<Json<TimesheetResponse>> {
    ensure_owned_by(&timesheet, &employee)?;
    Ok(Json(TimesheetResponse { timesheet }))
}

/// PUT /api/employees/{employee_id}/timesheets/{timesheet_id}
pub async fn update(
    State(state): State<ServerState>,
    Resolved(employee): Resolved<Employee>,
    Resolved(existing): Resolved<Timesheet>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> AppResult<Json<TimesheetResponse>> {
    ensure_owned_by(&existing, &employee)?;
    let Json(body) = payload?;
    let fields = validate(body)?;

    let timesheet = timesheet::update(state.pool(), existing.id, employee.id, &fields).await?;
    Ok(Json(TimesheetResponse { timesheet }))
}

/// DELETE /api/employees/{employee_id}/timesheets/{timesheet_id}
pub async fn delete(
    State(state): State<ServerState>,
    Resolved(employee): Resolved<Employee>,
    Resolved(existing): Resolved<Timesheet>,
) -> AppResult<StatusCode> {
    ensure_owned_by(&existing, &employee)?;
    timesheet::delete(state.pool(), existing.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
