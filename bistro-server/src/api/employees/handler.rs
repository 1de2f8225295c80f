//! Employee API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{
    Employee, EmployeeFields, EmployeeListResponse, EmployeeRequest, EmployeeResponse,
};

use crate::api::Resolved;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{require_body, require_number, require_text};
use crate::utils::AppResult;

fn validate(body: EmployeeRequest) -> AppResult<EmployeeFields> {
    let payload = require_body(body.employee, "employee")?;
    Ok(EmployeeFields {
        name: require_text(payload.name, "name")?,
        position: require_text(payload.position, "position")?,
        wage: require_number(payload.wage, "wage")?,
    })
}

/// GET /api/employees - 在职员工列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<EmployeeListResponse>> {
    let employees = employee::find_current(state.pool()).await?;
    Ok(Json(EmployeeListResponse { employees }))
}

/// POST /api/employees - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let Json(body) = payload?;
    let fields = validate(body)?;

    let employee = employee::create(state.pool(), &fields).await?;
    tracing::info!(employee_id = employee.id, "Employee created");

    Ok((StatusCode::CREATED, Json(EmployeeResponse { employee })))
}

/// GET /api/employees/{employee_id} - 获取单个员工 (含已离职)
pub async fn get_by_id(Resolved(employee): Resolved<Employee>) -> Json<EmployeeResponse> {
    Json(EmployeeResponse { employee })
}

/// PUT /api/employees/{employee_id} - 更新员工
pub async fn update(
    State(state): State<ServerState>,
    Resolved(existing): Resolved<Employee>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> AppResult<Json<EmployeeResponse>> {
    let Json(body) = payload?;
    let fields = validate(body)?;

    let employee = employee::update(state.pool(), existing.id, &fields).await?;
    Ok(Json(EmployeeResponse { employee }))
}

/// DELETE /api/employees/{employee_id} - 离职 (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Resolved(existing): Resolved<Employee>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = employee::deactivate(state.pool(), existing.id).await?;
    tracing::info!(employee_id = employee.id, "Employee deactivated");
    Ok(Json(EmployeeResponse { employee }))
}
