//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity (员工)
///
/// Never hard-deleted: `DELETE` only clears `is_current_employee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub wage: f64,
    pub is_current_employee: bool,
}

/// Employee payload as submitted by clients
///
/// Every field is optional on the wire; presence is checked by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub position: Option<String>,
    pub wage: Option<f64>,
}

/// Validated employee fields (create and update)
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub position: String,
    pub wage: f64,
}

/// Request body: `{"employee": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRequest {
    pub employee: Option<EmployeePayload>,
}

/// Response body: `{"employee": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employee: Employee,
}

/// Response body: `{"employees": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
}
