//! Timesheet Model

use serde::{Deserialize, Serialize};

/// Timesheet entity (工时记录)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Timesheet {
    pub id: i64,
    pub hours: f64,
    pub rate: f64,
    /// Work date, Unix millis
    pub date: i64,
    pub employee_id: i64,
}

/// Timesheet payload as submitted by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimesheetPayload {
    pub hours: Option<f64>,
    pub rate: Option<f64>,
    pub date: Option<i64>,
}

/// Validated timesheet fields (`employee_id` comes from the path)
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetFields {
    pub hours: f64,
    pub rate: f64,
    pub date: i64,
}

/// Request body: `{"timesheet": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimesheetRequest {
    pub timesheet: Option<TimesheetPayload>,
}

/// Response body: `{"timesheet": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetResponse {
    pub timesheet: Timesheet,
}

/// Response body: `{"timesheets": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetListResponse {
    pub timesheets: Vec<Timesheet>,
}
