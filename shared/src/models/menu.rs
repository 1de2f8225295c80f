//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu entity (菜单)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Menu {
    pub id: i64,
    pub title: String,
}

/// Menu payload as submitted by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuPayload {
    pub title: Option<String>,
}

/// Validated menu fields
#[derive(Debug, Clone, PartialEq)]
pub struct MenuFields {
    pub title: String,
}

/// Request body: `{"menu": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuRequest {
    pub menu: Option<MenuPayload>,
}

/// Response body: `{"menu": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub menu: Menu,
}

/// Response body: `{"menus": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuListResponse {
    pub menus: Vec<Menu>,
}
