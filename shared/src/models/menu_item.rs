//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity, always owned by one menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub inventory: i64,
    pub price: f64,
    pub menu_id: i64,
}

/// Menu item payload as submitted by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub inventory: Option<i64>,
    pub price: Option<f64>,
}

/// Validated menu item fields (`menu_id` comes from the path)
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemFields {
    pub name: String,
    pub description: String,
    pub inventory: i64,
    pub price: f64,
}

/// Request body: `{"menuItem": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemRequest {
    #[serde(rename = "menuItem")]
    pub menu_item: Option<MenuItemPayload>,
}

/// Response body: `{"menuItem": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemResponse {
    #[serde(rename = "menuItem")]
    pub menu_item: MenuItem,
}

/// Response body: `{"menuItems": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemListResponse {
    #[serde(rename = "menuItems")]
    pub menu_items: Vec<MenuItem>,
}
