//! Menu Item API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use shared::models::{
    Menu, MenuItem, MenuItemFields, MenuItemListResponse, MenuItemRequest, MenuItemResponse,
};

use crate::api::Resolved;
use crate::core::ServerState;
use crate::db::repository::menu_item;
use crate::utils::validation::{require_body, require_integer, require_number, require_text};
use crate::utils::{AppError, AppResult};

/// An item is only addressable under the menu that owns it
fn ensure_on_menu(menu_item: &MenuItem, menu: &Menu) -> AppResult<()> {
    if menu_item.menu_id == menu.id {
        Ok(())
    } else {
        Err(AppError::not_found(format!(
            "MenuItem {} not on Menu {}",
            menu_item.id, menu.id
        )))
    }
}

fn validate(body: MenuItemRequest) -> AppResult<MenuItemFields> {
    let payload = require_body(body.menu_item, "menuItem")?;
    Ok(MenuItemFields {
        name: require_text(payload.name, "name")?,
        description: require_text(payload.description, "description")?,
        inventory: require_integer(payload.inventory, "inventory")?,
        price: require_number(payload.price, "price")?,
    })
}

/// GET /api/menus/{menu_id}/menu-items - 菜单下的菜品 (未知菜单返回空列表)
pub async fn list(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MenuItemListResponse>> {
    let Path(menu_id) = path?;
    let menu_items = menu_item::find_by_menu(state.pool(), menu_id).await?;
    Ok(Json(MenuItemListResponse { menu_items }))
}

/// POST /api/menus/{menu_id}/menu-items - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Resolved(menu): Resolved<Menu>,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MenuItemResponse>)> {
    let Json(body) = payload?;
    let fields = validate(body)?;

    let menu_item = menu_item::create(state.pool(), menu.id, &fields).await?;
    Ok((StatusCode::CREATED, Json(MenuItemResponse { menu_item })))
}

/// GET /api/menus/{menu_id}/menu-items/{menu_item_id}
pub async fn get_by_id(
    Resolved(menu): Resolved<Menu>,
    Resolved(menu_item): Resolved<MenuItem>,
) -> AppResult<Json<MenuItemResponse>> {
    ensure_on_menu(&menu_item, &menu)?;
    Ok(Json(MenuItemResponse { menu_item }))
}

/// PUT /api/menus/{menu_id}/menu-items/{menu_item_id} - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Resolved(menu): Resolved<Menu>,
    Resolved(existing): Resolved<MenuItem>,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> AppResult<Json<MenuItemResponse>> {
    ensure_on_menu(&existing, &menu)?;
    let Json(body) = payload?;
    let fields = validate(body)?;

    let menu_item = menu_item::update(state.pool(), existing.id, &fields).await?;
    Ok(Json(MenuItemResponse { menu_item }))
}

/// DELETE /api/menus/{menu_id}/menu-items/{menu_item_id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Resolved(menu): Resolved<Menu>,
    Resolved(existing): Resolved<MenuItem>,
) -> AppResult<StatusCode> {
    ensure_on_menu(&existing, &menu)?;
    menu_item::delete(state.pool(), existing.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
