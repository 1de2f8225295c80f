//! Menu API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{Menu, MenuFields, MenuListResponse, MenuRequest, MenuResponse};

use crate::api::Resolved;
use crate::core::ServerState;
use crate::db::repository::menu;
use crate::utils::validation::{require_body, require_text};
use crate::utils::AppResult;

fn validate(body: MenuRequest) -> AppResult<MenuFields> {
    let payload = require_body(body.menu, "menu")?;
    Ok(MenuFields {
        title: require_text(payload.title, "title")?,
    })
}

/// GET /api/menus - 获取所有菜单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<MenuListResponse>> {
    let menus = menu::find_all(state.pool()).await?;
    Ok(Json(MenuListResponse { menus }))
}

/// POST /api/menus - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<MenuRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MenuResponse>)> {
    let Json(body) = payload?;
    let fields = validate(body)?;

    let menu = menu::create(state.pool(), &fields).await?;
    tracing::info!(menu_id = menu.id, "Menu created");

    Ok((StatusCode::CREATED, Json(MenuResponse { menu })))
}

/// GET /api/menus/{menu_id} - 获取单个菜单
pub async fn get_by_id(Resolved(menu): Resolved<Menu>) -> Json<MenuResponse> {
    Json(MenuResponse { menu })
}

/// PUT /api/menus/{menu_id} - 更新菜单
pub async fn update(
    State(state): State<ServerState>,
    Resolved(existing): Resolved<Menu>,
    payload: Result<Json<MenuRequest>, JsonRejection>,
) -> AppResult<Json<MenuResponse>> {
    let Json(body) = payload?;
    let fields = validate(body)?;

    let menu = menu::update(state.pool(), existing.id, &fields).await?;
    Ok(Json(MenuResponse { menu }))
}

/// DELETE /api/menus/{menu_id} - 删除菜单 (仅当没有菜品时)
pub async fn delete(
    State(state): State<ServerState>,
    Resolved(existing): Resolved<Menu>,
) -> AppResult<StatusCode> {
    menu::delete(state.pool(), existing.id).await?;
    tracing::info!(menu_id = existing.id, "Menu deleted");
    Ok(StatusCode::NO_CONTENT)
}
