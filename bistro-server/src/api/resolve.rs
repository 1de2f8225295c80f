//! Path-parameter resolution
//!
//! [`Resolved<T>`] loads the entity named by a route's path parameter and
//! short-circuits with 404 before the handler runs. Unparseable ids are
//! treated the same as unknown ones.
//!
//! ```ignore
//! pub async fn get_by_id(Resolved(menu): Resolved<Menu>) -> Json<MenuResponse> { .. }
//! ```

use std::collections::HashMap;
use std::future::Future;

use axum::extract::{FromRequestParts, Path};
use http::request::Parts;
use shared::models::{Employee, Menu, MenuItem, Timesheet};
use sqlx::SqlitePool;

use crate::core::ServerState;
use crate::db::repository::{RepoResult, employee, menu, menu_item, timesheet};
use crate::utils::AppError;

/// An entity addressable by a single integer path parameter
pub trait Resolvable: Sized + Send {
    /// Path parameter carrying the id, e.g. `menu_id`
    const PARAM: &'static str;
    /// Name used in log messages
    const ENTITY: &'static str;

    fn load(pool: &SqlitePool, id: i64) -> impl Future<Output = RepoResult<Option<Self>>> + Send;
}

impl Resolvable for Employee {
    const PARAM: &'static str = "employee_id";
    const ENTITY: &'static str = "Employee";

    fn load(pool: &SqlitePool, id: i64) -> impl Future<Output = RepoResult<Option<Self>>> + Send {
        employee::find_by_id(pool, id)
    }
}

impl Resolvable for Timesheet {
    const PARAM: &'static str = "timesheet_id";
    const ENTITY: &'static str = "Timesheet";

    fn load(pool: &SqlitePool, id: i64) -> impl Future<Output = RepoResult<Option<Self>>> + Send {
        timesheet::find_by_id(pool, id)
    }
}

impl Resolvable for Menu {
    const PARAM: &'static str = "menu_id";
    const ENTITY: &'static str = "Menu";

    fn load(pool: &SqlitePool, id: i64) -> impl Future<Output = RepoResult<Option<Self>>> + Send {
        menu::find_by_id(pool, id)
    }
}

impl Resolvable for MenuItem {
    const PARAM: &'static str = "menu_item_id";
    const ENTITY: &'static str = "MenuItem";

    fn load(pool: &SqlitePool, id: i64) -> impl Future<Output = RepoResult<Option<Self>>> + Send {
        menu_item::find_by_id(pool, id)
    }
}

/// Extractor holding an entity that exists at request time
#[derive(Debug, Clone)]
pub struct Resolved<T>(pub T);

impl<T: Resolvable> FromRequestParts<ServerState> for Resolved<T> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) =
            Path::<HashMap<String, String>>::from_request_parts(parts, state).await?;

        let id = params
            .get(T::PARAM)
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(|| AppError::not_found(format!("{} id missing or invalid", T::ENTITY)))?;

        let entity = T::load(state.pool(), id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} {} not found", T::ENTITY, id)))?;

        Ok(Resolved(entity))
    }
}
