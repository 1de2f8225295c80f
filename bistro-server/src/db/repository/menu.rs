//! Menu Repository

use super::{RepoError, RepoResult, vanished};
use shared::models::{Menu, MenuFields};
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Menu>> {
    let menus = sqlx::query_as::<_, Menu>("SELECT id, title FROM Menu ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(menus)
}

pub async fn find_by_id<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> RepoResult<Option<Menu>> {
    let menu = sqlx::query_as::<_, Menu>("SELECT id, title FROM Menu WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(menu)
}

pub async fn create(pool: &SqlitePool, data: &MenuFields) -> RepoResult<Menu> {
    let mut tx = pool.begin().await?;
    let id: i64 = sqlx::query_scalar("INSERT INTO Menu (title) VALUES (?) RETURNING id")
        .bind(&data.title)
        .fetch_one(&mut *tx)
        .await?;

    let menu = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("Menu", id))?;
    tx.commit().await?;
    Ok(menu)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &MenuFields) -> RepoResult<Menu> {
    let mut tx = pool.begin().await?;
    let rows = sqlx::query("UPDATE Menu SET title = ? WHERE id = ?")
        .bind(&data.title)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu {id} not found")));
    }

    let menu = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("Menu", id))?;
    tx.commit().await?;
    Ok(menu)
}

/// Hard delete, refused while any menu item still points at the menu
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM MenuItem WHERE menu_id = ?")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Err(RepoError::InUse(format!(
            "Menu {id} still has {count} menu item(s)"
        )));
    }

    let rows = sqlx::query("DELETE FROM Menu WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu {id} not found")));
    }
    tx.commit().await?;
    Ok(())
}
