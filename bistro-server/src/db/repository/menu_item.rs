//! Menu Item Repository

use super::{RepoError, RepoResult, vanished};
use shared::models::{MenuItem, MenuItemFields};
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT_MENU_ITEM: &str =
    "SELECT id, name, description, inventory, price, menu_id FROM MenuItem";

/// All items of a menu; an unknown menu simply has none
pub async fn find_by_menu(pool: &SqlitePool, menu_id: i64) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "{SELECT_MENU_ITEM} WHERE menu_id = ? ORDER BY id"
    ))
    .bind(menu_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!("{SELECT_MENU_ITEM} WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, menu_id: i64, data: &MenuItemFields) -> RepoResult<MenuItem> {
    let mut tx = pool.begin().await?;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO MenuItem (name, description, inventory, price, menu_id) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.inventory)
    .bind(data.price)
    .bind(menu_id)
    .fetch_one(&mut *tx)
    .await?;

    let item = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("MenuItem", id))?;
    tx.commit().await?;
    Ok(item)
}

/// Update the item's fields; `menu_id` is left untouched
pub async fn update(pool: &SqlitePool, id: i64, data: &MenuItemFields) -> RepoResult<MenuItem> {
    let mut tx = pool.begin().await?;
    let rows = sqlx::query(
        "UPDATE MenuItem SET name = ?, description = ?, inventory = ?, price = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.inventory)
    .bind(data.price)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("MenuItem {id} not found")));
    }

    let item = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("MenuItem", id))?;
    tx.commit().await?;
    Ok(item)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM MenuItem WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("MenuItem {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::menu;
    use shared::models::MenuFields;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    async fn seed_menu(pool: &SqlitePool, title: &str) -> i64 {
        menu::create(pool, &MenuFields { title: title.into() })
            .await
            .unwrap()
            .id
    }

    fn soup() -> MenuItemFields {
        MenuItemFields {
            name: "Soup".into(),
            description: "Tomato".into(),
            inventory: 10,
            price: 4.25,
        }
    }

    #[tokio::test]
    async fn test_items_are_scoped_to_their_menu() {
        let pool = test_pool().await;
        let lunch = seed_menu(&pool, "Lunch").await;
        let dinner = seed_menu(&pool, "Dinner").await;

        let item = create(&pool, lunch, &soup()).await.unwrap();
        assert_eq!(item.menu_id, lunch);

        assert_eq!(find_by_menu(&pool, lunch).await.unwrap(), vec![item]);
        assert!(find_by_menu(&pool, dinner).await.unwrap().is_empty());
        assert!(find_by_menu(&pool, 999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let pool = test_pool().await;
        let lunch = seed_menu(&pool, "Lunch").await;
        let item = create(&pool, lunch, &soup()).await.unwrap();

        let changed = MenuItemFields {
            name: "Stew".into(),
            description: "Beef".into(),
            inventory: 2,
            price: 11.5,
        };
        let updated = update(&pool, item.id, &changed).await.unwrap();
        assert_eq!(updated.name, "Stew");
        assert_eq!(updated.price, 11.5);
        assert_eq!(updated.menu_id, lunch);

        delete(&pool, item.id).await.unwrap();
        assert!(find_by_id(&pool, item.id).await.unwrap().is_none());
        assert!(matches!(
            delete(&pool, item.id).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_insert_under_unknown_menu_fails_foreign_key() {
        let pool = test_pool().await;
        let err = create(&pool, 404, &soup()).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));
    }
}
