//! Employee Repository

use super::{RepoError, RepoResult, vanished};
use shared::models::{Employee, EmployeeFields};
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT_EMPLOYEE: &str =
    "SELECT id, name, position, wage, is_current_employee FROM Employee";

/// Find all current employees
pub async fn find_current(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "{SELECT_EMPLOYEE} WHERE is_current_employee = 1 ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Find an employee by id, current or not
pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: &EmployeeFields) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO Employee (name, position, wage) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.position)
    .bind(data.wage)
    .fetch_one(&mut *tx)
    .await?;

    let employee = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("Employee", id))?;
    tx.commit().await?;
    Ok(employee)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &EmployeeFields) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;
    let rows = sqlx::query("UPDATE Employee SET name = ?, position = ?, wage = ? WHERE id = ?")
        .bind(&data.name)
        .bind(&data.position)
        .bind(data.wage)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }

    let employee = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("Employee", id))?;
    tx.commit().await?;
    Ok(employee)
}

/// Soft delete: clear `is_current_employee`, keep the row
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;
    sqlx::query("UPDATE Employee SET is_current_employee = 0 WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let employee = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;
    tx.commit().await?;
    Ok(employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn fields(name: &str, wage: f64) -> EmployeeFields {
        EmployeeFields {
            name: name.into(),
            position: "Cook".into(),
            wage,
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let pool = test_pool().await;
        let e = create(&pool, &fields("Ada", 15.5)).await.unwrap();
        assert_eq!(e.name, "Ada");
        assert_eq!(e.wage, 15.5);
        assert!(e.is_current_employee);
        assert_eq!(find_by_id(&pool, e.id).await.unwrap(), Some(e));
    }

    #[tokio::test]
    async fn test_deactivate_hides_from_current_list() {
        let pool = test_pool().await;
        let a = create(&pool, &fields("Ada", 15.0)).await.unwrap();
        let b = create(&pool, &fields("Bob", 12.0)).await.unwrap();

        let gone = deactivate(&pool, a.id).await.unwrap();
        assert!(!gone.is_current_employee);

        let current = find_current(&pool).await.unwrap();
        assert_eq!(current, vec![b]);
        // row retained
        assert!(find_by_id(&pool, a.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let err = update(&pool, 42, &fields("Ada", 1.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        let err = deactivate(&pool, 42).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_employment_flag() {
        let pool = test_pool().await;
        let e = create(&pool, &fields("Ada", 15.0)).await.unwrap();
        deactivate(&pool, e.id).await.unwrap();
        let e = update(&pool, e.id, &fields("Ada L.", 20.0)).await.unwrap();
        assert_eq!(e.name, "Ada L.");
        assert_eq!(e.wage, 20.0);
        assert!(!e.is_current_employee);
    }
}
