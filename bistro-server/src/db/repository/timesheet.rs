//! Timesheet Repository

use super::{RepoError, RepoResult, vanished};
use shared::models::{Timesheet, TimesheetFields};
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT_TIMESHEET: &str = "SELECT id, hours, rate, date, employee_id FROM Timesheet";

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Timesheet>> {
    let timesheets = sqlx::query_as::<_, Timesheet>(&format!(
        "{SELECT_TIMESHEET} WHERE employee_id = ? ORDER BY id"
    ))
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(timesheets)
}

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Timesheet>> {
    let timesheet = sqlx::query_as::<_, Timesheet>(&format!("{SELECT_TIMESHEET} WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(timesheet)
}

pub async fn create(
    pool: &SqlitePool,
    employee_id: i64,
    data: &TimesheetFields,
) -> RepoResult<Timesheet> {
    let mut tx = pool.begin().await?;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO Timesheet (hours, rate, date, employee_id) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(data.hours)
    .bind(data.rate)
    .bind(data.date)
    .bind(employee_id)
    .fetch_one(&mut *tx)
    .await?;

    let timesheet = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("Timesheet", id))?;
    tx.commit().await?;
    Ok(timesheet)
}

/// Update a timesheet, writing `employee_id` along with the fields
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    employee_id: i64,
    data: &TimesheetFields,
) -> RepoResult<Timesheet> {
    let mut tx = pool.begin().await?;
    let rows = sqlx::query(
        "UPDATE Timesheet SET hours = ?, rate = ?, date = ?, employee_id = ? WHERE id = ?",
    )
    .bind(data.hours)
    .bind(data.rate)
    .bind(data.date)
    .bind(employee_id)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Timesheet {id} not found")));
    }

    let timesheet = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| vanished("Timesheet", id))?;
    tx.commit().await?;
    Ok(timesheet)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM Timesheet WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Timesheet {id} not found")));
    }
    Ok(())
}
