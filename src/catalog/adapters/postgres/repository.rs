//! `PostgreSQL` repository implementation for task bank storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::catalog::{
    domain::{AnswerKey, PersistedTaskData, Points, QuizTask, TaskId},
    ports::{TaskCatalogError, TaskCatalogRepository, TaskCatalogResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by catalog adapters.
pub type CatalogPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task catalog.
#[derive(Debug, Clone)]
pub struct PostgresTaskCatalog {
    pool: CatalogPgPool,
}

impl PostgresTaskCatalog {
    /// Creates a new catalog from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CatalogPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskCatalogResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskCatalogResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskCatalogError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskCatalogError::persistence)?
    }
}

#[async_trait]
impl TaskCatalogRepository for PostgresTaskCatalog {
    async fn store(&self, task: &QuizTask) -> TaskCatalogResult<()> {
        let task_id = task.id();
        let new_row = to_row(task)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskCatalogError::DuplicateTask(task_id)
                    }
                    _ => TaskCatalogError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &QuizTask) -> TaskCatalogResult<()> {
        let task_id = task.id();
        let row = to_row(task)?;

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(&row)
                .execute(connection)
                .map_err(TaskCatalogError::persistence)?;
            if affected == 0 {
                return Err(TaskCatalogError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskCatalogResult<Option<QuizTask>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskCatalogError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_all(&self) -> TaskCatalogResult<Vec<QuizTask>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskCatalogError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_active(&self) -> TaskCatalogResult<Vec<QuizTask>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .filter(tasks::active.eq(true))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskCatalogError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_row(task: &QuizTask) -> TaskCatalogResult<NewTaskRow> {
    let points = i32::try_from(task.points().value()).map_err(TaskCatalogError::persistence)?;

    Ok(NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        image_url: task.image_url().map(ToOwned::to_owned),
        answer: task.answer().as_str().to_owned(),
        points,
        active: task.is_active(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

fn row_to_task(row: TaskRow) -> TaskCatalogResult<QuizTask> {
    let TaskRow {
        id,
        title,
        description,
        image_url,
        answer: persisted_answer,
        points: persisted_points,
        active,
        created_at,
        updated_at,
    } = row;

    let answer = AnswerKey::new(persisted_answer).map_err(TaskCatalogError::persistence)?;
    let points_value = u32::try_from(persisted_points).map_err(TaskCatalogError::persistence)?;
    let points = Points::new(points_value).map_err(TaskCatalogError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        image_url,
        answer,
        points,
        active,
        created_at,
        updated_at,
    };
    Ok(QuizTask::from_persisted(data))
}
