//! `PostgreSQL` repository implementations for players and attempts.

use super::{
    models::{AttemptRow, NewAttemptRow, NewPlayerRow, PlayerRow},
    schema::{attempts, players},
};
use crate::catalog::domain::TaskId;
use crate::player::{
    domain::{
        Attempt, AttemptId, ChatId, DisplayName, Handle, PersistedAttemptData,
        PersistedPlayerData, Player, PlayerId, Progression, Score,
    },
    ports::{
        AttemptLog, AttemptLogError, AttemptLogResult, PlayerRepository, PlayerStoreError,
        PlayerStoreResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by player adapters.
pub type PlayerPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed player repository.
#[derive(Debug, Clone)]
pub struct PostgresPlayerRepository {
    pool: PlayerPgPool,
}

impl PostgresPlayerRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PlayerPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PlayerStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PlayerStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PlayerStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PlayerStoreError::persistence)?
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn store(&self, player: &Player) -> PlayerStoreResult<()> {
        let player_id = player.id();
        let chat_id = player.chat_id();
        let new_row = to_player_row(player);

        self.run_blocking(move |connection| {
            diesel::insert_into(players::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_chat_id_unique_violation(info.as_ref()) =>
                    {
                        PlayerStoreError::DuplicateChatId(chat_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        PlayerStoreError::DuplicatePlayer(player_id)
                    }
                    _ => PlayerStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, player: &Player) -> PlayerStoreResult<()> {
        let player_id = player.id();
        let row = to_player_row(player);

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(players::table.filter(players::id.eq(player_id.into_inner())))
                    .set(&row)
                    .execute(connection)
                    .map_err(PlayerStoreError::persistence)?;
            if affected == 0 {
                return Err(PlayerStoreError::NotFound(player_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: PlayerId) -> PlayerStoreResult<Option<Player>> {
        self.run_blocking(move |connection| {
            let row = players::table
                .filter(players::id.eq(id.into_inner()))
                .select(PlayerRow::as_select())
                .first::<PlayerRow>(connection)
                .optional()
                .map_err(PlayerStoreError::persistence)?;
            row.map(row_to_player).transpose()
        })
        .await
    }

    async fn find_by_chat_id(&self, chat_id: ChatId) -> PlayerStoreResult<Option<Player>> {
        self.run_blocking(move |connection| {
            let row = players::table
                .filter(players::chat_id.eq(chat_id.value()))
                .select(PlayerRow::as_select())
                .first::<PlayerRow>(connection)
                .optional()
                .map_err(PlayerStoreError::persistence)?;
            row.map(row_to_player).transpose()
        })
        .await
    }

    async fn find_by_handle(&self, handle: &Handle) -> PlayerStoreResult<Option<Player>> {
        let lookup = handle.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = players::table
                .filter(players::handle.eq(lookup))
                .select(PlayerRow::as_select())
                .first::<PlayerRow>(connection)
                .optional()
                .map_err(PlayerStoreError::persistence)?;
            row.map(row_to_player).transpose()
        })
        .await
    }

    async fn list_all(&self) -> PlayerStoreResult<Vec<Player>> {
        self.run_blocking(|connection| {
            let rows = players::table
                .order(players::created_at.asc())
                .select(PlayerRow::as_select())
                .load::<PlayerRow>(connection)
                .map_err(PlayerStoreError::persistence)?;
            rows.into_iter().map(row_to_player).collect()
        })
        .await
    }
}

fn to_player_row(player: &Player) -> NewPlayerRow {
    NewPlayerRow {
        id: player.id().into_inner(),
        chat_id: player.chat_id().value(),
        display_name: player.display_name().as_str().to_owned(),
        handle: player.handle().map(|handle| handle.as_str().to_owned()),
        score: i64::from(player.score().value()),
        progression: player.progression().state_name().to_owned(),
        current_task_id: player
            .progression()
            .assigned_task()
            .map(TaskId::into_inner),
        created_at: player.created_at(),
        updated_at: player.updated_at(),
    }
}

fn row_to_player(row: PlayerRow) -> PlayerStoreResult<Player> {
    let PlayerRow {
        id,
        chat_id,
        display_name: persisted_display_name,
        handle: persisted_handle,
        score: persisted_score,
        progression: persisted_progression,
        current_task_id,
        created_at,
        updated_at,
    } = row;

    let display_name =
        DisplayName::new(persisted_display_name).map_err(PlayerStoreError::persistence)?;
    let handle = persisted_handle
        .map(Handle::new)
        .transpose()
        .map_err(PlayerStoreError::persistence)?;
    let score_value = u32::try_from(persisted_score).map_err(PlayerStoreError::persistence)?;
    let progression = Progression::from_parts(
        &persisted_progression,
        current_task_id.map(TaskId::from_uuid),
    )
    .map_err(PlayerStoreError::persistence)?;

    let data = PersistedPlayerData {
        id: PlayerId::from_uuid(id),
        chat_id: ChatId::new(chat_id),
        display_name,
        handle,
        score: Score::from_value(score_value),
        progression,
        created_at,
        updated_at,
    };
    Ok(Player::from_persisted(data))
}

fn is_chat_id_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_players_chat_id_unique")
}

/// `PostgreSQL`-backed attempt log.
#[derive(Debug, Clone)]
pub struct PostgresAttemptLog {
    pool: PlayerPgPool,
}

impl PostgresAttemptLog {
    /// Creates a new attempt log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PlayerPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AttemptLogResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AttemptLogResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AttemptLogError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AttemptLogError::persistence)?
    }
}

#[async_trait]
impl AttemptLog for PostgresAttemptLog {
    async fn record(&self, attempt: &Attempt) -> AttemptLogResult<()> {
        let attempt_id = attempt.id();
        let new_row = to_attempt_row(attempt);

        self.run_blocking(move |connection| {
            diesel::insert_into(attempts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AttemptLogError::DuplicateAttempt(attempt_id)
                    }
                    _ => AttemptLogError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_player(&self, player: PlayerId) -> AttemptLogResult<Vec<Attempt>> {
        self.run_blocking(move |connection| {
            let rows = attempts::table
                .filter(attempts::player_id.eq(player.into_inner()))
                .order(attempts::submitted_at.asc())
                .select(AttemptRow::as_select())
                .load::<AttemptRow>(connection)
                .map_err(AttemptLogError::persistence)?;
            Ok(rows.into_iter().map(row_to_attempt).collect())
        })
        .await
    }

    async fn has_correct_attempt(
        &self,
        player: PlayerId,
        task: TaskId,
    ) -> AttemptLogResult<bool> {
        self.run_blocking(move |connection| {
            let found = attempts::table
                .filter(attempts::player_id.eq(player.into_inner()))
                .filter(attempts::task_id.eq(task.into_inner()))
                .filter(attempts::correct.eq(true))
                .select(attempts::id)
                .first::<uuid::Uuid>(connection)
                .optional()
                .map_err(AttemptLogError::persistence)?;
            Ok(found.is_some())
        })
        .await
    }

    async fn solved_task_ids(&self, player: PlayerId) -> AttemptLogResult<Vec<TaskId>> {
        self.run_blocking(move |connection| {
            let ids = attempts::table
                .filter(attempts::player_id.eq(player.into_inner()))
                .filter(attempts::correct.eq(true))
                .select(attempts::task_id)
                .distinct()
                .load::<uuid::Uuid>(connection)
                .map_err(AttemptLogError::persistence)?;
            Ok(ids.into_iter().map(TaskId::from_uuid).collect())
        })
        .await
    }
}

fn to_attempt_row(attempt: &Attempt) -> NewAttemptRow {
    NewAttemptRow {
        id: attempt.id().into_inner(),
        player_id: attempt.player().into_inner(),
        task_id: attempt.task().into_inner(),
        answer_text: attempt.answer_text().to_owned(),
        correct: attempt.is_correct(),
        submitted_at: attempt.submitted_at(),
    }
}

fn row_to_attempt(row: AttemptRow) -> Attempt {
    let AttemptRow {
        id,
        player_id,
        task_id,
        answer_text,
        correct,
        submitted_at,
    } = row;

    Attempt::from_persisted(PersistedAttemptData {
        id: AttemptId::from_uuid(id),
        player: PlayerId::from_uuid(player_id),
        task: TaskId::from_uuid(task_id),
        answer_text,
        correct,
        submitted_at,
    })
}
