// PostgreSQL 存储实现

use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};

use super::FitnessStore;
use crate::database::models::{member::Member, workout_session::WorkoutSession};
use crate::error::{AppError, AppResult};
use crate::validation::{MemberChanges, NewMember, NewWorkoutSession, WorkoutSessionChanges};

/// 基于连接池的存储，连接池本身可以廉价克隆
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// 外键冲突说明引用的会员不存在
fn map_member_reference(err: SqlxError, member_id: i32) -> AppError {
    let is_fk_violation = matches!(
        &err,
        SqlxError::Database(db_err) if db_err.is_foreign_key_violation()
    );
    if is_fk_violation {
        AppError::MemberNotFound(member_id)
    } else {
        AppError::Database(err)
    }
}

#[async_trait]
impl FitnessStore for PgStore {
    async fn list_members(&self) -> AppResult<Vec<Member>> {
        let members =
            sqlx::query_as::<_, Member>("SELECT id, name, age FROM members ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(members)
    }

    async fn get_member(&self, id: i32) -> AppResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>("SELECT id, name, age FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(member)
    }

    async fn insert_member(&self, member: &NewMember) -> AppResult<Member> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age
            "#,
        )
        .bind(&member.name)
        .bind(&member.age)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Inserted member {}", member.id);
        Ok(member)
    }

    async fn update_member_fields(&self, id: i32, changes: &MemberChanges) -> AppResult<()> {
        // age 可以被显式置空，因此用单独的标志位区分“未提供”和“置空”
        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = COALESCE($2, name),
                age = CASE WHEN $3 THEN $4 ELSE age END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.age.is_some())
        .bind(changes.age.clone().flatten())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::MemberNotFound(id));
        }
        Ok(())
    }

    async fn delete_member(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::MemberNotFound(id));
        }
        Ok(())
    }

    async fn get_workout_session(&self, id: i32) -> AppResult<Option<WorkoutSession>> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT id, session_date, session_time, activity, member_id
            FROM workout_sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    async fn insert_workout_session(
        &self,
        session: &NewWorkoutSession,
    ) -> AppResult<WorkoutSession> {
        let inserted = sqlx::query_as::<_, WorkoutSession>(
            r#"
            INSERT INTO workout_sessions (session_date, session_time, activity, member_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, session_date, session_time, activity, member_id
            "#,
        )
        .bind(session.session_date)
        .bind(&session.session_time)
        .bind(&session.activity)
        .bind(session.member_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_member_reference(e, session.member_id))?;

        tracing::debug!(
            "Inserted workout session {} for member {}",
            inserted.id,
            inserted.member_id
        );
        Ok(inserted)
    }

    async fn update_workout_session_fields(
        &self,
        id: i32,
        changes: &WorkoutSessionChanges,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE workout_sessions
            SET session_date = COALESCE($2, session_date),
                session_time = COALESCE($3, session_time),
                activity = COALESCE($4, activity),
                member_id = COALESCE($5, member_id)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.session_date)
        .bind(&changes.session_time)
        .bind(&changes.activity)
        .bind(changes.member_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match changes.member_id {
            Some(member_id) => map_member_reference(e, member_id),
            None => AppError::Database(e),
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::WorkoutSessionNotFound(id));
        }
        Ok(())
    }

    async fn list_workout_sessions(&self) -> AppResult<Vec<WorkoutSession>> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT id, session_date, session_time, activity, member_id
            FROM workout_sessions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }

    async fn list_workout_sessions_by_member(
        &self,
        member_id: i32,
    ) -> AppResult<Vec<WorkoutSession>> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT id, session_date, session_time, activity, member_id
            FROM workout_sessions
            WHERE member_id = $1
            ORDER BY id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }
}
