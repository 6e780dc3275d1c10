use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    database::WorkoutSession,
    error::{AppError, AppResult},
    extract::{IdPath, JsonBody},
    result::MessageResponse,
    validation::{NewWorkoutSession, WorkoutSessionChanges},
};

async fn ensure_member_exists(state: &AppState, member_id: i32) -> AppResult<()> {
    match state.store.get_member(member_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::MemberNotFound(member_id)),
    }
}

// 预约训练课程，会员必须存在
pub async fn schedule_workout_session(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let new_session = NewWorkoutSession::from_body(body)?;
    ensure_member_exists(&state, new_session.member_id).await?;

    let session = state.store.insert_workout_session(&new_session).await?;
    tracing::info!(
        "Workout session {} scheduled for member {}",
        session.id,
        session.member_id
    );

    Ok((
        StatusCode::CREATED,
        MessageResponse::json("Workout session scheduled successfully."),
    ))
}

// 部分更新训练课程；修改 member_id 时新会员必须存在
pub async fn update_workout_session(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    let changes = WorkoutSessionChanges::from_body(body)?;
    if state.store.get_workout_session(id).await?.is_none() {
        return Err(AppError::WorkoutSessionNotFound(id));
    }
    if let Some(member_id) = changes.member_id {
        ensure_member_exists(&state, member_id).await?;
    }

    if !changes.is_empty() {
        state.store.update_workout_session_fields(id, &changes).await?;
        tracing::info!("Workout session {} updated", id);
    }

    Ok(MessageResponse::json(format!(
        "Workout session with id {} updated successfully.",
        id
    )))
}

// 获取某会员的全部课程
// 会员不存在和会员没有课程分别返回不同的 404
pub async fn list_workout_sessions_by_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath,
) -> AppResult<Json<Vec<WorkoutSession>>> {
    ensure_member_exists(&state, member_id).await?;

    let sessions = state.store.list_workout_sessions_by_member(member_id).await?;
    if sessions.is_empty() {
        return Err(AppError::NoWorkoutSessions(member_id));
    }
    Ok(Json(sessions))
}

// 获取全部课程
pub async fn list_workout_sessions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WorkoutSession>>> {
    let sessions = state.store.list_workout_sessions().await?;
    Ok(Json(sessions))
}
