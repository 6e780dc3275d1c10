use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    database::Member,
    error::{AppError, AppResult},
    extract::{IdPath, JsonBody},
    result::MessageResponse,
    validation::{MemberChanges, NewMember},
};

// 获取全部会员
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.store.list_members().await?;
    Ok(Json(members))
}

// 按ID获取会员
pub async fn get_member(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Member>> {
    match state.store.get_member(id).await? {
        Some(member) => Ok(Json(member)),
        None => Err(AppError::MemberNotFound(id)),
    }
}

// 新增会员
pub async fn add_member(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let new_member = NewMember::from_body(body)?;
    let member = state.store.insert_member(&new_member).await?;
    tracing::info!("Member {} added", member.id);

    Ok((
        StatusCode::CREATED,
        MessageResponse::json("Member added successfully!"),
    ))
}

// 部分更新会员，只修改请求中出现的字段
pub async fn update_member(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    let changes = MemberChanges::from_body(body)?;
    if state.store.get_member(id).await?.is_none() {
        return Err(AppError::MemberNotFound(id));
    }

    if !changes.is_empty() {
        state.store.update_member_fields(id, &changes).await?;
        tracing::info!("Member {} updated", id);
    }

    Ok(MessageResponse::json(format!(
        "Member with id {} updated successfully.",
        id
    )))
}

// 删除会员，其训练课程一并删除
pub async fn delete_member(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    if state.store.get_member(id).await?.is_none() {
        return Err(AppError::MemberNotFound(id));
    }
    state.store.delete_member(id).await?;
    tracing::info!("Member {} deleted", id);

    Ok(MessageResponse::json(format!(
        "Member with id {} deleted successfully.",
        id
    )))
}
