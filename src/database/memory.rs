// 内存存储，仅用于测试
// 行为与 PostgreSQL 实现保持一致：自增ID、外键检查、级联删除

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::database::models::{member::Member, workout_session::WorkoutSession};
use crate::database::operations::FitnessStore;
use crate::error::{AppError, AppResult};
use crate::validation::{MemberChanges, NewMember, NewWorkoutSession, WorkoutSessionChanges};

#[derive(Default)]
struct Tables {
    members: BTreeMap<i32, Member>,
    sessions: BTreeMap<i32, WorkoutSession>,
    last_member_id: i32,
    last_session_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟数据库不可用，所有操作都返回连接错误
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    async fn tables(&self) -> AppResult<tokio::sync::MutexGuard<'_, Tables>> {
        if self.unavailable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.tables.lock().await)
    }
}

#[async_trait]
impl FitnessStore for MemoryStore {
    async fn list_members(&self) -> AppResult<Vec<Member>> {
        Ok(self.tables().await?.members.values().cloned().collect())
    }

    async fn get_member(&self, id: i32) -> AppResult<Option<Member>> {
        Ok(self.tables().await?.members.get(&id).cloned())
    }

    async fn insert_member(&self, member: &NewMember) -> AppResult<Member> {
        let mut tables = self.tables().await?;
        tables.last_member_id += 1;
        let member = Member {
            id: tables.last_member_id,
            name: member.name.clone(),
            age: member.age.clone(),
        };
        tables.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn update_member_fields(&self, id: i32, changes: &MemberChanges) -> AppResult<()> {
        let mut tables = self.tables().await?;
        let member = tables
            .members
            .get_mut(&id)
            .ok_or(AppError::MemberNotFound(id))?;
        if let Some(name) = &changes.name {
            member.name = name.clone();
        }
        if let Some(age) = &changes.age {
            member.age = age.clone();
        }
        Ok(())
    }

    async fn delete_member(&self, id: i32) -> AppResult<()> {
        let mut tables = self.tables().await?;
        if tables.members.remove(&id).is_none() {
            return Err(AppError::MemberNotFound(id));
        }
        tables.sessions.retain(|_, session| session.member_id != id);
        Ok(())
    }

    async fn get_workout_session(&self, id: i32) -> AppResult<Option<WorkoutSession>> {
        Ok(self.tables().await?.sessions.get(&id).cloned())
    }

    async fn insert_workout_session(
        &self,
        session: &NewWorkoutSession,
    ) -> AppResult<WorkoutSession> {
        let mut tables = self.tables().await?;
        if !tables.members.contains_key(&session.member_id) {
            return Err(AppError::MemberNotFound(session.member_id));
        }
        tables.last_session_id += 1;
        let inserted = WorkoutSession {
            id: tables.last_session_id,
            session_date: session.session_date,
            session_time: session.session_time.clone(),
            activity: session.activity.clone(),
            member_id: session.member_id,
        };
        tables.sessions.insert(inserted.id, inserted.clone());
        Ok(inserted)
    }

    async fn update_workout_session_fields(
        &self,
        id: i32,
        changes: &WorkoutSessionChanges,
    ) -> AppResult<()> {
        let mut tables = self.tables().await?;
        if let Some(member_id) = changes.member_id {
            if !tables.members.contains_key(&member_id) {
                return Err(AppError::MemberNotFound(member_id));
            }
        }
        let session = tables
            .sessions
            .get_mut(&id)
            .ok_or(AppError::WorkoutSessionNotFound(id))?;
        if let Some(date) = changes.session_date {
            session.session_date = date;
        }
        if let Some(time) = &changes.session_time {
            session.session_time = time.clone();
        }
        if let Some(activity) = &changes.activity {
            session.activity = activity.clone();
        }
        if let Some(member_id) = changes.member_id {
            session.member_id = member_id;
        }
        Ok(())
    }

    async fn list_workout_sessions(&self) -> AppResult<Vec<WorkoutSession>> {
        Ok(self.tables().await?.sessions.values().cloned().collect())
    }

    async fn list_workout_sessions_by_member(
        &self,
        member_id: i32,
    ) -> AppResult<Vec<WorkoutSession>> {
        Ok(self
            .tables()
            .await?
            .sessions
            .values()
            .filter(|session| session.member_id == member_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session_for(member_id: i32) -> NewWorkoutSession {
        NewWorkoutSession {
            session_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            session_time: "10:00".into(),
            activity: "Yoga".into(),
            member_id,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_insertion_order() {
        let store = MemoryStore::new();
        for name in ["Alice", "Bob"] {
            store
                .insert_member(&NewMember {
                    name: name.into(),
                    age: None,
                })
                .await
                .unwrap();
        }
        let ids: Vec<i32> = store
            .list_members()
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn sessions_require_an_existing_member() {
        let store = MemoryStore::new();
        let err = store.insert_workout_session(&session_for(9)).await.unwrap_err();
        assert!(matches!(err, AppError::MemberNotFound(9)));
        assert!(store.list_workout_sessions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_a_member_cascades_to_sessions() {
        let store = MemoryStore::new();
        let member = store
            .insert_member(&NewMember {
                name: "Alice".into(),
                age: None,
            })
            .await
            .unwrap();
        store.insert_workout_session(&session_for(member.id)).await.unwrap();

        store.delete_member(member.id).await.unwrap();
        assert!(store.get_member(member.id).await.unwrap().is_none());
        assert!(store.list_workout_sessions().await.unwrap().is_empty());
    }
}
