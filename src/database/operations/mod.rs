// 存储操作接口
// 处理器只依赖该 trait，具体实现由启动代码注入

mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;

use crate::database::models::{member::Member, workout_session::WorkoutSession};
use crate::error::AppResult;
use crate::validation::{MemberChanges, NewMember, NewWorkoutSession, WorkoutSessionChanges};

/// 会员与训练课程的存储操作，每个写操作单独提交
#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// 所有会员，按ID排序
    async fn list_members(&self) -> AppResult<Vec<Member>>;

    async fn get_member(&self, id: i32) -> AppResult<Option<Member>>;

    /// 新增会员，返回带新ID的实体
    async fn insert_member(&self, member: &NewMember) -> AppResult<Member>;

    /// 只更新提供的字段；会员不存在时返回 `MemberNotFound`
    async fn update_member_fields(&self, id: i32, changes: &MemberChanges) -> AppResult<()>;

    /// 删除会员及其课程；会员不存在时返回 `MemberNotFound`
    async fn delete_member(&self, id: i32) -> AppResult<()>;

    async fn get_workout_session(&self, id: i32) -> AppResult<Option<WorkoutSession>>;

    /// 新增课程；member_id 不存在时返回 `MemberNotFound`
    async fn insert_workout_session(&self, session: &NewWorkoutSession)
    -> AppResult<WorkoutSession>;

    /// 只更新提供的字段；课程不存在返回 `WorkoutSessionNotFound`，
    /// 新的 member_id 不存在返回 `MemberNotFound`
    async fn update_workout_session_fields(
        &self,
        id: i32,
        changes: &WorkoutSessionChanges,
    ) -> AppResult<()>;

    /// 所有课程，按ID排序
    async fn list_workout_sessions(&self) -> AppResult<Vec<WorkoutSession>>;

    async fn list_workout_sessions_by_member(
        &self,
        member_id: i32,
    ) -> AppResult<Vec<WorkoutSession>>;
}
