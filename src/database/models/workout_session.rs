// 训练课程实体
// 对应 workout_sessions 表，member_id 外键指向 members.id

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 训练课程实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    /// 课程ID，由数据库生成
    pub id: i32,
    /// 上课日期，序列化为 `YYYY-MM-DD`
    pub session_date: NaiveDate,
    /// 上课时间，不限制格式
    pub session_time: String,
    /// 训练项目
    pub activity: String,
    /// 所属会员ID
    pub member_id: i32,
}
