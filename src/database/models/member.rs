// 会员实体
// 对应 members 表

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 会员实体，对外序列化为 `{id, name, age}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// 会员ID，由数据库生成
    pub id: i32,
    /// 姓名，非空
    pub name: String,
    /// 年龄，自由文本，可为空
    pub age: Option<String>,
}
