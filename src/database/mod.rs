// 数据库模块
// 包含实体定义、表结构初始化和存储操作

pub mod models; // 数据库实体定义
pub mod operations; // 数据库操作实现
pub mod schema; // 表结构初始化

#[cfg(test)]
pub mod memory; // 测试用内存存储

// 重新导出常用类型，方便其他模块使用
pub use models::member::Member;
pub use models::workout_session::WorkoutSession;
pub use operations::{FitnessStore, PgStore};
pub use schema::ensure_schema;
