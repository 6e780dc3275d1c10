// 数据库表结构
// 启动时执行，表已存在时不做任何修改

use sqlx::PgPool;

const CREATE_MEMBERS: &str = r#"
    CREATE TABLE IF NOT EXISTS members (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        age VARCHAR(100)
    )
"#;

// 删除会员时级联删除其课程
const CREATE_WORKOUT_SESSIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS workout_sessions (
        id SERIAL PRIMARY KEY,
        session_date DATE NOT NULL,
        session_time VARCHAR(50) NOT NULL,
        activity VARCHAR(100) NOT NULL,
        member_id INTEGER NOT NULL REFERENCES members(id) ON DELETE CASCADE
    )
"#;

const CREATE_MEMBER_ID_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_workout_sessions_member_id
    ON workout_sessions (member_id)
"#;

/// 创建 members 和 workout_sessions 表（如不存在）
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_MEMBERS, CREATE_WORKOUT_SESSIONS, CREATE_MEMBER_ID_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Database schema ready");
    Ok(())
}
