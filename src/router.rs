use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors, routes};

// 会员相关的路由
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(routes::member::list_members).post(routes::member::add_member),
        )
        .route(
            "/members/{id}",
            get(routes::member::get_member)
                .put(routes::member::update_member)
                .delete(routes::member::delete_member),
        )
}

// 训练课程相关的路由
// GET 的路径参数是会员ID，PUT 的路径参数是课程ID
pub fn workout_session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workout_sessions",
            get(routes::workout_session::list_workout_sessions)
                .post(routes::workout_session::schedule_workout_session),
        )
        .route(
            "/workout_sessions/{id}",
            put(routes::workout_session::update_workout_session)
                .get(routes::workout_session::list_workout_sessions_by_member),
        )
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(member_routes())
        .merge(workout_session_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http());

    // 开发模式下允许所有来源跨域
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}
