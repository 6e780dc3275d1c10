pub mod member;
pub mod workout_session;
