mod handler;

pub use handler::{
    list_workout_sessions,
    list_workout_sessions_by_member,
    schedule_workout_session,
    update_workout_session,
};
