// 训练课程请求体

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use super::{MISSING, ValidationErrors, iso_date, lenient_i32, parse};

// 预约课程请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkoutSessionRequest {
    #[serde(default, deserialize_with = "iso_date")]
    #[validate(required(message = "Missing data for required field."))]
    pub session_date: Option<NaiveDate>,
    #[validate(
        required(message = "Missing data for required field."),
        length(max = 50, message = "Longer than maximum length 50.")
    )]
    pub session_time: Option<String>,
    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, max = 100, message = "Length must be between 1 and 100.")
    )]
    pub activity: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    #[validate(required(message = "Missing data for required field."))]
    pub member_id: Option<i32>,
}

// 校验通过的新课程
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutSession {
    pub session_date: NaiveDate,
    pub session_time: String,
    pub activity: String,
    pub member_id: i32,
}

// 课程部分更新，未出现的字段保持不变
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct WorkoutSessionChanges {
    #[serde(default, deserialize_with = "iso_date")]
    pub session_date: Option<NaiveDate>,
    #[validate(length(max = 50, message = "Longer than maximum length 50."))]
    pub session_time: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Length must be between 1 and 100."))]
    pub activity: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub member_id: Option<i32>,
}

impl NewWorkoutSession {
    pub fn from_body(body: Value) -> Result<Self, ValidationErrors> {
        let request: CreateWorkoutSessionRequest = parse(body)?;
        match request {
            CreateWorkoutSessionRequest {
                session_date: Some(session_date),
                session_time: Some(session_time),
                activity: Some(activity),
                member_id: Some(member_id),
            } => Ok(NewWorkoutSession {
                session_date,
                session_time,
                activity,
                member_id,
            }),
            // required 校验已覆盖，这里只是兜底
            _ => Err(ValidationErrors::schema(MISSING)),
        }
    }
}

impl WorkoutSessionChanges {
    pub fn from_body(body: Value) -> Result<Self, ValidationErrors> {
        parse(body)
    }

    pub fn is_empty(&self) -> bool {
        self.session_date.is_none()
            && self.session_time.is_none()
            && self.activity.is_none()
            && self.member_id.is_none()
    }
}
