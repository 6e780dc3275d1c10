// 请求体校验
// 请求体先反序列化为带 Validate 的请求结构，再把所有错误整理成
// 字段 -> 错误信息列表 的映射返回给调用方

mod member;
mod workout_session;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

pub use member::{CreateMemberRequest, MemberChanges, NewMember};
pub use workout_session::{CreateWorkoutSessionRequest, NewWorkoutSession, WorkoutSessionChanges};

pub const MISSING: &str = "Missing data for required field.";
pub const NOT_STRING: &str = "Not a valid string.";
pub const NOT_INTEGER: &str = "Not a valid integer.";
pub const NOT_DATE: &str = "Not a valid date.";
pub const NUL_CHARACTER: &str = "Contains a null character.";
pub const INVALID_INPUT: &str = "Invalid input type.";

// 针对整个请求体（而非某个字段）的错误使用该键
pub const SCHEMA_KEY: &str = "_schema";

// 字段到错误信息的映射，序列化为普通 JSON 对象
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn schema(message: &str) -> Self {
        Self::single(SCHEMA_KEY, message)
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

// 从 validator 错误转换，没有自定义信息时使用错误码
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut converted = Self::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                converted.add(&field.to_string(), message);
            }
        }
        converted
    }
}

// 反序列化并校验请求体
//
// 类型错误由 serde 报告（只报第一个，键为出错字段），
// 其余约束由 validator 一次性全部报告
pub fn parse<T>(body: Value) -> Result<T, ValidationErrors>
where
    T: DeserializeOwned + Validate,
{
    let Some(fields) = body.as_object() else {
        return Err(ValidationErrors::schema(INVALID_INPUT));
    };

    // PostgreSQL 的文本类型不能保存 \0
    let mut nul_errors = ValidationErrors::default();
    for (field, value) in fields {
        if value.as_str().is_some_and(|s| s.contains('\0')) {
            nul_errors.add(field, NUL_CHARACTER);
        }
    }
    if !nul_errors.is_empty() {
        return Err(nul_errors);
    }

    let request: T = serde_path_to_error::deserialize(body).map_err(|err| {
        let path = err.path().to_string();
        let field = if path == "." { SCHEMA_KEY } else { path.as_str() };
        ValidationErrors::single(field, &describe(err.inner()))
    })?;

    request.validate()?;
    Ok(request)
}

// serde 的类型错误信息换成统一的提示
fn describe(err: &serde_json::Error) -> String {
    let message = err.to_string();
    if message.starts_with("invalid type") && message.contains("expected a string") {
        NOT_STRING.to_string()
    } else {
        message
    }
}

// 整数字段：接受整数、整数值的浮点数（如 1.0）以及内容为整数的字符串
pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => parse_i32(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(NOT_INTEGER)),
    }
}

fn parse_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(n) => i32::try_from(n).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                .map(|f| f as i32),
        },
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

// 日期字段：只接受 YYYY-MM-DD
pub(crate) fn iso_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::String(s)) => parse_iso_date(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(NOT_DATE)),
        Some(_) => Err(D::Error::custom(NOT_DATE)),
    }
}

fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}
