use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

// 原始 JSON 请求体，解析失败时转成 `_schema` 校验错误而不是 axum 的纯文本响应
#[derive(Debug, Deserialize, FromRequest)]
#[serde(transparent)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody(pub Value);

// 路径中的整数ID
#[derive(Debug, Deserialize, FromRequestParts)]
#[serde(transparent)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath(pub i32);
