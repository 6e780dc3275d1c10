use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

// 错误响应体一般很短，超出部分不记录
const MAX_LOGGED_BODY: usize = 64 * 1024;

// 记录所有 5xx 响应的状态码和响应体，响应本身原样返回
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read error response body for {} {}: {}", method, uri, e);
            parts.headers.remove(header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        "Server error on {} {} - Status: {}, Body: {}",
        method,
        uri,
        parts.status,
        String::from_utf8_lossy(&bytes)
    );

    // 重置body以便重新构建响应
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
