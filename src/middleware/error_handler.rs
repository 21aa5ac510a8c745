use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

// 日志中最多记录的错误信息长度，响应体本身不截断
const MAX_LOGGED_BODY: usize = 4096;

/// 记录所有 5xx 响应的请求路径和错误信息
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            error!(%method, %uri, status = %parts.status, "Failed to read error body: {}", e);
            parts.headers.remove(header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    error!(
        %method,
        %uri,
        status = %parts.status,
        body = %truncate_for_log(&text, MAX_LOGGED_BODY),
        "Request failed"
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn truncate_for_log(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
