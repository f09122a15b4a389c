use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// 请求上下文中的 request_id。
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const REQUEST_ID_HEADER: &str = "x-request-id";

/// 客户端传入的 request_id 只接受受限字符集，避免日志注入。
fn is_acceptable_request_id(v: &str) -> bool {
    let ok_char = |b: u8| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.';
    !v.is_empty() && v.len() <= 128 && v.bytes().all(ok_char)
}

fn resolve_request_id(req: &Request) -> String {
    let inbound = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim);
    match inbound {
        Some(raw) if is_acceptable_request_id(raw) => raw.to_string(),
        _ => format!("req_{}", Uuid::new_v4().simple()),
    }
}

/// 全局请求中间件：request_id 透传 + 访问日志。
///
/// - 优先透传客户端传入的 `X-Request-Id`，缺失或非法时服务端生成
/// - 回写到响应头
/// - 每个请求完成后输出一条带 request_id、状态码与耗时的访问日志
pub async fn request_trace_middleware(mut req: Request, next: Next) -> Response {
    let request_id = resolve_request_id(&req);
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let started = Instant::now();
    let mut res = next.run(req).await;
    let elapsed = started.elapsed();

    tracing::info!(
        target: "utility_backend::access",
        %method,
        path = %path,
        status = res.status().as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        request_id = %request_id,
        "request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    res
}
