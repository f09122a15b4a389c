//! 二维码生成 API 处理模块

use axum::{Router, response::Json, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, ErrorResponse},
    payload,
};

use super::generator;

/// 二维码生成请求
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"text": "https://example.com", "size": 256}))]
pub struct QrRequest {
    /// 二维码内容。必填且非空。
    #[serde(default)]
    pub text: Option<String>,
    /// 输出图片边长（像素，默认 256）
    #[serde(default = "QrRequest::default_size")]
    pub size: u32,
}

impl QrRequest {
    fn default_size() -> u32 {
        256
    }
}

/// 二维码生成响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct QrResponse {
    /// 生成的二维码 PNG（data-URI）
    #[schema(example = "data:image/png;base64,iVBORw0KGgo...")]
    pub qrcode_base64: String,
}

/// 生成二维码
#[utoipa::path(
    post,
    path = "/qrcode",
    summary = "生成二维码",
    description = "以纠错等级 M 生成二维码（版本自动适配内容），\
        拉伸到 size × size 像素后输出 PNG 格式的 data-URI。",
    request_body = QrRequest,
    responses(
        (status = 200, description = "生成成功", body = QrResponse),
        (status = 400, description = "缺少或为空的 text", body = ErrorResponse),
        (status = 500, description = "二维码生成失败", body = ErrorResponse)
    ),
    tag = "Utility"
)]
pub async fn generate_qrcode(Json(req): Json<QrRequest>) -> Result<Json<QrResponse>, AppError> {
    let text = req
        .text
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("text required".to_string()))?;

    let png = generator::generate_png(text, req.size)?;

    Ok(Json(QrResponse {
        qrcode_base64: payload::encode_payload(&png, "image/png"),
    }))
}

/// 构建二维码路由
pub fn create_qrcode_router() -> Router {
    Router::new().route("/qrcode", post(generate_qrcode))
}

#[cfg(test)]
mod tests {
    use super::QrRequest;

    #[test]
    fn size_defaults_to_256() {
        let req: QrRequest = serde_json::from_str(r#"{"text": "hello"}"#).expect("parse");
        assert_eq!(req.size, 256);
    }
}
