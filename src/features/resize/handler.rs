//! 图片缩放 API 处理模块

use axum::{Router, response::Json, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, ErrorResponse},
    payload,
};

use super::processor;

/// 图片缩放请求
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({
    "image_base64": "data:image/png;base64,iVBORw0KGgo...",
    "width": 800,
    "height": 600
}))]
pub struct ResizeRequest {
    /// 待缩放图片（base64，可带 data-URI 前缀）。必填。
    #[serde(default)]
    pub image_base64: Option<String>,
    /// 目标宽度（默认 800）
    #[serde(default = "ResizeRequest::default_width")]
    pub width: u32,
    /// 目标高度（默认 600）
    #[serde(default = "ResizeRequest::default_height")]
    pub height: u32,
}

impl ResizeRequest {
    fn default_width() -> u32 {
        800
    }

    fn default_height() -> u32 {
        600
    }
}

/// 图片缩放响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ResizeResponse {
    /// 缩放后的 PNG（data-URI）
    #[schema(example = "data:image/png;base64,iVBORw0KGgo...")]
    pub image_base64: String,
}

/// 缩放图片
#[utoipa::path(
    post,
    path = "/resize",
    summary = "缩放图片",
    description = "解码输入图片并缩放到指定尺寸（不保持纵横比，Lanczos 重采样），\
        输出 PNG 格式的 data-URI。",
    request_body = ResizeRequest,
    responses(
        (status = 200, description = "缩放成功", body = ResizeResponse),
        (status = 400, description = "缺少 image_base64", body = ErrorResponse),
        (status = 500, description = "解码/缩放/编码失败", body = ErrorResponse)
    ),
    tag = "Utility"
)]
pub async fn resize_image(
    Json(req): Json<ResizeRequest>,
) -> Result<Json<ResizeResponse>, AppError> {
    let image_base64 = req
        .image_base64
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("image_base64 required".to_string()))?;

    let input = payload::decode_payload(image_base64)?;
    let output = processor::resize_to_png(&input, req.width, req.height)?;

    Ok(Json(ResizeResponse {
        image_base64: payload::encode_payload(&output, "image/png"),
    }))
}

/// 构建图片缩放路由
pub fn create_resize_router() -> Router {
    Router::new().route("/resize", post(resize_image))
}

#[cfg(test)]
mod tests {
    use super::ResizeRequest;

    #[test]
    fn dimensions_default_to_800_by_600() {
        let req: ResizeRequest = serde_json::from_str(r#"{"image_base64": "aGVsbG8="}"#)
            .expect("parse");
        assert_eq!(req.width, 800);
        assert_eq!(req.height, 600);
    }

    #[test]
    fn missing_image_deserializes_as_none() {
        let req: ResizeRequest = serde_json::from_str("{}").expect("parse");
        assert!(req.image_base64.is_none());
    }
}
