//! 文本转 PDF API 处理模块

use axum::{Router, response::Json, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, ErrorResponse},
    payload,
};

use super::renderer;

/// 文本转 PDF 请求
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"text": "第一行\n第二行"}))]
pub struct ConvertRequest {
    /// 待转换文本。必填且非空。
    #[serde(default)]
    pub text: Option<String>,
}

/// 文本转 PDF 响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ConvertResponse {
    /// 生成的 PDF（data-URI）
    #[schema(example = "data:application/pdf;base64,JVBERi0xLjM...")]
    pub pdf_base64: String,
}

/// 文本转 PDF
#[utoipa::path(
    post,
    path = "/convert",
    summary = "文本转 PDF",
    description = "把纯文本逐行排版为 PDF（A4，固定边距与行距，超长行截断，自动分页）。",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "转换成功", body = ConvertResponse),
        (status = 400, description = "缺少或为空的 text", body = ErrorResponse),
        (status = 500, description = "PDF 生成失败", body = ErrorResponse)
    ),
    tag = "Utility"
)]
pub async fn convert_text(
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    let text = req
        .text
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("text required".to_string()))?;

    let pdf = renderer::render_text(text)?;

    Ok(Json(ConvertResponse {
        pdf_base64: payload::encode_payload(&pdf, "application/pdf"),
    }))
}

/// 构建文本转 PDF 路由
pub fn create_convert_router() -> Router {
    Router::new().route("/convert", post(convert_text))
}
