use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 应用统一错误类型
///
/// 对外契约：所有错误响应的 JSON 结构固定为 `{"error": <message>}`，
/// 参数校验失败返回 400，其余处理失败（解码、编码、生成器内部错误）
/// 统一返回 500。
#[derive(Error, Debug)]
pub enum AppError {
    /// 参数校验错误（缺少必填字段 / 字段为空）
    #[error("{0}")]
    Validation(String),

    /// base64 载荷解码错误
    #[error("base64 解码失败: {0}")]
    Decode(String),

    /// 图像处理错误（解码、缩放、PNG 编码）
    #[error("图像处理失败: {0}")]
    Image(String),

    /// PDF 生成错误
    #[error("PDF 生成失败: {0}")]
    Pdf(String),

    /// 压缩包写入错误
    #[error("压缩包生成失败: {0}")]
    Archive(String),

    /// 二维码生成错误
    #[error("二维码生成失败: {0}")]
    QrCode(String),

    /// 内部服务器错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误响应体：`{"error": <message>}`
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// 错误描述
    #[schema(example = "image_base64 required")]
    pub error: String,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Decode(_)
            | AppError::Image(_)
            | AppError::Pdf(_)
            | AppError::Archive(_)
            | AppError::QrCode(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        let mut res = Json(body).into_response();
        *res.status_mut() = status;
        res
    }
}

// =============== 常见外部错误到 AppError 的转换 ===============

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::Image(err.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::Archive(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Archive(err.to_string())
    }
}
