//! 文件压缩 API 处理模块

use axum::{Router, response::Json, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, ErrorResponse},
    payload,
};

use super::writer::{self, ArchiveEntry};

/// 文件压缩请求
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({
    "files": [{"name": "a.txt", "data_base64": "aGVsbG8="}]
}))]
pub struct CompressRequest {
    /// 待压缩文件列表（有序）。必填且非空。
    #[serde(default)]
    pub files: Vec<ArchiveEntry>,
}

/// 文件压缩响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CompressResponse {
    /// 生成的 zip 压缩包（data-URI）
    #[schema(example = "data:application/zip;base64,UEsDBBQ...")]
    pub zip_base64: String,
}

/// 压缩文件列表为 zip
#[utoipa::path(
    post,
    path = "/compress",
    summary = "压缩文件列表为 zip",
    description = "把 base64 编码的文件列表打成一个 deflate 压缩的 zip。\
        缺少内容的条目跳过，条目名缺省为 \"file\"，同名条目不去重。",
    request_body = CompressRequest,
    responses(
        (status = 200, description = "压缩成功", body = CompressResponse),
        (status = 400, description = "files 列表为空", body = ErrorResponse),
        (status = 500, description = "压缩包生成失败", body = ErrorResponse)
    ),
    tag = "Utility"
)]
pub async fn compress_files(
    Json(req): Json<CompressRequest>,
) -> Result<Json<CompressResponse>, AppError> {
    if req.files.is_empty() {
        return Err(AppError::Validation("files required".to_string()));
    }

    let archive = writer::build_archive(&req.files)?;

    Ok(Json(CompressResponse {
        zip_base64: payload::encode_payload(&archive, "application/zip"),
    }))
}

/// 构建文件压缩路由
pub fn create_compress_router() -> Router {
    Router::new().route("/compress", post(compress_files))
}
