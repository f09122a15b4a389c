//! 密码生成 API 处理模块

use axum::{Router, response::Json, routing::post};
use serde::{Deserialize, Serialize};

use super::generator::{self, CharsetOptions};

/// 密码生成请求
///
/// 所有字段均可省略：长度默认 16（下限 4），三类可选字符默认全开。
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({
    "length": 16,
    "use_upper": true,
    "use_digits": true,
    "use_symbols": true
}))]
pub struct PasswordRequest {
    /// 密码长度（默认 16，最小 4）
    #[serde(default = "PasswordRequest::default_length")]
    pub length: i64,
    /// 是否包含大写字母（默认 true）
    #[serde(default = "PasswordRequest::default_flag")]
    pub use_upper: bool,
    /// 是否包含数字（默认 true）
    #[serde(default = "PasswordRequest::default_flag")]
    pub use_digits: bool,
    /// 是否包含符号（默认 true）
    #[serde(default = "PasswordRequest::default_flag")]
    pub use_symbols: bool,
}

impl PasswordRequest {
    fn default_length() -> i64 {
        16
    }

    fn default_flag() -> bool {
        true
    }
}

/// 密码生成响应
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PasswordResponse {
    /// 生成的随机密码
    #[schema(example = "x7#Kp2qW!mZr9t@B")]
    pub password: String,
}

/// 生成随机密码
#[utoipa::path(
    post,
    path = "/password",
    summary = "生成随机密码",
    description = "按给定长度与字符类开关生成随机密码。小写字母始终包含；\
        长度下限为 4。随机源为操作系统 CSPRNG。",
    request_body = PasswordRequest,
    responses((status = 200, description = "生成成功", body = PasswordResponse)),
    tag = "Utility"
)]
pub async fn generate_password(Json(req): Json<PasswordRequest>) -> Json<PasswordResponse> {
    let password = generator::generate(
        req.length,
        CharsetOptions {
            use_upper: req.use_upper,
            use_digits: req.use_digits,
            use_symbols: req.use_symbols,
        },
    );
    Json(PasswordResponse { password })
}

/// 构建密码生成路由
pub fn create_password_router() -> Router {
    Router::new().route("/password", post(generate_password))
}
