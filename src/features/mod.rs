use axum::Router;

/// 密码生成
pub mod password;

/// 图片缩放
pub mod resize;

/// 文本转 PDF
pub mod pdf;

/// 文件压缩打包
pub mod archive;

/// 二维码生成
pub mod qrcode;

/// 健康检查
pub mod health;

/// 聚合五个工具接口的路由（不含前缀，前缀由 main.rs 按配置挂载）。
pub fn create_utility_router() -> Router {
    Router::new()
        .merge(password::create_password_router())
        .merge(resize::create_resize_router())
        .merge(pdf::create_convert_router())
        .merge(archive::create_compress_router())
        .merge(qrcode::create_qrcode_router())
}
