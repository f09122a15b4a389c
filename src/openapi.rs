use utoipa::openapi::server::{ServerBuilder, ServerVariableBuilder};
use utoipa::{Modify, OpenApi};

/// 为 Swagger UI 提供正确的“业务接口前缀”Servers 配置。
///
/// - 工具接口默认前缀为 `/api/utility`（对应 `config.api.prefix` / `APP_API_PREFIX`）。
/// - `/health` 不带前缀，因此额外提供 `/` 作为备用 server 以便在 Swagger UI 中切换测试。
struct ApiServers;

impl Modify for ApiServers {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let api = ServerBuilder::new()
            .url("{api_prefix}")
            .description(Some("工具接口（默认 /api/utility）"))
            .parameter(
                "api_prefix",
                ServerVariableBuilder::new()
                    .default_value("/api/utility")
                    .description(Some(
                        "工具接口前缀：对应 config.api.prefix（可通过 APP_API_PREFIX 覆盖）",
                    )),
            )
            .build();

        let root = ServerBuilder::new()
            .url("/")
            .description(Some("根路径（用于 /health 等不带前缀接口）"))
            .build();

        openapi.servers = Some(vec![api, root]);
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::health::handler::health_check,
        crate::features::password::handler::generate_password,
        crate::features::resize::handler::resize_image,
        crate::features::pdf::handler::convert_text,
        crate::features::archive::handler::compress_files,
        crate::features::qrcode::handler::generate_qrcode,
    ),
    modifiers(&ApiServers),
    tags(
        (
            name = "Utility",
            description = "无状态工具接口：密码生成、图片缩放、文本转 PDF、文件压缩、二维码生成。\
                二进制输入输出统一为 base64 / data-URI。"
        ),
        (name = "Health", description = "健康检查：服务探活。"),
    ),
    info(
        title = "Utility Backend API",
        version = env!("CARGO_PKG_VERSION"),
        description = "无状态工具后端服务 API（Axum + utoipa）。注意：除 /health 外，\
            工具接口实际挂载在 `config.api.prefix`（默认 /api/utility）下，\
            OpenAPI 的 paths 不包含该前缀。"
    )
)]
pub struct ApiDoc;
