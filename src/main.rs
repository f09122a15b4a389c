use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use utility_backend::config::AppConfig;
use utility_backend::cors::build_cors_layer;
use utility_backend::features::{create_utility_router, health::health_check};
use utility_backend::openapi::ApiDoc;
use utility_backend::request_id::request_trace_middleware;
use utility_backend::shutdown;

/// 按配置初始化日志：RUST_LOG 优先，未设置时回落到 config.logging.level。
fn init_tracing(config: &AppConfig) {
    let default_filter = format!(
        "utility_backend={},tower_http=info",
        config.logging.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "pretty" {
        builder.pretty().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    // 配置先于日志初始化：日志级别与格式来自配置
    if let Err(e) = AppConfig::init_global() {
        eprintln!("Config init failed: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::global();
    init_tracing(config);

    // Routes
    let mut app = Router::new()
        .route("/health", get(health_check))
        .nest(&config.api.prefix, create_utility_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(cors) = build_cors_layer(&config.cors) {
        app = app.layer(cors);
    }

    // request_id 透传 + 访问日志
    app = app.layer(axum::middleware::from_fn(request_trace_middleware));

    // 所有响应都是 JSON 文本（二进制结果以 base64 内嵌），统一启用压缩即可，
    // 无需按 content-type 排除已压缩的二进制格式。
    app = app.layer(CompressionLayer::new());

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Bind address failed {}: {}", addr, e);
            std::process::exit(1);
        });

    tracing::info!("Server: http://{}", addr);
    tracing::info!("Docs: http://{}/docs", addr);
    tracing::info!("Health: http://{}/health", addr);
    tracing::info!("Utility API: http://{}{}", addr, config.api.prefix);

    let graceful = axum::serve(listener, app).with_graceful_shutdown(async {
        let reason = shutdown::wait_for_signal().await;
        tracing::info!("接收到退出信号: {:?}，开始优雅关闭HTTP服务器...", reason);
    });

    if let Err(e) = graceful.await {
        tracing::error!("服务器运行错误: {}", e);
        std::process::exit(1);
    }

    tracing::info!("服务器已优雅关闭");
}
