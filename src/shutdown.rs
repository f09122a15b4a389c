//! 优雅退出信号模块
//!
//! 服务本身无状态，无需清理资源；这里只负责把 SIGINT / SIGTERM
//! 转成一个可 await 的退出事件，交给 axum 的 graceful shutdown。

/// 退出原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// 用户中断信号 (Ctrl+C)
    Interrupt,
    /// 终止信号 (SIGTERM)
    Terminate,
}

/// 等待进程退出信号，返回触发原因。
///
/// Unix 下同时监听 SIGINT 与 SIGTERM；其他平台只监听 Ctrl+C。
pub async fn wait_for_signal() -> ShutdownReason {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("SIGTERM 监听注册失败，仅响应 Ctrl+C: {}", e);
                let _ = tokio::signal::ctrl_c().await;
                return ShutdownReason::Interrupt;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => ShutdownReason::Interrupt,
            _ = sigterm.recv() => ShutdownReason::Terminate,
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        ShutdownReason::Interrupt
    }
}
