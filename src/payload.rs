//! base64 / data-URI 载荷编解码
//!
//! 各接口的二进制输入输出统一走这里：输入兼容裸 base64 与
//! `data:<mime>;base64,<payload>` 两种形式，输出一律带 data-URI 前缀。

use base64::{Engine as _, engine::general_purpose::STANDARD as base64_engine};

use crate::error::AppError;

/// 未指明 MIME 时使用的默认类型
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// 解码 base64 载荷。
///
/// 输入含逗号时只取第一个逗号之后的部分作为 base64 数据，
/// 从而透明兼容 `data:<mime>;base64,` 前缀；不含逗号时整串解码。
pub fn decode_payload(data: &str) -> Result<Vec<u8>, AppError> {
    let payload = match data.find(',') {
        Some(idx) => &data[idx + 1..],
        None => data,
    };
    Ok(base64_engine.decode(payload)?)
}

/// 把原始字节编码为 data-URI 字符串：`data:<mime>;base64,<payload>`。
pub fn encode_payload(data: &[u8], mime: &str) -> String {
    let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };
    let b64 = base64_engine.encode(data);
    format!("data:{mime};base64,{b64}")
}
