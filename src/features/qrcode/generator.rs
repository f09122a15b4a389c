//! 二维码生成核心逻辑
//!
//! 纠错等级固定 M，版本按内容自动选择；渲染为黑模块白底的灰度图，
//! 再直接拉伸到目标边长（不保持模块对齐），输出 PNG。

use image::{ImageBuffer, Luma, imageops};
use qrcode::{EcLevel, QrCode};

use crate::error::AppError;

/// 生成 `size × size` 的二维码 PNG。
pub fn generate_png(text: &str, size: u32) -> Result<Vec<u8>, AppError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)
        .map_err(|e| AppError::QrCode(e.to_string()))?;

    let rendered = code.render::<Luma<u8>>().build();
    // 最近邻拉伸：保持模块边缘锐利，便于扫描识别
    let stretched = imageops::resize(&rendered, size, size, imageops::FilterType::Nearest);
    encode_gray_png(&stretched)
}

/// 灰度缓冲编码为 PNG。
fn encode_gray_png(img: &ImageBuffer<Luma<u8>, Vec<u8>>) -> Result<Vec<u8>, AppError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, img.width(), img.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::QrCode(e.to_string()))?;
        writer
            .write_image_data(img.as_raw())
            .map_err(|e| AppError::QrCode(e.to_string()))?;
    }
    Ok(out)
}
