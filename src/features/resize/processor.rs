//! 图片缩放核心逻辑
//!
//! 解码任意常见格式 → 统一转 RGBA8 → Lanczos3 重采样到目标尺寸 → PNG 编码。
//! 缩放不保持纵横比，严格输出 `width × height`。

use image::{RgbaImage, imageops};

use crate::error::AppError;

/// 把输入图片字节缩放为指定尺寸的 PNG。
pub fn resize_to_png(input: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(input)?;
    let rgba = img.to_rgba8();
    let resized = imageops::resize(&rgba, width, height, imageops::FilterType::Lanczos3);
    encode_rgba_png(&resized)
}

/// RGBA8 缓冲编码为 PNG。
///
/// 使用 png crate 直接编码，避免经由 DynamicImage 的二次拷贝。
fn encode_rgba_png(img: &RgbaImage) -> Result<Vec<u8>, AppError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        encoder.set_filter(png::FilterType::Paeth);

        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::Image(e.to_string()))?;
        writer
            .write_image_data(img.as_raw())
            .map_err(|e| AppError::Image(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::resize_to_png;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    /// 生成一张纯色测试图的 PNG 字节。
    fn solid_png(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, color);
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .expect("encode test png");
        out
    }

    #[test]
    fn resize_produces_exact_target_dimensions() {
        let input = solid_png(100, 100, Rgba([200, 10, 10, 255]));
        let output = resize_to_png(&input, 50, 50).expect("resize");

        let decoded = image::load_from_memory(&output).expect("decode output");
        assert_eq!(decoded.width(), 50);
        assert_eq!(decoded.height(), 50);
    }

    #[test]
    fn resize_does_not_preserve_aspect_ratio() {
        let input = solid_png(100, 100, Rgba([0, 0, 0, 255]));
        let output = resize_to_png(&input, 80, 20).expect("resize");

        let decoded = image::load_from_memory(&output).expect("decode output");
        assert_eq!((decoded.width(), decoded.height()), (80, 20));
    }

    #[test]
    fn solid_color_survives_resampling() {
        let input = solid_png(100, 100, Rgba([37, 120, 200, 255]));
        let output = resize_to_png(&input, 50, 50).expect("resize");

        let decoded = image::load_from_memory(&output).expect("decode output").to_rgba8();
        // 纯色图重采样后仍应是同一颜色
        assert_eq!(decoded.get_pixel(25, 25), &Rgba([37, 120, 200, 255]));
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert!(resize_to_png(b"definitely not an image", 50, 50).is_err());
    }
}
