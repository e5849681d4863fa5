//! 头像缩略图生成
//!
//! 解码上传的图片，按固定宽度等比缩放后重新编码为 JPEG。

use image::imageops::FilterType;

use crate::errors::{Result, SchoolError};

/// 生成固定宽度的 JPEG 缩略图，高度等比缩放（至少 1 像素）
pub fn generate_preview(data: &[u8], width: u32) -> Result<Vec<u8>> {
    let original = image::load_from_memory(data)
        .map_err(|e| SchoolError::image_processing(format!("图片解码失败: {e}")))?;

    let (w, h) = (original.width(), original.height());
    if w == 0 || h == 0 {
        return Err(SchoolError::image_processing("图片尺寸为零"));
    }

    let target_height = ((h as u64 * width as u64) / w as u64).max(1) as u32;
    let scaled = original.resize_exact(width, target_height, FilterType::Triangle);

    // JPEG 不支持透明通道，统一转为 RGB 再编码
    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    image::DynamicImage::ImageRgb8(scaled.to_rgb8())
        .write_to(&mut cursor, image::ImageFormat::Jpeg)
        .map_err(|e| SchoolError::image_processing(format!("缩略图编码失败: {e}")))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
        let mut buf = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buf);
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_preview_has_fixed_width() {
        let png = sample_png(400, 200);
        let preview = generate_preview(&png, 100).unwrap();

        let decoded = image::load_from_memory(&preview).unwrap();
        assert_eq!(decoded.width(), 100);
        assert_eq!(decoded.height(), 50);
    }

    #[test]
    fn test_preview_is_jpeg() {
        let png = sample_png(10, 10);
        let preview = generate_preview(&png, 100).unwrap();
        // JPEG SOI 魔术字节
        assert!(preview.starts_with(&[0xFF, 0xD8, 0xFF]));
    }

    #[test]
    fn test_tiny_source_keeps_min_height() {
        let png = sample_png(500, 1);
        let preview = generate_preview(&png, 100).unwrap();
        let decoded = image::load_from_memory(&preview).unwrap();
        assert_eq!(decoded.height(), 1);
    }

    #[test]
    fn test_garbage_input_fails() {
        assert!(generate_preview(b"definitely not an image", 100).is_err());
    }
}
