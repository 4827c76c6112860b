use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{GrayImage, ImageFormat, Luma};
use qrcode::types::{Color, EcLevel};
use qrcode::QrCode;
use std::io::Cursor;
use thiserror::Error;
use typed_builder::TypedBuilder;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("failed to encode qr code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("failed to render qr code: {0}")]
    Render(#[from] image::ImageError),
}

/// Turns text into a scannable image, delivered as a `data:` URL.
pub trait QrEncoder: Send + Sync + 'static {
    /// Fails when `text` does not fit in any QR symbol. Nothing is rendered.
    fn check_capacity(&self, text: &str) -> Result<(), QrError>;

    fn encode_data_url(&self, text: &str) -> Result<String, QrError>;
}

/// Renders QR codes as grayscale PNG images.
#[derive(Debug, Clone, TypedBuilder)]
pub struct PngQrEncoder {
    #[builder(default = EcLevel::H)]
    ec_level: EcLevel,
    /// Quiet zone around the symbol, in modules.
    #[builder(default = 1)]
    margin: u32,
    /// Edge length of one module, in pixels.
    #[builder(default = 8)]
    module_size: u32,
}

impl Default for PngQrEncoder {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PngQrEncoder {
    /// Renders `text` into PNG bytes.
    pub fn render_png(&self, text: &str) -> Result<Vec<u8>, QrError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), self.ec_level)?;
        let width = code.width() as u32;
        let colors = code.to_colors();

        let margin = self.margin;
        let module_size = self.module_size.max(1);
        let side = (width + 2 * margin) * module_size;

        let image = GrayImage::from_fn(side, side, |x, y| {
            let (mx, my) = (x / module_size, y / module_size);
            let inside = (margin..margin + width).contains(&mx)
                && (margin..margin + width).contains(&my);
            let dark = inside
                && colors[((my - margin) * width + (mx - margin)) as usize] == Color::Dark;
            Luma([if dark { 0 } else { 255 }])
        });

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}

impl QrEncoder for PngQrEncoder {
    fn check_capacity(&self, text: &str) -> Result<(), QrError> {
        QrCode::with_error_correction_level(text.as_bytes(), self.ec_level)?;
        Ok(())
    }

    fn encode_data_url(&self, text: &str) -> Result<String, QrError> {
        let png = self.render_png(text)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn data_url_wraps_base64_png() {
        let encoder = PngQrEncoder::default();

        let url = encoder
            .encode_data_url("http://localhost:3000/abc123")
            .unwrap();

        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let png = STANDARD.decode(payload).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn image_size_includes_margin() {
        let text = "https://snap.link/Xy12Zz";
        let encoder = PngQrEncoder::builder().margin(1).module_size(4).build();
        let modules = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)
            .unwrap()
            .width() as u32;

        let png = encoder.render_png(text).unwrap();
        let image = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .to_luma8();

        assert_eq!(image.width(), (modules + 2) * 4);
        assert_eq!(image.height(), image.width());
        // quiet zone is light, the top-left finder pattern is dark
        assert_eq!(image.get_pixel(0, 0), &Luma([255]));
        assert_eq!(image.get_pixel(4, 4), &Luma([0]));
    }

    #[test]
    fn capacity_check_matches_encoding() {
        let encoder = PngQrEncoder::default();

        assert!(encoder.check_capacity("https://snap.link/Xy12Zz").is_ok());
        assert!(matches!(
            encoder.check_capacity(&"a".repeat(4_000)),
            Err(QrError::Encode(_))
        ));
    }

    #[test]
    fn oversized_input_is_an_encode_error() {
        let encoder = PngQrEncoder::default();
        let text = "a".repeat(4_000);

        assert!(matches!(
            encoder.encode_data_url(&text),
            Err(QrError::Encode(_))
        ));
    }
}
