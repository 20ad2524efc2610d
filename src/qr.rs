//! QR image generation for the certificate validation URL.
//!
//! Produces an RGB pixel buffer ready for PDF embedding: dark modules in
//! black on white, a standard 4-module quiet zone, and an integer scale so
//! module edges stay crisp when the image is placed at its configured size.

use qrcode::{Color as ModuleColor, EcLevel, QrCode};

use crate::error::LaureaError;
use crate::model::ImageData;

const QUIET_ZONE: u32 = 4;
const MODULE_SCALE: u32 = 4;

/// Build the validation URL encoded in a certificate's QR symbol.
pub fn validation_url(base_url: &str, certificate_number: &str) -> String {
    format!(
        "{}/validate/{}",
        base_url.trim_end_matches('/'),
        certificate_number
    )
}

/// Generate the QR symbol for a URL. Fatal on failure — the caller decides
/// whether to abort or render without a QR.
pub fn generate(url: &str) -> Result<ImageData, LaureaError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)
        .map_err(|e| LaureaError::QrGeneration(e.to_string()))?;

    let modules = code.to_colors();
    let width = code.width() as u32;
    let total = (width + 2 * QUIET_ZONE) * MODULE_SCALE;

    let mut rgb = vec![0xFFu8; (total * total * 3) as usize];
    for my in 0..width {
        for mx in 0..width {
            if modules[(my * width + mx) as usize] == ModuleColor::Dark {
                let px0 = (mx + QUIET_ZONE) * MODULE_SCALE;
                let py0 = (my + QUIET_ZONE) * MODULE_SCALE;
                for py in py0..py0 + MODULE_SCALE {
                    for px in px0..px0 + MODULE_SCALE {
                        let idx = ((py * total + px) * 3) as usize;
                        rgb[idx] = 0;
                        rgb[idx + 1] = 0;
                        rgb[idx + 2] = 0;
                    }
                }
            }
        }
    }

    Ok(ImageData::from_rgb(total, total, rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_url_shape() {
        assert_eq!(
            validation_url("https://certs.example.com", "CER-20240115-ABCDEFGHIJ"),
            "https://certs.example.com/validate/CER-20240115-ABCDEFGHIJ"
        );
        // Trailing slash on the base does not double up.
        assert_eq!(
            validation_url("https://certs.example.com/", "X"),
            "https://certs.example.com/validate/X"
        );
    }

    #[test]
    fn generated_symbol_is_square_with_quiet_zone() {
        let img = generate("https://certs.example.com/validate/CER-1").unwrap();
        assert_eq!(img.width_px, img.height_px);
        // Smallest version is 21 modules; plus quiet zone, times scale.
        assert!(img.width_px >= (21 + 2 * QUIET_ZONE) * MODULE_SCALE);
        assert!(img.alpha.is_none());
    }

    #[test]
    fn symbol_contains_dark_and_light_pixels() {
        let img = generate("https://certs.example.com/validate/CER-2").unwrap();
        let any_dark = img.rgb.chunks(3).any(|px| px == [0, 0, 0]);
        let any_light = img.rgb.chunks(3).any(|px| px == [255, 255, 255]);
        assert!(any_dark && any_light);
    }

    #[test]
    fn oversized_payload_is_a_qr_error() {
        let huge = "x".repeat(8000);
        match generate(&huge) {
            Err(LaureaError::QrGeneration(_)) => {}
            other => panic!("expected QrGeneration error, got {:?}", other.map(|_| ())),
        }
    }
}
