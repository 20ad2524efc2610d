//! Document assembly: the pipeline from certificate data plus a partial
//! configuration to finished PDF bytes.
//!
//! The steps, in order: resolve the template id (unknown ids warn and fall
//! back to classic), validate the overrides, merge them against the
//! template defaults into a resolved style sheet, compute page geometry,
//! generate the QR symbol when one is called for, render the document
//! tree, and serialize it. Batch generation runs the same pipeline per
//! record with strict isolation — one bad record never takes down the run.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::config::{default_config, validate, TemplateConfig, TemplateId};
use crate::data::CertificateData;
use crate::error::LaureaError;
use crate::font::ensure_fonts_registered;
use crate::model::ImageData;
use crate::pdf::PdfWriter;
use crate::qr;
use crate::style;
use crate::templates;

/// A finished certificate: raw PDF bytes plus a ready-to-embed data URL.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub data_url: String,
}

/// Outcome of one record in a batch run.
#[derive(Debug)]
pub enum BatchOutcome {
    Rendered { index: usize, output: Rendered },
    Failed { index: usize, error: LaureaError },
}

/// A complete generation request, as accepted by the CLI and any embedding
/// caller that prefers one serializable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template: String,
    pub data: CertificateData,
    #[serde(default)]
    pub config: TemplateConfig,
    /// Base URL for QR validation links; no URL means no QR.
    #[serde(default)]
    pub validation_base_url: Option<String>,
}

/// Generate a single certificate PDF.
pub fn generate(
    template_id: &str,
    data: &CertificateData,
    overrides: &TemplateConfig,
    validation_base_url: Option<&str>,
) -> Result<Rendered, LaureaError> {
    ensure_fonts_registered();

    let template = resolve_template(template_id);
    validate(overrides)?;

    let defaults = default_config(template);
    let sheet = style::resolve(overrides, &defaults);

    let (page_w, page_h) = sheet.paper_size.dimensions(sheet.orientation);

    let qr_image = build_qr(sheet.show_qr, data, validation_base_url)?;

    let doc = templates::render(template, data, &sheet, qr_image.as_ref(), page_w, page_h);
    let bytes = PdfWriter::new().write(&doc)?;
    let data_url = to_data_url(&bytes);

    Ok(Rendered { bytes, data_url })
}

/// Generate certificates for a batch of records, sequentially and in input
/// order. Each record succeeds or fails on its own.
pub fn generate_batch(
    template_id: &str,
    records: &[CertificateData],
    overrides: &TemplateConfig,
    validation_base_url: Option<&str>,
) -> Vec<BatchOutcome> {
    records
        .iter()
        .enumerate()
        .map(|(index, data)| {
            match generate(template_id, data, overrides, validation_base_url) {
                Ok(output) => BatchOutcome::Rendered { index, output },
                Err(error) => {
                    log::warn!("batch record {} failed: {}", index, error);
                    BatchOutcome::Failed { index, error }
                }
            }
        })
        .collect()
}

/// Run a full request as one unit.
pub fn run_request(request: &RenderRequest) -> Result<Rendered, LaureaError> {
    generate(
        &request.template,
        &request.data,
        &request.config,
        request.validation_base_url.as_deref(),
    )
}

fn resolve_template(id: &str) -> TemplateId {
    match TemplateId::parse(id) {
        Some(t) => t,
        None => {
            log::warn!("unknown template {:?}, falling back to classic", id);
            TemplateId::Classic
        }
    }
}

/// A QR symbol is generated only when the resolved config asks for one AND
/// the record carries a certificate number AND a validation base URL was
/// supplied. QR generation failure is fatal for the record.
fn build_qr(
    show_qr: bool,
    data: &CertificateData,
    validation_base_url: Option<&str>,
) -> Result<Option<ImageData>, LaureaError> {
    if !show_qr {
        return Ok(None);
    }
    let (Some(number), Some(base)) = (&data.certificate_number, validation_base_url) else {
        return Ok(None);
    };
    let url = qr::validation_url(base, number);
    qr::generate(&url).map(Some)
}

fn to_data_url(bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:application/pdf;base64,{}", b64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CertificateType;

    fn sample_data() -> CertificateData {
        CertificateData {
            student_name: "Jane Doe".to_string(),
            student_email: None,
            course_name: "Applied Typography".to_string(),
            certificate_type: CertificateType::Completion,
            issue_date: "2024-01-15".to_string(),
            certificate_number: Some("CER-20240115-ABCDEFGHIJ".to_string()),
            instructor_name: Some("R. Hunter".to_string()),
            hours: Some(40),
            grade: Some(92.0),
        }
    }

    #[test]
    fn unknown_template_falls_back_to_classic() {
        let out = generate("baroque", &sample_data(), &TemplateConfig::default(), None).unwrap();
        assert!(out.bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn data_url_has_pdf_prefix() {
        let out = generate("minimal", &sample_data(), &TemplateConfig::default(), None).unwrap();
        assert!(out.data_url.starts_with("data:application/pdf;base64,"));
        // The payload must round-trip back to the same bytes.
        let payload = &out.data_url["data:application/pdf;base64,".len()..];
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(decoded, out.bytes);
    }

    #[test]
    fn invalid_config_is_rejected_before_rendering() {
        let mut overrides = TemplateConfig::default();
        overrides.colors.primary = Some("blue".to_string());
        let err = generate("classic", &sample_data(), &overrides, None).unwrap_err();
        assert!(matches!(err, LaureaError::Validation(_)));
    }

    #[test]
    fn qr_skipped_without_certificate_number() {
        let mut data = sample_data();
        data.certificate_number = None;
        let qr = build_qr(true, &data, Some("https://certs.example.com")).unwrap();
        assert!(qr.is_none());
    }

    #[test]
    fn qr_skipped_without_base_url() {
        let qr = build_qr(true, &sample_data(), None).unwrap();
        assert!(qr.is_none());
    }

    #[test]
    fn qr_built_when_all_conditions_hold() {
        let qr = build_qr(true, &sample_data(), Some("https://certs.example.com")).unwrap();
        assert!(qr.is_some());
    }
}
