//! End-to-end pipeline tests: JSON request in, PDF bytes out.

use laurea::{
    generate, generate_batch, render_json, BatchOutcome, CertificateData, CertificateType,
    LaureaError, TemplateConfig, TemplateId,
};

fn sample_data(name: &str) -> CertificateData {
    CertificateData {
        student_name: name.to_string(),
        student_email: None,
        course_name: "Advanced Systems Design".to_string(),
        certificate_type: CertificateType::Completion,
        issue_date: "2024-01-15".to_string(),
        certificate_number: Some("CER-20240115-ABCDEFGHIJ".to_string()),
        instructor_name: Some("Prof. R. Hunter".to_string()),
        hours: Some(40),
        grade: Some(92.0),
    }
}

#[test]
fn classic_end_to_end() {
    let out = generate(
        "classic",
        &sample_data("Jane Doe"),
        &TemplateConfig::default(),
        Some("https://certs.example.com"),
    )
    .unwrap();

    assert!(out.bytes.starts_with(b"%PDF-1.7"));
    assert!(out.bytes.windows(5).any(|w| w == b"%%EOF"));
    assert!(out.data_url.starts_with("data:application/pdf;base64,"));

    // The Info dictionary is uncompressed, so the title is greppable.
    let text = String::from_utf8_lossy(&out.bytes);
    assert!(text.contains("/Title (Certificate - Jane Doe)"));
    assert!(text.contains("/Subject (Advanced Systems Design)"));
}

#[test]
fn every_template_renders() {
    let data = sample_data("Sam Roe");
    for id in TemplateId::ALL {
        let out = generate(id.as_str(), &data, &TemplateConfig::default(), None).unwrap();
        assert!(
            out.bytes.starts_with(b"%PDF-1.7"),
            "template {} produced invalid output",
            id.as_str()
        );
    }
}

#[test]
fn default_classic_page_is_landscape_a4() {
    let out = generate(
        "classic",
        &sample_data("Jane Doe"),
        &TemplateConfig::default(),
        None,
    )
    .unwrap();
    let text = String::from_utf8_lossy(&out.bytes);
    assert!(text.contains("/MediaBox [0 0 841.89 595.28]"));
}

#[test]
fn paper_size_override_changes_media_box() {
    let json = r#"{
        "template": "classic",
        "data": {
            "student_name": "Jane Doe",
            "course_name": "Letters",
            "certificate_type": "participation",
            "issue_date": "2024-01-15"
        },
        "config": {
            "layout": { "paperSize": "LETTER", "orientation": "portrait" }
        }
    }"#;
    let out = render_json(json).unwrap();
    let text = String::from_utf8_lossy(&out.bytes);
    assert!(text.contains("/MediaBox [0 0 612.00 792.00]"));
}

#[test]
fn unknown_template_still_renders() {
    let out = generate(
        "baroque",
        &sample_data("Jane Doe"),
        &TemplateConfig::default(),
        None,
    )
    .unwrap();
    assert!(out.bytes.starts_with(b"%PDF-1.7"));
}

#[test]
fn invalid_override_fails_before_rendering() {
    let json = r#"{
        "template": "classic",
        "data": {
            "student_name": "Jane Doe",
            "course_name": "Letters",
            "certificate_type": "completion",
            "issue_date": "2024-01-15"
        },
        "config": {
            "colors": { "primary": "navy" },
            "ornaments": { "patternOpacity": 3.0 }
        }
    }"#;
    match render_json(json) {
        Err(LaureaError::Validation(errs)) => {
            let msg = errs.to_string();
            assert!(msg.contains("colors.primary"));
            assert!(msg.contains("ornaments.patternOpacity"));
        }
        other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn qr_embedding_adds_an_image_xobject() {
    let data = sample_data("Jane Doe");
    let with_qr = generate(
        "classic",
        &data,
        &TemplateConfig::default(),
        Some("https://certs.example.com"),
    )
    .unwrap();
    let without_qr = generate("classic", &data, &TemplateConfig::default(), None).unwrap();

    let with_text = String::from_utf8_lossy(&with_qr.bytes);
    let without_text = String::from_utf8_lossy(&without_qr.bytes);
    assert!(with_text.contains("/Subtype /Image"));
    assert!(!without_text.contains("/Subtype /Image"));
}

#[test]
fn batch_preserves_order_and_isolates_failures() {
    // The middle record's certificate number is too large to fit any QR
    // symbol version, so its QR generation fails; its neighbors must
    // still render.
    let mut poisoned = sample_data("Bad Record");
    poisoned.certificate_number = Some("X".repeat(8000));

    let records = vec![sample_data("First"), poisoned, sample_data("Third")];
    let outcomes = generate_batch(
        "minimal",
        &records,
        &TemplateConfig::default(),
        Some("https://certs.example.com"),
    );

    assert_eq!(outcomes.len(), 3);
    match &outcomes[0] {
        BatchOutcome::Rendered { index, output } => {
            assert_eq!(*index, 0);
            assert!(output.bytes.starts_with(b"%PDF-1.7"));
        }
        other => panic!("expected first record to render, got {:?}", other),
    }
    match &outcomes[1] {
        BatchOutcome::Failed { index, error } => {
            assert_eq!(*index, 1);
            assert!(matches!(error, LaureaError::QrGeneration(_)));
        }
        other => panic!("expected second record to fail, got {:?}", other),
    }
    match &outcomes[2] {
        BatchOutcome::Rendered { index, .. } => assert_eq!(*index, 2),
        other => panic!("expected third record to render, got {:?}", other),
    }
}

#[test]
fn batch_renders_records_without_certificate_numbers() {
    // No certificate number means the QR is simply omitted, not an error.
    let mut unnumbered = sample_data("No Number");
    unnumbered.certificate_number = None;

    let records = vec![sample_data("Ann"), unnumbered, sample_data("Cy")];
    let outcomes = generate_batch(
        "classic",
        &records,
        &TemplateConfig::default(),
        Some("https://certs.example.com"),
    );

    assert_eq!(outcomes.len(), 3);
    for (i, outcome) in outcomes.iter().enumerate() {
        match outcome {
            BatchOutcome::Rendered { index, .. } => assert_eq!(*index, i),
            other => panic!("record {} should have rendered, got {:?}", i, other),
        }
    }
}

#[test]
fn optional_fields_absent_still_renders() {
    let data = CertificateData {
        student_name: "Minimal Max".to_string(),
        student_email: None,
        course_name: "Bare Essentials".to_string(),
        certificate_type: CertificateType::Participation,
        issue_date: "2024-06-01".to_string(),
        certificate_number: None,
        instructor_name: None,
        hours: None,
        grade: None,
    };
    for id in TemplateId::ALL {
        let out = generate(id.as_str(), &data, &TemplateConfig::default(), None).unwrap();
        assert!(out.bytes.starts_with(b"%PDF-1.7"));
    }
}
