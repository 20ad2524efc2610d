//! Structural validation of a template configuration, independent of
//! rendering. Enum membership is already enforced by the type system at the
//! deserialization boundary; what remains is format and range checking on
//! the stringly and numeric leaves. Fails closed: one invalid field rejects
//! the whole object, and every violation is reported with its dotted path.

use super::TemplateConfig;
use crate::error::{FieldViolation, ValidationErrors};

const MAX_HEADER_LEN: usize = 120;
const MAX_SUBTITLE_LEN: usize = 200;
const MAX_FOOTER_LEN: usize = 300;
const MAX_WATERMARK_LEN: usize = 80;

/// Validate a (possibly partial) configuration. `Ok(())` means every field
/// that is present is well-formed; absent fields are legal at this boundary.
pub fn validate(config: &TemplateConfig) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();

    let colors = [
        ("colors.primary", &config.colors.primary),
        ("colors.secondary", &config.colors.secondary),
        ("colors.accent", &config.colors.accent),
        ("colors.background", &config.colors.background),
        ("colors.text", &config.colors.text),
        ("colors.textMuted", &config.colors.text_muted),
        ("colors.border", &config.colors.border),
    ];
    for (path, value) in colors {
        if let Some(v) = value {
            if !is_hex_color(v) {
                violations.push(FieldViolation::new(
                    path,
                    format!("'{}' is not a 6-digit hex color", v),
                ));
            }
        }
    }

    check_unit_range(
        &mut violations,
        "ornaments.patternOpacity",
        config.ornaments.pattern_opacity,
    );
    check_unit_range(
        &mut violations,
        "ornaments.watermarkOpacity",
        config.ornaments.watermark_opacity,
    );

    check_len(
        &mut violations,
        "content.headerText",
        &config.content.header_text,
        MAX_HEADER_LEN,
    );
    check_len(
        &mut violations,
        "content.subtitleText",
        &config.content.subtitle_text,
        MAX_SUBTITLE_LEN,
    );
    check_len(
        &mut violations,
        "content.footerText",
        &config.content.footer_text,
        MAX_FOOTER_LEN,
    );
    check_len(
        &mut violations,
        "ornaments.watermarkText",
        &config.ornaments.watermark_text,
        MAX_WATERMARK_LEN,
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { violations })
    }
}

/// `#` followed by exactly six hex digits.
fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn check_unit_range(violations: &mut Vec<FieldViolation>, path: &str, value: Option<f64>) {
    if let Some(v) = value {
        if !(0.0..=1.0).contains(&v) || v.is_nan() {
            violations.push(FieldViolation::new(
                path,
                format!("{} is outside 0..=1", v),
            ));
        }
    }
}

fn check_len(
    violations: &mut Vec<FieldViolation>,
    path: &str,
    value: &Option<String>,
    max: usize,
) {
    if let Some(v) = value {
        if v.chars().count() > max {
            violations.push(FieldViolation::new(
                path,
                format!("length {} exceeds maximum of {}", v.chars().count(), max),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, TemplateId};

    #[test]
    fn empty_config_is_valid() {
        assert!(validate(&TemplateConfig::default()).is_ok());
    }

    #[test]
    fn every_template_default_is_valid() {
        for id in TemplateId::ALL {
            assert!(validate(&default_config(id)).is_ok(), "{:?}", id);
        }
    }

    #[test]
    fn bad_hex_color_rejected() {
        let mut cfg = TemplateConfig::default();
        cfg.colors.primary = Some("123456".into()); // missing '#'
        cfg.colors.accent = Some("#12345".into()); // five digits
        cfg.colors.text = Some("#gg0011".into()); // non-hex
        let err = validate(&cfg).unwrap_err();
        let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["colors.primary", "colors.accent", "colors.text"]);
    }

    #[test]
    fn opacity_out_of_range_rejected() {
        let mut cfg = TemplateConfig::default();
        cfg.ornaments.pattern_opacity = Some(1.5);
        cfg.ornaments.watermark_opacity = Some(-0.1);
        let err = validate(&cfg).unwrap_err();
        assert_eq!(err.violations.len(), 2);
    }

    #[test]
    fn overlong_header_text_rejected() {
        let mut cfg = TemplateConfig::default();
        cfg.content.header_text = Some("x".repeat(121));
        let err = validate(&cfg).unwrap_err();
        assert_eq!(err.violations[0].path, "content.headerText");
    }

    #[test]
    fn all_violations_collected_not_just_first() {
        let mut cfg = TemplateConfig::default();
        cfg.colors.primary = Some("bad".into());
        cfg.ornaments.pattern_opacity = Some(2.0);
        cfg.content.footer_text = Some("y".repeat(400));
        let err = validate(&cfg).unwrap_err();
        assert_eq!(err.violations.len(), 3);
    }
}
