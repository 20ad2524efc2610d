//! Per-template default configurations.
//!
//! Every field of every section is populated here — `default_config` is the
//! total function the rest of the engine leans on. The style resolver still
//! applies hard constant fallbacks per field, but with these defaults in
//! place those fallbacks only matter for hand-built partial configs that
//! bypass this registry.

use super::*;

/// The closed set of template identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Classic,
    Minimal,
    Creative,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Classic, TemplateId::Minimal, TemplateId::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
        }
    }

    /// Strict parse. The assembler layers the classic fallback on top of
    /// this; nothing else should.
    pub fn parse(s: &str) -> Option<TemplateId> {
        match s {
            "classic" => Some(TemplateId::Classic),
            "minimal" => Some(TemplateId::Minimal),
            "creative" => Some(TemplateId::Creative),
            _ => None,
        }
    }
}

/// The fully-populated default configuration for a template.
pub fn default_config(template: TemplateId) -> TemplateConfig {
    match template {
        TemplateId::Classic => classic_defaults(),
        TemplateId::Minimal => minimal_defaults(),
        TemplateId::Creative => creative_defaults(),
    }
}

/// Formal diploma look: serif typography, double border, ornate corners,
/// a centered classic seal.
fn classic_defaults() -> TemplateConfig {
    TemplateConfig {
        colors: ColorConfig {
            primary: Some("#1e3a5f".into()),
            secondary: Some("#c9a227".into()),
            accent: Some("#8b1a1a".into()),
            background: Some("#fdfbf5".into()),
            text: Some("#1f2430".into()),
            text_muted: Some("#6b7280".into()),
            border: Some("#1e3a5f".into()),
        },
        typography: TypographyConfig {
            title_family: Some(FontRole::Serif),
            body_family: Some(FontRole::Serif),
            accent_family: Some(FontRole::Script),
            scale: Some(SizeScale::Normal),
            title_weight: Some(WeightTier::Bold),
            name_weight: Some(WeightTier::Bold),
            title_transform: Some(TextTransformOption::Uppercase),
            alignment: Some(TextAlignment::Center),
        },
        border: BorderConfig {
            style: Some(BorderStyle::Double),
            width: Some(StrokeWidthTier::Medium),
            corner_radius: Some(CornerRadiusTier::None),
            padding: Some(PaddingTier::Normal),
            corner_ornaments: Some(CornerOrnamentStyle::Ornate),
        },
        ornaments: OrnamentConfig {
            divider: Some(DividerStyle::Ornate),
            show_seal: Some(true),
            seal_style: Some(SealStyle::Classic),
            seal_position: Some(SealPosition::Center),
            background_pattern: Some(BackgroundPattern::None),
            pattern_opacity: Some(0.06),
            watermark_text: None,
            watermark_opacity: Some(0.05),
        },
        layout: LayoutConfig {
            orientation: Some(Orientation::Landscape),
            paper_size: Some(PaperSize::A4),
            logo_position: Some(HorizontalPosition::Center),
            logo_size: Some(SizeTier::Medium),
            qr_position: Some(HorizontalPosition::Right),
            qr_size: Some(SizeTier::Medium),
            signature_position: Some(SignaturePosition::Center),
            show_signature_line: Some(true),
            vertical_balance: Some(VerticalBalance::Balanced),
        },
        content: ContentConfig {
            show_subtitle: Some(true),
            show_hours: Some(true),
            show_grade: Some(true),
            show_date: Some(true),
            show_instructor: Some(true),
            show_certificate_number: Some(true),
            show_qr: Some(true),
            show_organization: Some(true),
            header_text: Some("Certificate of Achievement".into()),
            subtitle_text: Some("This certificate is proudly presented to".into()),
            footer_text: Some(String::new()),
        },
        branding: BrandingConfig::default(),
    }
}

/// Contemporary look: sans typography, thin solid frame, no ornaments,
/// centered QR.
fn minimal_defaults() -> TemplateConfig {
    TemplateConfig {
        colors: ColorConfig {
            primary: Some("#111827".into()),
            secondary: Some("#9ca3af".into()),
            accent: Some("#2563eb".into()),
            background: Some("#ffffff".into()),
            text: Some("#111827".into()),
            text_muted: Some("#9ca3af".into()),
            border: Some("#e5e7eb".into()),
        },
        typography: TypographyConfig {
            title_family: Some(FontRole::Sans),
            body_family: Some(FontRole::Sans),
            accent_family: Some(FontRole::Sans),
            scale: Some(SizeScale::Compact),
            title_weight: Some(WeightTier::Normal),
            name_weight: Some(WeightTier::Bold),
            title_transform: Some(TextTransformOption::Uppercase),
            alignment: Some(TextAlignment::Center),
        },
        border: BorderConfig {
            style: Some(BorderStyle::Solid),
            width: Some(StrokeWidthTier::Thin),
            corner_radius: Some(CornerRadiusTier::Soft),
            padding: Some(PaddingTier::Wide),
            corner_ornaments: Some(CornerOrnamentStyle::None),
        },
        ornaments: OrnamentConfig {
            divider: Some(DividerStyle::Simple),
            show_seal: Some(false),
            seal_style: Some(SealStyle::Modern),
            seal_position: Some(SealPosition::Right),
            background_pattern: Some(BackgroundPattern::None),
            pattern_opacity: Some(0.04),
            watermark_text: None,
            watermark_opacity: Some(0.04),
        },
        layout: LayoutConfig {
            orientation: Some(Orientation::Landscape),
            paper_size: Some(PaperSize::A4),
            logo_position: Some(HorizontalPosition::Left),
            logo_size: Some(SizeTier::Small),
            qr_position: Some(HorizontalPosition::Center),
            qr_size: Some(SizeTier::Small),
            signature_position: Some(SignaturePosition::Right),
            show_signature_line: Some(true),
            vertical_balance: Some(VerticalBalance::Compact),
        },
        content: ContentConfig {
            show_subtitle: Some(false),
            show_hours: Some(false),
            show_grade: Some(false),
            show_date: Some(true),
            show_instructor: Some(true),
            show_certificate_number: Some(true),
            show_qr: Some(true),
            show_organization: Some(true),
            header_text: Some("Certificate".into()),
            subtitle_text: Some("Awarded to".into()),
            footer_text: Some(String::new()),
        },
        branding: BrandingConfig::default(),
    }
}

/// Expressive look: display/script typography, flourish corners, tiled
/// watermark background, a ribbon seal overlapping the body center.
fn creative_defaults() -> TemplateConfig {
    TemplateConfig {
        colors: ColorConfig {
            primary: Some("#5b21b6".into()),
            secondary: Some("#ec4899".into()),
            accent: Some("#f59e0b".into()),
            background: Some("#fefce8".into()),
            text: Some("#312e81".into()),
            text_muted: Some("#8b5cf6".into()),
            border: Some("#7c3aed".into()),
        },
        typography: TypographyConfig {
            title_family: Some(FontRole::Display),
            body_family: Some(FontRole::Sans),
            accent_family: Some(FontRole::Script),
            scale: Some(SizeScale::Spacious),
            title_weight: Some(WeightTier::Bold),
            name_weight: Some(WeightTier::Bold),
            title_transform: Some(TextTransformOption::None),
            alignment: Some(TextAlignment::Center),
        },
        border: BorderConfig {
            style: Some(BorderStyle::ThickThin),
            width: Some(StrokeWidthTier::Thick),
            corner_radius: Some(CornerRadiusTier::Round),
            padding: Some(PaddingTier::Normal),
            corner_ornaments: Some(CornerOrnamentStyle::Flourish),
        },
        ornaments: OrnamentConfig {
            divider: Some(DividerStyle::Gradient),
            show_seal: Some(true),
            seal_style: Some(SealStyle::Ribbon),
            seal_position: Some(SealPosition::Right),
            background_pattern: Some(BackgroundPattern::Watermark),
            pattern_opacity: Some(0.05),
            watermark_text: None,
            watermark_opacity: Some(0.05),
        },
        layout: LayoutConfig {
            orientation: Some(Orientation::Landscape),
            paper_size: Some(PaperSize::A4),
            logo_position: Some(HorizontalPosition::Center),
            logo_size: Some(SizeTier::Large),
            qr_position: Some(HorizontalPosition::Left),
            qr_size: Some(SizeTier::Medium),
            signature_position: Some(SignaturePosition::Dual),
            show_signature_line: Some(true),
            vertical_balance: Some(VerticalBalance::Spread),
        },
        content: ContentConfig {
            show_subtitle: Some(true),
            show_hours: Some(true),
            show_grade: Some(false),
            show_date: Some(true),
            show_instructor: Some(false),
            show_certificate_number: Some(true),
            show_qr: Some(true),
            show_organization: Some(true),
            header_text: Some("Certificate of Completion".into()),
            subtitle_text: Some("Presented with pride to".into()),
            footer_text: Some(String::new()),
        },
        branding: BrandingConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fully_populated(cfg: &TemplateConfig) {
        assert!(cfg.colors.primary.is_some());
        assert!(cfg.colors.secondary.is_some());
        assert!(cfg.colors.accent.is_some());
        assert!(cfg.colors.background.is_some());
        assert!(cfg.colors.text.is_some());
        assert!(cfg.colors.text_muted.is_some());
        assert!(cfg.colors.border.is_some());
        assert!(cfg.typography.title_family.is_some());
        assert!(cfg.typography.body_family.is_some());
        assert!(cfg.typography.accent_family.is_some());
        assert!(cfg.typography.scale.is_some());
        assert!(cfg.typography.title_weight.is_some());
        assert!(cfg.typography.name_weight.is_some());
        assert!(cfg.typography.title_transform.is_some());
        assert!(cfg.typography.alignment.is_some());
        assert!(cfg.border.style.is_some());
        assert!(cfg.border.width.is_some());
        assert!(cfg.border.corner_radius.is_some());
        assert!(cfg.border.padding.is_some());
        assert!(cfg.border.corner_ornaments.is_some());
        assert!(cfg.ornaments.divider.is_some());
        assert!(cfg.ornaments.show_seal.is_some());
        assert!(cfg.ornaments.seal_style.is_some());
        assert!(cfg.ornaments.seal_position.is_some());
        assert!(cfg.ornaments.background_pattern.is_some());
        assert!(cfg.ornaments.pattern_opacity.is_some());
        assert!(cfg.layout.orientation.is_some());
        assert!(cfg.layout.paper_size.is_some());
        assert!(cfg.layout.logo_position.is_some());
        assert!(cfg.layout.logo_size.is_some());
        assert!(cfg.layout.qr_position.is_some());
        assert!(cfg.layout.qr_size.is_some());
        assert!(cfg.layout.signature_position.is_some());
        assert!(cfg.layout.show_signature_line.is_some());
        assert!(cfg.layout.vertical_balance.is_some());
        assert!(cfg.content.show_subtitle.is_some());
        assert!(cfg.content.show_hours.is_some());
        assert!(cfg.content.show_grade.is_some());
        assert!(cfg.content.show_date.is_some());
        assert!(cfg.content.show_instructor.is_some());
        assert!(cfg.content.show_certificate_number.is_some());
        assert!(cfg.content.show_qr.is_some());
        assert!(cfg.content.show_organization.is_some());
        assert!(cfg.content.header_text.is_some());
        assert!(cfg.content.subtitle_text.is_some());
        assert!(cfg.content.footer_text.is_some());
    }

    #[test]
    fn every_template_default_is_fully_populated() {
        for id in TemplateId::ALL {
            assert_fully_populated(&default_config(id));
        }
    }

    #[test]
    fn templates_are_visually_distinct() {
        let classic = default_config(TemplateId::Classic);
        let minimal = default_config(TemplateId::Minimal);
        let creative = default_config(TemplateId::Creative);
        assert_ne!(classic.colors.primary, minimal.colors.primary);
        assert_ne!(minimal.colors.primary, creative.colors.primary);
        assert_ne!(
            classic.border.corner_ornaments,
            minimal.border.corner_ornaments
        );
        assert_eq!(
            minimal.border.corner_ornaments,
            Some(CornerOrnamentStyle::None)
        );
        assert_eq!(creative.ornaments.seal_style, Some(SealStyle::Ribbon));
    }

    #[test]
    fn parse_is_strict() {
        assert_eq!(TemplateId::parse("classic"), Some(TemplateId::Classic));
        assert_eq!(TemplateId::parse("minimal"), Some(TemplateId::Minimal));
        assert_eq!(TemplateId::parse("creative"), Some(TemplateId::Creative));
        assert_eq!(TemplateId::parse("baroque"), None);
        assert_eq!(TemplateId::parse("Classic"), None);
    }
}
