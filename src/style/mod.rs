//! # Style Resolution
//!
//! Folds a (possibly partial) `TemplateConfig` against a template's default
//! configuration into a flat, fully-resolved `StyleSheet`. Per field the
//! precedence is: caller override, then template default, then a hard
//! constant. Numeric tiers are mapped to concrete point values through
//! exhaustive matches.
//!
//! The central invariant of the whole engine lives here: no optional or
//! undefined value survives resolution. Renderers never see an `Option`
//! unless absence is a real rendering state (e.g. "no watermark text").

use crate::config::*;
use crate::font::FontRole;
use crate::model::Color;

// Base font sizes in points, before the scale tier is applied.
const TITLE_SIZE: f64 = 28.0;
const NAME_SIZE: f64 = 34.0;
const SUBTITLE_SIZE: f64 = 13.0;
const BODY_SIZE: f64 = 14.0;
const SMALL_SIZE: f64 = 10.0;
const ORG_SIZE: f64 = 16.0;
const CAPTION_SIZE: f64 = 8.0;

/// The fully-resolved, render-ready style sheet. Flat and option-free
/// except for fields whose absence is itself a rendering state.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    // Colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border_color: Color,

    // Typography
    pub title_family: FontRole,
    pub body_family: FontRole,
    pub accent_family: FontRole,
    pub title_size: f64,
    pub name_size: f64,
    pub subtitle_size: f64,
    pub body_size: f64,
    pub small_size: f64,
    pub org_size: f64,
    pub caption_size: f64,
    pub title_bold: bool,
    pub name_bold: bool,
    pub title_transform: TextTransformOption,
    pub alignment: TextAlignment,

    // Border
    pub border_style: BorderStyle,
    pub border_width: f64,
    pub corner_radius: f64,
    pub padding: f64,
    pub corner_ornaments: CornerOrnamentStyle,

    // Ornaments
    pub divider: DividerStyle,
    pub show_seal: bool,
    pub seal_style: SealStyle,
    pub seal_position: SealPosition,
    pub background_pattern: BackgroundPattern,
    pub pattern_opacity: f64,
    pub watermark_text: Option<String>,
    pub watermark_opacity: f64,

    // Layout
    pub orientation: Orientation,
    pub paper_size: PaperSize,
    pub logo_position: HorizontalPosition,
    pub logo_size: f64,
    pub qr_position: HorizontalPosition,
    pub qr_size: f64,
    pub signature_position: SignaturePosition,
    pub show_signature_line: bool,
    /// Multiplier applied to inter-section vertical gaps.
    pub section_gap: f64,

    // Content
    pub show_subtitle: bool,
    pub show_hours: bool,
    pub show_grade: bool,
    pub show_date: bool,
    pub show_instructor: bool,
    pub show_certificate_number: bool,
    pub show_qr: bool,
    pub show_organization: bool,
    pub header_text: String,
    pub subtitle_text: String,
    /// Empty string means no footer line.
    pub footer_text: String,

    // Branding
    pub organization_name: Option<String>,
    pub organization_subtitle: Option<String>,
    pub logo: Option<String>,
    pub signature: Option<SignatureSpec>,
    pub signature_secondary: Option<SignatureSpec>,
}

/// Resolve a configuration against template defaults. Pure and total.
pub fn resolve(config: &TemplateConfig, defaults: &TemplateConfig) -> StyleSheet {
    let scale = scale_factor(pick(
        config.typography.scale,
        defaults.typography.scale,
        SizeScale::Normal,
    ));

    StyleSheet {
        primary: pick_color(&config.colors.primary, &defaults.colors.primary, "#1e3a5f"),
        secondary: pick_color(&config.colors.secondary, &defaults.colors.secondary, "#c9a227"),
        accent: pick_color(&config.colors.accent, &defaults.colors.accent, "#8b1a1a"),
        background: pick_color(&config.colors.background, &defaults.colors.background, "#ffffff"),
        text: pick_color(&config.colors.text, &defaults.colors.text, "#1f2430"),
        text_muted: pick_color(&config.colors.text_muted, &defaults.colors.text_muted, "#6b7280"),
        border_color: pick_color(&config.colors.border, &defaults.colors.border, "#1e3a5f"),

        title_family: pick(
            config.typography.title_family,
            defaults.typography.title_family,
            FontRole::Serif,
        ),
        body_family: pick(
            config.typography.body_family,
            defaults.typography.body_family,
            FontRole::Serif,
        ),
        accent_family: pick(
            config.typography.accent_family,
            defaults.typography.accent_family,
            FontRole::Script,
        ),
        title_size: TITLE_SIZE * scale,
        name_size: NAME_SIZE * scale,
        subtitle_size: SUBTITLE_SIZE * scale,
        body_size: BODY_SIZE * scale,
        small_size: SMALL_SIZE * scale,
        org_size: ORG_SIZE * scale,
        caption_size: CAPTION_SIZE * scale,
        title_bold: pick(
            config.typography.title_weight,
            defaults.typography.title_weight,
            WeightTier::Bold,
        )
        .is_bold(),
        name_bold: pick(
            config.typography.name_weight,
            defaults.typography.name_weight,
            WeightTier::Bold,
        )
        .is_bold(),
        title_transform: pick(
            config.typography.title_transform,
            defaults.typography.title_transform,
            TextTransformOption::None,
        ),
        alignment: pick(
            config.typography.alignment,
            defaults.typography.alignment,
            TextAlignment::Center,
        ),

        border_style: pick(config.border.style, defaults.border.style, BorderStyle::Solid),
        border_width: stroke_points(pick(
            config.border.width,
            defaults.border.width,
            StrokeWidthTier::Medium,
        )),
        corner_radius: radius_points(pick(
            config.border.corner_radius,
            defaults.border.corner_radius,
            CornerRadiusTier::None,
        )),
        padding: padding_points(pick(
            config.border.padding,
            defaults.border.padding,
            PaddingTier::Normal,
        )),
        corner_ornaments: pick(
            config.border.corner_ornaments,
            defaults.border.corner_ornaments,
            CornerOrnamentStyle::None,
        ),

        divider: pick(
            config.ornaments.divider,
            defaults.ornaments.divider,
            DividerStyle::Simple,
        ),
        show_seal: pick(config.ornaments.show_seal, defaults.ornaments.show_seal, false),
        seal_style: pick(
            config.ornaments.seal_style,
            defaults.ornaments.seal_style,
            SealStyle::Classic,
        ),
        seal_position: pick(
            config.ornaments.seal_position,
            defaults.ornaments.seal_position,
            SealPosition::Center,
        ),
        background_pattern: pick(
            config.ornaments.background_pattern,
            defaults.ornaments.background_pattern,
            BackgroundPattern::None,
        ),
        pattern_opacity: pick(
            config.ornaments.pattern_opacity,
            defaults.ornaments.pattern_opacity,
            0.05,
        ),
        watermark_text: pick_opt(&config.ornaments.watermark_text, &defaults.ornaments.watermark_text),
        watermark_opacity: pick(
            config.ornaments.watermark_opacity,
            defaults.ornaments.watermark_opacity,
            0.05,
        ),

        orientation: pick(
            config.layout.orientation,
            defaults.layout.orientation,
            Orientation::Landscape,
        ),
        paper_size: pick(config.layout.paper_size, defaults.layout.paper_size, PaperSize::A4),
        logo_position: pick(
            config.layout.logo_position,
            defaults.layout.logo_position,
            HorizontalPosition::Center,
        ),
        logo_size: logo_points(pick(
            config.layout.logo_size,
            defaults.layout.logo_size,
            SizeTier::Medium,
        )),
        qr_position: pick(
            config.layout.qr_position,
            defaults.layout.qr_position,
            HorizontalPosition::Right,
        ),
        qr_size: qr_points(pick(
            config.layout.qr_size,
            defaults.layout.qr_size,
            SizeTier::Medium,
        )),
        signature_position: pick(
            config.layout.signature_position,
            defaults.layout.signature_position,
            SignaturePosition::Center,
        ),
        show_signature_line: pick(
            config.layout.show_signature_line,
            defaults.layout.show_signature_line,
            true,
        ),
        section_gap: balance_factor(pick(
            config.layout.vertical_balance,
            defaults.layout.vertical_balance,
            VerticalBalance::Balanced,
        )),

        show_subtitle: pick(config.content.show_subtitle, defaults.content.show_subtitle, true),
        show_hours: pick(config.content.show_hours, defaults.content.show_hours, true),
        show_grade: pick(config.content.show_grade, defaults.content.show_grade, true),
        show_date: pick(config.content.show_date, defaults.content.show_date, true),
        show_instructor: pick(
            config.content.show_instructor,
            defaults.content.show_instructor,
            true,
        ),
        show_certificate_number: pick(
            config.content.show_certificate_number,
            defaults.content.show_certificate_number,
            true,
        ),
        show_qr: pick(config.content.show_qr, defaults.content.show_qr, true),
        show_organization: pick(
            config.content.show_organization,
            defaults.content.show_organization,
            true,
        ),
        header_text: pick_string(
            &config.content.header_text,
            &defaults.content.header_text,
            "Certificate of Achievement",
        ),
        subtitle_text: pick_string(
            &config.content.subtitle_text,
            &defaults.content.subtitle_text,
            "This certificate is presented to",
        ),
        footer_text: pick_string(&config.content.footer_text, &defaults.content.footer_text, ""),

        organization_name: pick_opt(
            &config.branding.organization_name,
            &defaults.branding.organization_name,
        ),
        organization_subtitle: pick_opt(
            &config.branding.organization_subtitle,
            &defaults.branding.organization_subtitle,
        ),
        logo: pick_opt(&config.branding.logo, &defaults.branding.logo),
        signature: pick_opt(&config.branding.signature, &defaults.branding.signature),
        signature_secondary: pick_opt(
            &config.branding.signature_secondary,
            &defaults.branding.signature_secondary,
        ),
    }
}

impl WeightTier {
    pub fn is_bold(&self) -> bool {
        matches!(self, WeightTier::Bold)
    }
}

fn pick<T: Copy>(over: Option<T>, def: Option<T>, fallback: T) -> T {
    over.or(def).unwrap_or(fallback)
}

fn pick_opt<T: Clone>(over: &Option<T>, def: &Option<T>) -> Option<T> {
    over.clone().or_else(|| def.clone())
}

fn pick_string(over: &Option<String>, def: &Option<String>, fallback: &str) -> String {
    over.clone()
        .or_else(|| def.clone())
        .unwrap_or_else(|| fallback.to_string())
}

fn pick_color(over: &Option<String>, def: &Option<String>, fallback: &str) -> Color {
    Color::hex(&pick_string(over, def, fallback))
}

// ── Tier → point lookup tables ──────────────────────────────────

fn scale_factor(scale: SizeScale) -> f64 {
    match scale {
        SizeScale::Compact => 0.85,
        SizeScale::Normal => 1.0,
        SizeScale::Spacious => 1.15,
    }
}

fn padding_points(tier: PaddingTier) -> f64 {
    match tier {
        PaddingTier::Tight => 24.0,
        PaddingTier::Normal => 40.0,
        PaddingTier::Wide => 56.0,
    }
}

fn stroke_points(tier: StrokeWidthTier) -> f64 {
    match tier {
        StrokeWidthTier::Thin => 1.0,
        StrokeWidthTier::Medium => 2.0,
        StrokeWidthTier::Thick => 4.0,
    }
}

fn radius_points(tier: CornerRadiusTier) -> f64 {
    match tier {
        CornerRadiusTier::None => 0.0,
        CornerRadiusTier::Soft => 6.0,
        CornerRadiusTier::Round => 14.0,
    }
}

fn logo_points(tier: SizeTier) -> f64 {
    match tier {
        SizeTier::Small => 40.0,
        SizeTier::Medium => 56.0,
        SizeTier::Large => 80.0,
    }
}

fn qr_points(tier: SizeTier) -> f64 {
    match tier {
        SizeTier::Small => 48.0,
        SizeTier::Medium => 64.0,
        SizeTier::Large => 84.0,
    }
}

fn balance_factor(balance: VerticalBalance) -> f64 {
    match balance {
        VerticalBalance::Compact => 0.8,
        VerticalBalance::Balanced => 1.0,
        VerticalBalance::Spread => 1.25,
    }
}

/// Apply the resolved text transform to a string.
pub fn apply_transform(text: &str, transform: TextTransformOption) -> String {
    match transform {
        TextTransformOption::None => text.to_string(),
        TextTransformOption::Uppercase => text.to_uppercase(),
        TextTransformOption::Lowercase => text.to_lowercase(),
        TextTransformOption::Capitalize => text
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, TemplateId};

    #[test]
    fn empty_override_is_identity() {
        for id in TemplateId::ALL {
            let defaults = default_config(id);
            let from_empty = resolve(&TemplateConfig::default(), &defaults);
            let from_defaults = resolve(&defaults, &defaults);
            // Spot-check representative fields across sections; the two
            // resolutions must agree everywhere.
            assert_eq!(from_empty.primary, from_defaults.primary);
            assert_eq!(from_empty.title_family, from_defaults.title_family);
            assert_eq!(from_empty.title_size, from_defaults.title_size);
            assert_eq!(from_empty.border_style, from_defaults.border_style);
            assert_eq!(from_empty.padding, from_defaults.padding);
            assert_eq!(from_empty.divider, from_defaults.divider);
            assert_eq!(from_empty.show_seal, from_defaults.show_seal);
            assert_eq!(from_empty.paper_size, from_defaults.paper_size);
            assert_eq!(from_empty.signature_position, from_defaults.signature_position);
            assert_eq!(from_empty.header_text, from_defaults.header_text);
            assert_eq!(from_empty.show_qr, from_defaults.show_qr);
        }
    }

    #[test]
    fn override_wins_over_default() {
        let defaults = default_config(TemplateId::Classic);
        let mut over = TemplateConfig::default();
        over.colors.primary = Some("#000000".into());
        over.typography.scale = Some(SizeScale::Spacious);
        over.border.padding = Some(PaddingTier::Tight);
        over.content.header_text = Some("Diploma".into());

        let sheet = resolve(&over, &defaults);
        assert_eq!(sheet.primary, Color::hex("#000000"));
        assert_eq!(sheet.title_size, TITLE_SIZE * 1.15);
        assert_eq!(sheet.padding, 24.0);
        assert_eq!(sheet.header_text, "Diploma");
        // Untouched fields keep the default.
        assert_eq!(
            sheet.secondary,
            Color::hex(defaults.colors.secondary.as_ref().unwrap())
        );
    }

    #[test]
    fn hard_fallbacks_cover_empty_defaults() {
        // Both config and defaults empty: every field still resolves.
        let sheet = resolve(&TemplateConfig::default(), &TemplateConfig::default());
        assert_eq!(sheet.title_family, FontRole::Serif);
        assert_eq!(sheet.paper_size, PaperSize::A4);
        assert_eq!(sheet.orientation, Orientation::Landscape);
        assert!(sheet.border_width > 0.0);
        assert!(!sheet.header_text.is_empty());
        assert!(sheet.section_gap > 0.0);
    }

    #[test]
    fn scale_multiplies_every_font_size() {
        let defaults = default_config(TemplateId::Classic);
        let mut compact = TemplateConfig::default();
        compact.typography.scale = Some(SizeScale::Compact);
        let sheet = resolve(&compact, &defaults);
        assert_eq!(sheet.title_size, TITLE_SIZE * 0.85);
        assert_eq!(sheet.name_size, NAME_SIZE * 0.85);
        assert_eq!(sheet.body_size, BODY_SIZE * 0.85);
        assert_eq!(sheet.small_size, SMALL_SIZE * 0.85);
        assert_eq!(sheet.caption_size, CAPTION_SIZE * 0.85);
    }

    #[test]
    fn tier_tables_match_spec_values() {
        assert_eq!(padding_points(PaddingTier::Tight), 24.0);
        assert_eq!(padding_points(PaddingTier::Normal), 40.0);
        assert_eq!(padding_points(PaddingTier::Wide), 56.0);
        assert_eq!(stroke_points(StrokeWidthTier::Thin), 1.0);
        assert_eq!(stroke_points(StrokeWidthTier::Thick), 4.0);
        assert_eq!(radius_points(CornerRadiusTier::None), 0.0);
        assert_eq!(qr_points(SizeTier::Large), 84.0);
        assert_eq!(logo_points(SizeTier::Small), 40.0);
    }

    #[test]
    fn transform_variants() {
        assert_eq!(
            apply_transform("Certificate of merit", TextTransformOption::Uppercase),
            "CERTIFICATE OF MERIT"
        );
        assert_eq!(
            apply_transform("Certificate OF Merit", TextTransformOption::Lowercase),
            "certificate of merit"
        );
        assert_eq!(
            apply_transform("certificate of merit", TextTransformOption::Capitalize),
            "Certificate Of Merit"
        );
        assert_eq!(
            apply_transform("As-Is", TextTransformOption::None),
            "As-Is"
        );
    }
}
