//! # Template Configuration
//!
//! The visual configuration for a certificate render: seven sub-objects
//! covering colors, typography, border, ornaments, layout, content, and
//! branding. Every leaf is optional — callers may supply any subset and the
//! style resolver fills the rest from the template defaults (and, failing
//! that, hard constants). A partially-populated config is legal here and
//! illegal past resolution.
//!
//! Categorical values are enums, not strings, so an unknown tier is a
//! deserialization error rather than a silent lookup miss.

pub mod defaults;
pub mod validate;

use serde::{Deserialize, Serialize};

use crate::font::FontRole;

pub use defaults::{default_config, TemplateId};
pub use validate::validate;

/// The composite visual configuration for one render request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateConfig {
    pub colors: ColorConfig,
    pub typography: TypographyConfig,
    pub border: BorderConfig,
    pub ornaments: OrnamentConfig,
    pub layout: LayoutConfig,
    pub content: ContentConfig,
    pub branding: BrandingConfig,
}

/// Seven named color roles, each a `#rrggbb` hex string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub border: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyConfig {
    pub title_family: Option<FontRole>,
    pub body_family: Option<FontRole>,
    pub accent_family: Option<FontRole>,
    pub scale: Option<SizeScale>,
    pub title_weight: Option<WeightTier>,
    pub name_weight: Option<WeightTier>,
    pub title_transform: Option<TextTransformOption>,
    pub alignment: Option<TextAlignment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderConfig {
    pub style: Option<BorderStyle>,
    pub width: Option<StrokeWidthTier>,
    pub corner_radius: Option<CornerRadiusTier>,
    pub padding: Option<PaddingTier>,
    pub corner_ornaments: Option<CornerOrnamentStyle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrnamentConfig {
    pub divider: Option<DividerStyle>,
    pub show_seal: Option<bool>,
    pub seal_style: Option<SealStyle>,
    pub seal_position: Option<SealPosition>,
    pub background_pattern: Option<BackgroundPattern>,
    /// Pattern stroke/fill opacity, 0–1.
    pub pattern_opacity: Option<f64>,
    pub watermark_text: Option<String>,
    pub watermark_opacity: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub orientation: Option<Orientation>,
    pub paper_size: Option<PaperSize>,
    pub logo_position: Option<HorizontalPosition>,
    pub logo_size: Option<SizeTier>,
    pub qr_position: Option<HorizontalPosition>,
    pub qr_size: Option<SizeTier>,
    pub signature_position: Option<SignaturePosition>,
    pub show_signature_line: Option<bool>,
    pub vertical_balance: Option<VerticalBalance>,
}

/// Per-field visibility flags plus the free-text strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    pub show_subtitle: Option<bool>,
    pub show_hours: Option<bool>,
    pub show_grade: Option<bool>,
    pub show_date: Option<bool>,
    pub show_instructor: Option<bool>,
    pub show_certificate_number: Option<bool>,
    pub show_qr: Option<bool>,
    pub show_organization: Option<bool>,
    pub header_text: Option<String>,
    pub subtitle_text: Option<String>,
    pub footer_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingConfig {
    pub organization_name: Option<String>,
    pub organization_subtitle: Option<String>,
    /// Base64 PNG/JPEG payload or data URI.
    pub logo: Option<String>,
    pub signature: Option<SignatureSpec>,
    /// Second signatory, rendered only when `signature_position` is Dual.
    pub signature_secondary: Option<SignatureSpec>,
}

/// One signature block: optional scanned image, the signatory's name, and
/// a role label underneath.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureSpec {
    pub image: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
}

// ── Categorical option sets ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeScale {
    Compact,
    Normal,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTier {
    Light,
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransformOption {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    None,
    Solid,
    Double,
    Dashed,
    Dotted,
    ThickThin,
    Ornamental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeWidthTier {
    Thin,
    Medium,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerRadiusTier {
    None,
    Soft,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingTier {
    Tight,
    Normal,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerOrnamentStyle {
    None,
    Classic,
    Ornate,
    Flourish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    None,
    Simple,
    Ornate,
    Dots,
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SealStyle {
    Classic,
    Modern,
    Ribbon,
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SealPosition {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundPattern {
    None,
    SubtleGrid,
    Watermark,
    Diagonal,
    Dots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaperSize {
    A4,
    Letter,
    Legal,
}

impl PaperSize {
    /// Portrait-baseline (width, height) in points.
    pub fn portrait_dimensions(&self) -> (f64, f64) {
        match self {
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
        }
    }

    /// Page (width, height) for the given orientation. Landscape is the
    /// width/height swap of the portrait pair.
    pub fn dimensions(&self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.portrait_dimensions();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignaturePosition {
    Left,
    Center,
    Right,
    /// Two signature blocks side by side.
    Dual,
}

/// Governs the spacing multiplier between the header, body, and footer bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalBalance {
    Compact,
    Balanced,
    Spread,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_deserializes_to_all_none() {
        let cfg: TemplateConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.colors.primary.is_none());
        assert!(cfg.layout.paper_size.is_none());
        assert!(cfg.branding.signature.is_none());
    }

    #[test]
    fn partial_section_round_trips() {
        let json = r##"{"colors":{"primary":"#112233"},"layout":{"paperSize":"LETTER","orientation":"landscape"}}"##;
        let cfg: TemplateConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.colors.primary.as_deref(), Some("#112233"));
        assert_eq!(cfg.layout.paper_size, Some(PaperSize::Letter));
        assert_eq!(cfg.layout.orientation, Some(Orientation::Landscape));
        assert!(cfg.colors.secondary.is_none());
    }

    #[test]
    fn unknown_tier_is_a_parse_error() {
        let json = r#"{"typography":{"scale":"gigantic"}}"#;
        assert!(serde_json::from_str::<TemplateConfig>(json).is_err());
    }

    #[test]
    fn landscape_swaps_portrait_dimensions() {
        for size in [PaperSize::A4, PaperSize::Letter, PaperSize::Legal] {
            let (pw, ph) = size.dimensions(Orientation::Portrait);
            let (lw, lh) = size.dimensions(Orientation::Landscape);
            assert_eq!((lw, lh), (ph, pw));
        }
    }

    #[test]
    fn a4_portrait_dimensions_exact() {
        assert_eq!(PaperSize::A4.portrait_dimensions(), (595.28, 841.89));
        assert_eq!(PaperSize::Letter.portrait_dimensions(), (612.0, 792.0));
        assert_eq!(PaperSize::Legal.portrait_dimensions(), (612.0, 1008.0));
    }
}
