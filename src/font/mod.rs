//! # Font Registration
//!
//! Binds the five logical font-family roles a certificate can reference
//! (serif, sans, script, slab, display) to concrete PDF Type1 faces. The
//! standard 14 fonts need no embedding, which keeps the output
//! self-contained; `metrics` supplies real AFM advance widths so text can
//! be measured and centered.
//!
//! Registration is process-wide and idempotent: the registry is built
//! exactly once behind a `OnceLock`, however many threads race the first
//! render.

pub mod metrics;

pub use metrics::StandardFontMetrics;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The logical font-family categories a configuration can assign.
///
/// `Script` and `Display` are distinct, independently assignable roles that
/// the default registry happens to bind to the same concrete face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Serif,
    Sans,
    Script,
    Slab,
    Display,
}

/// The subset of the 14 standard PDF fonts the engine draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
}

impl StandardFont {
    /// The PDF BaseFont name for this face.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
            Self::TimesBoldItalic => "Times-BoldItalic",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
        }
    }

    pub fn metrics(&self) -> &'static StandardFontMetrics {
        metrics::for_font(*self)
    }
}

/// One role's bound family: the available weight/style variants.
#[derive(Debug, Clone, Copy)]
struct FamilyBinding {
    regular: StandardFont,
    bold: Option<StandardFont>,
    italic: Option<StandardFont>,
    bold_italic: Option<StandardFont>,
}

/// Maps font roles to concrete faces. Built once per process.
pub struct FontRegistry {
    bindings: HashMap<FontRole, FamilyBinding>,
}

static REGISTRY: OnceLock<FontRegistry> = OnceLock::new();

/// The process-wide registry. First call performs registration; later calls
/// (from any thread) return the same instance.
pub fn registry() -> &'static FontRegistry {
    REGISTRY.get_or_init(FontRegistry::build)
}

/// Explicit warm-up for callers that want registration out of the render path.
pub fn ensure_fonts_registered() {
    let _ = registry();
}

impl FontRegistry {
    fn build() -> Self {
        let mut bindings = HashMap::new();

        let times = FamilyBinding {
            regular: StandardFont::TimesRoman,
            bold: Some(StandardFont::TimesBold),
            italic: Some(StandardFont::TimesItalic),
            bold_italic: Some(StandardFont::TimesBoldItalic),
        };
        let helvetica = FamilyBinding {
            regular: StandardFont::Helvetica,
            bold: Some(StandardFont::HelveticaBold),
            italic: Some(StandardFont::HelveticaOblique),
            bold_italic: Some(StandardFont::HelveticaBoldOblique),
        };
        // Calligraphic stand-in: an italic serif face. No upright variant,
        // so every weight resolves to an italic cut.
        let script = FamilyBinding {
            regular: StandardFont::TimesItalic,
            bold: Some(StandardFont::TimesBoldItalic),
            italic: Some(StandardFont::TimesItalic),
            bold_italic: Some(StandardFont::TimesBoldItalic),
        };
        let slab = FamilyBinding {
            regular: StandardFont::Courier,
            bold: Some(StandardFont::CourierBold),
            italic: None,
            bold_italic: None,
        };

        bindings.insert(FontRole::Serif, times);
        bindings.insert(FontRole::Sans, helvetica);
        bindings.insert(FontRole::Script, script);
        bindings.insert(FontRole::Display, script);
        bindings.insert(FontRole::Slab, slab);

        Self { bindings }
    }

    /// Resolve a role and requested weight/style to a concrete face.
    /// Unavailable variants fall back to the nearest registered one rather
    /// than failing: bold-italic degrades to bold, italic to regular.
    pub fn resolve(&self, role: FontRole, bold: bool, italic: bool) -> StandardFont {
        let binding = self
            .bindings
            .get(&role)
            .copied()
            .unwrap_or_else(|| self.bindings[&FontRole::Sans]);

        match (bold, italic) {
            (true, true) => binding
                .bold_italic
                .or(binding.bold)
                .or(binding.italic)
                .unwrap_or(binding.regular),
            (true, false) => binding.bold.unwrap_or(binding.regular),
            (false, true) => binding.italic.unwrap_or(binding.regular),
            (false, false) => binding.regular,
        }
    }

    /// Measure a string in points for a given role/weight/style.
    pub fn measure(
        &self,
        text: &str,
        role: FontRole,
        bold: bool,
        italic: bool,
        size: f64,
        letter_spacing: f64,
    ) -> f64 {
        self.resolve(role, bold, italic)
            .metrics()
            .measure_string(text, size, letter_spacing)
    }
}
