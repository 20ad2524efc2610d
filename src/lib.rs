//! # Laurea
//!
//! A certificate document rendering engine.
//!
//! Certificate generators tend to grow ad-hoc: a pile of per-template
//! drawing code, stringly-typed configuration maps, and fallbacks
//! scattered through the renderers. Laurea draws one hard line instead:
//! **all defaulting happens before rendering.** A partial configuration is
//! resolved against per-template defaults into a flat, option-free style
//! sheet; the template renderers consume only resolved values and build a
//! document tree of vector primitives, which a from-scratch PDF 1.7 writer
//! serializes to bytes.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [config]     — Template config schema, defaults, validation
//!       ↓
//!   [style]      — Resolve overrides ⊕ defaults → StyleSheet
//!       ↓
//!   [templates]  — Compose primitives into a document tree
//!       ↓
//!   [pdf]        — Serialize to PDF bytes
//! ```
//!
//! The `primitives`, `font`, and `qr` modules feed the template layer;
//! `assemble` orchestrates the whole pipeline including batch runs.

pub mod assemble;
pub mod config;
pub mod data;
pub mod error;
pub mod font;
pub mod model;
pub mod pdf;
pub mod primitives;
pub mod qr;
pub mod style;
pub mod templates;

pub use assemble::{generate, generate_batch, run_request, BatchOutcome, Rendered, RenderRequest};
pub use config::{default_config, validate, TemplateConfig, TemplateId};
pub use data::{CertificateData, CertificateType};
pub use error::{LaureaError, ValidationErrors};
pub use style::{resolve, StyleSheet};

/// Render a generation request described as JSON to a finished certificate.
pub fn render_json(json: &str) -> Result<Rendered, LaureaError> {
    let request: RenderRequest = serde_json::from_str(json)?;
    run_request(&request)
}
