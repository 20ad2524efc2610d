//! # Template Renderers
//!
//! Three visual compositions — classic, minimal, creative — over one layout
//! skeleton: header (logo, organization), body (title, subtitle, student
//! name, divider, course, metrics, seal, signatures), footer (certificate
//! number, QR). The shared building blocks live here; each template module
//! composes them with its own choice of primitives and placements.
//!
//! Renderers are pure: (data, resolved style sheet, optional QR image) in,
//! document tree out. They assume resolution already happened — no
//! fallback logic on this level.

pub mod classic;
pub mod creative;
pub mod minimal;

use crate::config::{
    HorizontalPosition, SealPosition, SignaturePosition, SignatureSpec, TemplateId, TextAlignment,
};
use crate::data::{format_issue_date, CertificateData};
use crate::font::{registry, FontRole};
use crate::model::{
    Color, Document, ImageData, Metadata, Node, PathShape, TextAnchor, TextSpan,
};
use crate::primitives;
use crate::style::{apply_transform, StyleSheet};

/// Render a certificate document with the given template.
pub fn render(
    template: TemplateId,
    data: &CertificateData,
    sheet: &StyleSheet,
    qr: Option<&ImageData>,
    page_w: f64,
    page_h: f64,
) -> Document {
    let ctx = Ctx {
        data,
        sheet,
        page_w,
        page_h,
    };
    let root = match template {
        TemplateId::Classic => classic::render(&ctx, qr),
        TemplateId::Minimal => minimal::render(&ctx, qr),
        TemplateId::Creative => creative::render(&ctx, qr),
    };
    Document {
        width: page_w,
        height: page_h,
        metadata: Metadata {
            title: Some(format!("Certificate - {}", data.student_name)),
            author: sheet.organization_name.clone(),
            subject: Some(data.course_name.clone()),
        },
        root,
    }
}

/// Everything a template needs to place content.
pub(crate) struct Ctx<'a> {
    pub data: &'a CertificateData,
    pub sheet: &'a StyleSheet,
    pub page_w: f64,
    pub page_h: f64,
}

impl Ctx<'_> {
    pub fn center_x(&self) -> f64 {
        self.page_w / 2.0
    }

    pub fn content_left(&self) -> f64 {
        self.sheet.padding + 14.0
    }

    pub fn content_right(&self) -> f64 {
        self.page_w - self.sheet.padding - 14.0
    }

    /// Anchor x and anchor mode for the configured text alignment.
    pub fn aligned_anchor(&self) -> (f64, TextAnchor) {
        match self.sheet.alignment {
            TextAlignment::Left => (self.content_left(), TextAnchor::Start),
            TextAlignment::Center => (self.center_x(), TextAnchor::Middle),
            TextAlignment::Right => (self.content_right(), TextAnchor::End),
        }
    }

    pub fn measure(&self, text: &str, role: FontRole, bold: bool, size: f64, spacing: f64) -> f64 {
        registry().measure(text, role, bold, false, size, spacing)
    }
}

/// A text span with the crate's common defaults filled in.
pub(crate) fn span(
    content: impl Into<String>,
    x: f64,
    y: f64,
    role: FontRole,
    size: f64,
    color: Color,
) -> TextSpan {
    TextSpan {
        content: content.into(),
        x,
        y,
        role,
        bold: false,
        italic: false,
        size,
        color,
        anchor: TextAnchor::Middle,
        letter_spacing: 0.0,
    }
}

impl TextSpan {
    pub(crate) fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub(crate) fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub(crate) fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub(crate) fn spaced(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

// ── Shared blocks ───────────────────────────────────────────────

/// Full-page background fill.
pub(crate) fn page_background(sheet: &StyleSheet, page_w: f64, page_h: f64) -> Node {
    Node::path(PathShape::filled(
        PathShape::rect_commands(0.0, 0.0, page_w, page_h),
        sheet.background,
    ))
}

/// The page frame per the resolved border style.
pub(crate) fn frame_nodes(sheet: &StyleSheet, page_w: f64, page_h: f64) -> Vec<Node> {
    use crate::config::BorderStyle;

    let inset = sheet.padding / 2.0;
    let w = sheet.border_width;
    let color = sheet.border_color;
    let rect = |off: f64, radius: f64| {
        PathShape::rounded_rect_commands(
            inset + off,
            inset + off,
            page_w - 2.0 * (inset + off),
            page_h - 2.0 * (inset + off),
            radius,
        )
    };
    let r = sheet.corner_radius;

    match sheet.border_style {
        BorderStyle::None => Vec::new(),
        BorderStyle::Solid => vec![Node::path(PathShape::stroked(rect(0.0, r), color, w))],
        BorderStyle::Double => vec![
            Node::path(PathShape::stroked(rect(0.0, r), color, w)),
            Node::path(PathShape::stroked(rect(w + 3.0, (r - 2.0).max(0.0)), color, w / 2.0)),
        ],
        BorderStyle::Dashed => vec![Node::path(
            PathShape::stroked(rect(0.0, r), color, w).with_dash(6.0, 4.0),
        )],
        BorderStyle::Dotted => vec![Node::path(
            PathShape::stroked(rect(0.0, r), color, w).with_dash(w.max(1.0), w.max(1.0) * 2.0),
        )],
        BorderStyle::ThickThin => vec![
            Node::path(PathShape::stroked(rect(0.0, r), color, w * 1.5)),
            Node::path(PathShape::stroked(rect(w * 1.5 + 4.0, (r - 3.0).max(0.0)), color, w * 0.4)),
        ],
        BorderStyle::Ornamental => {
            let mut nodes = vec![
                Node::path(PathShape::stroked(rect(0.0, r), color, w)),
                Node::path(PathShape::stroked(rect(w + 3.0, (r - 2.0).max(0.0)), color, w / 2.0)),
            ];
            // Small diamonds at the midpoint of each edge.
            let d = 4.0;
            let mids = [
                (page_w / 2.0, inset),
                (page_w / 2.0, page_h - inset),
                (inset, page_h / 2.0),
                (page_w - inset, page_h / 2.0),
            ];
            for (cx, cy) in mids {
                nodes.push(Node::path(PathShape::filled(
                    vec![
                        crate::model::PathCommand::MoveTo(cx, cy - d),
                        crate::model::PathCommand::LineTo(cx + d, cy),
                        crate::model::PathCommand::LineTo(cx, cy + d),
                        crate::model::PathCommand::LineTo(cx - d, cy),
                        crate::model::PathCommand::Close,
                    ],
                    sheet.secondary,
                )));
            }
            nodes
        }
    }
}

/// Header: optional logo image, organization name and subtitle.
/// Returns the nodes and the y the body should start at.
pub(crate) fn header_nodes(ctx: &Ctx, top: f64) -> (Vec<Node>, f64) {
    let sheet = ctx.sheet;
    let mut nodes = Vec::new();
    let mut y = top;

    if let Some(logo_src) = &sheet.logo {
        match ImageData::from_base64(logo_src) {
            Ok(image) => {
                let size = sheet.logo_size;
                let x = match sheet.logo_position {
                    HorizontalPosition::Left => ctx.content_left(),
                    HorizontalPosition::Center => ctx.center_x() - size / 2.0,
                    HorizontalPosition::Right => ctx.content_right() - size,
                };
                nodes.push(Node::image(image, x, y, size, size));
                y += size + 12.0;
            }
            Err(e) => {
                // Recoverable: skip the logo, keep the certificate.
                log::warn!("skipping undecodable logo image: {}", e);
            }
        }
    }

    if sheet.show_organization {
        if let Some(org) = &sheet.organization_name {
            let (x, anchor) = ctx.aligned_anchor();
            y += sheet.org_size;
            nodes.push(Node::text(
                span(org.clone(), x, y, sheet.title_family, sheet.org_size, sheet.primary)
                    .bold(true)
                    .anchored(anchor),
            ));
            if let Some(sub) = &sheet.organization_subtitle {
                y += sheet.small_size + 5.0;
                nodes.push(Node::text(
                    span(sub.clone(), x, y, sheet.body_family, sheet.small_size, sheet.text_muted)
                        .anchored(anchor),
                ));
            }
            y += 6.0;
        }
    }

    (nodes, y)
}

/// Title plus optional subtitle, at the configured alignment.
pub(crate) fn title_nodes(ctx: &Ctx, y: f64) -> (Vec<Node>, f64) {
    let sheet = ctx.sheet;
    let (x, anchor) = ctx.aligned_anchor();
    let mut nodes = Vec::new();
    let mut y = y + sheet.title_size + 8.0 * sheet.section_gap;

    let title = apply_transform(&sheet.header_text, sheet.title_transform);
    let spacing = if title.chars().all(|c| !c.is_lowercase()) { 1.5 } else { 0.0 };
    nodes.push(Node::text(
        span(title, x, y, sheet.title_family, sheet.title_size, sheet.primary)
            .bold(sheet.title_bold)
            .anchored(anchor)
            .spaced(spacing),
    ));

    if sheet.show_subtitle {
        y += sheet.subtitle_size + 12.0 * sheet.section_gap;
        nodes.push(Node::text(
            span(
                sheet.subtitle_text.clone(),
                x,
                y,
                sheet.accent_family,
                sheet.subtitle_size,
                sheet.text_muted,
            )
            .italic(true)
            .anchored(anchor),
        ));
    }

    (nodes, y)
}

/// The student name — the largest, most emphasized text on the page.
pub(crate) fn name_node(ctx: &Ctx, y: f64) -> (Node, f64) {
    let sheet = ctx.sheet;
    let (x, anchor) = ctx.aligned_anchor();
    let y = y + sheet.name_size + 14.0 * sheet.section_gap;
    let node = Node::text(
        span(
            ctx.data.student_name.clone(),
            x,
            y,
            sheet.accent_family,
            sheet.name_size,
            sheet.text,
        )
        .bold(sheet.name_bold)
        .anchored(anchor),
    );
    (node, y)
}

/// Course line: the certificate-type phrase followed by the course name.
pub(crate) fn course_nodes(ctx: &Ctx, y: f64) -> (Vec<Node>, f64) {
    let sheet = ctx.sheet;
    let (x, anchor) = ctx.aligned_anchor();
    let mut nodes = Vec::new();

    let mut y = y + sheet.small_size + 14.0 * sheet.section_gap;
    nodes.push(Node::text(
        span(
            ctx.data.certificate_type.body_phrase(),
            x,
            y,
            sheet.body_family,
            sheet.small_size,
            sheet.text_muted,
        )
        .anchored(anchor),
    ));

    let course_size = sheet.body_size * 1.4;
    y += course_size + 8.0 * sheet.section_gap;
    nodes.push(Node::text(
        span(
            ctx.data.course_name.clone(),
            x,
            y,
            sheet.title_family,
            course_size,
            sheet.primary,
        )
        .bold(true)
        .anchored(anchor),
    ));

    (nodes, y)
}

/// The optional metric fields that are both enabled and present in the data.
pub(crate) fn metric_items(ctx: &Ctx) -> Vec<(String, String)> {
    let sheet = ctx.sheet;
    let data = ctx.data;
    let mut items = Vec::new();
    if sheet.show_date {
        items.push(("Date".to_string(), format_issue_date(&data.issue_date)));
    }
    if sheet.show_hours {
        if let Some(hours) = data.hours {
            items.push(("Duration".to_string(), format!("{} hours", hours)));
        }
    }
    if sheet.show_grade {
        if let Some(grade) = data.grade {
            items.push(("Grade".to_string(), format!("{:.0}%", grade)));
        }
    }
    if sheet.show_instructor {
        if let Some(instructor) = &data.instructor_name {
            items.push(("Instructor".to_string(), instructor.clone()));
        }
    }
    items
}

/// A centered row of stacked label/value metric cells.
pub(crate) fn metric_row_nodes(ctx: &Ctx, items: &[(String, String)], y: f64) -> (Vec<Node>, f64) {
    let sheet = ctx.sheet;
    if items.is_empty() {
        return (Vec::new(), y);
    }

    let gap = 36.0;
    let cell_widths: Vec<f64> = items
        .iter()
        .map(|(label, value)| {
            ctx.measure(label, sheet.body_family, false, sheet.caption_size, 1.0)
                .max(ctx.measure(value, sheet.body_family, true, sheet.body_size, 0.0))
        })
        .collect();
    let total: f64 = cell_widths.iter().sum::<f64>() + gap * (items.len() as f64 - 1.0);

    let label_y = y + sheet.caption_size + 16.0 * sheet.section_gap;
    let value_y = label_y + sheet.body_size + 5.0;

    let mut nodes = Vec::new();
    let mut x = ctx.center_x() - total / 2.0;
    for ((label, value), width) in items.iter().zip(&cell_widths) {
        let cx = x + width / 2.0;
        nodes.push(Node::text(
            span(
                label.to_uppercase(),
                cx,
                label_y,
                sheet.body_family,
                sheet.caption_size,
                sheet.text_muted,
            )
            .spaced(1.0),
        ));
        nodes.push(Node::text(
            span(value.clone(), cx, value_y, sheet.body_family, sheet.body_size, sheet.text)
                .bold(true),
        ));
        x += width + gap;
    }

    (nodes, value_y)
}

/// One or two signature blocks per the configured position. `baseline` is
/// the y of the signature rule.
pub(crate) fn signature_nodes(ctx: &Ctx, baseline: f64) -> Vec<Node> {
    let sheet = ctx.sheet;
    let half_line = 70.0;

    let centers: Vec<(f64, Option<&SignatureSpec>)> = match sheet.signature_position {
        SignaturePosition::Left => {
            vec![(ctx.content_left() + half_line, sheet.signature.as_ref())]
        }
        SignaturePosition::Center => vec![(ctx.center_x(), sheet.signature.as_ref())],
        SignaturePosition::Right => {
            vec![(ctx.content_right() - half_line, sheet.signature.as_ref())]
        }
        SignaturePosition::Dual => vec![
            (ctx.center_x() - half_line - 40.0, sheet.signature.as_ref()),
            (
                ctx.center_x() + half_line + 40.0,
                sheet.signature_secondary.as_ref(),
            ),
        ],
    };

    let mut nodes = Vec::new();
    for (cx, spec) in centers {
        let has_content = spec.is_some() || sheet.show_signature_line;
        if !has_content {
            continue;
        }

        if let Some(image_src) = spec.and_then(|s| s.image.as_ref()) {
            match ImageData::from_base64(image_src) {
                Ok(image) => {
                    let w = 84.0;
                    let h = 28.0;
                    nodes.push(Node::image(image, cx - w / 2.0, baseline - h - 2.0, w, h));
                }
                Err(e) => log::warn!("skipping undecodable signature image: {}", e),
            }
        }

        if sheet.show_signature_line {
            nodes.push(Node::path(PathShape::stroked(
                vec![
                    crate::model::PathCommand::MoveTo(cx - half_line, baseline),
                    crate::model::PathCommand::LineTo(cx + half_line, baseline),
                ],
                sheet.text_muted,
                0.8,
            )));
        }

        if let Some(spec) = spec {
            let mut text_y = baseline + sheet.small_size + 4.0;
            if let Some(name) = &spec.name {
                nodes.push(Node::text(
                    span(name.clone(), cx, text_y, sheet.body_family, sheet.small_size, sheet.text)
                        .bold(true),
                ));
                text_y += sheet.caption_size + 4.0;
            }
            if let Some(label) = &spec.label {
                nodes.push(Node::text(span(
                    label.clone(),
                    cx,
                    text_y,
                    sheet.body_family,
                    sheet.caption_size,
                    sheet.text_muted,
                )));
            }
        }
    }

    nodes
}

/// Footer band: certificate number (monospaced) and QR image with caption.
/// The certificate number sits opposite the QR, or on the left when the QR
/// is centered or absent.
pub(crate) fn footer_nodes(ctx: &Ctx, qr: Option<&ImageData>) -> Vec<Node> {
    let sheet = ctx.sheet;
    let mut nodes = Vec::new();

    let qr = qr.filter(|_| sheet.show_qr);
    let bottom = ctx.page_h - sheet.padding - 6.0;

    if let Some(image) = qr.cloned() {
        let size = sheet.qr_size;
        let x = match sheet.qr_position {
            HorizontalPosition::Left => ctx.content_left(),
            HorizontalPosition::Center => ctx.center_x() - size / 2.0,
            HorizontalPosition::Right => ctx.content_right() - size,
        };
        let y = bottom - size - sheet.caption_size - 6.0;
        nodes.push(Node::image(image, x, y, size, size));
        nodes.push(Node::text(span(
            "Scan to verify",
            x + size / 2.0,
            y + size + sheet.caption_size + 3.0,
            sheet.body_family,
            sheet.caption_size,
            sheet.text_muted,
        )));
    }

    if sheet.show_certificate_number {
        if let Some(number) = &ctx.data.certificate_number {
            let (x, anchor) = match (qr.is_some(), sheet.qr_position) {
                (true, HorizontalPosition::Left) => (ctx.content_right(), TextAnchor::End),
                _ => (ctx.content_left(), TextAnchor::Start),
            };
            nodes.push(Node::text(
                span(
                    format!("No. {}", number),
                    x,
                    bottom,
                    FontRole::Slab,
                    sheet.caption_size,
                    sheet.text_muted,
                )
                .anchored(anchor),
            ));
        }
    }

    if !sheet.footer_text.is_empty() {
        nodes.push(Node::text(span(
            sheet.footer_text.clone(),
            ctx.center_x(),
            bottom,
            sheet.body_family,
            sheet.caption_size,
            sheet.text_muted,
        )));
    }

    nodes
}

/// Large faded watermark text across the page middle, behind the content.
pub(crate) fn watermark_node(ctx: &Ctx) -> Option<Node> {
    let sheet = ctx.sheet;
    let text = sheet.watermark_text.as_ref()?;
    if text.is_empty() {
        return None;
    }

    // Scale the type down until the line fits inside the frame.
    let mut size = 96.0;
    let max_width = ctx.page_w - 2.0 * sheet.padding;
    let width = ctx.measure(text, sheet.title_family, true, size, 4.0);
    if width > max_width {
        size *= max_width / width;
    }

    let span = span(
        text.clone(),
        ctx.center_x(),
        ctx.page_h / 2.0 + size / 3.0,
        sheet.title_family,
        size,
        sheet.text_muted,
    )
    .bold(true)
    .spaced(4.0);
    Some(Node::group_with_opacity(
        0.0,
        0.0,
        sheet.watermark_opacity,
        vec![Node::text(span)],
    ))
}

/// The configured seal, placed at the given y center per its position.
pub(crate) fn seal_node(ctx: &Ctx, cy: f64) -> Option<Node> {
    let sheet = ctx.sheet;
    if !sheet.show_seal {
        return None;
    }
    let size = 64.0;
    let cx = match sheet.seal_position {
        SealPosition::Left => ctx.content_left() + size / 2.0 + 10.0,
        SealPosition::Center => ctx.center_x(),
        SealPosition::Right => ctx.content_right() - size / 2.0 - 10.0,
    };
    let badge = primitives::seal(
        sheet.seal_style,
        sheet.primary,
        sheet.secondary,
        sheet.accent,
        size,
    );
    Some(Node::group(cx, cy, vec![badge]))
}

/// A divider primitive centered at `y`, spanning `width` around the page
/// center.
pub(crate) fn divider_node(ctx: &Ctx, y: f64, width: f64) -> Option<Node> {
    let sheet = ctx.sheet;
    primitives::divider(sheet.divider, width, sheet.secondary, sheet.accent)
        .map(|d| Node::group(ctx.center_x() - width / 2.0, y, vec![d]))
}
