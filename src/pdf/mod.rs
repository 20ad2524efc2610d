//! # PDF Serializer
//!
//! Walks a laid-out document tree and writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. We write the raw bytes ourselves
//! because it gives us full control over the output and keeps the engine
//! self-contained. The PDF spec is verbose but the subset a single-page
//! certificate needs is manageable.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, page, content stream, images)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! All text uses the standard 14 Type1 fonts with WinAnsiEncoding, so no
//! font programs are embedded. Images become FlateDecode XObjects, with a
//! DeviceGray SMask when an alpha channel is present. Translucent paint
//! (watermarks, gradient dividers, background patterns) goes through
//! ExtGState entries inlined in the page resource dictionary.

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::error::LaureaError;
use crate::font::{registry, StandardFont};
use crate::model::{Document, ImageData, Node, NodeKind, PathCommand, TextAnchor, TextSpan};

pub struct PdfWriter;

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Fonts referenced by the content stream, indexed as /F0, /F1, ...
    fonts: Vec<StandardFont>,
    /// XObject obj IDs for images, indexed as /Im0, /Im1, ...
    image_objects: Vec<usize>,
    /// Distinct alpha values (in thousandths) needing an ExtGState,
    /// indexed as /GS0, /GS1, ...
    alphas: Vec<u32>,
}

struct PdfObject {
    data: Vec<u8>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a single-page document to a PDF byte vector.
    pub fn write(&self, doc: &Document) -> Result<Vec<u8>, LaureaError> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
            fonts: Vec::new(),
            image_objects: Vec::new(),
            alphas: Vec::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = images, content stream, page, fonts, info
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });

        // Pre-walk: register fonts, image XObjects, and alpha states in the
        // order the content stream will reference them.
        Self::register_resources(&mut builder, &doc.root, 1.0);
        if builder.fonts.is_empty() {
            builder.fonts.push(StandardFont::Helvetica);
        }

        // Content stream
        let mut stream = String::new();
        let mut image_counter = 0usize;
        self.write_node(
            &mut stream,
            &doc.root,
            doc.height,
            0.0,
            0.0,
            1.0,
            &builder,
            &mut image_counter,
        );
        let compressed = compress_to_vec_zlib(stream.as_bytes(), 6);

        let content_obj_id = builder.objects.len();
        let mut content_data: Vec<u8> = Vec::new();
        let _ = write!(
            content_data,
            "<< /Length {} /Filter /FlateDecode >>\nstream\n",
            compressed.len()
        );
        content_data.extend_from_slice(&compressed);
        content_data.extend_from_slice(b"\nendstream");
        builder.objects.push(PdfObject { data: content_data });

        // Font objects
        let mut font_refs = String::new();
        for (i, font) in builder.fonts.iter().enumerate() {
            let obj_id = builder.objects.len();
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            builder.objects.push(PdfObject {
                data: font_dict.into_bytes(),
            });
            let _ = write!(font_refs, "/F{} {} 0 R ", i, obj_id);
        }

        // Page object with inline ExtGState and XObject resources
        let mut resources = format!("/Font << {}>>", font_refs);
        if !builder.image_objects.is_empty() {
            let xobjects: String = builder
                .image_objects
                .iter()
                .enumerate()
                .map(|(i, obj_id)| format!("/Im{} {} 0 R", i, obj_id))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(resources, " /XObject << {} >>", xobjects);
        }
        if !builder.alphas.is_empty() {
            let states: String = builder
                .alphas
                .iter()
                .enumerate()
                .map(|(i, milli)| {
                    let a = *milli as f64 / 1000.0;
                    format!("/GS{} << /Type /ExtGState /ca {:.3} /CA {:.3} >>", i, a, a)
                })
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(resources, " /ExtGState << {} >>", states);
        }

        let page_obj_id = builder.objects.len();
        let page_dict = format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Contents {} 0 R /Resources << {} >> >>",
            doc.width, doc.height, content_obj_id, resources
        );
        builder.objects.push(PdfObject {
            data: page_dict.into_bytes(),
        });

        // Catalog (object 1) and Pages tree (object 2)
        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{} 0 R] /Count 1 >>",
            page_obj_id
        )
        .into_bytes();

        // Info dictionary (metadata)
        let metadata = &doc.metadata;
        let info_obj_id = if metadata.title.is_some() || metadata.author.is_some() {
            let id = builder.objects.len();
            let mut info = String::from("<< ");
            if let Some(ref title) = metadata.title {
                let _ = write!(info, "/Title ({}) ", Self::escape_pdf_string(title));
            }
            if let Some(ref author) = metadata.author {
                let _ = write!(info, "/Author ({}) ", Self::escape_pdf_string(author));
            }
            if let Some(ref subject) = metadata.subject {
                let _ = write!(info, "/Subject ({}) ", Self::escape_pdf_string(subject));
            }
            let _ = write!(info, "/Producer (Laurea 0.3) /Creator (Laurea) >>");
            builder.objects.push(PdfObject {
                data: info.into_bytes(),
            });
            Some(id)
        } else {
            None
        };

        Ok(self.serialize(&builder, info_obj_id))
    }

    /// Walk the tree once before writing, allocating font slots, image
    /// XObjects, and ExtGState alpha entries. Traversal order must match
    /// `write_node` so the /ImN counters line up.
    fn register_resources(builder: &mut PdfBuilder, node: &Node, opacity: f64) {
        match &node.kind {
            NodeKind::Group {
                opacity: group_opacity,
                children,
                ..
            } => {
                let combined = opacity * group_opacity;
                for child in children {
                    Self::register_resources(builder, child, combined);
                }
            }
            NodeKind::Text(span) => {
                let font = registry().resolve(span.role, span.bold, span.italic);
                if !builder.fonts.contains(&font) {
                    builder.fonts.push(font);
                }
                if opacity < 1.0 {
                    Self::register_alpha(builder, opacity);
                }
            }
            NodeKind::Path(shape) => {
                let combined = opacity * shape.opacity;
                if combined < 1.0 {
                    Self::register_alpha(builder, combined);
                }
            }
            NodeKind::Image { image, .. } => {
                let obj_id = Self::write_image_xobject(builder, image);
                builder.image_objects.push(obj_id);
                if opacity < 1.0 {
                    Self::register_alpha(builder, opacity);
                }
            }
        }
    }

    fn register_alpha(builder: &mut PdfBuilder, opacity: f64) {
        let milli = Self::alpha_key(opacity);
        if !builder.alphas.contains(&milli) {
            builder.alphas.push(milli);
        }
    }

    fn alpha_key(opacity: f64) -> u32 {
        (opacity.clamp(0.0, 1.0) * 1000.0).round() as u32
    }

    fn alpha_index(builder: &PdfBuilder, opacity: f64) -> Option<usize> {
        let milli = Self::alpha_key(opacity);
        builder.alphas.iter().position(|&a| a == milli)
    }

    /// Write a node's PDF operators. `dx`/`dy` are the accumulated group
    /// translation, `opacity` the accumulated group alpha.
    #[allow(clippy::too_many_arguments)]
    fn write_node(
        &self,
        stream: &mut String,
        node: &Node,
        page_height: f64,
        dx: f64,
        dy: f64,
        opacity: f64,
        builder: &PdfBuilder,
        image_counter: &mut usize,
    ) {
        match &node.kind {
            NodeKind::Group {
                dx: gdx,
                dy: gdy,
                opacity: group_opacity,
                children,
            } => {
                for child in children {
                    self.write_node(
                        stream,
                        child,
                        page_height,
                        dx + gdx,
                        dy + gdy,
                        opacity * group_opacity,
                        builder,
                        image_counter,
                    );
                }
            }

            NodeKind::Text(span) => {
                self.write_text(stream, span, page_height, dx, dy, opacity, builder);
            }

            NodeKind::Path(shape) => {
                let combined = opacity * shape.opacity;
                let _ = write!(stream, "q\n");
                if let Some(idx) = (combined < 1.0)
                    .then(|| Self::alpha_index(builder, combined))
                    .flatten()
                {
                    let _ = write!(stream, "/GS{} gs\n", idx);
                }
                if let Some(fill) = &shape.fill {
                    let _ = write!(stream, "{:.3} {:.3} {:.3} rg\n", fill.r, fill.g, fill.b);
                }
                if let Some(stroke) = &shape.stroke {
                    let c = stroke.color;
                    let _ = write!(
                        stream,
                        "{:.3} {:.3} {:.3} RG\n{:.2} w\n",
                        c.r, c.g, c.b, stroke.width
                    );
                    if let Some((on, off)) = stroke.dash {
                        let _ = write!(stream, "[{:.2} {:.2}] 0 d\n", on, off);
                    }
                }

                for cmd in &shape.commands {
                    match *cmd {
                        PathCommand::MoveTo(x, y) => {
                            let _ = write!(
                                stream,
                                "{:.2} {:.2} m\n",
                                x + dx,
                                page_height - (y + dy)
                            );
                        }
                        PathCommand::LineTo(x, y) => {
                            let _ = write!(
                                stream,
                                "{:.2} {:.2} l\n",
                                x + dx,
                                page_height - (y + dy)
                            );
                        }
                        PathCommand::CurveTo(x1, y1, x2, y2, x, y) => {
                            let _ = write!(
                                stream,
                                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
                                x1 + dx,
                                page_height - (y1 + dy),
                                x2 + dx,
                                page_height - (y2 + dy),
                                x + dx,
                                page_height - (y + dy)
                            );
                        }
                        PathCommand::Close => {
                            let _ = write!(stream, "h\n");
                        }
                    }
                }

                let op = match (&shape.fill, &shape.stroke) {
                    (Some(_), Some(_)) => "B",
                    (Some(_), None) => "f",
                    (None, Some(_)) => "S",
                    (None, None) => "n",
                };
                let _ = write!(stream, "{}\nQ\n", op);
            }

            NodeKind::Image {
                x, y, width, height, ..
            } => {
                let img_idx = *image_counter;
                *image_counter += 1;
                let px = x + dx;
                let py = page_height - (y + dy) - height;
                let _ = write!(stream, "q\n");
                if let Some(idx) = (opacity < 1.0)
                    .then(|| Self::alpha_index(builder, opacity))
                    .flatten()
                {
                    let _ = write!(stream, "/GS{} gs\n", idx);
                }
                let _ = write!(
                    stream,
                    "{:.4} 0 0 {:.4} {:.2} {:.2} cm\n/Im{} Do\nQ\n",
                    width, height, px, py, img_idx
                );
            }
        }
    }

    fn write_text(
        &self,
        stream: &mut String,
        span: &TextSpan,
        page_height: f64,
        dx: f64,
        dy: f64,
        opacity: f64,
        builder: &PdfBuilder,
    ) {
        let font = registry().resolve(span.role, span.bold, span.italic);
        let font_idx = builder
            .fonts
            .iter()
            .position(|f| *f == font)
            .unwrap_or(0);

        let width = registry().measure(
            &span.content,
            span.role,
            span.bold,
            span.italic,
            span.size,
            span.letter_spacing,
        );
        let x_start = match span.anchor {
            TextAnchor::Start => span.x,
            TextAnchor::Middle => span.x - width / 2.0,
            TextAnchor::End => span.x - width,
        };

        let pdf_y = page_height - (span.y + dy);

        let _ = write!(stream, "q\n");
        if let Some(idx) = (opacity < 1.0)
            .then(|| Self::alpha_index(builder, opacity))
            .flatten()
        {
            let _ = write!(stream, "/GS{} gs\n", idx);
        }
        let c = span.color;
        let _ = write!(
            stream,
            "BT\n{:.3} {:.3} {:.3} rg\n/F{} {:.1} Tf\n",
            c.r, c.g, c.b, font_idx, span.size
        );
        if span.letter_spacing != 0.0 {
            let _ = write!(stream, "{:.2} Tc\n", span.letter_spacing);
        }
        let _ = write!(stream, "{:.2} {:.2} Td\n", x_start + dx, pdf_y);

        let mut text_str = String::new();
        for ch in span.content.chars() {
            let b = Self::unicode_to_winansi(ch).unwrap_or(b'?');
            match b {
                b'\\' => text_str.push_str("\\\\"),
                b'(' => text_str.push_str("\\("),
                b')' => text_str.push_str("\\)"),
                0x20..=0x7E => text_str.push(b as char),
                _ => {
                    // Octal escape for bytes outside the ASCII printable range
                    let _ = write!(text_str, "\\{:03o}", b);
                }
            }
        }
        let _ = write!(stream, "({}) Tj\nET\nQ\n", text_str);
    }

    /// Write an image as one or two XObject PDF objects (RGB plus an
    /// optional DeviceGray SMask for alpha). Returns the main XObject ID.
    fn write_image_xobject(builder: &mut PdfBuilder, image: &ImageData) -> usize {
        let smask_id = image.alpha.as_ref().map(|alpha_data| {
            let compressed_alpha = compress_to_vec_zlib(alpha_data, 6);
            let smask_obj_id = builder.objects.len();
            let mut smask_data: Vec<u8> = Vec::new();
            let _ = write!(
                smask_data,
                "<< /Type /XObject /Subtype /Image \
                 /Width {} /Height {} \
                 /ColorSpace /DeviceGray \
                 /BitsPerComponent 8 \
                 /Filter /FlateDecode \
                 /Length {} >>\nstream\n",
                image.width_px,
                image.height_px,
                compressed_alpha.len()
            );
            smask_data.extend_from_slice(&compressed_alpha);
            smask_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: smask_data });
            smask_obj_id
        });

        let compressed_rgb = compress_to_vec_zlib(&image.rgb, 6);
        let obj_id = builder.objects.len();
        let mut obj_data: Vec<u8> = Vec::new();

        let smask_ref = smask_id
            .map(|id| format!(" /SMask {} 0 R", id))
            .unwrap_or_default();

        let _ = write!(
            obj_data,
            "<< /Type /XObject /Subtype /Image \
             /Width {} /Height {} \
             /ColorSpace /DeviceRGB \
             /BitsPerComponent 8 \
             /Filter /FlateDecode \
             /Length {}{} >>\nstream\n",
            image.width_px,
            image.height_px,
            compressed_rgb.len(),
            smask_ref
        );
        obj_data.extend_from_slice(&compressed_rgb);
        obj_data.extend_from_slice(b"\nendstream");
        builder.objects.push(PdfObject { data: obj_data });
        obj_id
    }

    /// Escape special characters in a PDF string.
    fn escape_pdf_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)")
    }

    /// Map a Unicode codepoint to a WinAnsiEncoding byte value.
    ///
    /// WinAnsiEncoding is based on Windows-1252. Most codepoints in
    /// 0x20..=0x7E and 0xA0..=0xFF map directly. The 0x80..=0x9F range
    /// contains special mappings for smart quotes, bullets, dashes, etc.
    fn unicode_to_winansi(ch: char) -> Option<u8> {
        let cp = ch as u32;
        // ASCII printable range maps directly
        if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
            return Some(cp as u8);
        }
        // Windows-1252 special mappings (0x80-0x9F)
        match cp {
            0x20AC => Some(0x80), // Euro sign
            0x201A => Some(0x82), // Single low-9 quotation mark
            0x0192 => Some(0x83), // Latin small letter f with hook
            0x201E => Some(0x84), // Double low-9 quotation mark
            0x2026 => Some(0x85), // Horizontal ellipsis
            0x2020 => Some(0x86), // Dagger
            0x2021 => Some(0x87), // Double dagger
            0x02C6 => Some(0x88), // Modifier letter circumflex accent
            0x2030 => Some(0x89), // Per mille sign
            0x0160 => Some(0x8A), // Latin capital letter S with caron
            0x2039 => Some(0x8B), // Single left-pointing angle quotation
            0x0152 => Some(0x8C), // Latin capital ligature OE
            0x017D => Some(0x8E), // Latin capital letter Z with caron
            0x2018 => Some(0x91), // Left single quotation mark
            0x2019 => Some(0x92), // Right single quotation mark
            0x201C => Some(0x93), // Left double quotation mark
            0x201D => Some(0x94), // Right double quotation mark
            0x2022 => Some(0x95), // Bullet
            0x2013 => Some(0x96), // En dash
            0x2014 => Some(0x97), // Em dash
            0x02DC => Some(0x98), // Small tilde
            0x2122 => Some(0x99), // Trade mark sign
            0x0161 => Some(0x9A), // Latin small letter s with caron
            0x203A => Some(0x9B), // Single right-pointing angle quotation
            0x0153 => Some(0x9C), // Latin small ligature oe
            0x017E => Some(0x9E), // Latin small letter z with caron
            0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
            _ => None,
        }
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: Option<usize>) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        // Header
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for i in 1..builder.objects.len() {
            let _ = write!(output, "{:010} 00000 n \n", offsets[i]);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R",
            builder.objects.len()
        );
        if let Some(info_id) = info_obj_id {
            let _ = write!(output, " /Info {} 0 R", info_id);
        }
        let _ = write!(output, " >>\nstartxref\n{}\n%%EOF\n", xref_offset);

        output
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontRole;
    use crate::model::{Color, Metadata, PathShape, TextSpan};

    fn empty_doc() -> Document {
        Document {
            width: 841.89,
            height: 595.28,
            metadata: Metadata::default(),
            root: Node::group(0.0, 0.0, vec![]),
        }
    }

    fn text_span(content: &str, bold: bool) -> TextSpan {
        TextSpan {
            content: content.to_string(),
            x: 100.0,
            y: 100.0,
            role: FontRole::Sans,
            bold,
            italic: false,
            size: 12.0,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            letter_spacing: 0.0,
        }
    }

    #[test]
    fn escape_pdf_string_handles_delimiters() {
        assert_eq!(
            PdfWriter::escape_pdf_string("Hello (World)"),
            "Hello \\(World\\)"
        );
        assert_eq!(PdfWriter::escape_pdf_string("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn empty_document_produces_valid_pdf() {
        let bytes = PdfWriter::new().write(&empty_doc()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
    }

    #[test]
    fn metadata_lands_in_info_dict() {
        let mut doc = empty_doc();
        doc.metadata = Metadata {
            title: Some("Certificate - Jane Doe".to_string()),
            author: Some("Acme Academy".to_string()),
            subject: None,
        };
        let bytes = PdfWriter::new().write(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Title (Certificate - Jane Doe)"));
        assert!(text.contains("/Author (Acme Academy)"));
    }

    #[test]
    fn bold_font_registered_separately() {
        let mut doc = empty_doc();
        doc.root = Node::group(
            0.0,
            0.0,
            vec![
                Node::text(text_span("regular", false)),
                Node::text(text_span("bold", true)),
            ],
        );
        let bytes = PdfWriter::new().write(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
    }

    #[test]
    fn translucent_paths_get_extgstate() {
        let mut doc = empty_doc();
        doc.root = Node::group(
            0.0,
            0.0,
            vec![Node::path(
                PathShape::filled(
                    PathShape::rect_commands(10.0, 10.0, 50.0, 50.0),
                    Color::BLACK,
                )
                .with_opacity(0.05),
            )],
        );
        let bytes = PdfWriter::new().write(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/ExtGState"));
        assert!(text.contains("/ca 0.050"));
    }

    #[test]
    fn images_become_xobjects() {
        let mut doc = empty_doc();
        let image = ImageData::from_rgb(2, 2, vec![255; 12]);
        doc.root = Node::group(0.0, 0.0, vec![Node::image(image, 10.0, 10.0, 64.0, 64.0)]);
        let bytes = PdfWriter::new().write(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Subtype /Image"));
        assert!(text.contains("/Im0"));
        assert!(text.contains("/ColorSpace /DeviceRGB"));
    }

    #[test]
    fn alpha_channel_adds_smask() {
        let mut doc = empty_doc();
        let image = ImageData {
            width_px: 2,
            height_px: 2,
            rgb: vec![255; 12],
            alpha: Some(vec![0, 128, 255, 64]),
        };
        doc.root = Node::group(0.0, 0.0, vec![Node::image(image, 10.0, 10.0, 64.0, 64.0)]);
        let bytes = PdfWriter::new().write(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/SMask"));
        assert!(text.contains("/ColorSpace /DeviceGray"));
    }

    #[test]
    fn standard_fonts_never_embed_programs() {
        let mut doc = empty_doc();
        doc.root = Node::group(0.0, 0.0, vec![Node::text(text_span("hello", false))]);
        let bytes = PdfWriter::new().write(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Type1"));
        assert!(!text.contains("CIDFontType2"));
        assert!(!text.contains("FontFile"));
    }
}
