//! # Document Model
//!
//! The renderer-agnostic representation of a certificate page. Template
//! renderers build a tree of nodes — groups, text, images, vector paths —
//! with absolute coordinates in PDF points (1/72 inch, origin top-left),
//! and the PDF serializer walks that tree. Nothing in here knows about
//! templates, configuration, or PDF syntax.

use serde::{Deserialize, Serialize};

use crate::error::LaureaError;
use crate::font::FontRole;

/// A complete, laid-out certificate document. Always a single page.
#[derive(Debug, Clone)]
pub struct Document {
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Metadata embedded in the PDF Info dictionary.
    pub metadata: Metadata,
    /// The visual content, back-to-front.
    pub root: Node,
}

/// Document metadata embedded in the PDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
}

/// The different kinds of nodes in the document tree.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A container applying a translation and an opacity to its children.
    Group {
        dx: f64,
        dy: f64,
        /// Multiplied into child paints. 1.0 = opaque.
        opacity: f64,
        children: Vec<Node>,
    },

    /// A single line of text anchored at a point on its baseline.
    Text(TextSpan),

    /// A raster image drawn into a rectangle.
    Image {
        image: ImageData,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// A vector path with optional fill and stroke.
    Path(PathShape),
}

/// Text content plus everything needed to place and paint it.
#[derive(Debug, Clone)]
pub struct TextSpan {
    pub content: String,
    /// Anchor x coordinate; interpretation depends on `anchor`.
    pub x: f64,
    /// Baseline y coordinate.
    pub y: f64,
    pub role: FontRole,
    pub bold: bool,
    pub italic: bool,
    pub size: f64,
    pub color: Color,
    pub anchor: TextAnchor,
    pub letter_spacing: f64,
}

/// How a text span's x coordinate relates to the rendered string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// A vector path: a command list plus paint.
#[derive(Debug, Clone)]
pub struct PathShape {
    pub commands: Vec<PathCommand>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    /// 1.0 = opaque. Combined multiplicatively with enclosing groups.
    pub opacity: f64,
}

/// Stroke paint for a path.
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash pattern as (on, off) lengths; `None` draws solid.
    pub dash: Option<(f64, f64)>,
}

/// Path construction commands, absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Cubic bezier: two control points then the end point.
    CurveTo(f64, f64, f64, f64, f64, f64),
    Close,
}

/// An RGB color, components in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string. Malformed input yields black, matching
    /// the engine's substitute-never-fail policy for resolved values; the
    /// validator rejects malformed colors before they get here.
    pub fn hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Color::BLACK;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Decoded raster image pixels ready for PDF XObject embedding.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width_px: u32,
    pub height_px: u32,
    /// Packed RGB, 3 bytes per pixel, row-major.
    pub rgb: Vec<u8>,
    /// Optional 8-bit alpha channel, 1 byte per pixel.
    pub alpha: Option<Vec<u8>>,
}

impl ImageData {
    /// Decode a caller-supplied PNG or JPEG payload. Accepts raw base64 or
    /// a `data:image/...;base64,` URI.
    pub fn from_base64(src: &str) -> Result<Self, LaureaError> {
        use base64::Engine;
        let b64 = match src.find("base64,") {
            Some(idx) => &src[idx + 7..],
            None => src,
        };
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64.trim())
            .map_err(|e| LaureaError::Image(format!("invalid base64: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Decode PNG/JPEG bytes into packed RGB plus a separated alpha channel.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LaureaError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| LaureaError::Image(e.to_string()))?;
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();

        let mut rgb = Vec::with_capacity((w * h * 3) as usize);
        let mut alpha = Vec::with_capacity((w * h) as usize);
        let mut has_alpha = false;
        for px in rgba.pixels() {
            rgb.extend_from_slice(&px.0[..3]);
            alpha.push(px.0[3]);
            if px.0[3] != 255 {
                has_alpha = true;
            }
        }

        Ok(Self {
            width_px: w,
            height_px: h,
            rgb,
            alpha: if has_alpha { Some(alpha) } else { None },
        })
    }

    /// Wrap an already-built RGB pixel buffer (used by the QR generator).
    pub fn from_rgb(width_px: u32, height_px: u32, rgb: Vec<u8>) -> Self {
        debug_assert_eq!(rgb.len(), (width_px * height_px * 3) as usize);
        Self {
            width_px,
            height_px,
            rgb,
            alpha: None,
        }
    }
}

impl Node {
    /// Create a Group node translating its children.
    pub fn group(dx: f64, dy: f64, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Group {
                dx,
                dy,
                opacity: 1.0,
                children,
            },
        }
    }

    /// Create a Group node with an opacity applied to the whole subtree.
    pub fn group_with_opacity(dx: f64, dy: f64, opacity: f64, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Group {
                dx,
                dy,
                opacity,
                children,
            },
        }
    }

    pub fn text(span: TextSpan) -> Self {
        Self {
            kind: NodeKind::Text(span),
        }
    }

    pub fn path(shape: PathShape) -> Self {
        Self {
            kind: NodeKind::Path(shape),
        }
    }

    pub fn image(image: ImageData, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind: NodeKind::Image {
                image,
                x,
                y,
                width,
                height,
            },
        }
    }
}

impl PathShape {
    /// A filled shape with no stroke.
    pub fn filled(commands: Vec<PathCommand>, fill: Color) -> Self {
        Self {
            commands,
            fill: Some(fill),
            stroke: None,
            opacity: 1.0,
        }
    }

    /// A stroked shape with no fill.
    pub fn stroked(commands: Vec<PathCommand>, color: Color, width: f64) -> Self {
        Self {
            commands,
            fill: None,
            stroke: Some(Stroke {
                color,
                width,
                dash: None,
            }),
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        if let Some(stroke) = &mut self.stroke {
            stroke.dash = Some((on, off));
        }
        self
    }

    /// Axis-aligned rectangle outline commands.
    pub fn rect_commands(x: f64, y: f64, w: f64, h: f64) -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(x, y),
            PathCommand::LineTo(x + w, y),
            PathCommand::LineTo(x + w, y + h),
            PathCommand::LineTo(x, y + h),
            PathCommand::Close,
        ]
    }

    /// Circle approximated with four cubic beziers.
    pub fn circle_commands(cx: f64, cy: f64, r: f64) -> Vec<PathCommand> {
        let k = 0.5522847498 * r;
        vec![
            PathCommand::MoveTo(cx + r, cy),
            PathCommand::CurveTo(cx + r, cy + k, cx + k, cy + r, cx, cy + r),
            PathCommand::CurveTo(cx - k, cy + r, cx - r, cy + k, cx - r, cy),
            PathCommand::CurveTo(cx - r, cy - k, cx - k, cy - r, cx, cy - r),
            PathCommand::CurveTo(cx + k, cy - r, cx + r, cy - k, cx + r, cy),
            PathCommand::Close,
        ]
    }

    /// Rectangle with rounded corners; radius 0 degenerates to sharp corners.
    pub fn rounded_rect_commands(x: f64, y: f64, w: f64, h: f64, r: f64) -> Vec<PathCommand> {
        if r <= 0.0 {
            return Self::rect_commands(x, y, w, h);
        }
        let r = r.min(w / 2.0).min(h / 2.0);
        let k = 0.5522847498 * r;
        vec![
            PathCommand::MoveTo(x + r, y),
            PathCommand::LineTo(x + w - r, y),
            PathCommand::CurveTo(x + w - r + k, y, x + w, y + r - k, x + w, y + r),
            PathCommand::LineTo(x + w, y + h - r),
            PathCommand::CurveTo(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h),
            PathCommand::LineTo(x + r, y + h),
            PathCommand::CurveTo(x + r - k, y + h, x, y + h - r + k, x, y + h - r),
            PathCommand::LineTo(x, y + r),
            PathCommand::CurveTo(x, y + r - k, x + r - k, y, x + r, y),
            PathCommand::Close,
        ]
    }

    /// The bounding box of this path's anchor points, as (min_x, min_y, max_x, max_y).
    /// Control points are ignored; good enough for ornament placement.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut visit = |x: f64, y: f64| {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        };
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => visit(x, y),
                PathCommand::CurveTo(_, _, _, _, x, y) => visit(x, y),
                PathCommand::Close => {}
            }
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Rotate every coordinate by `degrees` about (cx, cy).
    pub fn rotated_about(mut self, degrees: f64, cx: f64, cy: f64) -> Self {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        let rot = |x: f64, y: f64| {
            let (dx, dy) = (x - cx, y - cy);
            (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
        };
        for cmd in &mut self.commands {
            *cmd = match *cmd {
                PathCommand::MoveTo(x, y) => {
                    let (x, y) = rot(x, y);
                    PathCommand::MoveTo(x, y)
                }
                PathCommand::LineTo(x, y) => {
                    let (x, y) = rot(x, y);
                    PathCommand::LineTo(x, y)
                }
                PathCommand::CurveTo(x1, y1, x2, y2, x, y) => {
                    let (x1, y1) = rot(x1, y1);
                    let (x2, y2) = rot(x2, y2);
                    let (x, y) = rot(x, y);
                    PathCommand::CurveTo(x1, y1, x2, y2, x, y)
                }
                PathCommand::Close => PathCommand::Close,
            };
        }
        self
    }

    /// Mirror horizontally (`flip_x`) and/or vertically (`flip_y`) about the
    /// given axis coordinates, then translate. Used for asymmetric corner
    /// motifs where rotation would produce the wrong handedness.
    pub fn mirrored(mut self, flip_x: bool, flip_y: bool, axis_x: f64, axis_y: f64) -> Self {
        let map = |x: f64, y: f64| {
            (
                if flip_x { 2.0 * axis_x - x } else { x },
                if flip_y { 2.0 * axis_y - y } else { y },
            )
        };
        for cmd in &mut self.commands {
            *cmd = match *cmd {
                PathCommand::MoveTo(x, y) => {
                    let (x, y) = map(x, y);
                    PathCommand::MoveTo(x, y)
                }
                PathCommand::LineTo(x, y) => {
                    let (x, y) = map(x, y);
                    PathCommand::LineTo(x, y)
                }
                PathCommand::CurveTo(x1, y1, x2, y2, x, y) => {
                    let (x1, y1) = map(x1, y1);
                    let (x2, y2) = map(x2, y2);
                    let (x, y) = map(x, y);
                    PathCommand::CurveTo(x1, y1, x2, y2, x, y)
                }
                PathCommand::Close => PathCommand::Close,
            };
        }
        self
    }
}
