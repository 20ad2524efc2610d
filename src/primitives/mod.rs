//! # Vector Primitive Library
//!
//! Stateless drawing functions for the ornamental parts of a certificate:
//! dividers, corner ornaments, seals, and background patterns. Every
//! function is a pure map from (style, colors, size) to a shape subtree in
//! local coordinates — callers position the result with a Group. No
//! randomness, no hidden state, no knowledge of the surrounding layout.

use crate::config::{BackgroundPattern, CornerOrnamentStyle, DividerStyle, SealStyle};
use crate::model::{Color, Node, PathCommand, PathShape};

// ── Dividers ────────────────────────────────────────────────────

/// A horizontal divider spanning `width` points, drawn around local y = 0
/// with x in 0..width. Returns `None` for `DividerStyle::None`.
pub fn divider(style: DividerStyle, width: f64, primary: Color, secondary: Color) -> Option<Node> {
    match style {
        DividerStyle::None => None,
        DividerStyle::Simple => Some(Node::path(PathShape::stroked(
            vec![PathCommand::MoveTo(0.0, 0.0), PathCommand::LineTo(width, 0.0)],
            primary,
            1.0,
        ))),
        DividerStyle::Ornate => Some(ornate_divider(width, primary, secondary)),
        DividerStyle::Dots => Some(dotted_divider(width, primary, secondary)),
        DividerStyle::Gradient => Some(gradient_divider(width, primary, secondary)),
    }
}

/// Center diamond flanked by two rules with small terminal dots.
fn ornate_divider(width: f64, primary: Color, secondary: Color) -> Node {
    let mid = width / 2.0;
    let diamond = 5.0;
    let gap = diamond + 6.0;

    let mut children = vec![
        Node::path(PathShape::stroked(
            vec![
                PathCommand::MoveTo(0.0, 0.0),
                PathCommand::LineTo(mid - gap, 0.0),
            ],
            primary,
            1.0,
        )),
        Node::path(PathShape::stroked(
            vec![
                PathCommand::MoveTo(mid + gap, 0.0),
                PathCommand::LineTo(width, 0.0),
            ],
            primary,
            1.0,
        )),
        Node::path(PathShape::filled(
            vec![
                PathCommand::MoveTo(mid, -diamond),
                PathCommand::LineTo(mid + diamond, 0.0),
                PathCommand::LineTo(mid, diamond),
                PathCommand::LineTo(mid - diamond, 0.0),
                PathCommand::Close,
            ],
            secondary,
        )),
    ];
    for x in [0.0, width] {
        children.push(Node::path(PathShape::filled(
            PathShape::circle_commands(x, 0.0, 1.8),
            primary,
        )));
    }
    Node::group(0.0, 0.0, children)
}

/// Evenly spaced dots: count = floor(width / 15), spacing = width / (count + 1),
/// with the visually-central dot (1-based index ceil(count / 2)) drawn larger.
fn dotted_divider(width: f64, primary: Color, secondary: Color) -> Node {
    let count = (width / 15.0).floor() as usize;
    let spacing = width / (count as f64 + 1.0);
    let central = count.div_ceil(2); // 1-based

    let mut children = Vec::with_capacity(count);
    for i in 1..=count {
        let x = spacing * i as f64;
        let (radius, color) = if i == central { (3.5, secondary) } else { (2.0, primary) };
        children.push(Node::path(PathShape::filled(
            PathShape::circle_commands(x, 0.0, radius),
            color,
        )));
    }
    Node::group(0.0, 0.0, children)
}

/// Four horizontal segments of decreasing opacity — two in the primary
/// color, two in the secondary.
fn gradient_divider(width: f64, primary: Color, secondary: Color) -> Node {
    let seg = width / 4.0;
    let opacities = [1.0, 0.75, 0.5, 0.25];
    let children = opacities
        .iter()
        .enumerate()
        .map(|(i, &opacity)| {
            let color = if i < 2 { primary } else { secondary };
            let x0 = seg * i as f64;
            Node::path(
                PathShape::stroked(
                    vec![
                        PathCommand::MoveTo(x0, 0.0),
                        PathCommand::LineTo(x0 + seg, 0.0),
                    ],
                    color,
                    2.0,
                )
                .with_opacity(opacity),
            )
        })
        .collect();
    Node::group(0.0, 0.0, children)
}

// ── Corner ornaments ────────────────────────────────────────────

/// All four corner ornaments for a page `page_w` × `page_h`, inset by
/// `inset` from each edge. One base quarter-corner shape, rotated
/// 0°/90°/180°/270° about its bounding-box center for the four placements —
/// except the asymmetric flourish motif, which is mirrored instead.
pub fn corner_ornaments(
    style: CornerOrnamentStyle,
    primary: Color,
    secondary: Color,
    size: f64,
    page_w: f64,
    page_h: f64,
    inset: f64,
) -> Vec<Node> {
    if style == CornerOrnamentStyle::None {
        return Vec::new();
    }

    // Box origins for TL, TR, BR, BL corner regions.
    let origins = [
        (inset, inset),
        (page_w - inset - size, inset),
        (page_w - inset - size, page_h - inset - size),
        (inset, page_h - inset - size),
    ];

    if style == CornerOrnamentStyle::Flourish {
        return flourish_corners(primary, secondary, size, &origins);
    }

    let base = match style {
        CornerOrnamentStyle::Classic => classic_corner(primary, size),
        CornerOrnamentStyle::Ornate => ornate_corner(primary, secondary, size),
        // Handled above.
        CornerOrnamentStyle::None | CornerOrnamentStyle::Flourish => unreachable!(),
    };

    let center = size / 2.0;
    origins
        .iter()
        .zip([0.0, 90.0, 180.0, 270.0])
        .map(|(&(x, y), angle)| {
            let shapes = base
                .iter()
                .map(|s| Node::path(s.clone().rotated_about(angle, center, center)))
                .collect();
            Node::group(x, y, shapes)
        })
        .collect()
}

/// Plain L-bracket hugging the top-left of a size × size box.
fn classic_corner(primary: Color, size: f64) -> Vec<PathShape> {
    vec![PathShape::stroked(
        vec![
            PathCommand::MoveTo(0.0, size * 0.6),
            PathCommand::LineTo(0.0, 0.0),
            PathCommand::LineTo(size * 0.6, 0.0),
        ],
        primary,
        1.5,
    )]
}

/// L-bracket plus an inner diagonal and an accent dot.
fn ornate_corner(primary: Color, secondary: Color, size: f64) -> Vec<PathShape> {
    vec![
        PathShape::stroked(
            vec![
                PathCommand::MoveTo(0.0, size * 0.7),
                PathCommand::LineTo(0.0, 0.0),
                PathCommand::LineTo(size * 0.7, 0.0),
            ],
            primary,
            2.0,
        ),
        PathShape::stroked(
            vec![
                PathCommand::MoveTo(size * 0.12, size * 0.45),
                PathCommand::LineTo(size * 0.12, size * 0.12),
                PathCommand::LineTo(size * 0.45, size * 0.12),
            ],
            primary,
            0.8,
        ),
        PathShape::filled(
            PathShape::circle_commands(size * 0.26, size * 0.26, size * 0.055),
            secondary,
        ),
    ]
}

/// The flourish motif is asymmetric (a one-handed scroll), so the other
/// three corners are produced by mirror flips plus translation, never by
/// rotation, which would flip its handedness.
fn flourish_corners(
    primary: Color,
    secondary: Color,
    size: f64,
    origins: &[(f64, f64); 4],
) -> Vec<Node> {
    let base = flourish_motif(primary, secondary, size);
    let axis = size / 2.0;

    // (flip_x, flip_y) per corner: TL as drawn, TR mirrored horizontally,
    // BR mirrored both ways, BL mirrored vertically.
    let flips = [(false, false), (true, false), (true, true), (false, true)];

    origins
        .iter()
        .zip(flips)
        .map(|(&(x, y), (fx, fy))| {
            let shapes = base
                .iter()
                .map(|s| Node::path(s.clone().mirrored(fx, fy, axis, axis)))
                .collect();
            Node::group(x, y, shapes)
        })
        .collect()
}

/// A curled scroll drawn for the top-left corner of a size × size box.
fn flourish_motif(primary: Color, secondary: Color, size: f64) -> Vec<PathShape> {
    let s = size;
    vec![
        PathShape::stroked(
            vec![
                PathCommand::MoveTo(0.0, s * 0.85),
                PathCommand::CurveTo(0.0, s * 0.3, s * 0.05, s * 0.05, s * 0.55, 0.0),
                PathCommand::CurveTo(s * 0.75, 0.0, s * 0.85, s * 0.1, s * 0.8, s * 0.2),
                PathCommand::CurveTo(s * 0.72, s * 0.32, s * 0.55, s * 0.28, s * 0.55, s * 0.16),
            ],
            primary,
            1.6,
        ),
        PathShape::stroked(
            vec![
                PathCommand::MoveTo(s * 0.08, s * 0.7),
                PathCommand::CurveTo(s * 0.08, s * 0.35, s * 0.18, s * 0.18, s * 0.45, s * 0.12),
            ],
            primary,
            0.9,
        ),
        PathShape::filled(
            PathShape::circle_commands(s * 0.62, s * 0.18, s * 0.035),
            secondary,
        ),
    ]
}

// ── Seals ───────────────────────────────────────────────────────

const CLASSIC_SEAL_SPIKES: usize = 24;

/// A seal/badge centered at the local origin with overall diameter `size`.
pub fn seal(style: SealStyle, primary: Color, secondary: Color, accent: Color, size: f64) -> Node {
    match style {
        SealStyle::Classic => classic_seal(primary, secondary, size),
        SealStyle::Modern => modern_seal(primary, accent, size),
        SealStyle::Ribbon => ribbon_seal(primary, secondary, accent, size),
        SealStyle::Badge => badge_seal(primary, accent, size),
    }
}

/// Rosette: 24 radial spikes at 15° increments between two concentric
/// radii, a solid disc, and an inset ten-point star.
fn classic_seal(primary: Color, secondary: Color, size: f64) -> Node {
    let outer = size / 2.0;
    let inner = outer * 0.78;

    let mut children: Vec<Node> = classic_seal_spikes(primary, outer, inner)
        .into_iter()
        .map(Node::path)
        .collect();

    children.push(Node::path(PathShape::filled(
        PathShape::circle_commands(0.0, 0.0, inner),
        primary,
    )));
    children.push(Node::path(PathShape::filled(
        star_commands(10, inner * 0.62, inner * 0.3),
        secondary,
    )));

    Node::group(0.0, 0.0, children)
}

/// The 24 spike triangles of the classic seal, between `inner` and `outer`
/// radii. The count is fixed; only the geometry scales with the radii.
fn classic_seal_spikes(color: Color, outer: f64, inner: f64) -> Vec<PathShape> {
    let step = 360.0 / CLASSIC_SEAL_SPIKES as f64; // 15 degrees
    (0..CLASSIC_SEAL_SPIKES)
        .map(|i| {
            let angle = (step * i as f64).to_radians();
            let half = (step / 2.0).to_radians();
            let tip = (outer * angle.cos(), outer * angle.sin());
            let left = (inner * (angle - half).cos(), inner * (angle - half).sin());
            let right = (inner * (angle + half).cos(), inner * (angle + half).sin());
            PathShape::filled(
                vec![
                    PathCommand::MoveTo(left.0, left.1),
                    PathCommand::LineTo(tip.0, tip.1),
                    PathCommand::LineTo(right.0, right.1),
                    PathCommand::Close,
                ],
                color,
            )
        })
        .collect()
}

/// Double ring with a check glyph.
fn modern_seal(primary: Color, accent: Color, size: f64) -> Node {
    let r = size / 2.0;
    Node::group(
        0.0,
        0.0,
        vec![
            Node::path(PathShape::stroked(
                PathShape::circle_commands(0.0, 0.0, r),
                primary,
                2.5,
            )),
            Node::path(PathShape::stroked(
                PathShape::circle_commands(0.0, 0.0, r * 0.82),
                primary,
                1.0,
            )),
            Node::path(check_commands(r * 0.7, accent)),
        ],
    )
}

/// Disc with two ribbon tails below and an accent check inside.
fn ribbon_seal(primary: Color, secondary: Color, accent: Color, size: f64) -> Node {
    let r = size / 2.0;
    let tail_w = r * 0.45;
    let tail_len = r * 1.1;
    let tail_top = r * 0.55;

    let tail = |x0: f64, lean: f64| {
        PathShape::filled(
            vec![
                PathCommand::MoveTo(x0, tail_top),
                PathCommand::LineTo(x0 + tail_w, tail_top),
                PathCommand::LineTo(x0 + tail_w + lean, tail_top + tail_len),
                PathCommand::LineTo(x0 + tail_w / 2.0 + lean, tail_top + tail_len * 0.8),
                PathCommand::LineTo(x0 + lean, tail_top + tail_len),
                PathCommand::Close,
            ],
            secondary,
        )
    };

    Node::group(
        0.0,
        0.0,
        vec![
            Node::path(tail(-tail_w - r * 0.1, -r * 0.15)),
            Node::path(tail(r * 0.1, r * 0.15)),
            Node::path(PathShape::filled(
                PathShape::circle_commands(0.0, 0.0, r),
                primary,
            )),
            Node::path(PathShape::stroked(
                PathShape::circle_commands(0.0, 0.0, r * 0.85),
                secondary,
                1.2,
            )),
            Node::path(check_commands(r * 0.75, accent)),
        ],
    )
}

/// Shield outline with an accent check.
fn badge_seal(primary: Color, accent: Color, size: f64) -> Node {
    let half = size / 2.0;
    let w = half * 0.9;
    let shield = PathShape::filled(
        vec![
            PathCommand::MoveTo(-w, -half),
            PathCommand::LineTo(w, -half),
            PathCommand::LineTo(w, half * 0.25),
            PathCommand::CurveTo(w, half * 0.7, half * 0.45, half * 0.95, 0.0, half),
            PathCommand::CurveTo(-half * 0.45, half * 0.95, -w, half * 0.7, -w, half * 0.25),
            PathCommand::Close,
        ],
        primary,
    );
    Node::group(
        0.0,
        0.0,
        vec![Node::path(shield), Node::path(check_commands(half * 0.8, accent))],
    )
}

/// A star polygon with `points` tips, alternating between `outer` and
/// `inner` radii, centered at the origin.
fn star_commands(points: usize, outer: f64, inner: f64) -> Vec<PathCommand> {
    let step = std::f64::consts::PI / points as f64;
    let mut commands = Vec::with_capacity(points * 2 + 1);
    for i in 0..(points * 2) {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = step * i as f64 - std::f64::consts::FRAC_PI_2;
        let (x, y) = (r * angle.cos(), r * angle.sin());
        if i == 0 {
            commands.push(PathCommand::MoveTo(x, y));
        } else {
            commands.push(PathCommand::LineTo(x, y));
        }
    }
    commands.push(PathCommand::Close);
    commands
}

/// Check mark sized to fit a box `extent` wide, centered at the origin.
fn check_commands(extent: f64, color: Color) -> PathShape {
    PathShape::stroked(
        vec![
            PathCommand::MoveTo(-extent * 0.4, 0.0),
            PathCommand::LineTo(-extent * 0.1, extent * 0.3),
            PathCommand::LineTo(extent * 0.45, -extent * 0.3),
        ],
        color,
        extent * 0.14,
    )
}

// ── Background patterns ─────────────────────────────────────────

const GRID_PITCH: f64 = 20.0;
const WATERMARK_PITCH: f64 = 60.0;
const DIAGONAL_PITCH: f64 = 40.0;
const DOT_PITCH: f64 = 30.0;

/// A full-page background pattern. Returns `None` for
/// `BackgroundPattern::None`.
pub fn background(
    pattern: BackgroundPattern,
    color: Color,
    opacity: f64,
    page_w: f64,
    page_h: f64,
) -> Option<Node> {
    match pattern {
        BackgroundPattern::None => None,
        BackgroundPattern::SubtleGrid => Some(subtle_grid(color, opacity, page_w, page_h)),
        BackgroundPattern::Watermark => Some(watermark_tiles(color, opacity, page_w, page_h)),
        BackgroundPattern::Diagonal => Some(diagonal_lines(color, opacity, page_w, page_h)),
        BackgroundPattern::Dots => Some(dot_grid(color, opacity, page_w, page_h)),
    }
}

/// Vertical and horizontal hairlines at a fixed 20 pt pitch.
fn subtle_grid(color: Color, opacity: f64, page_w: f64, page_h: f64) -> Node {
    let mut commands = Vec::new();
    let mut x = GRID_PITCH;
    while x < page_w {
        commands.push(PathCommand::MoveTo(x, 0.0));
        commands.push(PathCommand::LineTo(x, page_h));
        x += GRID_PITCH;
    }
    let mut y = GRID_PITCH;
    while y < page_h {
        commands.push(PathCommand::MoveTo(0.0, y));
        commands.push(PathCommand::LineTo(page_w, y));
        y += GRID_PITCH;
    }
    Node::path(PathShape::stroked(commands, color, 0.4).with_opacity(opacity))
}

/// A small circle tiled at 60 pt pitch.
fn watermark_tiles(color: Color, opacity: f64, page_w: f64, page_h: f64) -> Node {
    let mut children = Vec::new();
    let mut y = WATERMARK_PITCH / 2.0;
    while y < page_h {
        let mut x = WATERMARK_PITCH / 2.0;
        while x < page_w {
            children.push(Node::path(PathShape::stroked(
                PathShape::circle_commands(x, y, 9.0),
                color,
                0.8,
            )));
            x += WATERMARK_PITCH;
        }
        y += WATERMARK_PITCH;
    }
    Node::group_with_opacity(0.0, 0.0, opacity, children)
}

fn diagonal_lines(color: Color, opacity: f64, page_w: f64, page_h: f64) -> Node {
    let mut commands = Vec::new();
    let mut offset = -page_h;
    while offset < page_w {
        commands.push(PathCommand::MoveTo(offset, page_h));
        commands.push(PathCommand::LineTo(offset + page_h, 0.0));
        offset += DIAGONAL_PITCH;
    }
    Node::path(PathShape::stroked(commands, color, 0.4).with_opacity(opacity))
}

fn dot_grid(color: Color, opacity: f64, page_w: f64, page_h: f64) -> Node {
    let mut children = Vec::new();
    let mut y = DOT_PITCH / 2.0;
    while y < page_h {
        let mut x = DOT_PITCH / 2.0;
        while x < page_w {
            children.push(Node::path(PathShape::filled(
                PathShape::circle_commands(x, y, 1.2),
                color,
            )));
            x += DOT_PITCH;
        }
        y += DOT_PITCH;
    }
    Node::group_with_opacity(0.0, 0.0, opacity, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    fn count_paths(node: &Node) -> usize {
        match &node.kind {
            NodeKind::Path(_) => 1,
            NodeKind::Group { children, .. } => children.iter().map(count_paths).sum(),
            _ => 0,
        }
    }

    fn collect_paths<'a>(node: &'a Node, out: &mut Vec<&'a PathShape>) {
        match &node.kind {
            NodeKind::Path(p) => out.push(p),
            NodeKind::Group { children, .. } => {
                for c in children {
                    collect_paths(c, out);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn none_divider_is_absent() {
        assert!(divider(DividerStyle::None, 150.0, Color::BLACK, Color::BLACK).is_none());
    }

    #[test]
    fn dotted_divider_width_150_has_10_dots_fifth_larger() {
        let node = divider(DividerStyle::Dots, 150.0, Color::BLACK, Color::hex("#c9a227")).unwrap();
        let mut paths = Vec::new();
        collect_paths(&node, &mut paths);
        assert_eq!(paths.len(), 10);

        let spacing = 150.0 / 11.0;
        for (i, p) in paths.iter().enumerate() {
            let (min_x, _, max_x, _) = p.bounds();
            let center = (min_x + max_x) / 2.0;
            assert!(
                (center - spacing * (i as f64 + 1.0)).abs() < 0.01,
                "dot {} off-center",
                i
            );
        }

        // 1-based index ceil(10/2) = 5 is the large one.
        let radii: Vec<f64> = paths
            .iter()
            .map(|p| {
                let (min_x, _, max_x, _) = p.bounds();
                (max_x - min_x) / 2.0
            })
            .collect();
        for (i, r) in radii.iter().enumerate() {
            if i == 4 {
                assert!((r - 3.5).abs() < 1e-6);
            } else {
                assert!((r - 2.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn gradient_divider_has_four_segments_decreasing_opacity() {
        let node =
            divider(DividerStyle::Gradient, 200.0, Color::BLACK, Color::hex("#ec4899")).unwrap();
        let mut paths = Vec::new();
        collect_paths(&node, &mut paths);
        assert_eq!(paths.len(), 4);
        for pair in paths.windows(2) {
            assert!(pair[0].opacity > pair[1].opacity);
        }
        // Two primary then two secondary.
        let strokes: Vec<Color> = paths.iter().map(|p| p.stroke.unwrap().color).collect();
        assert_eq!(strokes[0], strokes[1]);
        assert_eq!(strokes[2], strokes[3]);
        assert_ne!(strokes[1], strokes[2]);
    }

    #[test]
    fn classic_seal_always_24_spikes() {
        for size in [40.0, 64.0, 120.0] {
            let node = seal(
                SealStyle::Classic,
                Color::BLACK,
                Color::hex("#c9a227"),
                Color::hex("#8b1a1a"),
                size,
            );
            let mut paths = Vec::new();
            collect_paths(&node, &mut paths);
            let spikes = paths
                .iter()
                .filter(|p| {
                    p.commands.len() == 4 && matches!(p.commands[3], PathCommand::Close)
                })
                .count();
            assert_eq!(spikes, 24, "size {}", size);
        }
    }

    #[test]
    fn corner_ornaments_come_in_fours() {
        for style in [CornerOrnamentStyle::Classic, CornerOrnamentStyle::Ornate, CornerOrnamentStyle::Flourish] {
            let corners = corner_ornaments(
                style,
                Color::BLACK,
                Color::hex("#c9a227"),
                36.0,
                841.89,
                595.28,
                20.0,
            );
            assert_eq!(corners.len(), 4, "{:?}", style);
        }
        assert!(corner_ornaments(
            CornerOrnamentStyle::None,
            Color::BLACK,
            Color::BLACK,
            36.0,
            841.89,
            595.28,
            20.0
        )
        .is_empty());
    }

    #[test]
    fn rotated_corners_stay_inside_their_boxes() {
        let size = 36.0;
        let corners = corner_ornaments(
            CornerOrnamentStyle::Ornate,
            Color::BLACK,
            Color::hex("#c9a227"),
            size,
            800.0,
            600.0,
            20.0,
        );
        for corner in &corners {
            let mut paths = Vec::new();
            collect_paths(corner, &mut paths);
            for p in paths {
                let (min_x, min_y, max_x, max_y) = p.bounds();
                assert!(min_x >= -0.5 && min_y >= -0.5, "shape escapes box");
                assert!(max_x <= size + 0.5 && max_y <= size + 0.5, "shape escapes box");
            }
        }
    }

    #[test]
    fn subtle_grid_uses_20_point_pitch() {
        let node = background(BackgroundPattern::SubtleGrid, Color::BLACK, 0.05, 100.0, 60.0)
            .unwrap();
        let mut paths = Vec::new();
        collect_paths(&node, &mut paths);
        assert_eq!(paths.len(), 1);
        // 4 vertical (20,40,60,80) + 2 horizontal (20,40) lines, 2 commands each.
        assert_eq!(paths[0].commands.len(), (4 + 2) * 2);
    }

    #[test]
    fn watermark_tiles_at_60_point_pitch() {
        let node =
            background(BackgroundPattern::Watermark, Color::BLACK, 0.05, 120.0, 120.0).unwrap();
        assert_eq!(count_paths(&node), 4); // 2 × 2 grid of circles
    }

    #[test]
    fn primitives_are_deterministic() {
        let a = seal(SealStyle::Ribbon, Color::BLACK, Color::WHITE, Color::BLACK, 64.0);
        let b = seal(SealStyle::Ribbon, Color::BLACK, Color::WHITE, Color::BLACK, 64.0);
        assert_eq!(format!("{:?}", a), format!("{:?}", b));
    }
}
