//! The minimal template: generous whitespace, a thin rule, and the metric
//! fields folded into a single inline caption instead of a row of cells.

use crate::model::{ImageData, Node};
use crate::primitives;
use crate::templates::{
    course_nodes, divider_node, footer_nodes, frame_nodes, header_nodes, metric_items, name_node,
    page_background, seal_node, signature_nodes, span, title_nodes, Ctx,
};

const DIVIDER_WIDTH: f64 = 180.0;

pub(crate) fn render(ctx: &Ctx, qr: Option<&ImageData>) -> Node {
    let sheet = ctx.sheet;
    let mut children = vec![page_background(sheet, ctx.page_w, ctx.page_h)];

    if let Some(pattern) = primitives::background(
        sheet.background_pattern,
        sheet.primary,
        sheet.pattern_opacity,
        ctx.page_w,
        ctx.page_h,
    ) {
        children.push(pattern);
    }
    children.extend(frame_nodes(sheet, ctx.page_w, ctx.page_h));

    let (header, y) = header_nodes(ctx, sheet.padding + 20.0);
    children.extend(header);

    let (title, y) = title_nodes(ctx, y);
    children.extend(title);

    let (name, y) = name_node(ctx, y);
    children.push(name);

    let divider_y = y + 12.0 * sheet.section_gap;
    children.extend(divider_node(ctx, divider_y, DIVIDER_WIDTH));

    let (course, y) = course_nodes(ctx, divider_y);
    children.extend(course);

    // One quiet caption line instead of a metric row.
    let items = metric_items(ctx);
    if !items.is_empty() {
        let line = items
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("   ·   ");
        let (x, anchor) = ctx.aligned_anchor();
        children.push(Node::text(
            span(
                line,
                x,
                y + sheet.small_size + 18.0 * sheet.section_gap,
                sheet.body_family,
                sheet.small_size,
                sheet.text_muted,
            )
            .anchored(anchor),
        ));
    }

    children.extend(seal_node(ctx, ctx.page_h - sheet.padding - 128.0));
    children.extend(signature_nodes(ctx, ctx.page_h - sheet.padding - 56.0));
    children.extend(footer_nodes(ctx, qr));

    Node::group(0.0, 0.0, children)
}
