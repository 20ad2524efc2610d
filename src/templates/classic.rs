//! The classic template: a formal, centered composition with a double
//! border, corner ornaments, an ornate divider under the student name, and
//! a seal above the signature block.

use crate::model::{ImageData, Node};
use crate::primitives;
use crate::templates::{
    self, course_nodes, divider_node, footer_nodes, frame_nodes, header_nodes, metric_items,
    metric_row_nodes, name_node, page_background, seal_node, signature_nodes, title_nodes, Ctx,
};

const CORNER_SIZE: f64 = 40.0;
const DIVIDER_WIDTH: f64 = 260.0;

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
    children.extend(templates::watermark_node(ctx));
    children.extend(frame_nodes(sheet, ctx.page_w, ctx.page_h));
    children.extend(primitives::corner_ornaments(
        sheet.corner_ornaments,
        sheet.secondary,
        sheet.accent,
        CORNER_SIZE,
        ctx.page_w,
        ctx.page_h,
        sheet.padding / 2.0 + 8.0,
    ));

    let (header, y) = header_nodes(ctx, sheet.padding + 16.0);
    children.extend(header);

    let (title, y) = title_nodes(ctx, y);
    children.extend(title);

    let (name, y) = name_node(ctx, y);
    children.push(name);

    let divider_y = y + 14.0 * sheet.section_gap;
    children.extend(divider_node(ctx, divider_y, DIVIDER_WIDTH));

    let (course, y) = course_nodes(ctx, divider_y);
    children.extend(course);

    let (metrics, _) = metric_row_nodes(ctx, &metric_items(ctx), y);
    children.extend(metrics);

    children.extend(seal_node(ctx, ctx.page_h - sheet.padding - 128.0));
    children.extend(signature_nodes(ctx, ctx.page_h - sheet.padding - 56.0));
    children.extend(footer_nodes(ctx, qr));

    Node::group(0.0, 0.0, children)
}
