//! The creative template: a thick-thin frame, flourish corners, a wide
//! gradient divider, and a ribbon seal riding the body's right edge so it
//! overlaps the content band instead of sitting below it.

use crate::model::{ImageData, Node};
use crate::primitives;
use crate::templates::{
    self, course_nodes, divider_node, footer_nodes, frame_nodes, header_nodes, metric_items,
    metric_row_nodes, name_node, page_background, signature_nodes, title_nodes, Ctx,
};

const CORNER_SIZE: f64 = 52.0;
const DIVIDER_WIDTH: f64 = 340.0;

pub(crate) fn render(ctx: &Ctx, qr: Option<&ImageData>) -> Node {
    let sheet = ctx.sheet;
    let mut children = vec![page_background(sheet, ctx.page_w, ctx.page_h)];

    if let Some(pattern) = primitives::background(
        sheet.background_pattern,
        sheet.secondary,
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
        sheet.primary,
        sheet.secondary,
        CORNER_SIZE,
        ctx.page_w,
        ctx.page_h,
        sheet.padding / 2.0 + 10.0,
    ));

    let (header, y) = header_nodes(ctx, sheet.padding + 14.0);
    children.extend(header);

    let (title, y) = title_nodes(ctx, y);
    children.extend(title);

    let (name, y) = name_node(ctx, y);
    children.push(name);

    let divider_y = y + 16.0 * sheet.section_gap;
    children.extend(divider_node(ctx, divider_y, DIVIDER_WIDTH));

    let (course, y) = course_nodes(ctx, divider_y);
    children.extend(course);

    let (metrics, _) = metric_row_nodes(ctx, &metric_items(ctx), y);
    children.extend(metrics);

    // Seal rides the body band rather than the footer.
    children.extend(templates::seal_node(ctx, ctx.page_h / 2.0));
    children.extend(signature_nodes(ctx, ctx.page_h - sheet.padding - 56.0));
    children.extend(footer_nodes(ctx, qr));

    Node::group(0.0, 0.0, children)
}
