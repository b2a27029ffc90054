//! Canvas painting: grid, edges, nodes. Shared by the editor and the
//! headless PNG exporter.

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Stroke, Vec2};

use crate::document::Viewport;
use crate::graph::{FlowGraph, FlowNode, VisualState};
use crate::icons::{IconLibrary, RenderIcon};
use crate::theme::Theme;

pub const NODE_SIZE: Vec2 = egui::vec2(180.0, 56.0);
pub const GRID_GAP: f32 = 16.0;
pub const HANDLE_RADIUS: f32 = 4.0;

/// Map a diagram position to screen space.
pub fn to_screen(canvas: Rect, viewport: Viewport, pos: Pos2) -> Pos2 {
    canvas.left_top() + (pos.to_vec2() - egui::vec2(viewport.x, viewport.y)) * viewport.zoom
}

/// Map a screen position back to diagram space, for drops and panning.
pub fn to_canvas(canvas: Rect, viewport: Viewport, pos: Pos2) -> Pos2 {
    (((pos - canvas.left_top()) / viewport.zoom) + egui::vec2(viewport.x, viewport.y)).to_pos2()
}

/// Screen rectangle of a node. The stored position is the node's top-left
/// corner in diagram space.
pub fn node_rect(canvas: Rect, viewport: Viewport, node: &FlowNode) -> Rect {
    let min = to_screen(canvas, viewport, egui::pos2(node.x, node.y));
    Rect::from_min_size(min, NODE_SIZE * viewport.zoom)
}

/// Outgoing connection handle, bottom center.
pub fn source_handle(rect: Rect) -> Pos2 {
    rect.center_bottom()
}

/// Incoming connection handle, top center.
pub fn target_handle(rect: Rect) -> Pos2 {
    rect.center_top()
}

/// Per-frame inputs that vary between editor and exporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintOptions<'a> {
    pub selected: Option<&'a str>,
    pub connect_from: Option<&'a str>,
    /// Animation clock for the marching dashes on animated edges.
    pub time: f64,
    /// Draw connection handles; off for exports.
    pub handles: bool,
}

/// Paint the whole diagram into `canvas`.
pub fn paint_graph(
    ui: &egui::Ui,
    canvas: Rect,
    graph: &FlowGraph,
    viewport: Viewport,
    theme: &Theme,
    icons: &mut IconLibrary,
    options: PaintOptions<'_>,
) {
    let painter = ui.painter_at(canvas);
    painter.rect_filled(canvas, 0.0, theme.background);
    paint_grid(&painter, canvas, viewport, theme);

    for edge in &graph.edges {
        let (Some(source), Some(target)) = (graph.node(&edge.source), graph.node(&edge.target))
        else {
            continue;
        };
        let from = source_handle(node_rect(canvas, viewport, source));
        let to = target_handle(node_rect(canvas, viewport, target));
        let opacity = Theme::opacity(edge.visual);
        let color = if edge.visual == VisualState::Active {
            Theme::with_opacity(theme.accent, opacity)
        } else {
            Theme::with_opacity(theme.edge_color, opacity)
        };
        let stroke = Stroke::new(2.0 * viewport.zoom, color);
        if edge.animated {
            paint_dashed_edge(&painter, from, to, stroke, viewport.zoom, options.time);
        } else {
            painter.line_segment([from, to], stroke);
        }
        paint_arrow_head(&painter, from, to, color, viewport.zoom);
    }

    for node in &graph.nodes {
        let rect = node_rect(canvas, viewport, node);
        if !canvas.intersects(rect) {
            continue;
        }
        let selected = options.selected == Some(node.id.as_str());
        paint_node(ui, &painter, rect, node, selected, theme, icons, viewport.zoom);
        if options.handles {
            let connecting = options.connect_from == Some(node.id.as_str());
            paint_handles(&painter, rect, theme, connecting, viewport.zoom);
        }
    }
}

fn paint_grid(painter: &egui::Painter, canvas: Rect, viewport: Viewport, theme: &Theme) {
    let gap = GRID_GAP * viewport.zoom;
    if gap < 4.0 {
        return;
    }
    let offset = egui::vec2(
        (-viewport.x * viewport.zoom).rem_euclid(gap),
        (-viewport.y * viewport.zoom).rem_euclid(gap),
    );
    let mut y = canvas.top() + offset.y;
    while y < canvas.bottom() {
        let mut x = canvas.left() + offset.x;
        while x < canvas.right() {
            painter.circle_filled(egui::pos2(x, y), 1.0, theme.grid_dot);
            x += gap;
        }
        y += gap;
    }
}

/// Marching dashes toward the target; manual dash walk with a time-based
/// phase so the dashes flow along the edge.
fn paint_dashed_edge(
    painter: &egui::Painter,
    from: Pos2,
    to: Pos2,
    stroke: Stroke,
    zoom: f32,
    time: f64,
) {
    let dash_len = 8.0 * zoom;
    let gap_len = 5.0 * zoom;
    let period = dash_len + gap_len;
    let total_len = from.distance(to);
    if total_len <= f32::EPSILON {
        return;
    }
    let dir = (to - from) / total_len;
    let phase = (time as f32 * 24.0 * zoom).rem_euclid(period);

    let mut d = phase - period;
    while d < total_len {
        let start = d.max(0.0);
        let end = (d + dash_len).min(total_len);
        if end > start {
            painter.line_segment([from + dir * start, from + dir * end], stroke);
        }
        d += period;
    }
}

fn paint_arrow_head(painter: &egui::Painter, from: Pos2, to: Pos2, color: Color32, zoom: f32) {
    let total_len = from.distance(to);
    if total_len <= f32::EPSILON {
        return;
    }
    let dir = (to - from) / total_len;
    let normal = egui::vec2(-dir.y, dir.x);
    let size = 7.0 * zoom;
    let tip = to;
    let left = tip - dir * size + normal * size * 0.6;
    let right = tip - dir * size - normal * size * 0.6;
    painter.add(egui::Shape::convex_polygon(
        vec![tip, left, right],
        color,
        Stroke::NONE,
    ));
}

#[allow(clippy::too_many_arguments)]
fn paint_node(
    ui: &egui::Ui,
    painter: &egui::Painter,
    rect: Rect,
    node: &FlowNode,
    selected: bool,
    theme: &Theme,
    icons: &mut IconLibrary,
    zoom: f32,
) {
    let opacity = Theme::opacity(node.visual);
    let corner_radius = 8.0 * zoom;

    painter.rect_filled(
        rect,
        corner_radius,
        Theme::with_opacity(theme.node_fill, opacity),
    );
    let stroke_color = Theme::with_opacity(theme.node_stroke_color(node.visual, selected), opacity);
    let stroke_width = if node.visual == VisualState::Active || selected {
        2.5 * zoom
    } else {
        1.5 * zoom
    };
    painter.rect_stroke(
        rect,
        corner_radius,
        Stroke::new(stroke_width, stroke_color),
        egui::StrokeKind::Outside,
    );

    // Icon box on the left, label to its right.
    let icon_size = 40.0 * zoom;
    let icon_rect = Rect::from_center_size(
        egui::pos2(rect.left() + 8.0 * zoom + icon_size / 2.0, rect.center().y),
        egui::vec2(icon_size, icon_size),
    );
    match icons.icon(&node.icon) {
        RenderIcon::Svg { uri, bytes } => {
            egui::Image::from_bytes(uri, egui::load::Bytes::Shared(bytes))
                .tint(Theme::with_opacity(Color32::WHITE, opacity))
                .paint_at(ui, icon_rect.shrink(4.0 * zoom));
        }
        RenderIcon::Glyph(glyph) => {
            painter.text(
                icon_rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(icon_size * 0.6),
                Theme::with_opacity(theme.foreground, opacity),
            );
        }
    }

    let label_color = Theme::with_opacity(theme.foreground, opacity);
    painter.text(
        egui::pos2(icon_rect.right() + 8.0 * zoom, rect.center().y),
        egui::Align2::LEFT_CENTER,
        &node.label,
        FontId::proportional(theme.label_size * zoom),
        label_color,
    );
}

fn paint_handles(
    painter: &egui::Painter,
    rect: Rect,
    theme: &Theme,
    connecting: bool,
    zoom: f32,
) {
    let radius = HANDLE_RADIUS * zoom;
    painter.circle_filled(target_handle(rect), radius, theme.handle_color);
    let source = source_handle(rect);
    painter.circle_filled(source, radius, theme.handle_color);
    if connecting {
        painter.circle_stroke(source, radius * 2.0, Stroke::new(1.5, theme.accent));
    }
}
