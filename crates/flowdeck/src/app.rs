use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::info;

use crate::canvas::{self, PaintOptions};
use crate::config::Config;
use crate::document::{self, Viewport};
use crate::graph::layering::compute_layers;
use crate::graph::playback::{MAX_SPEED_MS, MIN_SPEED_MS, Playback};
use crate::graph::{FlowGraph, NodeId};
use crate::icons::registry::FsCollectionLoader;
use crate::icons::{IconLibrary, upload};
use crate::palette::{self, DragPayload};
use crate::theme::Theme;

const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 4.0;
const HANDLE_HIT_RADIUS: f32 = 8.0;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 2.5;
        let fade_start = 2.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 2.5
    }
}

#[derive(Default)]
struct UploadDialog {
    open: bool,
    name: String,
    svg: String,
    error: Option<String>,
}

struct EditorApp {
    graph: FlowGraph,
    viewport: Viewport,
    theme: Theme,
    icons: IconLibrary,
    playback: Playback,
    speed_ms: u64,
    selected: Option<NodeId>,
    connect_from: Option<NodeId>,
    search: String,
    category: &'static str,
    upload: UploadDialog,
    toast: Option<Toast>,
    #[allow(dead_code)]
    file_path: Option<PathBuf>,
    screenshot_requested: bool,
    /// Canvas rect from the last frame, for screenshot cropping.
    canvas_rect: egui::Rect,
}

impl EditorApp {
    fn new(graph: FlowGraph, viewport: Viewport, file_path: Option<PathBuf>, config: &Config) -> Self {
        let speed_ms = config.speed_ms();
        Self {
            graph,
            viewport,
            theme: Theme::from_name(config.theme_name()),
            icons: IconLibrary::new(Box::new(FsCollectionLoader::new(config.icons_dir()))),
            playback: Playback::new(Duration::from_millis(speed_ms)),
            speed_ms,
            selected: None,
            connect_from: None,
            search: String::new(),
            category: "cloud",
            upload: UploadDialog::default(),
            toast: None,
            file_path,
            screenshot_requested: false,
            canvas_rect: egui::Rect::ZERO,
        }
    }

    fn toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message.into()));
    }

    fn toggle_playback(&mut self) {
        let now = Instant::now();
        if self.playback.is_running() {
            self.playback.stop(&mut self.graph);
        } else {
            // Snapshot the graph at sequence-computation time.
            let sequence = compute_layers(&self.graph.nodes, &self.graph.edges);
            self.playback.start(&mut self.graph, sequence, now);
        }
    }

    fn save_diagram(&mut self) {
        let path = document::export_path(std::path::Path::new("."), "json");
        match document::save(&path, &self.graph, self.viewport) {
            Ok(()) => {
                info!("saved diagram to {}", path.display());
                self.toast(format!("Saved {}", path.display()));
            }
            Err(err) => self.toast(format!("Save failed: {err:#}")),
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let Some(path) = file.path else { continue };
            match upload::read_svg_file(&path) {
                Ok((name, svg)) => {
                    self.upload.open = true;
                    self.upload.name = name;
                    self.upload.svg = svg;
                    self.upload.error = None;
                }
                Err(err) => {
                    self.upload.open = true;
                    self.upload.error = Some(format!("{err:#}"));
                }
            }
        }
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let mut shots: Vec<std::sync::Arc<egui::ColorImage>> = Vec::new();
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    shots.push(image.clone());
                }
            }
        });
        for image in shots {
            self.screenshot_requested = false;
            let ppp = ctx.pixels_per_point();
            let (size, bytes) = crop_rgba(&image, self.canvas_rect, ppp);
            let path = document::export_path(std::path::Path::new("."), "png");
            match save_rgba(size, &bytes, &path) {
                Ok(()) => {
                    info!("exported canvas to {}", path.display());
                    self.toast(format!("Exported {}", path.display()));
                }
                Err(err) => self.toast(format!("Export failed: {err:#}")),
            }
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("💾 Save").on_hover_text("Save diagram as JSON").clicked() {
                self.save_diagram();
            }
            if ui
                .button("🖼 Export")
                .on_hover_text("Export canvas as PNG")
                .clicked()
                && !self.screenshot_requested
            {
                self.screenshot_requested = true;
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            }
            ui.separator();
            let theme_label = if self.theme.name == "dark" {
                "☀ Light"
            } else {
                "🌙 Dark"
            };
            if ui.button(theme_label).clicked() {
                self.theme = self.theme.toggled();
            }
            ui.separator();
            if ui.button("🗑 Clear").on_hover_text("Remove all nodes").clicked() {
                self.playback.stop(&mut self.graph);
                self.graph = FlowGraph::new();
                self.selected = None;
                self.connect_from = None;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let play_label = if self.playback.is_running() {
                    "⏸ Stop"
                } else {
                    "▶ Play"
                };
                if ui.button(play_label).clicked() {
                    self.toggle_playback();
                }
            });
        });
    }

    fn playback_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let play_label = if self.playback.is_running() {
                "⏸"
            } else {
                "▶"
            };
            if ui.button(play_label).clicked() {
                self.toggle_playback();
            }

            if self.playback.is_running() {
                let step = self.playback.current_step().map_or(0, |s| s + 1);
                ui.label(format!("Step {step} of {}", self.playback.total_steps()));
            }

            ui.label("🕓");
            let slider = egui::Slider::new(&mut self.speed_ms, MIN_SPEED_MS..=MAX_SPEED_MS)
                .step_by(100.0)
                .suffix(" ms");
            if ui.add(slider).changed() {
                self.playback
                    .set_interval(Duration::from_millis(self.speed_ms));
            }
        });
    }

    fn palette_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Flow Diagram Editor");
        ui.label(
            egui::RichText::new("Drag icons to create your diagram")
                .size(self.theme.detail_size)
                .color(self.theme.muted),
        );
        ui.separator();

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.search)
                    .hint_text("Search icons...")
                    .desired_width(f32::INFINITY),
            );
        });
        if ui.button("⬆ Upload custom icon").clicked() {
            self.upload.open = true;
            self.upload.error = None;
        }
        ui.separator();

        ui.horizontal_wrapped(|ui| {
            for category in palette::CATEGORIES {
                ui.selectable_value(&mut self.category, category.id, category.name);
            }
        });
        ui.separator();

        let custom_names = self.icons.custom_names();
        let entries = palette::filtered_entries(self.category, &custom_names, &self.search);
        if entries.is_empty() {
            ui.label(egui::RichText::new("No icons found").color(self.theme.muted));
            return;
        }

        let mut failed: Vec<&str> = entries
            .iter()
            .filter_map(|e| match &e.descriptor {
                crate::icons::IconDescriptor::Collection { collection, .. } => Some(collection),
                _ => None,
            })
            .filter(|c| {
                matches!(
                    self.icons.registry().state(c),
                    crate::icons::registry::CollectionState::Failed
                )
            })
            .map(String::as_str)
            .collect();
        failed.dedup();
        if !failed.is_empty() {
            ui.label(
                egui::RichText::new(format!("Could not load: {}", failed.join(", ")))
                    .size(self.theme.detail_size)
                    .color(self.theme.muted),
            );
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("palette_grid").num_columns(3).show(ui, |ui| {
                for (i, entry) in entries.iter().enumerate() {
                    let payload = DragPayload::for_entry(entry);
                    let id = ui.id().with(("palette", self.category, i));
                    ui.dnd_drag_source(id, payload, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_width(72.0);
                            match self.icons.icon(&entry.descriptor) {
                                crate::icons::RenderIcon::Svg { uri, bytes } => {
                                    ui.add(
                                        egui::Image::from_bytes(
                                            uri,
                                            egui::load::Bytes::Shared(bytes),
                                        )
                                        .fit_to_exact_size(egui::vec2(28.0, 28.0)),
                                    );
                                }
                                crate::icons::RenderIcon::Glyph(glyph) => {
                                    ui.label(egui::RichText::new(glyph).size(22.0));
                                }
                            }
                            ui.label(
                                egui::RichText::new(&entry.display_name)
                                    .size(self.theme.detail_size),
                            );
                        });
                    });
                    if (i + 1) % 3 == 0 {
                        ui.end_row();
                    }
                }
            });
        });
    }

    fn upload_dialog(&mut self, ctx: &egui::Context) {
        if !self.upload.open {
            return;
        }
        let mut open = self.upload.open;
        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new("Upload Custom Icon")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Icon Name");
                ui.text_edit_singleline(&mut self.upload.name);
                ui.label("SVG Content");
                ui.add(
                    egui::TextEdit::multiline(&mut self.upload.svg)
                        .hint_text("<svg>...</svg>")
                        .desired_rows(6),
                );
                if let Some(error) = &self.upload.error {
                    ui.colored_label(egui::Color32::from_rgb(0xC7, 0x3E, 0x1D), error);
                }
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                    let ready = !self.upload.name.trim().is_empty() && !self.upload.svg.is_empty();
                    if ui.add_enabled(ready, egui::Button::new("Upload")).clicked() {
                        submitted = true;
                    }
                });
            });

        if submitted {
            let name = self.upload.name.clone();
            match self.icons.upload_custom(&name, &self.upload.svg) {
                Ok(()) => {
                    self.upload = UploadDialog::default();
                    self.category = "custom";
                    self.toast(format!("Uploaded icon {name}"));
                }
                Err(err) => self.upload.error = Some(err.to_string()),
            }
        } else if cancelled || !open {
            self.upload = UploadDialog::default();
        }
    }

    fn node_details_window(&mut self, ctx: &egui::Context) {
        let Some(selected) = self.selected.clone() else {
            return;
        };
        let Some(node) = self.graph.node_mut(&selected) else {
            self.selected = None;
            return;
        };

        let mut open = true;
        let mut delete = false;
        egui::Window::new("Node")
            .id(egui::Id::new("node_details"))
            .open(&mut open)
            .collapsible(false)
            .default_width(220.0)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .show(ctx, |ui| {
                ui.label("Label");
                ui.text_edit_singleline(&mut node.label);
                ui.label("Description");
                ui.add(egui::TextEdit::multiline(&mut node.description).desired_rows(3));
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("ID:");
                    ui.monospace(&node.id);
                });
                ui.horizontal(|ui| {
                    ui.label("Type:");
                    ui.monospace(node.icon.kind());
                });
                ui.separator();
                if ui.button("🗑 Delete node").clicked() {
                    delete = true;
                }
            });

        if delete {
            self.graph.remove_node(&selected);
            self.selected = None;
        } else if !open {
            self.selected = None;
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        self.canvas_rect = rect;
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        self.canvas_interactions(ui, rect, &response);

        let options = PaintOptions {
            selected: self.selected.as_deref(),
            connect_from: self.connect_from.as_deref(),
            time: ui.input(|i| i.time),
            handles: true,
        };
        canvas::paint_graph(
            ui,
            rect,
            &self.graph,
            self.viewport,
            &self.theme,
            &mut self.icons,
            options,
        );

        // Rubber band from the pending source handle to the pointer.
        if let Some(from_id) = self.connect_from.clone() {
            if let Some(node) = self.graph.node(&from_id) {
                let from =
                    canvas::source_handle(canvas::node_rect(rect, self.viewport, node));
                if let Some(pointer) = ui.ctx().pointer_latest_pos() {
                    ui.painter_at(rect).line_segment(
                        [from, pointer],
                        egui::Stroke::new(1.5, self.theme.accent),
                    );
                }
            } else {
                self.connect_from = None;
            }
        }

        self.paint_toast(ui, rect);

        // Accept palette drops.
        if let Some(payload) = response.dnd_release_payload::<DragPayload>() {
            if payload.element_type == palette::ELEMENT_TYPE {
                if let Some(pointer) = ui.ctx().pointer_latest_pos() {
                    let pos = canvas::to_canvas(rect, self.viewport, pointer);
                    let icon = payload.icon_descriptor();
                    let id = self.graph.add_node(
                        pos.x - canvas::NODE_SIZE.x / 2.0,
                        pos.y - canvas::NODE_SIZE.y / 2.0,
                        payload.label.clone(),
                        icon,
                    );
                    self.selected = Some(id);
                }
            }
        }
    }

    fn canvas_interactions(
        &mut self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        background: &egui::Response,
    ) {
        let zoom = self.viewport.zoom;
        let mut clicked_node: Option<NodeId> = None;
        let mut clicked_source: Option<NodeId> = None;
        let mut clicked_target: Option<NodeId> = None;

        let node_ids: Vec<NodeId> = self.graph.nodes.iter().map(|n| n.id.clone()).collect();
        for id in &node_ids {
            let Some(node) = self.graph.node(id) else { continue };
            let node_rect = canvas::node_rect(rect, self.viewport, node);

            let source_rect = egui::Rect::from_center_size(
                canvas::source_handle(node_rect),
                egui::Vec2::splat(HANDLE_HIT_RADIUS * 2.0),
            );
            let target_rect = egui::Rect::from_center_size(
                canvas::target_handle(node_rect),
                egui::Vec2::splat(HANDLE_HIT_RADIUS * 2.0),
            );
            if ui
                .interact(source_rect, ui.id().with(("source", id)), egui::Sense::click())
                .clicked()
            {
                clicked_source = Some(id.clone());
            }
            if ui
                .interact(target_rect, ui.id().with(("target", id)), egui::Sense::click())
                .clicked()
            {
                clicked_target = Some(id.clone());
            }

            let response = ui.interact(
                node_rect,
                ui.id().with(("node", id)),
                egui::Sense::click_and_drag(),
            );
            if response.clicked() {
                clicked_node = Some(id.clone());
            }
            if response.dragged() {
                let delta = response.drag_delta() / zoom;
                if let Some(node) = self.graph.node_mut(id) {
                    node.x += delta.x;
                    node.y += delta.y;
                }
            }
        }

        // Connect gesture: source handle first, then any target handle (or a
        // node click) on another node.
        if let Some(source) = clicked_source {
            self.connect_from = Some(source);
        } else if let Some(target) = clicked_target.or_else(|| clicked_node.clone()) {
            if let Some(source) = self.connect_from.take() {
                if source != target {
                    self.graph.connect(&source, &target);
                }
            } else if let Some(node) = clicked_node {
                self.selected = Some(node);
            }
        } else if background.clicked() {
            self.selected = None;
            self.connect_from = None;
        }

        // Pan with a background drag.
        if background.dragged() {
            let delta = background.drag_delta() / zoom;
            self.viewport.x -= delta.x;
            self.viewport.y -= delta.y;
        }

        // Zoom around the pointer.
        let (scroll, pointer) = ui.input(|i| (i.smooth_scroll_delta.y, i.pointer.latest_pos()));
        if scroll.abs() > 0.0 {
            if let Some(pointer) = pointer.filter(|p| rect.contains(*p)) {
                let before = canvas::to_canvas(rect, self.viewport, pointer);
                self.viewport.zoom =
                    (self.viewport.zoom * (1.0 + scroll * 0.002)).clamp(MIN_ZOOM, MAX_ZOOM);
                let after = canvas::to_canvas(rect, self.viewport, pointer);
                self.viewport.x += before.x - after.x;
                self.viewport.y += before.y - after.y;
            }
        }

        // Keyboard: delete selection, escape cancels the pending connect.
        if ui.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)) {
            if let Some(selected) = self.selected.take() {
                self.graph.remove_node(&selected);
            }
        }
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.connect_from = None;
        }
    }

    fn paint_toast(&mut self, ui: &egui::Ui, rect: egui::Rect) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        let Some(toast) = &self.toast else { return };
        let opacity = toast.opacity();
        let painter = ui.painter_at(rect);
        let galley = painter.layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(13.0),
            Theme::with_opacity(self.theme.foreground, opacity),
        );
        let pos = egui::pos2(
            rect.center().x - galley.rect.width() / 2.0,
            rect.top() + 16.0,
        );
        let toast_rect = egui::Rect::from_min_size(pos, galley.rect.size()).expand(8.0);
        painter.rect_filled(
            toast_rect,
            6.0,
            Theme::with_opacity(self.theme.panel_background, opacity * 0.9),
        );
        painter.galley(pos, galley, egui::Color32::TRANSPARENT);
        ui.ctx().request_repaint();
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if self.playback.poll(&mut self.graph, now) {
            ctx.request_repaint();
        }
        if let Some(due) = self.playback.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }

        self.handle_dropped_files(ctx);
        self.handle_screenshot(ctx);

        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::new().fill(self.theme.panel_background).inner_margin(6.0))
            .show(ctx, |ui| self.toolbar(ui));

        egui::TopBottomPanel::bottom("playback")
            .frame(egui::Frame::new().fill(self.theme.panel_background).inner_margin(6.0))
            .show(ctx, |ui| self.playback_bar(ui));

        egui::SidePanel::left("palette")
            .frame(egui::Frame::new().fill(self.theme.panel_background).inner_margin(8.0))
            .default_width(260.0)
            .show(ctx, |ui| self.palette_panel(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(0.0))
            .show(ctx, |ui| self.canvas(ui));

        self.node_details_window(ctx);
        self.upload_dialog(ctx);

        // Animated edges march continuously.
        if self.graph.edges.iter().any(|e| e.animated) {
            ctx.request_repaint();
        }
    }
}

/// Crop a full-window screenshot to the canvas rect (logical points to
/// physical pixels), returning RGBA bytes. A degenerate intersection keeps
/// the full image.
fn crop_rgba(
    image: &egui::ColorImage,
    rect: egui::Rect,
    pixels_per_point: f32,
) -> ([usize; 2], Vec<u8>) {
    let mut x0 = ((rect.left() * pixels_per_point).round() as usize).min(image.width());
    let mut y0 = ((rect.top() * pixels_per_point).round() as usize).min(image.height());
    let mut x1 = ((rect.right() * pixels_per_point).round() as usize).min(image.width());
    let mut y1 = ((rect.bottom() * pixels_per_point).round() as usize).min(image.height());
    if x1 <= x0 || y1 <= y0 {
        (x0, y0, x1, y1) = (0, 0, image.width(), image.height());
    }

    let mut bytes = Vec::with_capacity((x1 - x0) * (y1 - y0) * 4);
    for y in y0..y1 {
        let row_start = y * image.width();
        for pixel in &image.pixels[row_start + x0..row_start + x1] {
            bytes.extend_from_slice(&[pixel.r(), pixel.g(), pixel.b(), pixel.a()]);
        }
    }
    ([x1 - x0, y1 - y0], bytes)
}

fn save_rgba(size: [usize; 2], bytes: &[u8], path: &std::path::Path) -> anyhow::Result<()> {
    image::save_buffer(
        path,
        bytes,
        size[0] as u32,
        size[1] as u32,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to save {}", path.display()))
}

/// Save a full screenshot; used by the headless exporter.
pub(crate) fn save_color_image(
    image: &egui::ColorImage,
    path: &std::path::Path,
) -> anyhow::Result<()> {
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();
    save_rgba([image.width(), image.height()], &pixels, path)
}

/// Launch the editor, optionally opening a saved diagram.
pub fn run(file: Option<PathBuf>, fullscreen: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let (graph, viewport) = match &file {
        Some(path) => document::load(path)?,
        None => (FlowGraph::new(), Viewport::default()),
    };

    let title = match &file {
        Some(path) => format!(
            "Flowdeck - {}",
            path.file_stem().unwrap_or_default().to_string_lossy()
        ),
        None => "Flowdeck".to_string(),
    };

    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([1440.0, 900.0])
        .with_title(&title)
        .with_fullscreen(fullscreen);

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(EditorApp::new(graph, viewport, file, &config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(width: usize, height: usize) -> egui::ColorImage {
        let rgba: Vec<u8> = (0..width * height)
            .flat_map(|i| {
                let v = (i % 256) as u8;
                [v, v, v, 255]
            })
            .collect();
        egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba)
    }

    #[test]
    fn crop_extracts_the_requested_region() {
        let image = gradient_image(100, 80);
        let rect = egui::Rect::from_min_max(egui::pos2(10.0, 20.0), egui::pos2(50.0, 60.0));
        let (size, bytes) = crop_rgba(&image, rect, 1.0);
        assert_eq!(size, [40, 40]);
        assert_eq!(bytes.len(), 40 * 40 * 4);
        let expected = image.pixels[20 * 100 + 10];
        assert_eq!(bytes[0], expected.r());
    }

    #[test]
    fn crop_scales_by_pixels_per_point() {
        let image = gradient_image(200, 160);
        let rect = egui::Rect::from_min_max(egui::pos2(10.0, 20.0), egui::pos2(50.0, 60.0));
        let (size, _) = crop_rgba(&image, rect, 2.0);
        assert_eq!(size, [80, 80]);
    }

    #[test]
    fn degenerate_crop_falls_back_to_full_image() {
        let image = gradient_image(10, 10);
        let rect = egui::Rect::from_min_max(egui::pos2(500.0, 500.0), egui::pos2(600.0, 600.0));
        let (size, bytes) = crop_rgba(&image, rect, 1.0);
        assert_eq!(size, [10, 10]);
        assert_eq!(bytes.len(), 10 * 10 * 4);
    }
}
