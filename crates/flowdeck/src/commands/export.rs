use std::path::PathBuf;

use colored::Colorize;
use eframe::egui;

use crate::canvas::{self, PaintOptions};
use crate::config::Config;
use crate::document::{self, Viewport};
use crate::graph::FlowGraph;
use crate::icons::IconLibrary;
use crate::icons::registry::FsCollectionLoader;
use crate::theme::Theme;

struct ExportApp {
    graph: FlowGraph,
    viewport: Viewport,
    theme: Theme,
    icons: IconLibrary,
    output: PathBuf,
    screenshot_requested: bool,
    done: bool,
}

impl ExportApp {
    fn new(graph: FlowGraph, viewport: Viewport, output: PathBuf, config: &Config) -> Self {
        Self {
            graph,
            viewport,
            theme: Theme::from_name(config.theme_name()),
            icons: IconLibrary::new(Box::new(FsCollectionLoader::new(config.icons_dir()))),
            output,
            screenshot_requested: false,
            done: false,
        }
    }
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Check for screenshot result from previous frame
        let mut got_screenshot = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    match crate::app::save_color_image(image, &self.output) {
                        Ok(()) => eprintln!("  Saved {}", self.output.display()),
                        Err(e) => eprintln!("  {}", format!("Failed: {e:#}").red()),
                    }
                    got_screenshot = true;
                }
            }
        });

        if got_screenshot {
            self.done = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                canvas::paint_graph(
                    ui,
                    rect,
                    &self.graph,
                    self.viewport,
                    &self.theme,
                    &mut self.icons,
                    PaintOptions {
                        handles: false,
                        ..Default::default()
                    },
                );
            });

        // Request screenshot after rendering (will arrive next frame)
        if !self.screenshot_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

/// Viewport that fits the whole diagram into `width` x `height` with a
/// margin, capped at 1:1 zoom.
fn fit_viewport(graph: &FlowGraph, width: f32, height: f32) -> Viewport {
    let Some(first) = graph.nodes.first() else {
        return Viewport::default();
    };

    let mut min = egui::pos2(first.x, first.y);
    let mut max = min + canvas::NODE_SIZE;
    for node in &graph.nodes {
        min = min.min(egui::pos2(node.x, node.y));
        max = max.max(egui::pos2(node.x, node.y) + canvas::NODE_SIZE);
    }

    let margin = 40.0;
    let content = max - min;
    let zoom = ((width - margin * 2.0) / content.x)
        .min((height - margin * 2.0) / content.y)
        .clamp(0.05, 1.0);

    // Center the content.
    Viewport {
        x: min.x - (width / zoom - content.x) / 2.0,
        y: min.y - (height / zoom - content.y) / 2.0,
        zoom,
    }
}

pub fn run(file: PathBuf, output: Option<PathBuf>, width: u32, height: u32) -> anyhow::Result<()> {
    let (graph, _saved_viewport) = document::load(&file)?;
    if graph.nodes.is_empty() {
        anyhow::bail!("No nodes in {}", file.display());
    }

    let output = match output {
        Some(path) => path,
        None => document::export_path(
            file.parent().unwrap_or(std::path::Path::new(".")),
            "png",
        ),
    };

    eprintln!(
        "Exporting {} to {} ({}x{})",
        file.display(),
        output.display(),
        width,
        height,
    );

    let config = Config::load_or_default();
    let viewport = fit_viewport(&graph, width as f32, height as f32);

    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title("flowdeck export")
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    eframe::run_native(
        "flowdeck export",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ExportApp::new(graph, viewport, output, &config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    eprintln!("{}", "Export complete.".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconDescriptor;

    #[test]
    fn fit_viewport_contains_all_nodes() {
        let mut graph = FlowGraph::new();
        graph.add_node(0.0, 0.0, "A", IconDescriptor::default());
        graph.add_node(500.0, 300.0, "B", IconDescriptor::default());
        let viewport = fit_viewport(&graph, 1920.0, 1080.0);

        let canvas = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        for node in &graph.nodes {
            let rect = canvas::node_rect(canvas, viewport, node);
            assert!(canvas.contains_rect(rect), "node {} outside canvas", node.id);
        }
    }

    #[test]
    fn fit_viewport_empty_graph_is_default() {
        let graph = FlowGraph::new();
        assert_eq!(fit_viewport(&graph, 800.0, 600.0), Viewport::default());
    }

    #[test]
    fn fit_viewport_never_zooms_in_past_one() {
        let mut graph = FlowGraph::new();
        graph.add_node(0.0, 0.0, "A", IconDescriptor::default());
        let viewport = fit_viewport(&graph, 1920.0, 1080.0);
        assert!(viewport.zoom <= 1.0);
    }
}
