use eframe::egui::Color32;

use crate::graph::VisualState;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub panel_background: Color32,
    pub grid_dot: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub node_fill: Color32,
    pub node_stroke: Color32,
    pub active_ring: Color32,
    pub edge_color: Color32,
    pub handle_color: Color32,
    pub label_size: f32,
    pub detail_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            panel_background: Color32::from_rgb(0x25, 0x25, 0x25),
            grid_dot: Color32::from_rgb(0x3A, 0x3A, 0x3A),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            muted: Color32::from_rgb(0x8A, 0x8A, 0x8A),
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            node_fill: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            node_stroke: Color32::from_rgb(0x4A, 0x4A, 0x4A),
            active_ring: Color32::from_rgb(0x5C, 0xDB, 0x95),
            edge_color: Color32::from_rgb(0x55, 0x55, 0x55),
            handle_color: Color32::from_rgb(0x52, 0x94, 0xE2),
            label_size: 14.0,
            detail_size: 11.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            panel_background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            grid_dot: Color32::from_rgb(0xAA, 0xAA, 0xAA),
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            muted: Color32::from_rgb(0x6E, 0x6E, 0x7A),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            node_fill: Color32::from_rgb(0xF9, 0xFA, 0xFB),
            node_stroke: Color32::from_rgb(0x88, 0x88, 0x88),
            active_ring: Color32::from_rgb(0x1E, 0x8A, 0x5A),
            edge_color: Color32::from_rgb(0x55, 0x55, 0x55),
            handle_color: Color32::from_rgb(0x0F, 0x34, 0x60),
            label_size: 14.0,
            detail_size: 11.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// Opacity for a visual state: dimmed elements fade to 0.4, everything
    /// else renders fully opaque.
    pub fn opacity(state: VisualState) -> f32 {
        match state {
            VisualState::Dimmed => 0.4,
            VisualState::Active | VisualState::Neutral => 1.0,
        }
    }

    /// Node border for a visual state: active nodes get the highlight ring.
    pub fn node_stroke_color(&self, state: VisualState, selected: bool) -> Color32 {
        match state {
            VisualState::Active => self.active_ring,
            _ if selected => self.accent,
            _ => self.node_stroke,
        }
    }
}
