//! Terminal rendition of the presentation surface.

use std::collections::HashMap;

use lumen_client::{PresentationMutation, PresentationSurface, SceneOption};
use shared::domain::StatusField;
use tracing::info;

#[derive(Debug, Default)]
pub struct ConsoleSurface {
    status: HashMap<StatusField, String>,
    options: Vec<String>,
    selected_scene: Option<String>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        let field = |f: StatusField| self.status.get(&f).map(String::as_str).unwrap_or("-");
        format!(
            "mode={} mood={} scene={} selected={} scenes=[{}]",
            field(StatusField::Mode),
            field(StatusField::Mood),
            field(StatusField::Scene),
            self.selected_scene.as_deref().unwrap_or("-"),
            self.options.join(", ")
        )
    }
}

impl PresentationSurface for ConsoleSurface {
    fn set_status_text(&mut self, field: StatusField, text: &str) {
        if self.status.get(&field).map(String::as_str) == Some(text) {
            return;
        }
        info!(field = field.label(), text, "status changed");
        self.status.insert(field, text.to_string());
    }

    fn render_scene_options(&mut self, options: &[SceneOption]) {
        self.options = options.iter().map(|o| o.label.clone()).collect();
        info!(scenes = %self.options.join(", "), "scene list rebuilt");
    }

    fn select_scene(&mut self, scene: &str) {
        if self.selected_scene.as_deref() == Some(scene) {
            return;
        }
        info!(scene, "scene selected");
        self.selected_scene = Some(scene.to_string());
    }

    fn apply(&mut self, mutation: &PresentationMutation) {
        match mutation {
            PresentationMutation::TitleColor(Some(color)) => info!(%color, "title color"),
            PresentationMutation::TitleColor(None) => info!("title color reset"),
            PresentationMutation::Style { property, value } => info!(
                property = property.css_name(),
                value = value.as_deref().unwrap_or(""),
                "body style"
            ),
            PresentationMutation::Class { class, present } => info!(
                class = class.class_name(),
                target = ?class.target(),
                present,
                "effect class"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_latest_writes() {
        let mut surface = ConsoleSurface::new();
        surface.render_scene_options(&[SceneOption::new("default"), SceneOption::new("night")]);
        surface.select_scene("night");
        surface.set_status_text(StatusField::Mode, "idle");

        assert_eq!(
            surface.summary(),
            "mode=idle mood=- scene=- selected=night scenes=[Default, Night]"
        );
    }
}
