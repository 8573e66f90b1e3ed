//! The read/write contract the agent needs from whatever renders it.
//!
//! A surface never decides anything on its own: it receives status text, the
//! scene option list, the active scene and presentation mutations, and shows
//! them. Nothing is read back from it.

use std::collections::{BTreeMap, BTreeSet};

use shared::domain::StatusField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneOption {
    pub value: String,
    pub label: String,
}

impl SceneOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let mut chars = value.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self { value, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    BorderTop,
    BorderBottom,
    PaddingLeft,
    PaddingRight,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 4] = [
        StyleProperty::BorderTop,
        StyleProperty::BorderBottom,
        StyleProperty::PaddingLeft,
        StyleProperty::PaddingRight,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::BorderTop => "border-top",
            StyleProperty::BorderBottom => "border-bottom",
            StyleProperty::PaddingLeft => "padding-left",
            StyleProperty::PaddingRight => "padding-right",
        }
    }
}

/// Element an effect class is toggled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTarget {
    Body,
    StatusContainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectClass {
    PulseMagenta,
    FlickerBloodOrange,
    Glitch,
    ScanlineOverlay,
}

impl EffectClass {
    pub const ALL: [EffectClass; 4] = [
        EffectClass::PulseMagenta,
        EffectClass::FlickerBloodOrange,
        EffectClass::Glitch,
        EffectClass::ScanlineOverlay,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            EffectClass::PulseMagenta => "body-pulse-magenta",
            EffectClass::FlickerBloodOrange => "body-flicker-blood-orange",
            EffectClass::Glitch => "glitch-effect",
            EffectClass::ScanlineOverlay => "scanline-overlay",
        }
    }

    pub fn target(self) -> EffectTarget {
        match self {
            EffectClass::Glitch => EffectTarget::StatusContainer,
            _ => EffectTarget::Body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationMutation {
    /// `None` restores the document default color of the title.
    TitleColor(Option<String>),
    /// `None` clears the inline style property on the body.
    Style {
        property: StyleProperty,
        value: Option<String>,
    },
    Class { class: EffectClass, present: bool },
}

pub trait PresentationSurface: Send {
    fn set_status_text(&mut self, field: StatusField, text: &str);
    /// Replaces the whole option list.
    fn render_scene_options(&mut self, options: &[SceneOption]);
    fn select_scene(&mut self, scene: &str);
    fn apply(&mut self, mutation: &PresentationMutation);
}

/// Keeps the last value written for every attribute of the surface.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub status: BTreeMap<&'static str, String>,
    pub options: Vec<SceneOption>,
    pub selected_scene: Option<String>,
    pub title_color: Option<String>,
    pub styles: BTreeMap<StyleProperty, String>,
    pub classes: BTreeSet<EffectClass>,
    pub option_renders: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, field: StatusField) -> Option<&str> {
        self.status.get(field.label()).map(String::as_str)
    }

    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.styles.get(&property).map(String::as_str)
    }

    pub fn has_class(&self, class: EffectClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

impl PresentationSurface for MemorySurface {
    fn set_status_text(&mut self, field: StatusField, text: &str) {
        self.status.insert(field.label(), text.to_string());
    }

    fn render_scene_options(&mut self, options: &[SceneOption]) {
        self.options = options.to_vec();
        self.option_renders += 1;
    }

    fn select_scene(&mut self, scene: &str) {
        self.selected_scene = Some(scene.to_string());
    }

    fn apply(&mut self, mutation: &PresentationMutation) {
        match mutation {
            PresentationMutation::TitleColor(color) => self.title_color = color.clone(),
            PresentationMutation::Style { property, value } => match value {
                Some(value) => {
                    self.styles.insert(*property, value.clone());
                }
                None => {
                    self.styles.remove(property);
                }
            },
            PresentationMutation::Class { class, present } => {
                if *present {
                    self.classes.insert(*class);
                } else {
                    self.classes.remove(class);
                }
            }
        }
    }
}
