//! Visual state to presentation mapping.
//!
//! [`target_presentation`] is a pure function of the last applied
//! [`Presentation`] and a fresh [`VisualState`]; [`diff`] turns the step from
//! one projection to the next into the mutations a surface applies in a single
//! pass.

use std::collections::{BTreeMap, BTreeSet};

use shared::protocol::{BorderEffect, PopupEffect, VisualState};

use crate::presentation::{EffectClass, PresentationMutation, StyleProperty};

pub const DIRECT_BORDER_WIDTH: &str = "5px";
pub const DIRECT_BORDER_PADDING: &str = "10px";

/// Everything the agent has written to the surface's title color, body inline
/// styles and effect classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    pub title_color: Option<String>,
    pub styles: BTreeMap<StyleProperty, String>,
    pub classes: BTreeSet<EffectClass>,
}

impl Presentation {
    /// No effects, document default colors.
    pub fn baseline() -> Self {
        Self::default()
    }

    fn set_class(&mut self, class: EffectClass, present: bool) {
        if present {
            self.classes.insert(class);
        } else {
            self.classes.remove(&class);
        }
    }
}

pub fn direct_border(color: &str) -> String {
    format!("{DIRECT_BORDER_WIDTH} solid {color}")
}

pub fn target_presentation(current: &Presentation, visual: &VisualState) -> Presentation {
    let mut target = current.clone();

    if let Some(color) = visual.highlight_color() {
        target.title_color = Some(color.to_string());
    }

    target.styles.clear();
    match &visual.border_effect {
        None | Some(BorderEffect::None) => {
            if let Some(color) = visual.border_color() {
                let border = direct_border(color);
                target.styles.insert(StyleProperty::BorderTop, border.clone());
                target.styles.insert(StyleProperty::BorderBottom, border);
                for padding in [StyleProperty::PaddingLeft, StyleProperty::PaddingRight] {
                    target.styles.insert(padding, DIRECT_BORDER_PADDING.to_string());
                }
            }
            if visual.border_effect.is_some() {
                target.set_class(EffectClass::PulseMagenta, false);
                target.set_class(EffectClass::FlickerBloodOrange, false);
            }
        }
        Some(effect) => {
            target.set_class(
                EffectClass::PulseMagenta,
                *effect == BorderEffect::PulseMagenta,
            );
            target.set_class(
                EffectClass::FlickerBloodOrange,
                *effect == BorderEffect::FlickerBloodOrange,
            );
        }
    }

    target.set_class(
        EffectClass::Glitch,
        visual.popup_effect == Some(PopupEffect::Glitch),
    );

    if let Some(overlay) = visual.scanline_overlay {
        target.set_class(EffectClass::ScanlineOverlay, overlay);
    }

    target
}

pub fn diff(current: &Presentation, target: &Presentation) -> Vec<PresentationMutation> {
    let mut mutations = Vec::new();

    if current.title_color != target.title_color {
        mutations.push(PresentationMutation::TitleColor(target.title_color.clone()));
    }

    for property in StyleProperty::ALL {
        let before = current.styles.get(&property);
        let after = target.styles.get(&property);
        if before != after {
            mutations.push(PresentationMutation::Style {
                property,
                value: after.cloned(),
            });
        }
    }

    for class in EffectClass::ALL {
        let present = target.classes.contains(&class);
        if current.classes.contains(&class) != present {
            mutations.push(PresentationMutation::Class { class, present });
        }
    }

    mutations
}

/// Every mutation needed to reach the baseline from any starting point.
pub fn baseline_mutations() -> Vec<PresentationMutation> {
    let mut mutations = vec![PresentationMutation::TitleColor(None)];
    mutations.extend(StyleProperty::ALL.into_iter().map(|property| {
        PresentationMutation::Style {
            property,
            value: None,
        }
    }));
    mutations.extend(EffectClass::ALL.into_iter().map(|class| {
        PresentationMutation::Class {
            class,
            present: false,
        }
    }));
    mutations
}

/// Owns the presentation projection and hands out the mutations that move it.
#[derive(Debug, Default)]
pub struct EffectReconciler {
    applied: Presentation,
}

impl EffectReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> &Presentation {
        &self.applied
    }

    pub fn reconcile(&mut self, visual: &VisualState) -> Vec<PresentationMutation> {
        let target = target_presentation(&self.applied, visual);
        let mutations = diff(&self.applied, &target);
        self.applied = target;
        mutations
    }

    /// Unconditional: the surface may hold state this reconciler never wrote.
    pub fn reset(&mut self) -> Vec<PresentationMutation> {
        self.applied = Presentation::baseline();
        baseline_mutations()
    }
}

#[cfg(test)]
#[path = "tests/effects_tests.rs"]
mod tests;
