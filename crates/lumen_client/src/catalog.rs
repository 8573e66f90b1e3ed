use shared::domain::{DEFAULT_SCENE, SEED_SCENES};

use crate::presentation::SceneOption;

/// Sorted, duplicate-free list of every scene seen this session, plus the
/// active selection. Scenes are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneCatalog {
    scenes: Vec<String>,
    active: String,
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCatalog {
    pub fn new() -> Self {
        let mut scenes: Vec<String> = SEED_SCENES.iter().map(|s| s.to_string()).collect();
        scenes.sort();
        Self {
            scenes,
            active: DEFAULT_SCENE.to_string(),
        }
    }

    /// Adds `name` if unseen, re-sorts, and makes it the active scene.
    ///
    /// Returns whether the scene list grew. An empty name changes nothing.
    pub fn ensure(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let inserted = !self.contains(name);
        if inserted {
            self.scenes.push(name.to_string());
        }
        self.scenes.sort();
        self.active = name.to_string();
        inserted
    }

    /// Changes the active scene without touching the list.
    pub fn select(&mut self, name: &str) {
        self.active = name.to_string();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenes.iter().any(|scene| scene == name)
    }

    pub fn scenes(&self) -> &[String] {
        &self.scenes
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Option list rebuilt from scratch in catalog order.
    pub fn options(&self) -> Vec<SceneOption> {
        self.scenes.iter().map(SceneOption::new).collect()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
