use std::{fmt, str::FromStr};

use crate::error::ParseModeError;

/// Placeholder shown when the service omits a status field.
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder shown in every status field after a failed state poll.
pub const ERROR_TEXT: &str = "Error";
pub const DEFAULT_SCENE: &str = "default";
pub const SEED_SCENES: [&str; 3] = ["default", "work", "relax"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Idle,
    Assist,
    Chat,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Idle, Mode::Assist, Mode::Chat];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Assist => "assist",
            Mode::Chat => "chat",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ParseModeError::new(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Mode,
    Scene,
}

/// A state change sent to the Lumen service. Nothing is retained after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetMode(Mode),
    SetScene(String),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::SetMode(_) => CommandKind::Mode,
            Command::SetScene(_) => CommandKind::Scene,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Command::SetMode(mode) => mode.as_str(),
            Command::SetScene(scene) => scene,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            CommandKind::Mode => write!(f, "mode {}", self.value()),
            CommandKind::Scene => write!(f, "scene {}", self.value()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusField {
    Mode,
    Mood,
    Scene,
}

impl StatusField {
    pub const ALL: [StatusField; 3] = [StatusField::Mode, StatusField::Mood, StatusField::Scene];

    pub fn label(self) -> &'static str {
        match self {
            StatusField::Mode => "mode",
            StatusField::Mood => "mood",
            StatusField::Scene => "scene",
        }
    }
}

/// Display text for the three status fields, replaced wholesale on every poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularState {
    pub mode: String,
    pub mood: String,
    pub scene: String,
}

impl RegularState {
    pub fn error() -> Self {
        Self {
            mode: ERROR_TEXT.to_string(),
            mood: ERROR_TEXT.to_string(),
            scene: ERROR_TEXT.to_string(),
        }
    }

    pub fn field(&self, field: StatusField) -> &str {
        match field {
            StatusField::Mode => &self.mode,
            StatusField::Mood => &self.mood,
            StatusField::Scene => &self.scene,
        }
    }
}
