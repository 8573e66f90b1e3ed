//! Presentation agent for a remote Lumen device: state polling, scene catalog,
//! effect reconciliation and mode/scene commands.

pub mod agent;
pub mod catalog;
pub mod effects;
pub mod error;
pub mod presentation;
pub mod sequence;
pub mod transport;

pub use agent::{AgentEvent, CommandOutcome, Endpoint, LumenAgent, RefreshOutcome, POLL_INTERVAL};
pub use catalog::SceneCatalog;
pub use effects::{EffectReconciler, Presentation};
pub use error::{FetchError, FetchErrorKind};
pub use presentation::{
    EffectClass, EffectTarget, MemorySurface, PresentationMutation, PresentationSurface,
    SceneOption, StyleProperty,
};
pub use transport::{HttpLumenApi, LumenApi, DEFAULT_SERVER_URL};
