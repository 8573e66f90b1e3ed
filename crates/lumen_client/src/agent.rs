use std::{sync::Arc, time::Duration};

use shared::domain::{Command, Mode, RegularState, StatusField, DEFAULT_SCENE};
use tokio::{
    sync::{broadcast, Mutex},
    time::MissedTickBehavior,
};
use tracing::{debug, error, info};

use crate::{
    catalog::SceneCatalog,
    effects::{EffectReconciler, Presentation},
    error::FetchError,
    presentation::{PresentationMutation, PresentationSurface},
    sequence::{RequestSequencer, RequestTicket},
    transport::{command_endpoint, HttpLumenApi, LumenApi},
};

pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    RegularState,
    VisualState,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::RegularState => crate::transport::STATE_ENDPOINT,
            Endpoint::VisualState => crate::transport::VISUAL_STATE_ENDPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Failed,
    /// A newer response for the same endpoint was applied before this one resolved.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted,
    Failed,
}

/// Developer-facing notifications. The presentation never shows command
/// failures; subscribers may.
#[derive(Debug, Clone)]
pub enum AgentEvent {
    RegularStateUpdated(RegularState),
    RegularStateFailed(String),
    VisualStateApplied { mutations: usize },
    VisualStateReset(String),
    CommandSucceeded(Command),
    CommandFailed { command: Command, reason: String },
    StaleResponseDiscarded { endpoint: Endpoint, ticket: u64 },
}

struct View<S> {
    surface: S,
    catalog: SceneCatalog,
    reconciler: EffectReconciler,
}

impl<S: PresentationSurface> View<S> {
    fn show_status(&mut self, state: &RegularState) {
        for field in StatusField::ALL {
            self.surface.set_status_text(field, state.field(field));
        }
    }

    fn ensure_scene(&mut self, scene: &str) {
        self.catalog.ensure(scene);
        self.surface.render_scene_options(&self.catalog.options());
        self.surface.select_scene(self.catalog.active());
    }

    fn select_scene(&mut self, scene: &str) {
        self.catalog.select(scene);
        self.surface.select_scene(scene);
    }

    fn apply_all(&mut self, mutations: &[PresentationMutation]) {
        for mutation in mutations {
            self.surface.apply(mutation);
        }
    }
}

/// Polls the Lumen service, keeps the scene catalog, and drives a
/// [`PresentationSurface`].
pub struct LumenAgent<S: PresentationSurface + 'static> {
    api: Arc<dyn LumenApi>,
    view: Mutex<View<S>>,
    regular_requests: RequestSequencer,
    visual_requests: RequestSequencer,
    events: broadcast::Sender<AgentEvent>,
}

impl<S: PresentationSurface + 'static> LumenAgent<S> {
    pub fn new(server_url: &str, surface: S) -> anyhow::Result<Arc<Self>> {
        let api = HttpLumenApi::new(server_url)?;
        Ok(Self::new_with_api(Arc::new(api), surface))
    }

    pub fn new_with_api(api: Arc<dyn LumenApi>, mut surface: S) -> Arc<Self> {
        let catalog = SceneCatalog::new();
        surface.render_scene_options(&catalog.options());
        surface.select_scene(catalog.active());

        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            api,
            view: Mutex::new(View {
                surface,
                catalog,
                reconciler: EffectReconciler::new(),
            }),
            regular_requests: RequestSequencer::new(),
            visual_requests: RequestSequencer::new(),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<AgentEvent> {
        self.events.subscribe()
    }

    pub async fn inspect<R>(&self, read: impl FnOnce(&S, &SceneCatalog) -> R) -> R {
        let view = self.view.lock().await;
        read(&view.surface, &view.catalog)
    }

    pub async fn applied_presentation(&self) -> Presentation {
        self.view.lock().await.reconciler.applied().clone()
    }

    fn emit(&self, event: AgentEvent) {
        let _ = self.events.send(event);
    }

    fn discard(&self, endpoint: Endpoint, ticket: RequestTicket) -> RefreshOutcome {
        let requests = match endpoint {
            Endpoint::RegularState => &self.regular_requests,
            Endpoint::VisualState => &self.visual_requests,
        };
        debug!(
            endpoint = endpoint.as_str(),
            ticket = ticket.get(),
            last_applied = requests.last_applied().map(RequestTicket::get),
            "poll: discarding response older than the last applied one"
        );
        self.emit(AgentEvent::StaleResponseDiscarded {
            endpoint,
            ticket: ticket.get(),
        });
        RefreshOutcome::Discarded
    }

    /// Fetches `/state` and updates the status fields and scene selection.
    ///
    /// A failure shows the error placeholder in every status field and leaves
    /// the scene selection as it was.
    pub async fn refresh_regular_state(&self) -> RefreshOutcome {
        let ticket = self.regular_requests.issue();
        let result = self.api.fetch_state().await;

        let mut view = self.view.lock().await;
        if !self.regular_requests.try_apply(ticket) {
            return self.discard(Endpoint::RegularState, ticket);
        }

        match result {
            Ok(response) => {
                let state = RegularState::from(&response);
                view.show_status(&state);
                match response.scene() {
                    Some(scene) if !view.catalog.contains(scene) => {
                        info!(scene, "poll: new scene observed");
                        view.ensure_scene(scene);
                    }
                    scene => view.select_scene(scene.unwrap_or(DEFAULT_SCENE)),
                }
                debug!(
                    mode = %state.mode,
                    mood = %state.mood,
                    scene = %state.scene,
                    "poll: regular state applied"
                );
                self.emit(AgentEvent::RegularStateUpdated(state));
                RefreshOutcome::Applied
            }
            Err(err) => {
                log_fetch_error(&err, "poll: error fetching regular state");
                view.show_status(&RegularState::error());
                self.emit(AgentEvent::RegularStateFailed(err.to_string()));
                RefreshOutcome::Failed
            }
        }
    }

    /// Fetches `/lumen_visual_state` and reconciles the presentation.
    ///
    /// A failure resets the presentation to baseline, whatever was shown.
    pub async fn refresh_visual_state(&self) -> RefreshOutcome {
        let ticket = self.visual_requests.issue();
        let result = self.api.fetch_visual_state().await;

        let mut view = self.view.lock().await;
        if !self.visual_requests.try_apply(ticket) {
            return self.discard(Endpoint::VisualState, ticket);
        }

        match result {
            Ok(visual) => {
                let mutations = view.reconciler.reconcile(&visual);
                view.apply_all(&mutations);
                debug!(?visual, mutations = mutations.len(), "poll: visual state received");
                self.emit(AgentEvent::VisualStateApplied {
                    mutations: mutations.len(),
                });
                RefreshOutcome::Applied
            }
            Err(err) => {
                log_fetch_error(&err, "poll: error fetching visual state");
                let mutations = view.reconciler.reset();
                view.apply_all(&mutations);
                self.emit(AgentEvent::VisualStateReset(err.to_string()));
                RefreshOutcome::Failed
            }
        }
    }

    /// Runs both pollers once, concurrently and without ordering between them.
    pub async fn refresh_all(&self) -> (RefreshOutcome, RefreshOutcome) {
        tokio::join!(self.refresh_regular_state(), self.refresh_visual_state())
    }

    /// Starts both pollers as independent tasks.
    pub fn spawn_refresh(self: &Arc<Self>) {
        let agent = Arc::clone(self);
        tokio::spawn(async move {
            agent.refresh_regular_state().await;
        });
        let agent = Arc::clone(self);
        tokio::spawn(async move {
            agent.refresh_visual_state().await;
        });
    }

    pub async fn set_mode(&self, mode: Mode) -> CommandOutcome {
        self.dispatch(Command::SetMode(mode)).await
    }

    /// The catalog only learns about `scene` through the refresh that follows.
    pub async fn set_scene(&self, scene: &str) -> CommandOutcome {
        self.dispatch(Command::SetScene(scene.to_string())).await
    }

    pub async fn dispatch(&self, command: Command) -> CommandOutcome {
        match self.api.send_command(&command).await {
            Ok(_) => {
                info!(endpoint = %command_endpoint(&command), "command: accepted");
                self.emit(AgentEvent::CommandSucceeded(command));
                self.refresh_all().await;
                CommandOutcome::Accepted
            }
            Err(err) => {
                error!(
                    endpoint = err.endpoint(),
                    kind = err.kind().as_str(),
                    "command: error setting {command}: {err}"
                );
                self.emit(AgentEvent::CommandFailed {
                    command,
                    reason: err.to_string(),
                });
                CommandOutcome::Failed
            }
        }
    }

    /// Polls immediately and then every [`POLL_INTERVAL`]. Never returns.
    pub async fn run(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval_ms = POLL_INTERVAL.as_millis() as u64, "poll: loop started");
        loop {
            ticker.tick().await;
            self.spawn_refresh();
        }
    }
}

fn log_fetch_error(err: &FetchError, message: &'static str) {
    error!(
        endpoint = err.endpoint(),
        kind = err.kind().as_str(),
        error = %err,
        "{message}"
    );
}

#[cfg(test)]
#[path = "tests/agent_tests.rs"]
mod tests;
