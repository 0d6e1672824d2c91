use std::sync::Arc;

use dioxus::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{ExplorerController, ExplorerSettings};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> ExplorerSettings;

    /// Fixed seed for the scan output's random speckle. `None` draws fresh
    /// noise on every render.
    fn scan_seed(&self) -> Option<u64>;
}

#[derive(Clone)]
pub struct AppContext {
    settings: ExplorerSettings,
    scan_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            scan_seed: app.scan_seed(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ExplorerSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        self.settings.viewport_height
    }

    #[must_use]
    pub fn scan_rng(&self) -> StdRng {
        match self.scan_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Installs the session controller for this window, seeded from settings.
pub fn use_explorer_provider(settings: &ExplorerSettings) -> Signal<ExplorerController> {
    let settings = settings.clone();
    use_context_provider(move || Signal::new(ExplorerController::new(&settings)))
}

/// The window's session controller.
#[must_use]
pub fn use_explorer() -> Signal<ExplorerController> {
    use_context()
}
