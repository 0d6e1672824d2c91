#![forbid(unsafe_code)]

pub mod controller;
pub mod drag;
pub mod error;
pub mod settings;
pub mod surface;
pub mod viewer;

pub use controller::ExplorerController;
pub use drag::DragTracker;
pub use error::SettingsError;
pub use settings::{ExplorerSettings, SettingsOverrides};
pub use surface::{InMemorySurface, RenderSurface, ResourceHandle, ViewportHandle};
pub use viewer::Viewer;
