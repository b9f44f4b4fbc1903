//! Explorer screen: sidebar-driven dataset views.

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

pub use renderer::render_explorer;
pub use state::{Chart, ChartKind, ExplorerState, Focus, Mode, View};
