pub mod components;
pub mod content;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use content::{percentage_bar, PortfolioContent, SectionBody, SectionContentProvider};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
