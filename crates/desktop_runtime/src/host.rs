//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use platform_host::{local_clock_time_now, read_viewport_metrics, ClockTime};

use crate::{
    model::{FrameConfig, Viewport},
    reducer::RuntimeEffect,
};

/// DOM id of the console input line.
pub const CONSOLE_INPUT_DOM_ID: &str = "console-input";
/// DOM id of the scrollable transcript container.
pub const CONSOLE_TRANSCRIPT_DOM_ID: &str = "console-transcript";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Browser queries and effect execution for the desktop runtime.
pub struct DesktopHostContext {
    config: FrameConfig,
}

impl DesktopHostContext {
    pub fn new(config: FrameConfig) -> Self {
        Self { config }
    }

    /// Current viewport with the configured taskbar reservation.
    pub fn viewport(&self) -> Viewport {
        Viewport::from_metrics(read_viewport_metrics(), self.config.taskbar_height)
    }

    /// Local wall-clock time for commands and the tray clock.
    pub fn now(&self) -> ClockTime {
        local_clock_time_now()
    }

    /// Executes one reducer-emitted effect.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusConsoleInput => focus_console_input(),
            RuntimeEffect::ScrollTranscriptToEnd => scroll_transcript_to_end(),
        }
    }
}

// Deferred to the next tick so the element exists after the triggering render.
#[cfg(target_arch = "wasm32")]
fn defer(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn focus_console_input() {
    #[cfg(target_arch = "wasm32")]
    defer(|| {
        if let Some(element) = element_by_id(CONSOLE_INPUT_DOM_ID) {
            let _ = element.focus();
        }
    });
}

fn scroll_transcript_to_end() {
    #[cfg(target_arch = "wasm32")]
    defer(|| {
        if let Some(element) = element_by_id(CONSOLE_TRANSCRIPT_DOM_ID) {
            element.set_scroll_top(element.scroll_height());
        }
    });
}
