//! Desktop shell UI composition and interaction surfaces.

mod console;
mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::ConsoleWindow};

use crate::{
    model::{ConsoleVisibility, Gesture, PointerPosition},
    reducer::DesktopAction,
};
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Cursor applied to the whole desktop while a gesture is active, so it does not flicker when
/// the pointer outruns the handle.
pub fn gesture_cursor(gesture: Gesture) -> Option<&'static str> {
    match gesture {
        Gesture::Idle => None,
        Gesture::Dragging { .. } => Some("move"),
        Gesture::Resizing { edge, .. } => Some(edge.cursor()),
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let active = runtime
        .state
        .with_untracked(|desktop| desktop.frame.gesture() != Gesture::Idle);
    if active {
        runtime.dispatch_action(DesktopAction::EndPointerInteraction);
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Full desktop: icon, console window, and taskbar, plus the global pointer and resize listeners.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let host = runtime.host.get_value();
    let viewport = host.viewport();
    logging::log!(
        "desktop boot: viewport {}x{} (usable height {})",
        viewport.width,
        viewport.height,
        viewport.usable_height()
    );
    runtime.dispatch_action(DesktopAction::Boot {
        viewport,
        now: host.now(),
    });

    // Gestures end on release anywhere in the page, not just over the window.
    let pointer_move_listener = window_event_listener(ev::pointermove, move |ev| {
        let active = state.with_untracked(|desktop| desktop.frame.gesture() != Gesture::Idle);
        if !active {
            return;
        }
        runtime.dispatch_action(DesktopAction::UpdatePointer {
            pointer: pointer_from_pointer_event(&ev),
            viewport: runtime.host.get_value().viewport(),
        });
    });
    let pointer_up_listener = window_event_listener(ev::pointerup, move |_| {
        end_active_pointer_interaction(runtime)
    });
    let pointer_cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        end_active_pointer_interaction(runtime)
    });
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().viewport();
        logging::log!(
            "viewport resized to {}x{}",
            viewport.width,
            viewport.height
        );
        runtime.dispatch_action(DesktopAction::ReconcileViewport { viewport });
    });
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.with_untracked(|desktop| desktop.start_menu_open) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || {
        pointer_move_listener.remove();
        pointer_up_listener.remove();
        pointer_cancel_listener.remove();
        resize_listener.remove();
        escape_listener.remove();
    });

    let desktop_cursor = move || {
        state
            .with(|desktop| gesture_cursor(desktop.frame.gesture()))
            .map(|cursor| format!("cursor:{cursor};"))
            .unwrap_or_default()
    };
    let gesture_active = move || state.with(|desktop| desktop.frame.gesture() != Gesture::Idle);

    view! {
        <div
            id="desktop-shell-root"
            class=move || {
                if gesture_active() { "desktop-shell gesture-active" } else { "desktop-shell" }
            }
            style=desktop_cursor
        >
            <div
                class="desktop-dismiss-layer"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            />
            <div class="desktop-icons">
                <button
                    type="button"
                    class="desktop-icon"
                    aria-label="Open console"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::OpenConsole);
                    }
                >
                    <span class="desktop-icon-img" aria-hidden="true">">_"</span>
                    <span class="desktop-icon-text">"Console"</span>
                </button>
            </div>

            <Show
                when=move || state.with(|desktop| desktop.visibility == ConsoleVisibility::Open)
                fallback=|| ()
            >
                <ConsoleWindow />
            </Show>

            <Taskbar />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ResizeEdge, WindowRect};
    use pretty_assertions::assert_eq;

    #[test]
    fn gesture_cursor_follows_active_gesture() {
        assert_eq!(gesture_cursor(Gesture::Idle), None);
        assert_eq!(
            gesture_cursor(Gesture::Dragging {
                pointer_offset: PointerPosition { x: 4, y: 4 }
            }),
            Some("move")
        );
        assert_eq!(
            gesture_cursor(Gesture::Resizing {
                edge: ResizeEdge::NorthWest,
                pointer_start: PointerPosition::default(),
                rect_start: WindowRect::default(),
            }),
            Some("nwse-resize")
        );
    }
}
