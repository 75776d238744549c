use super::*;
use crate::model::ResizeEdge;

use super::console::ConsoleBody;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn ConsoleWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let rect = Signal::derive(move || state.with(|desktop| desktop.frame.rect()));
    let maximized = Signal::derive(move || state.with(|desktop| desktop.frame.is_maximized()));

    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            viewport: runtime.host.get_value().viewport(),
        });
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };

    let style = move || {
        let rect = rect.get();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            rect.x, rect.y, rect.w, rect.h
        )
    };

    view! {
        <section
            class="console-window"
            class:maximized=move || maximized.get()
            style=style
            role="dialog"
            aria-label="Portfolio Console"
            on:pointerdown=move |_| runtime.dispatch_action(DesktopAction::ActivateConsole)
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-title">
                    <span class="titlebar-icon" aria-hidden="true">">_"</span>
                    <span>"Portfolio Console"</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeConsole);
                        }
                    >
                        "_"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if maximized.get() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        {move || if maximized.get() { "❐" } else { "□" }}
                    </button>
                    <button
                        type="button"
                        class="titlebar-close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseConsole);
                        }
                    >
                        "✕"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <ConsoleBody />
            </div>
            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle edge=edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", edge.css_class());
    let style = format!("cursor:{};", edge.cursor());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            style=style
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
