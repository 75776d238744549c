use std::time::Duration;

use console_contract::SectionId;

use super::*;

/// Tray clock refresh period.
const CLOCK_REFRESH: Duration = Duration::from_secs(60);

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(runtime.host.get_value().now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(runtime.host.get_value().now()),
        CLOCK_REFRESH,
    ) {
        on_cleanup(move || interval.clear());
    }

    let visibility = move || state.with(|desktop| desktop.visibility);
    let start_menu_open = move || state.with(|desktop| desktop.start_menu_open);

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <div class="taskbar-start">
                <button
                    type="button"
                    class="start-button"
                    class:pressed=start_menu_open
                    aria-haspopup="menu"
                    aria-expanded=start_menu_open
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    }
                >
                    <span class="start-logo" aria-hidden="true">"⊞"</span>
                    <span class="start-text">"Start"</span>
                </button>
            </div>
            <div class="taskbar-items">
                <Show
                    when=move || visibility() != ConsoleVisibility::Closed
                    fallback=|| ()
                >
                    <button
                        type="button"
                        class=move || {
                            if visibility() == ConsoleVisibility::Open {
                                "taskbar-item taskbar-item-active"
                            } else {
                                "taskbar-item"
                            }
                        }
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleTaskbarConsole);
                        }
                    >
                        <span class="taskbar-item-icon" aria-hidden="true">">_"</span>
                        <span class="taskbar-item-text">"Portfolio Console"</span>
                    </button>
                </Show>
            </div>
            <div class="taskbar-tray">
                <div class="taskbar-clock">{move || clock_now.get().hm()}</div>
            </div>
            <Show when=start_menu_open fallback=|| ()>
                <StartMenu />
            </Show>
        </footer>
    }
}

#[component]
fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div
            class="start-menu"
            role="menu"
            aria-label="Start"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                type="button"
                class="start-menu-item"
                role="menuitem"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::OpenConsole);
                }
            >
                "Console"
            </button>
            <div class="start-menu-separator" role="separator" />
            {SectionId::ALL
                .into_iter()
                .map(|section| view! {
                    <button
                        type="button"
                        class="start-menu-item"
                        role="menuitem"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::LaunchSection {
                                section,
                                now: runtime.host.get_value().now(),
                            });
                        }
                    >
                        {section.label()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}
