//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use console_contract::SectionId;
use platform_host::ClockTime;
use thiserror::Error;

use crate::model::{
    ConsoleVisibility, DesktopState, PointerPosition, ResizeEdge, Viewport, WindowFrame,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// First mount: center the frame in the viewport and show the home section once.
    Boot {
        /// Viewport measured at mount time.
        viewport: Viewport,
        /// Wall-clock time used by the initial command.
        now: ClockTime,
    },
    /// Open the console from the desktop icon or start menu.
    OpenConsole,
    /// Hide the console to the taskbar.
    MinimizeConsole,
    /// Bring a minimized console back.
    RestoreConsole,
    /// Close the console and reset its transcript.
    CloseConsole,
    /// Taskbar button: minimize when open, otherwise open.
    ToggleTaskbarConsole,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Open the console and run a section's command.
    LaunchSection {
        /// Section to show.
        section: SectionId,
        /// Wall-clock time passed to the command.
        now: ClockTime,
    },
    /// Pointer pressed inside the console body; focuses the input line.
    ActivateConsole,
    /// Begin dragging the console by its title bar.
    BeginMove {
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Begin resizing the console from an edge or corner.
    BeginResize {
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Global pointer move. Ignored unless a gesture is active.
    UpdatePointer {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport.
        viewport: Viewport,
    },
    /// Global pointer release or cancel. Ends whichever gesture is active.
    EndPointerInteraction,
    /// Maximize or restore the console.
    ToggleMaximize {
        /// Current viewport.
        viewport: Viewport,
    },
    /// Browser window resized.
    ReconcileViewport {
        /// New viewport.
        viewport: Viewport,
    },
    /// Input line edited by the user.
    SetInput {
        /// Full new input text.
        text: String,
    },
    /// Tab pressed in the input line.
    CompleteInput,
    /// Enter pressed in the input line.
    SubmitInput {
        /// Wall-clock time passed to the command.
        now: ClockTime,
    },
    /// Submit a line that did not come from the input buffer.
    SubmitCommand {
        /// Raw command line.
        line: String,
        /// Wall-clock time passed to the command.
        now: ClockTime,
    },
    /// Recall the previous history entry.
    HistoryPrevious,
    /// Recall the next history entry.
    HistoryNext,
    /// Step through sections with the arrow keys. Ignored while the input line has text.
    NavigateSection {
        /// `1` for forward, `-1` for backward.
        delta: i32,
        /// Wall-clock time passed to the command.
        now: ClockTime,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the UI runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the console input line.
    FocusConsoleInput,
    /// Scroll the transcript so the newest entry is visible.
    ScrollTranscriptToEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Reducer failures for actions that cannot apply to the current state.
pub enum ReducerError {
    /// A window or console action arrived while the console is minimized or closed.
    #[error("console window is not open")]
    ConsoleNotVisible,
}

fn ensure_visible(state: &DesktopState) -> Result<(), ReducerError> {
    if state.visibility.is_rendered() {
        Ok(())
    } else {
        Err(ReducerError::ConsoleNotVisible)
    }
}

/// Applies `action` to `state` and returns the effects the runtime should run.
///
/// On error the state is left unchanged.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Boot { viewport, now } => {
            if state.booted {
                return Ok(effects);
            }
            state.frame = WindowFrame::centered(state.frame.config(), viewport);
            state.console.run_section(SectionId::Home, now);
            state.booted = true;
            effects.push(RuntimeEffect::ScrollTranscriptToEnd);
        }
        DesktopAction::OpenConsole => {
            state.visibility = ConsoleVisibility::Open;
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusConsoleInput);
        }
        DesktopAction::MinimizeConsole => {
            if state.visibility == ConsoleVisibility::Open {
                state.visibility = ConsoleVisibility::Minimized;
                state.frame.end_gesture();
            }
        }
        DesktopAction::RestoreConsole => {
            if state.visibility == ConsoleVisibility::Minimized {
                state.visibility = ConsoleVisibility::Open;
                effects.push(RuntimeEffect::FocusConsoleInput);
            }
        }
        DesktopAction::CloseConsole => {
            state.visibility = ConsoleVisibility::Closed;
            state.frame.end_gesture();
            state.console.reset_to_welcome();
        }
        DesktopAction::ToggleTaskbarConsole => {
            if state.visibility == ConsoleVisibility::Open {
                state.visibility = ConsoleVisibility::Minimized;
                state.frame.end_gesture();
            } else {
                state.visibility = ConsoleVisibility::Open;
                effects.push(RuntimeEffect::FocusConsoleInput);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::LaunchSection { section, now } => {
            state.visibility = ConsoleVisibility::Open;
            state.start_menu_open = false;
            state.console.run_section(section, now);
            effects.push(RuntimeEffect::ScrollTranscriptToEnd);
            effects.push(RuntimeEffect::FocusConsoleInput);
        }
        DesktopAction::ActivateConsole => {
            ensure_visible(state)?;
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusConsoleInput);
        }
        DesktopAction::BeginMove { pointer } => {
            ensure_visible(state)?;
            state.start_menu_open = false;
            state.frame.begin_drag(pointer);
        }
        DesktopAction::BeginResize { edge, pointer } => {
            ensure_visible(state)?;
            state.start_menu_open = false;
            state.frame.begin_resize(edge, pointer);
        }
        DesktopAction::UpdatePointer { pointer, viewport } => {
            state.frame.pointer_move(pointer, viewport);
        }
        DesktopAction::EndPointerInteraction => {
            state.frame.end_gesture();
        }
        DesktopAction::ToggleMaximize { viewport } => {
            ensure_visible(state)?;
            state.frame.toggle_maximize(viewport);
        }
        DesktopAction::ReconcileViewport { viewport } => {
            state.frame.reconcile_to_viewport(viewport);
        }
        DesktopAction::SetInput { text } => {
            state.console.set_input(text);
        }
        DesktopAction::CompleteInput => {
            state.console.complete();
        }
        DesktopAction::SubmitInput { now } => {
            ensure_visible(state)?;
            state.console.submit_input(now);
            effects.push(RuntimeEffect::ScrollTranscriptToEnd);
        }
        DesktopAction::SubmitCommand { line, now } => {
            ensure_visible(state)?;
            state.console.submit(&line, now);
            effects.push(RuntimeEffect::ScrollTranscriptToEnd);
        }
        DesktopAction::HistoryPrevious => {
            state.console.history_previous();
        }
        DesktopAction::HistoryNext => {
            state.console.history_next();
        }
        DesktopAction::NavigateSection { delta, now } => {
            ensure_visible(state)?;
            if state.console.input().is_empty() && delta != 0 {
                state.console.navigate_section(delta, now);
                effects.push(RuntimeEffect::ScrollTranscriptToEnd);
            }
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FrameConfig, Gesture, WindowRect};
    use console_contract::OutputPayload;
    use pretty_assertions::assert_eq;

    fn viewport() -> Viewport {
        Viewport::new(1024, 798, 30)
    }

    fn now() -> ClockTime {
        ClockTime::new(9, 30, 15)
    }

    fn booted() -> DesktopState {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::Boot {
                viewport: viewport(),
                now: now(),
            },
        )
        .expect("boot");
        state
    }

    fn payloads(state: &DesktopState) -> Vec<OutputPayload> {
        state
            .console
            .transcript()
            .iter()
            .map(|entry| entry.payload.clone())
            .collect()
    }

    #[test]
    fn boot_centers_frame_and_runs_home_once() {
        let mut state = booted();
        assert_eq!(
            state.frame.rect(),
            WindowRect {
                x: 112,
                y: 84,
                w: 800,
                h: 600
            }
        );
        assert_eq!(
            payloads(&state),
            vec![
                OutputPayload::Welcome,
                OutputPayload::Echo {
                    text: "home".to_string()
                },
                OutputPayload::Section {
                    section: SectionId::Home
                },
            ]
        );

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::Boot {
                viewport: viewport(),
                now: now(),
            },
        )
        .expect("second boot");
        assert!(effects.is_empty());
        assert_eq!(state.console.transcript().len(), 3);
    }

    #[test]
    fn boot_keeps_custom_frame_config() {
        let config = FrameConfig {
            default_width: 500,
            default_height: 400,
            ..FrameConfig::default()
        };
        let mut state = DesktopState::new(config);
        reduce_desktop(
            &mut state,
            DesktopAction::Boot {
                viewport: viewport(),
                now: now(),
            },
        )
        .expect("boot");
        assert_eq!(state.frame.config(), config);
        assert_eq!(state.frame.rect().w, 500);
    }

    #[test]
    fn taskbar_toggle_cycles_minimize_and_restore() {
        let mut state = booted();
        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarConsole).expect("minimize");
        assert_eq!(state.visibility, ConsoleVisibility::Minimized);
        let effects =
            reduce_desktop(&mut state, DesktopAction::ToggleTaskbarConsole).expect("restore");
        assert_eq!(state.visibility, ConsoleVisibility::Open);
        assert_eq!(effects, vec![RuntimeEffect::FocusConsoleInput]);
    }

    #[test]
    fn restore_only_applies_to_minimized_console() {
        let mut state = booted();
        reduce_desktop(&mut state, DesktopAction::CloseConsole).expect("close");
        let effects = reduce_desktop(&mut state, DesktopAction::RestoreConsole).expect("restore");
        assert!(effects.is_empty());
        assert_eq!(state.visibility, ConsoleVisibility::Closed);
    }

    #[test]
    fn close_resets_transcript_but_keeps_geometry() {
        let mut state = booted();
        reduce_desktop(
            &mut state,
            DesktopAction::ToggleMaximize {
                viewport: viewport(),
            },
        )
        .expect("maximize");
        let rect = state.frame.rect();
        reduce_desktop(&mut state, DesktopAction::CloseConsole).expect("close");
        reduce_desktop(&mut state, DesktopAction::OpenConsole).expect("open");
        assert_eq!(payloads(&state), vec![OutputPayload::Welcome]);
        assert_eq!(state.frame.rect(), rect);
        assert!(state.frame.is_maximized());
    }

    #[test]
    fn minimize_keeps_transcript() {
        let mut state = booted();
        reduce_desktop(&mut state, DesktopAction::MinimizeConsole).expect("minimize");
        reduce_desktop(&mut state, DesktopAction::RestoreConsole).expect("restore");
        assert_eq!(state.console.transcript().len(), 3);
    }

    #[test]
    fn hidden_console_rejects_gestures_and_submissions() {
        let mut state = booted();
        reduce_desktop(&mut state, DesktopAction::MinimizeConsole).expect("minimize");
        let before = state.clone();
        assert_eq!(
            reduce_desktop(
                &mut state,
                DesktopAction::BeginMove {
                    pointer: PointerPosition { x: 200, y: 90 }
                }
            ),
            Err(ReducerError::ConsoleNotVisible)
        );
        assert_eq!(
            reduce_desktop(
                &mut state,
                DesktopAction::SubmitCommand {
                    line: "about".to_string(),
                    now: now()
                }
            ),
            Err(ReducerError::ConsoleNotVisible)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn minimizing_cancels_active_gesture() {
        let mut state = booted();
        reduce_desktop(
            &mut state,
            DesktopAction::BeginMove {
                pointer: PointerPosition { x: 200, y: 90 },
            },
        )
        .expect("begin move");
        assert!(matches!(state.frame.gesture(), Gesture::Dragging { .. }));
        reduce_desktop(&mut state, DesktopAction::MinimizeConsole).expect("minimize");
        assert_eq!(state.frame.gesture(), Gesture::Idle);
    }

    #[test]
    fn pointer_release_ends_drag_anywhere() {
        let mut state = booted();
        reduce_desktop(
            &mut state,
            DesktopAction::BeginMove {
                pointer: PointerPosition { x: 200, y: 90 },
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            DesktopAction::UpdatePointer {
                pointer: PointerPosition { x: 2000, y: 90 },
                viewport: viewport(),
            },
        )
        .expect("move");
        reduce_desktop(&mut state, DesktopAction::EndPointerInteraction).expect("release");
        assert_eq!(state.frame.gesture(), Gesture::Idle);
        assert_eq!(state.frame.rect().x, 224);
    }

    #[test]
    fn launch_section_opens_console_and_closes_start_menu() {
        let mut state = booted();
        reduce_desktop(&mut state, DesktopAction::CloseConsole).expect("close");
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).expect("start");
        assert!(state.start_menu_open);
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::LaunchSection {
                section: SectionId::Skills,
                now: now(),
            },
        )
        .expect("launch");
        assert_eq!(state.visibility, ConsoleVisibility::Open);
        assert!(!state.start_menu_open);
        assert_eq!(state.console.active_section(), SectionId::Skills);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ScrollTranscriptToEnd,
                RuntimeEffect::FocusConsoleInput
            ]
        );
    }

    #[test]
    fn arrow_navigation_requires_empty_input() {
        let mut state = booted();
        reduce_desktop(
            &mut state,
            DesktopAction::SetInput {
                text: "ab".to_string(),
            },
        )
        .expect("type");
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::NavigateSection {
                delta: 1,
                now: now(),
            },
        )
        .expect("ignored");
        assert!(effects.is_empty());
        assert_eq!(state.console.active_section(), SectionId::Home);

        reduce_desktop(
            &mut state,
            DesktopAction::SetInput {
                text: String::new(),
            },
        )
        .expect("clear input");
        reduce_desktop(
            &mut state,
            DesktopAction::NavigateSection {
                delta: -1,
                now: now(),
            },
        )
        .expect("navigate");
        assert_eq!(state.console.active_section(), SectionId::Contact);
    }

    #[test]
    fn submit_input_runs_buffer_and_scrolls() {
        let mut state = booted();
        reduce_desktop(
            &mut state,
            DesktopAction::SetInput {
                text: "ab".to_string(),
            },
        )
        .expect("type");
        reduce_desktop(&mut state, DesktopAction::CompleteInput).expect("complete");
        assert_eq!(state.console.input(), "about");
        let effects =
            reduce_desktop(&mut state, DesktopAction::SubmitInput { now: now() }).expect("submit");
        assert_eq!(effects, vec![RuntimeEffect::ScrollTranscriptToEnd]);
        assert_eq!(state.console.active_section(), SectionId::About);
        assert_eq!(state.console.input(), "");
    }
}
