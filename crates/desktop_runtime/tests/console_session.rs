use console_contract::{OutputPayload, SectionId};
use desktop_runtime::{
    reduce_desktop, ConsoleVisibility, DesktopAction, DesktopState, ReducerError, Viewport,
};
use platform_host::ClockTime;
use pretty_assertions::assert_eq;

fn now() -> ClockTime {
    ClockTime::new(14, 5, 9)
}

fn dispatch(state: &mut DesktopState, action: DesktopAction) {
    reduce_desktop(state, action).expect("action applies");
}

fn submit(state: &mut DesktopState, line: &str) {
    dispatch(
        state,
        DesktopAction::SubmitCommand {
            line: line.to_string(),
            now: now(),
        },
    );
}

fn type_and_tab(state: &mut DesktopState, text: &str) -> String {
    dispatch(
        state,
        DesktopAction::SetInput {
            text: text.to_string(),
        },
    );
    dispatch(state, DesktopAction::CompleteInput);
    state.console.input().to_string()
}

fn booted() -> DesktopState {
    let mut state = DesktopState::default();
    dispatch(
        &mut state,
        DesktopAction::Boot {
            viewport: Viewport::new(1280, 800, 30),
            now: now(),
        },
    );
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
fn each_submission_appends_echo_then_result() {
    let mut state = booted();
    let before = state.console.transcript().len();

    submit(&mut state, "time");
    submit(&mut state, "xyz");
    submit(&mut state, "ls");

    let tail = payloads(&state).split_off(before);
    assert_eq!(tail.len(), 6);
    assert_eq!(
        tail[0],
        OutputPayload::Echo {
            text: "time".to_string()
        }
    );
    assert_eq!(
        tail[1],
        OutputPayload::Time {
            text: "14:05:09".to_string()
        }
    );
    assert_eq!(tail[3].plain_text(), "unknown command: xyz");
    assert!(matches!(tail[5], OutputPayload::SectionList { .. }));
    assert_eq!(state.console.active_section(), SectionId::Home);
}

#[test]
fn clear_empties_transcript_regardless_of_length() {
    let mut state = booted();
    for _ in 0..25 {
        submit(&mut state, "help");
    }
    submit(&mut state, "clear");
    assert!(state.console.transcript().is_empty());

    submit(&mut state, "CLEAR");
    assert!(state.console.transcript().is_empty());
}

#[test]
fn case_and_whitespace_variants_have_identical_effects() {
    let baseline = booted().console.transcript().len();
    let runs: Vec<(Vec<OutputPayload>, SectionId)> = ["HELP", " help ", "help"]
        .into_iter()
        .map(|line| {
            let mut state = booted();
            submit(&mut state, line);
            (payloads(&state), state.console.active_section())
        })
        .collect();

    for ((transcript, active), typed) in runs.iter().zip(["HELP", "help", "help"]) {
        assert_eq!(transcript.len(), baseline + 2);
        assert_eq!(
            transcript[baseline],
            OutputPayload::Echo {
                text: typed.to_string()
            }
        );
        assert!(matches!(transcript[baseline + 1], OutputPayload::Help { .. }));
        assert_eq!(*active, SectionId::Home);
    }
    assert_eq!(runs[0].0[baseline + 1], runs[1].0[baseline + 1]);
    assert_eq!(runs[1].0[baseline + 1], runs[2].0[baseline + 1]);
}

#[test]
fn blank_submission_is_a_no_op() {
    let mut state = booted();
    let before = payloads(&state);
    submit(&mut state, "   ");
    submit(&mut state, "");
    assert_eq!(payloads(&state), before);
}

#[test]
fn tab_completion_over_builtin_vocabulary() {
    let mut state = booted();
    assert_eq!(type_and_tab(&mut state, "ab"), "about");
    assert_eq!(type_and_tab(&mut state, "about"), "about");
    assert_eq!(type_and_tab(&mut state, "zz"), "zz");
    assert_eq!(type_and_tab(&mut state, "c"), "clear");

    assert_eq!(type_and_tab(&mut state, "e"), "education");
    dispatch(&mut state, DesktopAction::CompleteInput);
    assert_eq!(state.console.input(), "experience");
    dispatch(&mut state, DesktopAction::CompleteInput);
    assert_eq!(state.console.input(), "education");
}

#[test]
fn closing_resets_to_welcome_and_minimizing_does_not() {
    let mut state = booted();
    submit(&mut state, "about");
    dispatch(&mut state, DesktopAction::MinimizeConsole);
    dispatch(&mut state, DesktopAction::RestoreConsole);
    assert_eq!(state.console.active_section(), SectionId::About);
    assert!(state.console.transcript().len() > 1);

    dispatch(&mut state, DesktopAction::CloseConsole);
    assert_eq!(state.visibility, ConsoleVisibility::Closed);
    dispatch(&mut state, DesktopAction::OpenConsole);
    assert_eq!(payloads(&state), vec![OutputPayload::Welcome]);
}

#[test]
fn entry_ids_are_never_reused() {
    let mut state = booted();
    let last_before = state
        .console
        .transcript()
        .last()
        .map(|entry| entry.id)
        .expect("boot output");
    submit(&mut state, "clear");
    dispatch(&mut state, DesktopAction::CloseConsole);
    dispatch(&mut state, DesktopAction::OpenConsole);
    submit(&mut state, "home");
    for entry in state.console.transcript() {
        assert!(entry.id > last_before);
    }
}

#[test]
fn history_recall_walks_submitted_lines() {
    let mut state = booted();
    submit(&mut state, "about");
    submit(&mut state, "Skills");

    dispatch(&mut state, DesktopAction::HistoryPrevious);
    assert_eq!(state.console.input(), "Skills");
    dispatch(&mut state, DesktopAction::HistoryPrevious);
    assert_eq!(state.console.input(), "about");
    dispatch(&mut state, DesktopAction::HistoryNext);
    assert_eq!(state.console.input(), "Skills");
    dispatch(&mut state, DesktopAction::HistoryNext);
    assert_eq!(state.console.input(), "");
}

#[test]
fn history_next_without_a_walk_keeps_the_typed_line() {
    let mut state = booted();
    submit(&mut state, "about");
    dispatch(
        &mut state,
        DesktopAction::SetInput {
            text: "ski".to_string(),
        },
    );

    dispatch(&mut state, DesktopAction::HistoryNext);
    assert_eq!(state.console.input(), "ski");
}

#[test]
fn section_navigation_wraps_in_both_directions() {
    let mut state = booted();
    dispatch(
        &mut state,
        DesktopAction::NavigateSection {
            delta: -1,
            now: now(),
        },
    );
    assert_eq!(state.console.active_section(), SectionId::Contact);
    dispatch(
        &mut state,
        DesktopAction::NavigateSection {
            delta: 1,
            now: now(),
        },
    );
    assert_eq!(state.console.active_section(), SectionId::Home);
    assert_eq!(
        payloads(&state).last(),
        Some(&OutputPayload::Section {
            section: SectionId::Home
        })
    );
}

#[test]
fn closed_console_rejects_submission() {
    let mut state = booted();
    dispatch(&mut state, DesktopAction::CloseConsole);
    assert_eq!(
        reduce_desktop(
            &mut state,
            DesktopAction::SubmitInput { now: now() }
        ),
        Err(ReducerError::ConsoleNotVisible)
    );
}
