//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the section
//! content provider. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use leptos::*;

use crate::{
    content::{PortfolioContent, SectionContentProvider},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, FrameConfig},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Browser queries and effect execution.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Section bodies rendered into the transcript.
    pub content: StoredValue<Rc<dyn SectionContentProvider>>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Window size limits; defaults to [`FrameConfig::default`].
    #[prop(optional)]
    config: Option<FrameConfig>,
    /// Section content; defaults to the built-in [`PortfolioContent`].
    #[prop(optional)]
    content: Option<Rc<dyn SectionContentProvider>>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let content: Rc<dyn SectionContentProvider> =
        content.unwrap_or_else(|| Rc::new(PortfolioContent::default()));

    let host = store_value(DesktopHostContext::new(config));
    let state = create_rw_signal(DesktopState::new(config));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let content = store_value(content);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        dispatch,
        content,
    };

    provide_context(runtime.clone());
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
