//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the content
//! loaded at startup. UI composition stays in [`crate::components`].

use leptos::*;
use portfolio_content::{ProfileContent, ProjectCatalog};

use crate::{
    config::DesktopConfig,
    effect_executor,
    host::DesktopHostContext,
    layout::initial_desktop_state,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Environment queries and effect execution.
    pub host: StoredValue<DesktopHostContext>,
    /// Canvas and window-manager tuning.
    pub config: StoredValue<DesktopConfig>,
    /// Project records and media galleries.
    pub catalog: StoredValue<ProjectCatalog>,
    /// Profile window content; `None` when the bundled content failed to decode.
    pub profile: StoredValue<Option<ProfileContent>>,
    /// Reactive window collection signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive drag/cooldown interaction signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current browser viewport in logical canvas units.
    pub fn logical_viewport(&self) -> crate::model::WindowRect {
        let design_width = self.config.with_value(|config| config.design_width);
        self.host.get_value().logical_viewport_rect(design_width)
    }
}

fn load_config() -> DesktopConfig {
    DesktopConfig::bundled().unwrap_or_else(|err| {
        logging::warn!("desktop config unavailable, using defaults: {err}");
        DesktopConfig::default()
    })
}

fn load_catalog() -> ProjectCatalog {
    portfolio_content::load_catalog().unwrap_or_else(|err| {
        logging::warn!("project catalog unavailable, showing no projects: {err}");
        ProjectCatalog::default()
    })
}

fn load_profile() -> Option<ProfileContent> {
    portfolio_content::load_profile()
        .map_err(|err| logging::warn!("profile content unavailable: {err}"))
        .ok()
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and builds the initial layout.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let config = load_config();
    let catalog = load_catalog();
    let state = create_rw_signal(initial_desktop_state(&catalog, &config));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let config = store_value(config);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects =
            config.with_value(|config| reduce_desktop(&mut desktop, &mut ui, config, action));
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host: store_value(DesktopHostContext),
        config,
        catalog: store_value(catalog),
        profile: store_value(load_profile()),
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
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
