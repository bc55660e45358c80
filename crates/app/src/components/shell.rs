use dioxus::prelude::*;
use directory::{EmployeeFetchService, RandomChoices, UserSource};
use shared_types::{Employee, FetchError, MenuModel};

use super::DashboardLayout;
use crate::state::DashboardState;

/// Owns the dashboard state and kicks off the one directory fetch per mount.
///
/// State starts out loading, so nothing is written before the fetch resolves.
#[component]
pub fn DashboardShell<S: UserSource + Clone + PartialEq + 'static>(source: S) -> Element {
    let menu = use_context::<MenuModel>();
    let state = use_signal(DashboardState::new);

    // Scope-owned task: dropped with the shell, so a late result never lands.
    use_hook(move || {
        spawn(async move {
            let service = EmployeeFetchService::new(source);
            let outcome = service.fetch_all(&mut RandomChoices::thread_local()).await;
            apply_outcome(state, outcome);
        });
    });

    rsx! {
        DashboardLayout { state, menu }
    }
}

fn apply_outcome(mut state: Signal<DashboardState>, outcome: Result<Vec<Employee>, FetchError>) {
    let Ok(mut state) = state.try_write() else {
        tracing::warn!("Dashboard went away before the directory finished loading");
        return;
    };
    state.finish_load(outcome);
    if let Some(err) = state.last_error() {
        tracing::error!(error = %err, "Failed to load employee directory");
    }
}
