use leptos::prelude::*;
use leptos::task::spawn_local;
use tvscout_api::TvMazeClient;
use tvscout_core::config::AppConfig;
use tvscout_core::detail::DetailKind;
use tvscout_core::orchestrator::{Orchestrator, SearchForm};
use tvscout_core::session::Session;

use crate::search::SearchBar;
use crate::shows::ShowList;
use crate::widgets::overlay::OverlayLayer;

/// The orchestrator the page runs against.
pub type WebOrchestrator = Orchestrator<TvMazeClient>;

/// Root component. Owns the session state and the orchestrator and hands
/// both to the rest of the tree through context.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(Orchestrator::from_config(&config));
    provide_context(RwSignal::new(Session::new()));

    view! {
        <main class="container">
            <h1 class="my-4">"TV Scout"</h1>
            <SearchBar />
            <ShowList />
            <OverlayLayer />
        </main>
    }
}

/// Run a search in the background and replace the rendered list with the
/// results (last completed search wins).
pub fn perform_search(orchestrator: WebOrchestrator, session: RwSignal<Session>, form: SearchForm) {
    spawn_local(async move {
        let outcome = orchestrator.perform_search(&form).await;
        session.update(|s| {
            s.apply_search(outcome);
        });
    });
}

/// Fetch one detail list of a show and open an overlay for it.
pub fn open_details(
    orchestrator: WebOrchestrator,
    session: RwSignal<Session>,
    show_id: u64,
    kind: DetailKind,
) {
    spawn_local(async move {
        let outcome = orchestrator.fetch_details(show_id, kind).await;
        session.update(|s| {
            if let Err(e) = s.apply_details(show_id, kind, outcome) {
                tracing::debug!(show_id, error = %e, "No overlay opened");
            }
        });
    });
}
