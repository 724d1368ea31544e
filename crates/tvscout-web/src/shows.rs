use leptos::prelude::*;
use tvscout_api::Show;
use tvscout_core::detail::DetailKind;
use tvscout_core::format::summary_text;
use tvscout_core::notice::NoticeTarget;
use tvscout_core::session::Session;

use crate::app::{open_details, WebOrchestrator};
use crate::widgets::empty_state::EmptyState;
use crate::widgets::notice::NoticeList;

/// The rendered result list, one card per show id.
#[component]
pub fn ShowList() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    // Overlay and notice updates also touch the session; only a new list
    // should re-run the keyed diff.
    let revision = Memo::new(move |_| session.with(Session::shows_revision));
    let empty = Memo::new(move |_| session.with(Session::is_empty_result));

    view! {
        <section class="row">
            <For
                each=move || {
                    revision.track();
                    session.with_untracked(|s| s.shows().to_vec())
                }
                key=|show: &Show| show.id
                children=move |show: Show| view! { <ShowCard show /> }
            />
            {move || {
                empty
                    .get()
                    .then(|| view! { <EmptyState title="No shows found" subtitle="Try a different title." /> })
            }}
        </section>
    }
}

/// One show. The action buttons capture the show id when the card is built.
#[component]
fn ShowCard(show: Show) -> impl IntoView {
    let orchestrator = expect_context::<WebOrchestrator>();
    let session = expect_context::<RwSignal<Session>>();
    let show_id = show.id;
    let summary = summary_text(&show.summary);

    let actions = DetailKind::ALL
        .iter()
        .copied()
        .map(|kind| {
            let orchestrator = orchestrator.clone();
            view! {
                <button
                    class="btn btn-primary btn-sm mr-1"
                    on:click=move |_| open_details(orchestrator.clone(), session, show_id, kind)
                >
                    {kind.title()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="col-md-12 col-lg-6 mb-4">
            <div class="media">
                <img class="w-25 mr-3" src=show.image alt=show.name.clone() />
                <div class="media-body">
                    <h5 class="text-primary">{show.name}</h5>
                    <div>
                        <small>{summary}</small>
                    </div>
                    <div>{actions}</div>
                    <NoticeList target=NoticeTarget::Show(show_id) />
                </div>
            </div>
        </article>
    }
}
