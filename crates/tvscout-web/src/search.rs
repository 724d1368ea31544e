use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tvscout_core::notice::NoticeTarget;
use tvscout_core::orchestrator::SearchForm;
use tvscout_core::session::Session;

use crate::app::{perform_search, WebOrchestrator};
use crate::widgets::notice::NoticeList;

/// Search term plus optional result count.
#[component]
pub fn SearchBar() -> impl IntoView {
    let orchestrator = expect_context::<WebOrchestrator>();
    let session = expect_context::<RwSignal<Session>>();
    let term = RwSignal::new(String::new());
    let count = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SearchForm::new(term.get_untracked(), count.get_untracked());
        perform_search(orchestrator.clone(), session, form);
    };

    view! {
        <form class="form-inline mb-4" on:submit=on_submit>
            <input
                class="form-control mr-2"
                type="text"
                placeholder="Show title"
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
            <input
                class="form-control mr-2"
                type="number"
                min="1"
                max="250"
                placeholder="Results (100)"
                prop:value=move || count.get()
                on:input=move |ev| count.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" type="submit">"Search"</button>
            <NoticeList target=NoticeTarget::Search />
        </form>
    }
}
