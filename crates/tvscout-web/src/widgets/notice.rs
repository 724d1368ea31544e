use std::time::Duration;

use leptos::prelude::*;
use tvscout_core::notice::{Notice, NoticeTarget, AUTO_DISMISS_SECS};
use tvscout_core::session::Session;

/// Notices anchored to one control.
#[component]
pub fn NoticeList(target: NoticeTarget) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <div class="notices w-100">
            <For
                each=move || {
                    session.with(|s| s.notices().for_target(target).cloned().collect::<Vec<_>>())
                }
                key=|notice: &Notice| notice.id
                children=move |notice: Notice| view! { <NoticeItem notice /> }
            />
        </div>
    }
}

#[component]
fn NoticeItem(notice: Notice) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let id = notice.id;
    let dismiss = move || {
        session.update(|s| {
            s.dismiss_notice(id);
        });
    };

    set_timeout(dismiss, Duration::from_secs(AUTO_DISMISS_SECS));

    view! {
        <div class="alert alert-danger py-1 px-2 mt-2 small" role="alert">
            {notice.message}
            <button type="button" class="close ml-2" aria-label="Dismiss" on:click=move |_| dismiss()>
                <span aria-hidden="true">"×"</span>
            </button>
        </div>
    }
}
