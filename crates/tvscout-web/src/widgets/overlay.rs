//! Detail overlay: one parametrized modal used for episodes, cast and crew.
//!
//! Only overlays in the shown state are rendered. Closing one (close button
//! or a click outside the dialog) removes it from the session, which
//! detaches its nodes.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use tvscout_core::detail::DetailPanel;
use tvscout_core::session::Session;

/// Renders every visible overlay, oldest first.
#[component]
pub fn OverlayLayer() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <For
            each=move || {
                session
                    .with(|s| {
                        s.overlays()
                            .visible()
                            .map(|o| (o.id(), o.panel().clone()))
                            .collect::<Vec<_>>()
                    })
            }
            key=|(id, _): &(u64, DetailPanel)| *id
            children=move |(id, panel): (u64, DetailPanel)| view! { <DetailOverlay id panel /> }
        />
    }
}

#[component]
fn DetailOverlay(id: u64, panel: DetailPanel) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let close = move |_: MouseEvent| {
        session.update(|s| {
            if let Err(e) = s.close_overlay(id) {
                tracing::debug!(error = %e, "Overlay already closed");
            }
        });
    };

    let title = panel.title();
    let items = panel
        .lines
        .into_iter()
        .map(|line| view! { <li>{line}</li> })
        .collect::<Vec<_>>();

    view! {
        <div class="modal-backdrop fade show"></div>
        <div class="modal d-block" tabindex="-1" role="dialog" aria-modal="true" on:click=close>
            <div
                class="modal-dialog"
                role="document"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button type="button" class="close" aria-label="Close" on:click=close>
                            <span aria-hidden="true">"×"</span>
                        </button>
                    </div>
                    <div class="modal-body">
                        <ul>{items}</ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
