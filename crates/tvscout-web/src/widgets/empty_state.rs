use leptos::prelude::*;

/// A centered "nothing here" placeholder with title and subtitle.
#[component]
pub fn EmptyState(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="col-12 text-center text-muted my-5">
            <h5>{title}</h5>
            <p>{subtitle}</p>
        </div>
    }
}
