use leptos::prelude::*;

/// Inline spinner with an optional caption, used wherever a request is
/// in flight.
#[component]
pub fn LoadingSpinner(
    /// Caption shown next to the spinner; empty hides it.
    #[prop(optional, into)]
    text: String,
) -> impl IntoView {
    let caption = (!text.is_empty()).then(|| view! { <span class="spinner-text">{text}</span> });
    view! {
        <div class="loading-spinner-wrapper">
            <div class="loading-spinner"></div>
            {caption}
        </div>
    }
}
