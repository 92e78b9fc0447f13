use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::components::AlertService;

#[component]
pub fn App() -> impl IntoView {
    // Provide the notification service to the whole app via context.
    provide_context(AlertService::new());

    view! {
        <AppRoutes />
    }
}
