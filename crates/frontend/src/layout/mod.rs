pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use crate::shared::components::MessageAlert;
use header::Header;
use sidebar::Sidebar;

/// Application frame: header bar, navigation sidebar and the routed page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Header />
            <div class="app-shell__body">
                <Sidebar />
                <main class="app-shell__content">{children()}</main>
            </div>
            <MessageAlert />
        </div>
    }
}
