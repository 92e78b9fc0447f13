use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar">
            <nav class="sidebar-nav">
                <A href="/data-query" attr:class="nav-button">
                    <span class="nav-icon">"\u{1F50D}"</span>
                    <span class="nav-text">"Data Query"</span>
                </A>
                <A href="/data-update" attr:class="nav-button">
                    <span class="nav-icon">"\u{270F}"</span>
                    <span class="nav-text">"Data Update"</span>
                </A>
                <A href="/batch-execution" attr:class="nav-button">
                    <span class="nav-icon">"\u{26A1}"</span>
                    <span class="nav-text">"Batch Execution"</span>
                </A>
                <A href="/file-upload" attr:class="nav-button">
                    <span class="nav-icon">"\u{1F4C2}"</span>
                    <span class="nav-text">"File Upload"</span>
                </A>
            </nav>
            <div class="sidebar-divider"></div>
            <div class="version-info">
                <small>"v1.0.0"</small>
            </div>
        </div>
    }
}
