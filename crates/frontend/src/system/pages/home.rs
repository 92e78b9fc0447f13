use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="welcome-banner">
                <div class="banner-content">
                    <h1 class="system-title">
                        <span class="logo-text">"SAPPHIRE"</span>
                        <span class="subtitle">"RMA Control System"</span>
                    </h1>
                    <p class="system-description">
                        "Repair-record tracking and buffer-stock management for the RMA workflow"
                    </p>
                    <div class="version-badge">"Version 1.0.0"</div>
                </div>
                <div class="banner-illustration">
                    <div class="feature-icon">"\u{1F3E0}"</div>
                </div>
            </div>
        </div>
    }
}
