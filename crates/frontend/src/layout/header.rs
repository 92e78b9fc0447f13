use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::api::batch;

fn current_time_text() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date(),
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

#[component]
pub fn Header() -> impl IntoView {
    let (is_online, set_is_online) = signal(true);
    let (is_refreshing, set_is_refreshing) = signal(false);
    let (current_time, set_current_time) = signal(current_time_text());

    let check_status = move || {
        set_is_refreshing.set(true);
        spawn_local(async move {
            match batch::health().await {
                Ok(health) => set_is_online.set(health.status == "UP"),
                Err(e) => {
                    log::warn!("health check failed: {e}");
                    set_is_online.set(false);
                }
            }
            set_is_refreshing.set(false);
        });
    };

    check_status();

    // Dropped with the component, which cancels the interval.
    let _clock = StoredValue::new_local(Interval::new(1000, move || {
        set_current_time.set(current_time_text());
    }));

    view! {
        <header class="header">
            <A href="/" attr:class="logo">
                "SAPPHIRE"
            </A>
            <h1>"Sapphire RMA Control"</h1>
            <div class="header-tools">
                <div class=move || {
                    if is_online.get() {
                        "system-status online"
                    } else {
                        "system-status offline"
                    }
                }>
                    <span class="status-dot"></span>
                    <span class="status-text">
                        {move || if is_online.get() { "System online" } else { "System offline" }}
                    </span>
                </div>
                <button
                    class="refresh-btn"
                    title="Refresh system status"
                    disabled=move || is_refreshing.get()
                    on:click=move |_| check_status()
                >
                    {move || if is_refreshing.get() { "\u{27F3}" } else { "\u{21BB}" }}
                </button>
                <div class="system-time">{move || current_time.get()}</div>
            </div>
        </header>
    }
}
