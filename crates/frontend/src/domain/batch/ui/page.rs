use contracts::batch::{BatchResult, BatchStats};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::upload::ui::FileListPanel;
use crate::shared::api::batch;
use crate::shared::components::{AlertService, UploadWidget};

#[component]
fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] css_class: String,
    stats: BatchStats,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", css_class)>
            <div class="stat-header">
                <h5>{title}</h5>
            </div>
            <div class="stat-number">{stats.total}</div>
            <div class="stat-label">"Records processed"</div>
            <div class="stat-breakdown">
                <span class="stat-item">
                    <span class="stat-tag new">"Inserted"</span>
                    {stats.inserted}
                </span>
                <span class="stat-item">
                    <span class="stat-tag update">"Updated"</span>
                    {stats.updated}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn BatchExecutionPage() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not found in context");

    let (product_lines, set_product_lines) = signal(Vec::<String>::new());
    let (selected_product_line, set_selected_product_line) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (batch_loading, set_batch_loading) = signal(false);
    let batch_result = RwSignal::new(Option::<BatchResult>::None);
    let (last_execution, set_last_execution) = signal(Option::<String>::None);
    let (execution_seconds, set_execution_seconds) = signal(Option::<u64>::None);
    let (reload_files, set_reload_files) = signal(0u32);

    let load_product_lines = move || {
        set_loading.set(true);
        spawn_local(async move {
            match batch::fetch_product_lines().await {
                Ok(lines) => {
                    if lines.is_empty() {
                        alerts.warning("No product lines found, initialize them first");
                    }
                    set_product_lines.set(lines);
                }
                Err(e) => alerts.error(format!("Failed to load product lines: {e}")),
            }
            set_loading.set(false);
        });
    };

    load_product_lines();

    let execute_batch = move |_| {
        let product_line = selected_product_line.get_untracked();
        if product_line.trim().is_empty() {
            alerts.warning("Select a product line first");
            return;
        }

        set_batch_loading.set(true);
        batch_result.set(None);
        let started = js_sys::Date::now();

        spawn_local(async move {
            match batch::execute(&product_line).await {
                Ok(result) => {
                    if result.success {
                        alerts.success(result.message.clone());
                    } else {
                        alerts.error(result.message.clone());
                    }
                    batch_result.set(Some(result));
                    let date = js_sys::Date::new_0();
                    set_last_execution.set(Some(format!(
                        "{:04}/{:02}/{:02} {:02}:{:02}",
                        date.get_full_year(),
                        date.get_month() + 1,
                        date.get_date(),
                        date.get_hours(),
                        date.get_minutes()
                    )));
                    set_execution_seconds
                        .set(Some(((js_sys::Date::now() - started) / 1000.0).round() as u64));
                }
                Err(e) => alerts.error(format!("Batch execution failed: {e}")),
            }
            set_batch_loading.set(false);
        });
    };

    let check_health = move |_| {
        spawn_local(async move {
            match batch::health().await {
                Ok(health) => {
                    if health.status == "UP" {
                        alerts.success(format!(
                            "Service healthy, {} product lines",
                            health.product_line_count
                        ));
                    } else {
                        alerts.warning(health.message);
                    }
                }
                Err(e) => alerts.error(format!("Health check failed: {e}")),
            }
        });
    };

    let init_product_lines = move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match batch::init_product_lines().await {
                Ok(result) => {
                    if result.success {
                        alerts.success(result.message);
                        set_product_lines.set(result.product_lines);
                    } else {
                        alerts.error(result.message);
                    }
                }
                Err(e) => alerts.error(format!("Init failed: {e}")),
            }
            set_loading.set(false);
        });
    };

    let handle_uploaded = Callback::new(move |_| {
        set_reload_files.update(|n| *n += 1);
    });

    view! {
        <div class="batch-execution-page">
            <h2>"Batch Execution"</h2>

            <div class="operation-guide">
                <div class="guide-icon">"\u{1F4CB}"</div>
                <div class="guide-content">
                    <h3>"How it works"</h3>
                    <p>"1. Upload Excel files, or drop them into the backend data/ folder"</p>
                    <p>
                        "2. Name files {product line}_RMA_record.xlsx and {product line}_buffer_stock.xlsx"
                    </p>
                    <p>"3. Pick the product line to process"</p>
                    <p>"4. Press Run batch"</p>
                </div>
            </div>

            <div class="file-upload-section">
                <h3>"File Upload"</h3>
                <UploadWidget accept=".xlsx,.xls" on_uploaded=handle_uploaded />
                <FileListPanel reload=reload_files />
            </div>

            <div class="batch-controls">
                <div class="control-group">
                    <label for="productLine">"Product line:"</label>
                    <select
                        id="productLine"
                        class="product-select"
                        disabled=move || batch_loading.get()
                        prop:value=move || selected_product_line.get()
                        on:change=move |ev| set_selected_product_line.set(event_target_value(&ev))
                    >
                        <option value="">"Select a product line"</option>
                        {move || {
                            product_lines
                                .get()
                                .into_iter()
                                .map(|line| view! { <option value=line.clone()>{line.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="control-buttons">
                    <button
                        class="btn btn-primary batch-btn"
                        disabled=move || {
                            batch_loading.get()
                                || selected_product_line.get().trim().is_empty()
                        }
                        on:click=execute_batch
                    >
                        {move || if batch_loading.get() { "Processing..." } else { "Run batch" }}
                    </button>
                    <button
                        class="btn btn-secondary"
                        disabled=move || loading.get()
                        on:click=check_health
                    >
                        "Health check"
                    </button>
                    <button
                        class="btn btn-info"
                        disabled=move || loading.get()
                        on:click=move |_| load_product_lines()
                    >
                        {move || if loading.get() { "Loading..." } else { "Reload" }}
                    </button>
                </div>
            </div>

            <div class="system-status-panel">
                <div class="status-item">
                    <span class="status-label">"Product lines:"</span>
                    <span class="status-value">{move || product_lines.get().len()}</span>
                </div>
                <div class="status-item">
                    <span class="status-label">"Last run:"</span>
                    <span class="status-value">
                        {move || last_execution.get().unwrap_or_else(|| "never".to_string())}
                    </span>
                </div>
            </div>

            {move || {
                batch_result
                    .get()
                    .map(|result| {
                        let details = (result.success && result.has_detailed_stats())
                            .then(|| {
                                let rma = result.rma_stats.clone();
                                let stock = result.stock_stats.clone();
                                let total = result.total_processed();
                                let duration = execution_seconds.get_untracked();
                                view! {
                                    <div class="result-details">
                                        <h4>{format!("{} details", result.product_type)}</h4>
                                        <div class="stats-grid">
                                            {rma
                                                .map(|stats| {
                                                    view! {
                                                        <StatCard
                                                            title="RMA records"
                                                            css_class="rma-stats"
                                                            stats=stats
                                                        />
                                                    }
                                                })}
                                            {stock
                                                .map(|stats| {
                                                    view! {
                                                        <StatCard
                                                            title="Stock records"
                                                            css_class="stock-stats"
                                                            stats=stats
                                                        />
                                                    }
                                                })}
                                        </div>
                                        <div class="total-summary">
                                            <strong>{format!("Total processed: {total}")}</strong>
                                            {duration
                                                .map(|secs| {
                                                    view! { <small>{format!("Took {secs} s")}</small> }
                                                })}
                                        </div>
                                    </div>
                                }
                            });
                        let header_class = if result.success {
                            "result-success"
                        } else {
                            "result-error"
                        };
                        view! {
                            <div class="result-section">
                                <h3>"Result"</h3>
                                <div class=header_class>
                                    <div class="result-header">
                                        <strong>{result.message.clone()}</strong>
                                    </div>
                                    {details}
                                </div>
                                <div class="result-actions">
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| batch_result.set(None)
                                    >
                                        "Clear result"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="product-line-management">
                <h3>"Product Lines"</h3>
                <div class="management-controls">
                    <button
                        class="btn btn-outline"
                        disabled=move || loading.get()
                        on:click=init_product_lines
                    >
                        "Initialize product lines"
                    </button>
                    <div class="product-line-list">
                        <span class="list-label">"Known product lines:"</span>
                        <div class="product-line-tags">
                            {move || {
                                let lines = product_lines.get();
                                if lines.is_empty() {
                                    view! { <span class="no-data">"none"</span> }.into_any()
                                } else {
                                    lines
                                        .into_iter()
                                        .map(|line| {
                                            let line_for_click = line.clone();
                                            let line_for_class = line.clone();
                                            view! {
                                                <span
                                                    class=move || {
                                                        if selected_product_line.get() == line_for_class {
                                                            "product-tag active"
                                                        } else {
                                                            "product-tag"
                                                        }
                                                    }
                                                    on:click=move |_| {
                                                        set_selected_product_line.set(line_for_click.clone())
                                                    }
                                                >
                                                    {line}
                                                </span>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
