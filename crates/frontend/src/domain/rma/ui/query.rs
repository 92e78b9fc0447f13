use contracts::rma::RmaSearchRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::shared::api::rma;
use crate::shared::components::{AlertService, Column, DataTable};

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Column set of the RMA record table, in backend field order.
fn rma_columns() -> Vec<Column> {
    vec![
        Column::new("Rma_No", "RMA No"),
        Column::new("Customer_Name", "Customer Name"),
        Column::new("Serial_No", "Serial No"),
        Column::new("PN", "Part No"),
        Column::new("SKU", "SKU#"),
        Column::new("Product_Name", "Product Name"),
        Column::new("Sell_Ship_Date", "Sell/Ship Date").date(),
        Column::new("Create_Date", "Create Date").date(),
        Column::new("Return_Date", "Return Date").date(),
        Column::new("Failure_desc", "Failure Desc"),
        Column::new("VI_Damage_Status", "VI Damage Status"),
        Column::new("Test_Result_Desc", "Test Result Desc"),
        Column::new("Replacement_SN_in_TW", "Replacement SN in TW"),
        Column::new("Replacement_PN_in_TW", "Replacement PN in TW"),
        Column::new("Replacement_SKU_in_TW", "Replacement SKU# in TW"),
        Column::new("Replacement_SN_from_HK", "Replacement SN from HK"),
        Column::new("Replacement_PN_from_HK", "Replacement PN from HK"),
        Column::new("Replacement_SKU_from_HK", "Replacement SKU# from HK"),
        Column::new("RMA_board_Test_Result", "RMA board Test Result"),
        Column::new("End_user_invoice_date", "End user invoice date").date(),
        Column::new("Warranty_Until", "Warranty Until").date(),
        Column::new("Remark", "Remark"),
    ]
}

#[component]
pub fn DataQueryPage() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not found in context");

    let (product_lines, set_product_lines) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let rows = RwSignal::new(Vec::<Value>::new());

    let (product_type, set_product_type) = signal(String::new());
    let (serial_no, set_serial_no) = signal(String::new());
    let (pn, set_pn) = signal(String::new());
    let (sku, set_sku) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());

    spawn_local(async move {
        match rma::fetch_product_lines().await {
            Ok(lines) => set_product_lines.set(lines),
            Err(e) => alerts.error(format!("Failed to load product lines: {e}")),
        }
    });

    let search = move |_| {
        let selected = product_type.get_untracked();
        if selected.trim().is_empty() {
            alerts.warning("Select a product line first");
            return;
        }

        let request = RmaSearchRequest {
            product_type: selected,
            serial_no: opt(&serial_no.get_untracked()),
            pn: opt(&pn.get_untracked()),
            sku: opt(&sku.get_untracked()),
            start_date: opt(&start_date.get_untracked()),
            end_date: opt(&end_date.get_untracked()),
        };

        set_loading.set(true);
        spawn_local(async move {
            match rma::search(&request).await {
                Ok(result) => {
                    if result.success {
                        alerts.success(format!("Found {} records", result.total_count));
                        rows.set(result.rma_records.into_iter().map(Value::Object).collect());
                    } else {
                        alerts.error(result.message);
                        rows.set(Vec::new());
                    }
                }
                Err(e) => alerts.error(format!("Search failed: {e}")),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="data-query-page">
            <h2>"Data Query"</h2>

            <div class="query-form">
                <div class="form-group">
                    <label for="sn">"S/N (scannable):"</label>
                    <input
                        type="text"
                        id="sn"
                        prop:value=move || serial_no.get()
                        on:input=move |ev| set_serial_no.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="pn">"P/N (scannable):"</label>
                    <input
                        type="text"
                        id="pn"
                        prop:value=move || pn.get()
                        on:input=move |ev| set_pn.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="sku">"SKU# (scannable):"</label>
                    <input
                        type="text"
                        id="sku"
                        prop:value=move || sku.get()
                        on:input=move |ev| set_sku.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="product-line">"Product line:"</label>
                    <select
                        id="product-line"
                        prop:value=move || product_type.get()
                        on:change=move |ev| set_product_type.set(event_target_value(&ev))
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
                <div class="form-group label-block">
                    <label for="start-date">"Date range:"</label>
                    <input
                        type="date"
                        id="start-date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                    <span class="date-range-separator">"~"</span>
                    <input
                        type="date"
                        id="end-date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| set_end_date.set(event_target_value(&ev))
                    />
                </div>
                <button
                    class="button"
                    disabled=move || loading.get() || product_type.get().trim().is_empty()
                    on:click=search
                >
                    "Search"
                </button>
            </div>

            <h3>"RMA Record"</h3>
            <DataTable columns=rma_columns() rows=rows loading=loading />
        </div>
    }
}
