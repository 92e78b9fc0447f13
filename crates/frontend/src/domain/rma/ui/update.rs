use contracts::rma::{RmaCreateRequest, RmaSearchRequest, RmaUpdateWithStockRequest};
use contracts::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::shared::api::rma;
use crate::shared::components::{AlertService, Column, DataTable, RowKey};
use crate::shared::date_utils::format_date_for_input;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

fn field_text(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn field_date(record: &Record, key: &str) -> String {
    let raw = field_text(record, key);
    if raw.is_empty() {
        raw
    } else {
        format_date_for_input(&raw)
    }
}

fn form_from_record(product_type: String, record: &Record) -> RmaCreateRequest {
    RmaCreateRequest {
        product_type,
        serial_no: field_text(record, "Serial_No"),
        rma_no: field_text(record, "Rma_No"),
        customer_name: field_text(record, "Customer_Name"),
        pn: field_text(record, "PN"),
        sku: field_text(record, "SKU"),
        product_name: field_text(record, "Product_Name"),
        sell_ship_date: field_date(record, "Sell_Ship_Date"),
        create_date: field_date(record, "Create_Date"),
        return_date: field_date(record, "Return_Date"),
        failure_desc: field_text(record, "Failure_desc"),
        vi_damage_status: field_text(record, "VI_Damage_Status"),
        test_result_desc: field_text(record, "Test_Result_Desc"),
        replacement_sn_in_tw: field_text(record, "Replacement_SN_in_TW"),
        replacement_pn_in_tw: field_text(record, "Replacement_PN_in_TW"),
        replacement_sku_in_tw: field_text(record, "Replacement_SKU_in_TW"),
        replacement_sn_from_hk: field_text(record, "Replacement_SN_from_HK"),
        replacement_pn_from_hk: field_text(record, "Replacement_PN_from_HK"),
        replacement_sku_from_hk: field_text(record, "Replacement_SKU_from_HK"),
        rma_board_test_result: field_text(record, "RMA_board_Test_Result"),
        end_user_invoice_date: field_date(record, "End_user_invoice_date"),
        warranty_until: field_date(record, "Warranty_Until"),
        remark: field_text(record, "Remark"),
    }
}

/// Columns of the candidate replacement stock table. The first data
/// column keeps the legacy backend spelling.
fn stock_columns() -> Vec<Column> {
    vec![
        Column::new("Prodcut_name", "Product name").width("15%"),
        Column::new("PN", "P/N").width("15%"),
        Column::new("SKU", "SKU#").width("12%"),
        Column::new("Serial_No", "S/N").width("15%"),
    ]
}

#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional, default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="current-data-item">
            <label>{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn DataUpdatePage() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not found in context");

    let (product_lines, set_product_lines) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (mode, set_mode) = signal(Mode::Create);

    let (search_product_type, set_search_product_type) = signal(String::new());
    let (search_serial_no, set_search_serial_no) = signal(String::new());
    let (search_pn, set_search_pn) = signal(String::new());
    let (search_sku, set_search_sku) = signal(String::new());

    let form = RwSignal::new(RmaCreateRequest::default());
    let stock_rows = RwSignal::new(Vec::<Value>::new());
    // Most recently picked stock serial; feeds the replacement fields
    // and `stock_serial_no_to_delete` on update.
    let (selected_stock, set_selected_stock) = signal(Option::<String>::None);

    spawn_local(async move {
        match rma::fetch_product_lines().await {
            Ok(lines) => set_product_lines.set(lines),
            Err(e) => alerts.error(format!("Failed to load product lines: {e}")),
        }
    });

    // Field accessors take fn pointers so they stay Copy.
    let field = move |get: fn(&RmaCreateRequest) -> &String| {
        Signal::derive(move || form.with(|r| get(r).clone()))
    };
    let setter = move |set: fn(&mut RmaCreateRequest, String)| {
        Callback::new(move |v: String| form.update(|r| set(r, v)))
    };

    let opt = |s: String| {
        let trimmed = s.trim().to_string();
        (!trimmed.is_empty()).then_some(trimmed)
    };

    let search_for_update = move |_| {
        let selected = search_product_type.get_untracked();
        if selected.trim().is_empty() {
            alerts.warning("Select a product line first");
            return;
        }

        let request = RmaSearchRequest {
            product_type: selected.clone(),
            serial_no: opt(search_serial_no.get_untracked()),
            pn: opt(search_pn.get_untracked()),
            sku: opt(search_sku.get_untracked()),
            ..Default::default()
        };

        set_loading.set(true);
        spawn_local(async move {
            match rma::search_for_update(&request).await {
                Ok(result) => {
                    if result.success {
                        stock_rows.set(
                            result
                                .stock_records
                                .into_iter()
                                .map(Value::Object)
                                .collect(),
                        );
                        set_selected_stock.set(None);

                        if let Some(record) = result.rma_record {
                            form.set(form_from_record(selected, &record));
                            set_mode.set(Mode::Update);
                        } else {
                            form.set(RmaCreateRequest {
                                product_type: selected,
                                ..Default::default()
                            });
                            set_mode.set(Mode::Create);
                        }
                        alerts.success(result.message);
                    } else {
                        alerts.error(result.message);
                    }
                }
                Err(e) => alerts.error(format!("Search failed: {e}")),
            }
            set_loading.set(false);
        });
    };

    let handle_stock_selection = Callback::new(move |keys: Vec<RowKey>| {
        let latest = keys.last().map(|key| key.to_string());
        set_selected_stock.set(latest);
    });

    let replace_with_stock = move |_| {
        let Some(serial) = selected_stock.get_untracked() else {
            return;
        };
        let stock = stock_rows.with_untracked(|rows| {
            rows.iter()
                .find(|row| row.get("Serial_No").and_then(Value::as_str) == Some(serial.as_str()))
                .cloned()
        });
        if let Some(Value::Object(stock)) = stock {
            form.update(|r| {
                r.replacement_sn_in_tw = field_text(&stock, "Serial_No");
                r.replacement_pn_in_tw = field_text(&stock, "PN");
                r.replacement_sku_in_tw = field_text(&stock, "SKU");
            });
            alerts.info("Replacement fields filled, press Update to save");
        }
    };

    let can_submit = move || {
        form.with(|r| !r.serial_no.trim().is_empty() && !r.product_type.trim().is_empty())
    };

    let create_record = move |_| {
        let request = form.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            match rma::create(&request).await {
                Ok(result) => {
                    if result.success {
                        alerts.success(result.message);
                        set_mode.set(Mode::Update);
                    } else {
                        alerts.error(result.message);
                    }
                }
                Err(e) => alerts.error(format!("Create failed: {e}")),
            }
            set_loading.set(false);
        });
    };

    let update_record = move |_| {
        let stock_to_delete = selected_stock.get_untracked();
        let request = RmaUpdateWithStockRequest {
            record: form.get_untracked(),
            stock_serial_no_to_delete: stock_to_delete.clone(),
        };
        set_loading.set(true);
        spawn_local(async move {
            match rma::update(&request).await {
                Ok(result) => {
                    if result.success {
                        alerts.success(result.message);
                        // The consumed stock row is gone on the backend.
                        if let Some(serial) = stock_to_delete {
                            stock_rows.update(|rows| {
                                rows.retain(|row| {
                                    row.get("Serial_No").and_then(Value::as_str)
                                        != Some(serial.as_str())
                                });
                            });
                            set_selected_stock.set(None);
                        }
                    } else {
                        alerts.error(result.message);
                    }
                }
                Err(e) => alerts.error(format!("Update failed: {e}")),
            }
            set_loading.set(false);
        });
    };

    let serial_disabled = Signal::derive(move || loading.get() || mode.get() == Mode::Update);
    let loading_sig: Signal<bool> = loading.into();

    view! {
        <div class="data-update-page">
            <h2>"Data Update"</h2>

            <div class="query-form">
                <div class="form-group">
                    <label>"S/N:"</label>
                    <input
                        type="text"
                        placeholder="Serial number"
                        prop:value=move || search_serial_no.get()
                        on:input=move |ev| set_search_serial_no.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"P/N:"</label>
                    <input
                        type="text"
                        placeholder="Part number"
                        prop:value=move || search_pn.get()
                        on:input=move |ev| set_search_pn.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"SKU#:"</label>
                    <input
                        type="text"
                        placeholder="SKU"
                        prop:value=move || search_sku.get()
                        on:input=move |ev| set_search_sku.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Product line:"</label>
                    <select
                        prop:value=move || search_product_type.get()
                        on:change=move |ev| set_search_product_type.set(event_target_value(&ev))
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
                <button
                    class="button"
                    disabled=move || loading.get() || search_product_type.get().trim().is_empty()
                    on:click=search_for_update
                >
                    "Search"
                </button>
            </div>

            <div class="current-data">
                <h3>"RMA Record"</h3>
                <div class="current-data-content">
                    <FormField
                        label="Rma No:"
                        value=field(|r| &r.rma_no)
                        on_input=setter(|r, v| r.rma_no = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Customer Name:"
                        value=field(|r| &r.customer_name)
                        on_input=setter(|r, v| r.customer_name = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Serial No:"
                        value=field(|r| &r.serial_no)
                        on_input=setter(|r, v| r.serial_no = v)
                        disabled=serial_disabled
                    />
                    <FormField
                        label="Part No:"
                        value=field(|r| &r.pn)
                        on_input=setter(|r, v| r.pn = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="SKU#:"
                        value=field(|r| &r.sku)
                        on_input=setter(|r, v| r.sku = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Product Name:"
                        value=field(|r| &r.product_name)
                        on_input=setter(|r, v| r.product_name = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Sell/Ship Date:"
                        value=field(|r| &r.sell_ship_date)
                        on_input=setter(|r, v| r.sell_ship_date = v)
                        disabled=loading_sig
                        input_type="date"
                    />
                    <FormField
                        label="Create Date:"
                        value=field(|r| &r.create_date)
                        on_input=setter(|r, v| r.create_date = v)
                        disabled=loading_sig
                        input_type="date"
                    />
                    <FormField
                        label="Return Date:"
                        value=field(|r| &r.return_date)
                        on_input=setter(|r, v| r.return_date = v)
                        disabled=loading_sig
                        input_type="date"
                    />
                    <FormField
                        label="Failure desc:"
                        value=field(|r| &r.failure_desc)
                        on_input=setter(|r, v| r.failure_desc = v)
                        disabled=loading_sig
                    />
                    <div class="current-data-item">
                        <label>"VI Damage Status:"</label>
                        <select
                            prop:value=move || form.with(|r| r.vi_damage_status.clone())
                            disabled=move || loading.get()
                            on:change=move |ev| {
                                form.update(|r| r.vi_damage_status = event_target_value(&ev))
                            }
                        >
                            <option value="">"Select"</option>
                            <option value="Yes">"Yes"</option>
                            <option value="No">"No"</option>
                        </select>
                    </div>
                    <FormField
                        label="Test Result Desc:"
                        value=field(|r| &r.test_result_desc)
                        on_input=setter(|r, v| r.test_result_desc = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Replacement SN in TW:"
                        value=field(|r| &r.replacement_sn_in_tw)
                        on_input=setter(|r, v| r.replacement_sn_in_tw = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Replacement PN in TW:"
                        value=field(|r| &r.replacement_pn_in_tw)
                        on_input=setter(|r, v| r.replacement_pn_in_tw = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Replacement SKU# in TW:"
                        value=field(|r| &r.replacement_sku_in_tw)
                        on_input=setter(|r, v| r.replacement_sku_in_tw = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Replacement SN from HK:"
                        value=field(|r| &r.replacement_sn_from_hk)
                        on_input=setter(|r, v| r.replacement_sn_from_hk = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Replacement PN from HK:"
                        value=field(|r| &r.replacement_pn_from_hk)
                        on_input=setter(|r, v| r.replacement_pn_from_hk = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="Replacement SKU# from HK:"
                        value=field(|r| &r.replacement_sku_from_hk)
                        on_input=setter(|r, v| r.replacement_sku_from_hk = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="RMA board Test Result:"
                        value=field(|r| &r.rma_board_test_result)
                        on_input=setter(|r, v| r.rma_board_test_result = v)
                        disabled=loading_sig
                    />
                    <FormField
                        label="End user invoice date:"
                        value=field(|r| &r.end_user_invoice_date)
                        on_input=setter(|r, v| r.end_user_invoice_date = v)
                        disabled=loading_sig
                        input_type="date"
                    />
                    <FormField
                        label="Warranty Until:"
                        value=field(|r| &r.warranty_until)
                        on_input=setter(|r, v| r.warranty_until = v)
                        disabled=loading_sig
                        input_type="date"
                    />
                    <FormField
                        label="Remark:"
                        value=field(|r| &r.remark)
                        on_input=setter(|r, v| r.remark = v)
                        disabled=loading_sig
                    />
                    <div class="current-data-item">
                        <label>"Product line:"</label>
                        <select
                            prop:value=move || form.with(|r| r.product_type.clone())
                            disabled=move || loading.get()
                            on:change=move |ev| {
                                form.update(|r| r.product_type = event_target_value(&ev))
                            }
                        >
                            <option value="">"Select a product line"</option>
                            {move || {
                                product_lines
                                    .get()
                                    .into_iter()
                                    .map(|line| {
                                        view! { <option value=line.clone()>{line.clone()}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </div>
                <button
                    class="add-btn"
                    disabled=move || !can_submit() || loading.get() || mode.get() != Mode::Create
                    on:click=create_record
                >
                    "Create"
                </button>
                <button
                    class="setup-btn"
                    disabled=move || !can_submit() || loading.get() || mode.get() != Mode::Update
                    on:click=update_record
                >
                    "Update"
                </button>
            </div>

            <div class="replacement-section">
                <h3>"Stock"</h3>
                <DataTable
                    columns=stock_columns()
                    rows=stock_rows
                    loading=loading
                    selectable=true
                    sortable=false
                    on_selection_change=handle_stock_selection
                />
                <button
                    class="update-btn"
                    disabled=move || selected_stock.get().is_none() || loading.get()
                    on:click=replace_with_stock
                >
                    "Replace"
                </button>
            </div>
        </div>
    }
}
