use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::upload;
use crate::shared::components::AlertService;

/// Listing of the backend `data/` folder with refresh and per-file delete.
/// `reload` bumps force a re-fetch, so hosts can refresh the list after
/// an upload completes.
#[component]
pub fn FileListPanel(#[prop(into, optional)] reload: Signal<u32>) -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not found in context");

    let files = RwSignal::new(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let deleting = RwSignal::new(Vec::<String>::new());

    let refresh = move || {
        set_loading.set(true);
        spawn_local(async move {
            match upload::list_files().await {
                Ok(result) => files.set(result.files),
                Err(e) => alerts.error(format!("Failed to load file list: {e}")),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        reload.get();
        refresh();
    });

    let delete = move |filename: String| {
        deleting.update(|list| list.push(filename.clone()));
        spawn_local(async move {
            match upload::delete_file(&filename).await {
                Ok(result) => {
                    if result.success {
                        alerts.success(result.message);
                        files.update(|list| list.retain(|f| f != &filename));
                    } else {
                        alerts.error(result.message);
                    }
                }
                Err(e) => alerts.error(format!("Delete failed: {e}")),
            }
            deleting.update(|list| list.retain(|f| f != &filename));
        });
    };

    view! {
        <div class="file-list-section">
            <div class="file-list-header">
                <h4>"Files in data/"</h4>
                <button
                    class="btn btn-secondary btn-sm"
                    disabled=move || loading.get()
                    on:click=move |_| refresh()
                >
                    {move || if loading.get() { "\u{27F3}" } else { "Refresh" }}
                </button>
            </div>

            {move || {
                let list = files.get();
                if list.is_empty() {
                    view! {
                        <div class="no-files">
                            <div class="no-files-icon">"\u{1F4C1}"</div>
                            <p>"The data/ folder is empty"</p>
                            <p class="hint">"Upload Excel files to start batch processing"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="file-grid">
                            {list
                                .into_iter()
                                .map(|file| {
                                    let file_for_delete = file.clone();
                                    let file_for_busy = file.clone();
                                    let is_busy = move || {
                                        deleting.with(|d| d.contains(&file_for_busy))
                                    };
                                    view! {
                                        <div class="file-card">
                                            <div class="file-info">
                                                <span class="file-icon">"\u{1F4C4}"</span>
                                                <span class="file-name">{file}</span>
                                            </div>
                                            <button
                                                class="file-delete-btn"
                                                title="Delete file"
                                                disabled=is_busy
                                                on:click=move |_| delete(file_for_delete.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
