//! Drag-and-drop file upload widget.
//!
//! Accepts files from a drop zone or the native picker, sends each one
//! through [`crate::shared::api::upload`] and keeps a per-file status
//! list so the page can show what landed and what failed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;
use wasm_bindgen::JsCast;

use contracts::upload::UploadResponse;

use crate::shared::api::upload::upload_file;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Done,
    Failed(String),
}

impl UploadStatus {
    fn css_name(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "uploading",
            UploadStatus::Done => "done",
            UploadStatus::Failed(_) => "failed",
        }
    }

    fn label(&self) -> String {
        match self {
            UploadStatus::Uploading => "Uploading...".to_string(),
            UploadStatus::Done => "Uploaded".to_string(),
            UploadStatus::Failed(reason) => format!("Failed: {reason}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadEntry {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub status: UploadStatus,
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

#[component]
pub fn UploadWidget(
    /// Accept filter passed to the native file input, e.g. ".xlsx,.csv".
    #[prop(optional, into)]
    accept: Option<String>,
    /// Fired after every successful upload.
    #[prop(optional)]
    on_uploaded: Option<Callback<UploadResponse>>,
) -> impl IntoView {
    let entries = RwSignal::new(Vec::<UploadEntry>::new());
    let (is_dragging, set_is_dragging) = signal(false);

    let on_uploaded_sv = StoredValue::new_local(on_uploaded);

    let set_status = move |id: Uuid, status: UploadStatus| {
        entries.update(|list| {
            if let Some(entry) = list.iter_mut().find(|e| e.id == id) {
                entry.status = status;
            }
        });
    };

    let start_upload = move |file: web_sys::File| {
        let id = Uuid::new_v4();
        entries.update(|list| {
            list.push(UploadEntry {
                id,
                name: file.name(),
                size: file.size() as u64,
                status: UploadStatus::Uploading,
            });
        });

        spawn_local(async move {
            match upload_file(&file).await {
                Ok(response) => {
                    set_status(id, UploadStatus::Done);
                    if let Some(cb) = on_uploaded_sv.get_value() {
                        cb.run(response);
                    }
                }
                Err(e) => {
                    log::error!("upload of {} failed: {e}", file.name());
                    set_status(id, UploadStatus::Failed(e.to_string()));
                }
            }
        });
    };

    let handle_files = move |files: web_sys::FileList| {
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                start_upload(file);
            }
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(files) = input.files() {
                handle_files(files);
            }
            // Allow re-selecting the same file.
            input.set_value("");
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if let Some(transfer) = ev.data_transfer() {
            if let Some(files) = transfer.files() {
                handle_files(files);
            }
        }
    };

    let zone_class = move || {
        if is_dragging.get() {
            "upload-zone upload-zone--dragging"
        } else {
            "upload-zone"
        }
    };

    view! {
        <div class="upload-widget">
            <div
                class=zone_class
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_dragging.set(true);
                }
                on:dragleave=move |_| set_is_dragging.set(false)
                on:drop=handle_drop
            >
                <div class="upload-zone__icon">"\u{1F4C1}"</div>
                <div class="upload-zone__hint">"Drag files here, or"</div>
                <label class="button button--primary upload-zone__browse" for="upload-file-input">
                    "Browse files"
                </label>
                <input
                    id="upload-file-input"
                    type="file"
                    multiple=true
                    accept=accept.unwrap_or_default()
                    on:change=handle_file_select
                    class="hidden"
                />
            </div>

            {move || {
                let list = entries.get();
                (!list.is_empty())
                    .then(|| {
                        view! {
                            <ul class="upload-list">
                                {list
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <li class=format!(
                                                "upload-list__item upload-list__item--{}",
                                                entry.status.css_name(),
                                            )>
                                                <span class="upload-list__name">{entry.name}</span>
                                                <span class="upload-list__size">
                                                    {format_file_size(entry.size)}
                                                </span>
                                                <span class="upload-list__status">
                                                    {entry.status.label()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes_pick_a_sensible_unit() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn failed_status_carries_the_reason() {
        let status = UploadStatus::Failed("HTTP 500".to_string());
        assert_eq!(status.label(), "Failed: HTTP 500");
        assert_eq!(status.css_name(), "failed");
    }
}
