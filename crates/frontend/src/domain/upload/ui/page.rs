use leptos::prelude::*;

use super::FileListPanel;
use crate::shared::components::UploadWidget;

#[component]
pub fn FileUploadPage() -> impl IntoView {
    let (reload, set_reload) = signal(0u32);

    let handle_uploaded = Callback::new(move |_| {
        set_reload.update(|n| *n += 1);
    });

    view! {
        <div class="file-upload-page">
            <h2>"File Upload"</h2>

            <div class="operation-guide">
                <div class="guide-content">
                    <h3>"How it works"</h3>
                    <p>"1. Upload Excel files, they land in the backend data/ folder"</p>
                    <p>
                        "2. Name files {product line}_RMA_record.xlsx and {product line}_buffer_stock.xlsx"
                    </p>
                    <p>"3. Run them from the Batch Execution page"</p>
                </div>
            </div>

            <div class="file-upload-section">
                <h3>"Upload"</h3>
                <UploadWidget accept=".xlsx,.xls" on_uploaded=handle_uploaded />
                <FileListPanel reload=reload />
            </div>
        </div>
    }
}
