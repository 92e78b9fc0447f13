use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::batch::ui::BatchExecutionPage;
use crate::domain::rma::ui::{DataQueryPage, DataUpdatePage};
use crate::domain::upload::ui::FileUploadPage;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/data-query") view=DataQueryPage />
                    <Route path=path!("/data-update") view=DataUpdatePage />
                    <Route path=path!("/batch-execution") view=BatchExecutionPage />
                    <Route path=path!("/file-upload") view=FileUploadPage />
                </Routes>
            </Shell>
        </Router>
    }
}
