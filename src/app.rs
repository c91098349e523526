use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::nav::NavBar;
use crate::config::ClientConfig;
use crate::pages::analyze::AnalyzePage;
use crate::pages::history::HistoryPage;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    if !config.api_base.is_empty() {
        leptos::logging::log!("Using API base {}", config.api_base);
    }
    provide_context(ApiClient::new(&config));
    provide_context(config);

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=AnalyzePage />
                        <Route path=path!("/history") view=HistoryPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
