use leptos::prelude::*;

/// Failure panel that replaces the results area.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-state">
            <div class="error-message">
                <h3>"Analysis Failed"</h3>
                <p>{message}</p>
                <p class="error-hint">
                    "Make sure the photo is clear and well lit, and that the server has a valid GEMINI_API_KEY configured."
                </p>
            </div>
        </div>
    }
}
