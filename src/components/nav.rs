use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <h1 class="navbar-title">"NutriSnap"</h1>
                <p class="navbar-subtitle">"Meal Nutrition Tracker"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Analyze"</a>
                </li>
                <li class="nav-item">
                    <a href="/history" class="nav-link">"History"</a>
                </li>
            </ul>
        </nav>
    }
}
