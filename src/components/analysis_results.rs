//! Results view for the current analysis.
//!
//! Shows the analyzed photo, meal totals and the per-item breakdown, with a
//! save button at the bottom.

use leptos::prelude::*;

use crate::components::food_item_list::FoodItemList;
use crate::components::nutrition_totals::NutritionTotalsPanel;
use crate::format;
use crate::models::AnalysisResult;

#[component]
pub fn AnalysisResults(
    result: AnalysisResult,
    /// Resolved URL of the analyzed photo.
    #[prop(into)]
    image_src: String,
    #[prop(into)] saving: Signal<bool>,
    /// Bound once by the page; the button here is recreated on every render.
    on_save: Callback<()>,
) -> impl IntoView {
    let meal_label = format::meal_type_label(&result.meal_type);

    view! {
        <div class="analysis-results">
            <style>{include_str!("analysis_results.css")}</style>

            <div class="results-header">
                <img src=image_src class="preview-image" alt="Analyzed meal" />
                <div class="results-title">
                    <span class="meal-type-badge">{meal_label}</span>
                    <h3>"Nutrition Breakdown"</h3>
                </div>
            </div>

            <NutritionTotalsPanel totals=result.totals title="Meal Totals" />

            <div class="items-section">
                <h3>"Food Items"</h3>
                <FoodItemList items=result.items.clone() />
            </div>

            <div class="action-buttons">
                <button
                    class="btn btn-primary save-meal-btn"
                    on:click=move |_| on_save.run(())
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save to History" }}
                </button>
            </div>
        </div>
    }
}
