use leptos::prelude::*;

use crate::components::nutrient_stat::{Nutrient, NutrientStat};
use crate::models::NutritionTotals;

/// The five aggregate figures for a meal or a day.
#[component]
pub fn NutritionTotalsPanel(
    totals: NutritionTotals,
    #[prop(into)] title: String,
) -> impl IntoView {
    let stats = [
        (Nutrient::Calories, totals.total_calories),
        (Nutrient::Protein, totals.total_protein),
        (Nutrient::Carbs, totals.total_carbs),
        (Nutrient::Fat, totals.total_fat),
        (Nutrient::Fiber, totals.total_fiber),
    ];

    view! {
        <div class="nutrition-totals">
            <h3>{title}</h3>
            <div class="totals-grid">
                {stats.into_iter().map(|(nutrient, value)| view! {
                    <NutrientStat nutrient=nutrient value=value />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
