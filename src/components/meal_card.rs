//! One saved meal on the history page.

use leptos::prelude::*;

use crate::components::food_item_list::FoodItemList;
use crate::components::nutrient_stat::{Nutrient, NutrientStat};
use crate::format;
use crate::models::MealEntry;

#[component]
pub fn MealCard(
    entry: MealEntry,
    #[prop(into)] image_src: String,
) -> impl IntoView {
    let meal = entry.meal;
    let logged_at = format::format_time_of_day(&entry.timestamp);
    let calories = format::format_energy(meal.totals.total_calories);

    view! {
        <div class="meal-card">
            <style>{include_str!("meal_card.css")}</style>
            <div class="meal-card-header">
                <span class="meal-type-badge">{format::meal_type_label(&meal.meal_type)}</span>
                <span class="meal-time">{logged_at}</span>
            </div>
            <div class="meal-card-body">
                <img src=image_src class="meal-image" alt="Meal photo" />
                <div class="meal-summary">
                    <div class="meal-calories">
                        <span class="meal-calories-value">{calories}</span>
                        " kcal"
                    </div>
                    <div class="meal-macros">
                        <NutrientStat nutrient=Nutrient::Protein value=meal.totals.total_protein compact=true />
                        <NutrientStat nutrient=Nutrient::Carbs value=meal.totals.total_carbs compact=true />
                        <NutrientStat nutrient=Nutrient::Fat value=meal.totals.total_fat compact=true />
                        <NutrientStat nutrient=Nutrient::Fiber value=meal.totals.total_fiber compact=true />
                    </div>
                </div>
            </div>
            <FoodItemList items=meal.items />
        </div>
    }
}
