use leptos::prelude::*;

use crate::components::nutrient_stat::{Nutrient, NutrientStat};
use crate::models::FoodItem;

#[component]
pub fn FoodItemList(items: Vec<FoodItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="no-items">"No individual food items were identified."</p> }.into_any();
    }

    view! {
        <ul class="food-item-list">
            {items.into_iter().map(|item| view! { <FoodItemRow item=item /> }).collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
fn FoodItemRow(item: FoodItem) -> impl IntoView {
    view! {
        <li class="food-item">
            <div class="food-item-header">
                <span class="food-name">{item.name.clone()}</span>
                <span class="food-quantity">{item.quantity.clone()}</span>
            </div>
            <div class="food-item-macros">
                <NutrientStat nutrient=Nutrient::Calories value=item.calories compact=true />
                <NutrientStat nutrient=Nutrient::Protein value=item.protein compact=true />
                <NutrientStat nutrient=Nutrient::Carbs value=item.carbs compact=true />
                <NutrientStat nutrient=Nutrient::Fat value=item.fat compact=true />
                {item.fiber.map(|fiber| view! {
                    <NutrientStat nutrient=Nutrient::Fiber value=fiber compact=true />
                })}
            </div>
        </li>
    }
}
