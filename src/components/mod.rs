pub mod analysis_results;
pub mod error_panel;
pub mod food_item_list;
pub mod meal_card;
pub mod nav;
pub mod nutrient_stat;
pub mod nutrition_totals;
