use leptos::prelude::*;

/// Which kind of quantity a figure is, for formatting and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
}

impl Nutrient {
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
        }
    }

    /// Value with unit, e.g. "238 kcal" or "12.3g".
    pub fn display(self, value: f64) -> String {
        match self {
            Nutrient::Calories => format!("{} kcal", crate::format::format_energy(value)),
            _ => format!("{}g", crate::format::format_grams(value)),
        }
    }

    fn class(self) -> &'static str {
        match self {
            Nutrient::Calories => "nutrient-stat nutrient-calories",
            Nutrient::Protein => "nutrient-stat nutrient-protein",
            Nutrient::Carbs => "nutrient-stat nutrient-carbs",
            Nutrient::Fat => "nutrient-stat nutrient-fat",
            Nutrient::Fiber => "nutrient-stat nutrient-fiber",
        }
    }
}

#[component]
pub fn NutrientStat(
    nutrient: Nutrient,
    value: f64,
    /// Render as a small inline chip instead of a stat card
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let class = if compact {
        format!("{} compact", nutrient.class())
    } else {
        nutrient.class().to_string()
    };

    view! {
        <div class=class>
            <span class="nutrient-value">{nutrient.display(value)}</span>
            <span class="nutrient-label">{nutrient.label()}</span>
        </div>
    }
}
