//! Payload types exchanged with the analysis backend.

use serde::{Deserialize, Serialize};

/// The five aggregate nutrition figures shared by a single meal and a whole day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct NutritionTotals {
    #[serde(default)]
    pub total_calories: f64,
    #[serde(default)]
    pub total_protein: f64,
    #[serde(default)]
    pub total_carbs: f64,
    #[serde(default)]
    pub total_fat: f64,
    #[serde(default)]
    pub total_fiber: f64,
}

/// One recognized food on the plate.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FoodItem {
    pub name: String,
    /// Free-form estimate, e.g. "150g" or "2 slices".
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

/// Nutrition breakdown returned for one analyzed meal image.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub image_path: String,
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
    #[serde(default)]
    pub items: Vec<FoodItem>,
    #[serde(flatten)]
    pub totals: NutritionTotals,
    /// Set by the backend at analysis time; echoed back on save so the
    /// history page can show when the meal was logged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn default_meal_type() -> String {
    "snack".to_string()
}

/// A saved meal as returned by the daily history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MealEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(flatten)]
    pub meal: AnalysisResult,
}

/// All meals logged on one calendar date plus their sums.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DailyHistory {
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(flatten)]
    pub totals: NutritionTotals,
}

/// Dates that have saved meals, newest first.
///
/// The backend sorts descending already; construction re-sorts so callers can
/// rely on the first entry being the most recent date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateList(Vec<String>);

impl DateList {
    pub fn newest_first(mut dates: Vec<String>) -> Self {
        // ISO dates order lexicographically
        dates.sort_by(|a, b| b.cmp(a));
        DateList(dates)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn latest(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'de> Deserialize<'de> for DateList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer).map(DateList::newest_first)
    }
}

/// Body of a correction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReanalyzeRequest {
    pub image_path: String,
    pub meal_type: String,
    pub modifications: String,
}

/// Reply from the save endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveReceipt {
    #[serde(default)]
    pub success: bool,
    pub date: Option<String>,
    pub error: Option<String>,
}

/// Error body sent with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
