//! Meal history page: pick a date, see what was eaten and the day's totals.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::meal_card::MealCard;
use crate::components::nutrition_totals::NutritionTotalsPanel;
use crate::state::{DailyView, DateOptions, HistorySession};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let session = RwSignal::new(HistorySession::default());

    let dates = Memo::new(move |_| session.with(|s| s.dates().clone()));
    let daily = Memo::new(move |_| session.with(|s| s.daily().clone()));

    // Select a date and fetch its meals; an empty date just clears the view
    let api_daily = api.clone();
    let load_day = move |date: String| {
        let Some(Some(ticket)) = session.try_update(|s| s.begin_load(&date)) else {
            return;
        };
        let api = api_daily.clone();
        spawn_local(async move {
            let result = api.get_daily_data(&date).await;
            session.update(|s| {
                s.finish_load(ticket, result);
            });
        });
    };

    // Load available dates on mount, then the most recent one
    {
        let api = api.clone();
        let load_day = load_day.clone();
        spawn_local(async move {
            let result = api.get_all_dates().await;
            if let Some(Some(latest)) = session.try_update(|s| s.dates_loaded(result)) {
                load_day(latest);
            }
        });
    }

    let api_images = api.clone();

    view! {
        <div class="page history-page" id="history-page">
            <style>{include_str!("history.css")}</style>

            <h2>"Meal History"</h2>

            <div class="date-picker">
                <label for="history-date">"Date"</label>
                {move || match dates.get() {
                    DateOptions::Available(options) => {
                        let on_change = load_day.clone();
                        view! {
                            <select
                                id="history-date"
                                class="input"
                                on:change=move |ev| on_change(event_target_value(&ev))
                            >
                                <option
                                    value=""
                                    prop:selected=move || session.with(|s| s.selected().is_empty())
                                >
                                    "Select a date"
                                </option>
                                {options.into_iter().map(|date| {
                                    let this = date.clone();
                                    let label = date.clone();
                                    view! {
                                        <option
                                            value=date
                                            prop:selected=move || session.with(|s| s.selected() == this)
                                        >
                                            {label}
                                        </option>
                                    }
                                }).collect::<Vec<_>>()}
                            </select>
                        }.into_any()
                    }
                    DateOptions::Loading => view! {
                        <select id="history-date" class="input" disabled=true>
                            <option>"Loading dates..."</option>
                        </select>
                    }.into_any(),
                    DateOptions::Empty | DateOptions::Failed(_) => view! {
                        <select id="history-date" class="input" disabled=true>
                            <option>"No history available"</option>
                        </select>
                    }.into_any(),
                }}
            </div>

            {move || session.with(|s| s.date_label().map(str::to_string)).map(|label| view! {
                <h3 class="date-label">{label}</h3>
            })}

            <div class="meals-container">
                {move || match dates.get() {
                    DateOptions::Empty => view! {
                        <p class="history-empty">
                            "No meals saved yet. Analyze a meal and save it to start your history."
                        </p>
                    }.into_any(),
                    DateOptions::Failed(msg) => view! {
                        <p class="history-error">{format!("Error loading dates: {}", msg)}</p>
                    }.into_any(),
                    DateOptions::Loading | DateOptions::Available(_) => match daily.get() {
                        DailyView::Prompt => view! {
                            <p class="history-empty">"Select a date to view your meals."</p>
                        }.into_any(),
                        DailyView::Loading => view! {
                            <p class="history-loading">"Loading meals..."</p>
                        }.into_any(),
                        DailyView::Failed(msg) => view! {
                            <p class="history-error">{format!("Error loading data: {}", msg)}</p>
                        }.into_any(),
                        DailyView::Loaded(day) if day.meals.is_empty() => view! {
                            <p class="history-empty">"No meals recorded for this date."</p>
                        }.into_any(),
                        DailyView::Loaded(day) => view! {
                            <div class="meal-list">
                                {day.meals.into_iter().map(|entry| {
                                    let image_src = api_images.image_url(&entry.meal.image_path);
                                    view! { <MealCard entry=entry image_src=image_src /> }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any(),
                    },
                }}
            </div>

            {move || match daily.get() {
                DailyView::Loaded(day) if session.with(|s| s.totals_visible()) => Some(view! {
                    <div class="daily-totals">
                        <NutritionTotalsPanel totals=day.totals title="Daily Totals" />
                    </div>
                }),
                _ => None,
            }}
        </div>
    }
}
