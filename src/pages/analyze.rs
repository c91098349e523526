//! Meal analysis page.
//!
//! Users upload a meal photo, review the nutrition breakdown, optionally send
//! a correction, and save the result to their history.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;

use crate::api::ApiClient;
use crate::components::analysis_results::AnalysisResults;
use crate::components::error_panel::ErrorPanel;
use crate::config::ClientConfig;
use crate::notify;
use crate::state::{AnalysisSession, SaveOutcome};
use crate::validation::{UploadCandidate, ALLOWED_EXTENSIONS};

const MEAL_TYPES: [(&str, &str); 4] = [
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
    ("snack", "Snack"),
];

const DEFAULT_MEAL_TYPE: &str = "snack";

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let max_upload_bytes = use_context::<ClientConfig>().unwrap_or_default().max_upload_bytes;

    let session = RwSignal::new(AnalysisSession::default());
    let (correction, set_correction) = signal(String::new());
    let form_ref = NodeRef::<html::Form>::new();
    let file_ref = NodeRef::<html::Input>::new();

    let accept = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    // Only the result actually on screen; saving toggles don't redraw it
    let displayed = Memo::new(move |_| {
        session.with(|s| if s.results_visible() { s.current().cloned() } else { None })
    });
    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let is_saving = Signal::derive(move || session.with(|s| s.is_saving()));

    // Submit photo for analysis
    let api_submit = api.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            return;
        };

        let upload = file_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| UploadCandidate {
                name: file.name(),
                size_bytes: file.size() as u64,
            });

        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                web_sys::console::error_2(&"Failed to read upload form".into(), &e);
                notify::alert("Could not read the upload form. Please try again.");
                return;
            }
        };

        let Some(started) = session.try_update(|s| s.begin_analysis(upload.as_ref(), max_upload_bytes)) else {
            return;
        };
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(e) => {
                notify::alert(&e.user_message());
                return;
            }
        };

        let api = api_submit.clone();
        spawn_local(async move {
            let result = api.analyze(&form_data).await;
            session.update(|s| {
                s.finish_analysis(ticket, result);
            });
        });
    };

    // Resubmit the current photo with the user's correction
    let api_reanalyze = api.clone();
    let on_reanalyze = move |_: leptos::ev::MouseEvent| {
        let text = correction.get_untracked();
        let Some(started) = session.try_update(|s| s.begin_reanalysis(&text)) else {
            return;
        };
        let (ticket, request) = match started {
            Ok(started) => started,
            Err(e) => {
                notify::alert(&e.user_message());
                return;
            }
        };

        let api = api_reanalyze.clone();
        spawn_local(async move {
            let result = api.reanalyze(&request).await;
            session.update(|s| {
                s.finish_analysis(ticket, result);
            });
        });
    };

    // Stable save action; every rendered save button calls into this one
    let api_save = api.clone();
    let save = Callback::new(move |_: ()| {
        let Some(started) = session.try_update(|s| s.begin_save()) else {
            return;
        };
        let (ticket, meal) = match started {
            Ok(started) => started,
            Err(e) => {
                notify::alert(&e.user_message());
                return;
            }
        };

        let api = api_save.clone();
        spawn_local(async move {
            let result = api.save_meal(&meal).await;
            let Some(outcome) = session.try_update(|s| s.finish_save(ticket, result)) else {
                return;
            };
            match outcome {
                SaveOutcome::Saved { date, reset } => {
                    if reset {
                        if let Some(form) = form_ref.get_untracked() {
                            form.reset();
                        }
                        set_correction.set(String::new());
                    }
                    notify::alert(&format!("Meal saved to history for {}!", date));
                }
                SaveOutcome::Failed(msg) => {
                    notify::alert(&format!("Failed to save meal: {}", msg));
                }
            }
        });
    });

    let api_images = api.clone();

    view! {
        <div class="page analyze-page" id="analysis-page">
            <style>{include_str!("analyze.css")}</style>

            <h2>"Analyze a Meal"</h2>
            <p class="page-description">
                "Upload a photo of your meal to get an estimated nutrition breakdown."
            </p>

            <form class="upload-form" node_ref=form_ref on:submit=on_submit>
                <div class="form-group">
                    <label for="meal-image">"Meal photo"</label>
                    <input
                        type="file"
                        id="meal-image"
                        name="image"
                        class="input"
                        accept=accept
                        node_ref=file_ref
                    />
                    <p class="input-hint">"Supports PNG, JPEG and WebP"</p>
                </div>

                <div class="form-group">
                    <label for="meal-type">"Meal type"</label>
                    <select id="meal-type" name="meal_type" class="input">
                        {MEAL_TYPES.iter().map(|&(value, label)| view! {
                            <option value=value selected={value == DEFAULT_MEAL_TYPE}>{label}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Analyzing..." } else { "Analyze Meal" }}
                </button>
            </form>

            {move || is_loading.get().then(|| view! {
                <div class="loading-indicator">
                    <div class="spinner"></div>
                    <p>"Analyzing your meal..."</p>
                    <p class="hint">"This may take 10-30 seconds"</p>
                </div>
            })}

            {move || session.with(|s| s.error_message().map(str::to_string)).map(|msg| view! {
                <ErrorPanel message=msg />
            })}

            {move || displayed.get().map(|result| {
                let image_src = api_images.image_url(&result.image_path);
                view! {
                    <AnalysisResults
                        result=result
                        image_src=image_src
                        saving=is_saving
                        on_save=save.clone()
                    />
                }
            })}

            <Show when=move || session.with(|s| s.reanalysis_visible())>
                <div class="reanalysis-section">
                    <h3>"Not quite right?"</h3>
                    <p class="section-subtitle">
                        "Describe what the analysis got wrong and we'll recalculate."
                    </p>
                    <textarea
                        class="input correction-input"
                        rows="3"
                        placeholder="e.g. The rice was white, not brown, and about half a cup"
                        prop:value=move || correction.get()
                        on:input=move |ev| set_correction.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn btn-secondary"
                        on:click=on_reanalyze.clone()
                        disabled=move || is_loading.get() || is_saving.get()
                    >
                        "Reanalyze with Correction"
                    </button>
                </div>
            </Show>
        </div>
    }
}
