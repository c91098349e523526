//! State behind the history page: the date selector and the meals shown for
//! the selected date.

use crate::error::ClientError;
use crate::format;
use crate::models::{DailyHistory, DateList};

use super::sequence::{RequestSequence, Ticket};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DateOptions {
    #[default]
    Loading,
    /// No meal has ever been saved.
    Empty,
    Available(Vec<String>),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DailyView {
    /// No date selected.
    #[default]
    Prompt,
    Loading,
    Loaded(DailyHistory),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySession {
    dates: DateOptions,
    selected: String,
    date_label: Option<String>,
    daily: DailyView,
    requests: RequestSequence,
}

impl HistorySession {
    pub fn dates(&self) -> &DateOptions {
        &self.dates
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }

    pub fn daily(&self) -> &DailyView {
        &self.daily
    }

    /// The totals panel is only shown for a day that has meals.
    pub fn totals_visible(&self) -> bool {
        matches!(&self.daily, DailyView::Loaded(day) if !day.meals.is_empty())
    }

    /// Record the fetched date list. Returns the date that should be loaded
    /// right away, if any.
    pub fn dates_loaded(&mut self, result: Result<DateList, ClientError>) -> Option<String> {
        match result {
            Ok(dates) if dates.is_empty() => {
                self.dates = DateOptions::Empty;
                None
            }
            Ok(dates) => {
                let latest = dates.latest().map(str::to_string);
                self.dates = DateOptions::Available(dates.into_vec());
                latest
            }
            Err(e) => {
                self.dates = DateOptions::Failed(e.user_message());
                None
            }
        }
    }

    /// Select `date` and start loading it. An empty date clears the display and
    /// returns no ticket.
    pub fn begin_load(&mut self, date: &str) -> Option<Ticket> {
        self.selected = date.to_string();
        // bump the sequence either way so an in-flight load cannot repaint a cleared view
        let ticket = self.requests.issue();

        if date.is_empty() {
            self.date_label = None;
            self.daily = DailyView::Prompt;
            return None;
        }

        self.date_label = Some(format::format_date_label(date));
        self.daily = DailyView::Loading;
        Some(ticket)
    }

    /// Returns false when the response was stale and ignored.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<DailyHistory, ClientError>) -> bool {
        if !self.requests.is_current(ticket) {
            leptos::logging::warn!("Discarding stale daily history response");
            return false;
        }

        self.daily = match result {
            Ok(day) => DailyView::Loaded(day),
            Err(e) => DailyView::Failed(e.user_message()),
        };
        true
    }
}
