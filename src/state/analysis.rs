//! State machine behind the analysis page.
//!
//! Idle -> Loading -> Displayed | Errored. From Displayed a correction goes
//! back through Loading, and a save goes through Saving to Idle (or back to
//! Displayed if the save fails).

use crate::error::ClientError;
use crate::models::{AnalysisResult, ReanalyzeRequest};
use crate::validation::{self, UploadCandidate};

use super::sequence::{RequestSequence, Ticket};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisPhase {
    /// Nothing shown yet, or the last meal was saved.
    #[default]
    Idle,
    /// An analyze or reanalyze request is in flight.
    Loading,
    Displayed,
    Errored(String),
    Saving,
}

/// What the page should do once a save request completes.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The backend stored the meal under `date`. `reset` is false when a newer
    /// request superseded the save, in which case the page state is left alone.
    Saved { date: String, reset: bool },
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSession {
    phase: AnalysisPhase,
    current: Option<AnalysisResult>,
    requests: RequestSequence,
}

impl AnalysisSession {
    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    /// The single in-memory result, if any.
    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AnalysisPhase::Loading
    }

    pub fn is_saving(&self) -> bool {
        self.phase == AnalysisPhase::Saving
    }

    pub fn results_visible(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Displayed | AnalysisPhase::Saving) && self.current.is_some()
    }

    /// The correction section is open for as long as there is a result to correct.
    pub fn reanalysis_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        match self.phase() {
            AnalysisPhase::Errored(msg) => Some(msg),
            _ => None,
        }
    }

    /// Start a fresh analysis. Clears the current result.
    pub fn begin_analysis(
        &mut self,
        upload: Option<&UploadCandidate>,
        max_upload_bytes: u64,
    ) -> Result<Ticket, ClientError> {
        validation::validate_upload(upload, max_upload_bytes)?;

        self.phase = AnalysisPhase::Loading;
        self.current = None;
        Ok(self.requests.issue())
    }

    /// Start a correction of the current result.
    pub fn begin_reanalysis(&mut self, correction: &str) -> Result<(Ticket, ReanalyzeRequest), ClientError> {
        if self.is_saving() {
            return Err(ClientError::Validation("Wait for the meal to finish saving".to_string()));
        }
        let current = self.current.as_ref().ok_or_else(|| {
            ClientError::Validation("Analyze a meal before submitting a correction".to_string())
        })?;
        let modifications = validation::validate_correction(correction)?;

        let request = ReanalyzeRequest {
            image_path: current.image_path.clone(),
            meal_type: current.meal_type.clone(),
            modifications,
        };
        self.phase = AnalysisPhase::Loading;
        Ok((self.requests.issue(), request))
    }

    /// Apply the response of an analyze or reanalyze request.
    ///
    /// Returns false when the response was stale and ignored. A failed
    /// correction keeps the previous result so it can be corrected again.
    pub fn finish_analysis(&mut self, ticket: Ticket, result: Result<AnalysisResult, ClientError>) -> bool {
        if !self.requests.is_current(ticket) {
            leptos::logging::warn!("Discarding stale analysis response");
            return false;
        }

        match result {
            Ok(analysis) => {
                self.current = Some(analysis);
                self.phase = AnalysisPhase::Displayed;
            }
            Err(e) => {
                self.phase = AnalysisPhase::Errored(e.user_message());
            }
        }
        true
    }

    pub fn begin_save(&mut self) -> Result<(Ticket, AnalysisResult), ClientError> {
        if self.is_saving() {
            return Err(ClientError::Validation("This meal is already being saved".to_string()));
        }
        let meal = self
            .current
            .clone()
            .ok_or_else(|| ClientError::Validation("No analysis data to save".to_string()))?;

        self.phase = AnalysisPhase::Saving;
        Ok((self.requests.issue(), meal))
    }

    pub fn finish_save(&mut self, ticket: Ticket, result: Result<String, ClientError>) -> SaveOutcome {
        if !self.requests.is_current(ticket) {
            leptos::logging::warn!("Save response arrived after a newer request; leaving state untouched");
            return match result {
                Ok(date) => SaveOutcome::Saved { date, reset: false },
                Err(e) => SaveOutcome::Failed(e.user_message()),
            };
        }

        match result {
            Ok(date) => {
                self.current = None;
                self.phase = AnalysisPhase::Idle;
                SaveOutcome::Saved { date, reset: true }
            }
            Err(e) => {
                self.phase = AnalysisPhase::Displayed;
                SaveOutcome::Failed(e.user_message())
            }
        }
    }
}
