//! Financial summary controller.

use super::{Controller, Effect, FetchOutcome, PendingFetch, fetch_summary, settle, unexpected};
use crate::application::fetch::FetchRunner;
use crate::application::request_slot::RequestSlot;
use crate::domain::LoadState;
use crate::domain::entities::FinancialSummary;

const SUMMARY_ERROR: &str = "Erro ao carregar o resumo de transações";

#[derive(Debug, Default)]
pub struct SummaryController {
    summary: RequestSlot<FinancialSummary>,
}

impl SummaryController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<FinancialSummary> {
        self.summary.state()
    }
}

impl Controller for SummaryController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        let ticket = self.summary.begin();
        vec![fetch_summary(runner, ticket)]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Summary { ticket, result } => {
                settle(&mut self.summary, ticket, result, SUMMARY_ERROR)
            }
            other => unexpected("summary", &other),
        }
    }
}
