use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use serde::Serialize;
use std::fs::File;

use crate::chart::ChartData;
use crate::emi::{Breakdown, LoanRequest, RateBasis};
use crate::state::{Phase, SubmitOutcome, WidgetEvent};
use crate::validate;

/// Raw field text, exactly as typed. Parsing happens at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputValues {
    pub amount: String,
    pub interest: String,
    pub years: String,
}

/// Which input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Interest,
    Years,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Amount => Field::Interest,
            Field::Interest => Field::Years,
            Field::Years => Field::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Amount => Field::Years,
            Field::Interest => Field::Amount,
            Field::Years => Field::Interest,
        }
    }
}

/// Computed figures as 2-decimal strings. `is_result` gates the results
/// panel and the chart; when it is true all three strings hold finite
/// decimal values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Results {
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
    pub is_result: bool,
}

impl Results {
    fn from_breakdown(b: &Breakdown) -> Self {
        Results {
            monthly_payment: format!("{:.2}", b.monthly_payment),
            total_payment: format!("{:.2}", b.total_payment),
            total_interest: format!("{:.2}", b.total_interest),
            is_result: true,
        }
    }
}

/// One-shot export of the current calculation, written as JSON.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    amount: &'a str,
    interest: &'a str,
    years: &'a str,
    rate_basis: &'a str,
    monthly_payment: &'a str,
    total_payment: &'a str,
    total_interest: &'a str,
}

pub const SNAPSHOT_FILENAME: &str = "loancalc_results.json";

pub struct App {
    pub inputs: InputValues,
    pub basis: RateBasis,
    pub results: Results,
    pub chart: Option<ChartData>,
    pub error: String,
    pub phase: Phase,
    pub focus: Field,
}

impl App {
    pub fn new(basis: RateBasis) -> Self {
        Self {
            inputs: InputValues::default(),
            basis,
            results: Results::default(),
            chart: None,
            error: String::new(),
            phase: Phase::Idle,
            focus: Field::Amount,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Amount => &mut self.inputs.amount,
            Field::Interest => &mut self.inputs.interest,
            Field::Years => &mut self.inputs.years,
        }
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(true),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Char('t') => self.toggle_rate_basis(),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('e') => {
                if let Err(err) = self.export_snapshot(SNAPSHOT_FILENAME) {
                    tracing::warn!("export failed: {err}");
                }
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' || ch == '-' => {
                self.field_mut(self.focus).push(ch);
            }
            KeyCode::Backspace => {
                self.field_mut(self.focus).pop();
            }
            _ => {}
        }
        Ok(false)
    }

    /// Validate, then compute. An invalid submission sets the error and
    /// leaves prior results on screen; a valid one clears the error first,
    /// so even a non-finite payment (which changes nothing else) drops it.
    pub fn submit(&mut self) {
        if let Err(err) = validate::validate(&self.inputs) {
            self.error = err.message().to_string();
            self.phase = self
                .phase
                .step(WidgetEvent::Submitted(SubmitOutcome::Rejected));
            tracing::debug!(reason = err.message(), "submission rejected");
            return;
        }
        self.error.clear();

        let Some(request) = LoanRequest::parse(&self.inputs, self.basis) else {
            return;
        };
        match request.compute() {
            Some(breakdown) => {
                self.results = Results::from_breakdown(&breakdown);
                self.chart = Some(ChartData::payment_breakup(
                    request.principal,
                    breakdown.total_interest,
                ));
                self.phase = self
                    .phase
                    .step(WidgetEvent::Submitted(SubmitOutcome::Computed));
                tracing::info!(
                    monthly = %self.results.monthly_payment,
                    total = %self.results.total_payment,
                    basis = request.basis.as_str(),
                    "computed loan breakdown"
                );
            }
            None => {
                self.phase = self
                    .phase
                    .step(WidgetEvent::Submitted(SubmitOutcome::NonFinite));
                tracing::debug!("payment not finite, keeping previous state");
            }
        }
    }

    /// Flip the rate interpretation. Drops results and chart, keeps the
    /// typed inputs and any error message.
    pub fn toggle_rate_basis(&mut self) {
        self.basis = self.basis.toggled();
        self.results = Results::default();
        self.chart = None;
        self.phase = self.phase.step(WidgetEvent::BasisToggled);
        tracing::debug!(basis = self.basis.as_str(), "rate basis toggled");
    }

    /// Reset inputs, results and chart. The error message stays as last set.
    pub fn clear(&mut self) {
        self.inputs = InputValues::default();
        self.results = Results::default();
        self.chart = None;
        self.phase = self.phase.step(WidgetEvent::Cleared);
    }

    /// Write the current result to `path`. Does nothing without a result.
    pub fn export_snapshot(&self, path: &str) -> Result<()> {
        if !self.results.is_result {
            return Ok(());
        }
        let snapshot = Snapshot {
            amount: &self.inputs.amount,
            interest: &self.inputs.interest,
            years: &self.inputs.years,
            rate_basis: self.basis.as_str(),
            monthly_payment: &self.results.monthly_payment,
            total_payment: &self.results.total_payment,
            total_interest: &self.results.total_interest,
        };
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &snapshot)?;
        tracing::info!(path, "exported result snapshot");
        Ok(())
    }
}
