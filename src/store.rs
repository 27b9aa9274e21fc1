use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calc::LoanCalculationResult;
use crate::errors::{CalcError, Result};
use crate::request::LoanRequest;
use crate::types::CalculationId;

/// a calculation captured for later reference or sharing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: CalculationId,
    pub label: String,
    pub saved_at: DateTime<Utc>,
    pub request: LoanRequest,
    pub result: LoanCalculationResult,
}

impl SavedCalculation {
    /// capture a calculation, timestamped from the injected clock
    pub fn capture(
        label: &str,
        request: LoanRequest,
        result: LoanCalculationResult,
        time: &SafeTimeProvider,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            saved_at: time.now(),
            request,
            result,
        }
    }

    /// pretty JSON representation
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// parse from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// caller-side repository for saved calculations
///
/// The engine owns no state between invocations; saving and sharing
/// results is the caller's concern and goes through this interface.
pub trait CalculationStore {
    fn save(&mut self, calculation: SavedCalculation) -> Result<CalculationId>;
    fn load(&self, id: CalculationId) -> Result<&SavedCalculation>;
    fn list(&self) -> Vec<&SavedCalculation>;
    fn remove(&mut self, id: CalculationId) -> Result<SavedCalculation>;
}

/// in-memory calculation store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    calculations: Vec<SavedCalculation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }
}

impl CalculationStore for MemoryStore {
    fn save(&mut self, calculation: SavedCalculation) -> Result<CalculationId> {
        let id = calculation.id;
        // saving the same id again replaces the earlier capture
        self.calculations.retain(|c| c.id != id);
        self.calculations.push(calculation);
        Ok(id)
    }

    fn load(&self, id: CalculationId) -> Result<&SavedCalculation> {
        self.calculations
            .iter()
            .find(|c| c.id == id)
            .ok_or(CalcError::CalculationNotFound { id })
    }

    fn list(&self) -> Vec<&SavedCalculation> {
        self.calculations.iter().collect()
    }

    fn remove(&mut self, id: CalculationId) -> Result<SavedCalculation> {
        let position = self
            .calculations
            .iter()
            .position(|c| c.id == id)
            .ok_or(CalcError::CalculationNotFound { id })?;
        Ok(self.calculations.remove(position))
    }
}
