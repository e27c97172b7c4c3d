use crate::models::StageCatalog;
use serde::{Deserialize, Serialize};

/// The three growth-stage selector values as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub employees: String,
    pub revenue: String,
    pub funding: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            employees: "3-5".to_string(),
            revenue: "first-revenue".to_string(),
            funding: "bootstrapped".to_string(),
        }
    }
}

/// Selector values plus the derived current stage.
///
/// Only the employee bracket drives `current_stage`; revenue and funding
/// are recorded but never influence the stage. That asymmetry is
/// deliberate and must be preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub selection: Selection,
    pub current_stage: String,
}

impl SelectionState {
    /// Default selection, with the stage derived from the default
    /// employee bracket (falling back to the first stage in the catalog)
    pub fn new(stages: &StageCatalog) -> Self {
        let selection = Selection::default();
        let current_stage = stages
            .employee_range(&selection.employees)
            .map(|r| r.stage.clone())
            .or_else(|| stages.stages.first().map(|s| s.id.clone()))
            .unwrap_or_default();
        Self {
            selection,
            current_stage,
        }
    }

    /// Restore from a persisted snapshot
    pub fn restore(selection: Selection, current_stage: String) -> Self {
        Self {
            selection,
            current_stage,
        }
    }

    /// Set the employee bracket and re-derive the current stage from it
    pub fn set_employees(&mut self, stages: &StageCatalog, value: &str) -> Result<(), String> {
        let range = stages
            .employee_range(value)
            .ok_or_else(|| format!("Unknown employee range: '{}'", value))?;
        self.selection.employees = range.value.clone();
        self.current_stage = range.stage.clone();
        Ok(())
    }

    /// Set the revenue stage; does not touch the current stage
    pub fn set_revenue(&mut self, stages: &StageCatalog, value: &str) -> Result<(), String> {
        let revenue = stages
            .revenue_stage(value)
            .ok_or_else(|| format!("Unknown revenue stage: '{}'", value))?;
        self.selection.revenue = revenue.value.clone();
        Ok(())
    }

    /// Set the funding stage; does not touch the current stage
    pub fn set_funding(&mut self, stages: &StageCatalog, value: &str) -> Result<(), String> {
        let funding = stages
            .funding_stage(value)
            .ok_or_else(|| format!("Unknown funding stage: '{}'", value))?;
        self.selection.funding = funding.value.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stages() -> StageCatalog {
        serde_json::from_str(
            r#"{
                "stages": [
                    { "id": "founding", "name": "Founding Team", "shortName": "Founding",
                      "description": "" },
                    { "id": "first-hires", "name": "First Hires", "shortName": "Hires",
                      "description": "" },
                    { "id": "scaling", "name": "Scaling Up", "shortName": "Scaling",
                      "description": "" }
                ],
                "employeeRanges": [
                    { "value": "1-2", "label": "1-2", "stage": "founding" },
                    { "value": "3-5", "label": "3-5", "stage": "first-hires" },
                    { "value": "16-50", "label": "16-50", "stage": "scaling" }
                ],
                "revenueStages": [
                    { "value": "first-revenue", "label": "First revenue" },
                    { "value": "recurring", "label": "Recurring" }
                ],
                "fundingStages": [
                    { "value": "bootstrapped", "label": "Bootstrapped" },
                    { "value": "seed", "label": "Seed" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_stage_derived_from_default_employees() {
        let state = SelectionState::new(&sample_stages());
        assert_eq!(state.selection.employees, "3-5");
        assert_eq!(state.current_stage, "first-hires");
    }

    #[test]
    fn test_set_employees_updates_stage() {
        let stages = sample_stages();
        let mut state = SelectionState::new(&stages);
        state.set_employees(&stages, "16-50").unwrap();
        assert_eq!(state.selection.employees, "16-50");
        assert_eq!(state.current_stage, "scaling");
    }

    #[test]
    fn test_revenue_and_funding_do_not_touch_stage() {
        let stages = sample_stages();
        let mut state = SelectionState::new(&stages);
        state.set_revenue(&stages, "recurring").unwrap();
        state.set_funding(&stages, "seed").unwrap();
        assert_eq!(state.current_stage, "first-hires");
        assert_eq!(state.selection.revenue, "recurring");
        assert_eq!(state.selection.funding, "seed");
    }

    #[test]
    fn test_stage_follows_employees_regardless_of_other_selectors() {
        let stages = sample_stages();
        let mut state = SelectionState::new(&stages);
        state.set_revenue(&stages, "recurring").unwrap();
        state.set_funding(&stages, "seed").unwrap();
        state.set_employees(&stages, "1-2").unwrap();
        assert_eq!(state.current_stage, "founding");
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let stages = sample_stages();
        let mut state = SelectionState::new(&stages);
        assert!(state.set_employees(&stages, "500+").is_err());
        assert!(state.set_revenue(&stages, "ipo").is_err());
        assert!(state.set_funding(&stages, "series-z").is_err());
        // Rejected values leave the state untouched
        assert_eq!(state.selection.employees, "3-5");
        assert_eq!(state.current_stage, "first-hires");
    }
}
