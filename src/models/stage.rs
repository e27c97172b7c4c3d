use serde::{Deserialize, Serialize};

/// A company growth phase
///
/// Array order in the stage catalog defines the timeline sequence; there
/// is no numeric rank field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDefinition {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub description: String,
    #[serde(default)]
    pub focus: Vec<String>,
}

/// An employee-count bracket; the only selector that implies a stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRange {
    pub value: String,
    pub label: String,
    pub stage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueStage {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingStage {
    pub value: String,
    pub label: String,
}

/// Document B: stages plus the three selector definition sets
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCatalog {
    pub stages: Vec<StageDefinition>,
    pub employee_ranges: Vec<EmployeeRange>,
    pub revenue_stages: Vec<RevenueStage>,
    pub funding_stages: Vec<FundingStage>,
}

impl StageCatalog {
    pub fn stage(&self, id: &str) -> Option<&StageDefinition> {
        self.stages.iter().find(|s| s.id == id)
    }

    /// Timeline position of a stage (array index)
    pub fn stage_position(&self, id: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.id == id)
    }

    /// The stage after the given one, if any
    pub fn next_stage(&self, id: &str) -> Option<&StageDefinition> {
        let pos = self.stage_position(id)?;
        self.stages.get(pos + 1)
    }

    pub fn employee_range(&self, value: &str) -> Option<&EmployeeRange> {
        self.employee_ranges.iter().find(|r| r.value == value)
    }

    pub fn revenue_stage(&self, value: &str) -> Option<&RevenueStage> {
        self.revenue_stages.iter().find(|r| r.value == value)
    }

    pub fn funding_stage(&self, value: &str) -> Option<&FundingStage> {
        self.funding_stages.iter().find(|f| f.value == value)
    }
}
