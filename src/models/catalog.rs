use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-stage priority classification of a process
///
/// Anything a process does not declare as critical or recommended for a
/// stage is "future" work. `classify` in the view layer applies that
/// default explicitly rather than relying on map fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Critical,
    Recommended,
    Future,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::Recommended => "recommended",
            Priority::Future => "future",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(Priority::Critical),
            "recommended" => Some(Priority::Recommended),
            "future" => Some(Priority::Future),
            _ => None,
        }
    }

    /// Fixed section title used by the process list
    pub fn section_title(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical Now",
            Priority::Recommended => "Recommended Now",
            Priority::Future => "Coming Later",
        }
    }
}

/// An operational process being assessed (e.g. payroll, invoicing)
///
/// Immutable once loaded. `stages` maps stage id to the priority of this
/// process at that stage; stages absent from the map default to future.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub stages: BTreeMap<String, Priority>,
    /// Supplementary per-stage guidance shown under the description
    #[serde(default)]
    pub stage_focus: BTreeMap<String, String>,
}

/// An axis of maturity assessed per process
///
/// `options` is ordered: the index of an option IS its score value, so a
/// dimension with 5 options is scored 0..=4.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDefinition {
    #[serde(default)]
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
}

/// Document A: the process catalog
///
/// Dimensions arrive as a JSON object keyed by dimension id. Document
/// order defines column order everywhere (rating rows, export columns),
/// so they are deserialized into a Vec preserving that order with the id
/// folded into each definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessCatalog {
    pub processes: Vec<ProcessDefinition>,
    #[serde(deserialize_with = "ordered_dimensions")]
    pub dimensions: Vec<DimensionDefinition>,
}

impl ProcessCatalog {
    pub fn process(&self, id: &str) -> Option<&ProcessDefinition> {
        self.processes.iter().find(|p| p.id == id)
    }

    pub fn dimension(&self, id: &str) -> Option<&DimensionDefinition> {
        self.dimensions.iter().find(|d| d.id == id)
    }
}

fn ordered_dimensions<'de, D>(deserializer: D) -> Result<Vec<DimensionDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    struct DimensionMapVisitor;

    impl<'de> Visitor<'de> for DimensionMapVisitor {
        type Value = Vec<DimensionDefinition>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of dimension id to dimension definition")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut dimensions = Vec::new();
            while let Some((id, mut dimension)) =
                map.next_entry::<String, DimensionDefinition>()?
            {
                dimension.id = id;
                dimensions.push(dimension);
            }
            Ok(dimensions)
        }
    }

    deserializer.deserialize_map(DimensionMapVisitor)
}
