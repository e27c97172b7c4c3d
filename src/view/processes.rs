use crate::models::{Priority, ProcessCatalog, ProcessDefinition};
use crate::state::ResponseStore;
use crate::view::ViewState;
use std::time::Instant;

/// Priority of a process at a stage.
///
/// A stage the process does not mention is future work. This is the one
/// place that default is applied.
pub fn classify(process: &ProcessDefinition, stage_id: &str) -> Priority {
    match process.stages.get(stage_id) {
        Some(priority) => *priority,
        None => Priority::Future,
    }
}

/// Fixed explanatory text attached to a dimension label
pub fn dimension_help(dimension_id: &str) -> &'static str {
    match dimension_id {
        "reliability" => {
            "Does this process work consistently? Rate from frequent failures (0) \
             to optimized and proactively improved (4)."
        }
        "ownership" => {
            "Is there a clear owner for this process? Rate from no owner/CEO does \
             it (0) to dedicated team with backup coverage (4)."
        }
        "documentation" => {
            "Is the process documented? Rate from nonexistent (0) to living \
             documentation with examples and templates (4)."
        }
        "automation" => {
            "Is this process automated? Rate from manual/email-based (0) to \
             highly automated self-service (4)."
        }
        "scalability" => {
            "Can this process handle growth? Rate from breaking under current \
             load (0) to designed for 10x+ growth (4)."
        }
        _ => "",
    }
}

/// Fixed placeholder hint for a dimension's note field
pub fn note_placeholder(dimension_id: &str) -> &'static str {
    match dimension_id {
        "reliability" => "Details (e.g., what breaks, how often)",
        "ownership" => "Name and role of owner (e.g., Sarah Chen, CFO)",
        "documentation" => "Link to documentation (e.g., Notion, wiki URL)",
        "automation" => "Tool name and link (e.g., QuickBooks, Gusto)",
        "scalability" => "Details (e.g., current capacity, bottlenecks)",
        _ => "Details (optional)",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingOptionView {
    /// Index doubles as the score value
    pub index: u8,
    /// The option's descriptive text, shown as a tooltip
    pub description: String,
    pub selected: bool,
    /// Transient just-tapped highlight; presentational only
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRowView {
    pub dimension_id: String,
    pub label: String,
    pub help: &'static str,
    pub options: Vec<RatingOptionView>,
    pub note: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntryView {
    pub id: String,
    pub title: String,
    pub optional: bool,
    pub description: String,
    /// Stage-specific focus line, when the process declares one for the
    /// current stage
    pub stage_focus: Option<String>,
    pub dimensions: Vec<DimensionRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub priority: Priority,
    pub title: &'static str,
    pub collapsed: bool,
    pub toggle_label: &'static str,
    pub entries: Vec<ProcessEntryView>,
}

impl SectionView {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessListView {
    /// Always three sections, in critical/recommended/future order
    pub sections: Vec<SectionView>,
    /// Processes relevant now: critical + recommended counts
    pub visible_count: usize,
}

/// Build the process list for the current stage.
///
/// Buckets every process into exactly one of the three sections,
/// preserving catalog order within each bucket. Pure apart from reading
/// the transient flash state at `now`.
pub fn process_list_view(
    catalog: &ProcessCatalog,
    current_stage: &str,
    responses: &ResponseStore,
    view_state: &ViewState,
    now: Instant,
) -> ProcessListView {
    let mut sections: Vec<SectionView> = [Priority::Critical, Priority::Recommended, Priority::Future]
        .into_iter()
        .map(|priority| SectionView {
            priority,
            title: priority.section_title(),
            collapsed: view_state.is_collapsed(priority),
            toggle_label: if view_state.is_collapsed(priority) {
                "Show"
            } else {
                "Hide"
            },
            entries: Vec::new(),
        })
        .collect();

    for process in &catalog.processes {
        let entry = process_entry(catalog, process, current_stage, responses, view_state, now);
        let bucket = match classify(process, current_stage) {
            Priority::Critical => 0,
            Priority::Recommended => 1,
            Priority::Future => 2,
        };
        sections[bucket].entries.push(entry);
    }

    let visible_count = sections[0].count() + sections[1].count();
    ProcessListView {
        sections,
        visible_count,
    }
}

fn process_entry(
    catalog: &ProcessCatalog,
    process: &ProcessDefinition,
    current_stage: &str,
    responses: &ResponseStore,
    view_state: &ViewState,
    now: Instant,
) -> ProcessEntryView {
    let dimensions = catalog
        .dimensions
        .iter()
        .map(|dimension| {
            let selected = responses.score(&process.id, &dimension.id);
            let options = dimension
                .options
                .iter()
                .enumerate()
                .map(|(index, description)| {
                    let index = index as u8;
                    RatingOptionView {
                        index,
                        description: description.clone(),
                        selected: selected == Some(index),
                        active: view_state.is_flashing(&process.id, &dimension.id, index, now),
                    }
                })
                .collect();
            DimensionRowView {
                dimension_id: dimension.id.clone(),
                label: dimension.label.clone(),
                help: dimension_help(&dimension.id),
                options,
                note: responses
                    .note(&process.id, &dimension.id)
                    .unwrap_or_default()
                    .to_string(),
                placeholder: note_placeholder(&dimension.id),
            }
        })
        .collect();

    ProcessEntryView {
        id: process.id.clone(),
        title: process.title.clone(),
        optional: process.optional,
        description: process.description.clone(),
        stage_focus: process.stage_focus.get(current_stage).cloned(),
        dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> ProcessCatalog {
        serde_json::from_str(
            r#"{
                "processes": [
                    { "id": "P01", "title": "Payroll", "description": "Paying people",
                      "stages": { "first-hires": "critical" },
                      "stageFocus": { "first-hires": "Get a payroll provider" } },
                    { "id": "P02", "title": "Invoicing", "description": "Billing customers",
                      "stages": { "first-hires": "recommended" } },
                    { "id": "P03", "title": "Procurement", "description": "Buying things",
                      "optional": true,
                      "stages": { "scaling": "critical" } }
                ],
                "dimensions": {
                    "reliability": { "label": "Reliability",
                                     "options": ["broken", "shaky", "ok", "solid", "optimized"] },
                    "ownership": { "label": "Ownership",
                                   "options": ["none", "adhoc", "named", "team", "backup"] }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_classify_default_is_future() {
        let catalog = sample_catalog();
        let p03 = catalog.process("P03").unwrap();
        assert_eq!(classify(p03, "first-hires"), Priority::Future);
        assert_eq!(classify(p03, "scaling"), Priority::Critical);
    }

    #[test]
    fn test_bucketing_is_total_partition() {
        let catalog = sample_catalog();
        let view = process_list_view(
            &catalog,
            "first-hires",
            &ResponseStore::default(),
            &ViewState::default(),
            Instant::now(),
        );
        let total: usize = view.sections.iter().map(SectionView::count).sum();
        assert_eq!(total, catalog.processes.len());
        assert_eq!(view.sections[0].entries[0].id, "P01");
        assert_eq!(view.sections[1].entries[0].id, "P02");
        assert_eq!(view.sections[2].entries[0].id, "P03");
        assert_eq!(view.visible_count, 2);
    }

    #[test]
    fn test_section_collapse_and_labels() {
        let catalog = sample_catalog();
        let mut view_state = ViewState::default();
        let now = Instant::now();
        let view = process_list_view(
            &catalog,
            "first-hires",
            &ResponseStore::default(),
            &view_state,
            now,
        );
        assert!(!view.sections[0].collapsed);
        assert_eq!(view.sections[0].toggle_label, "Hide");
        assert!(view.sections[2].collapsed);
        assert_eq!(view.sections[2].toggle_label, "Show");

        view_state.toggle(Priority::Future);
        let view = process_list_view(
            &catalog,
            "first-hires",
            &ResponseStore::default(),
            &view_state,
            now,
        );
        assert!(!view.sections[2].collapsed);
        assert_eq!(view.sections[2].toggle_label, "Hide");
    }

    #[test]
    fn test_stage_focus_and_optional_marker() {
        let catalog = sample_catalog();
        let view = process_list_view(
            &catalog,
            "first-hires",
            &ResponseStore::default(),
            &ViewState::default(),
            Instant::now(),
        );
        let p01 = &view.sections[0].entries[0];
        assert_eq!(p01.stage_focus.as_deref(), Some("Get a payroll provider"));
        assert!(!p01.optional);
        let p03 = &view.sections[2].entries[0];
        assert!(p03.optional);
        assert!(p03.stage_focus.is_none());
    }

    #[test]
    fn test_rating_rows_reflect_responses() {
        let catalog = sample_catalog();
        let mut responses = ResponseStore::default();
        responses.set_score("P01", "reliability", 2);
        responses.set_note("P01", "ownership", "Sam, CFO");
        let view = process_list_view(
            &catalog,
            "first-hires",
            &responses,
            &ViewState::default(),
            Instant::now(),
        );
        let p01 = &view.sections[0].entries[0];
        let reliability = &p01.dimensions[0];
        assert_eq!(reliability.options.len(), 5);
        assert!(reliability.options[2].selected);
        assert!(!reliability.options[3].selected);
        assert_eq!(reliability.options[4].description, "optimized");
        let ownership = &p01.dimensions[1];
        assert_eq!(ownership.note, "Sam, CFO");
        assert!(ownership.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_unknown_response_ids_are_ignored_on_render() {
        let catalog = sample_catalog();
        let mut responses = ResponseStore::default();
        responses.set_score("P99", "reliability", 4);
        responses.set_score("P01", "velocity", 4);
        let view = process_list_view(
            &catalog,
            "first-hires",
            &responses,
            &ViewState::default(),
            Instant::now(),
        );
        for section in &view.sections {
            for entry in &section.entries {
                for row in &entry.dimensions {
                    assert!(row.options.iter().all(|o| !o.selected));
                }
            }
        }
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let catalog = sample_catalog();
        let responses = ResponseStore::default();
        let view_state = ViewState::default();
        let now = Instant::now();
        let first = process_list_view(&catalog, "first-hires", &responses, &view_state, now);
        let second = process_list_view(&catalog, "first-hires", &responses, &view_state, now);
        assert_eq!(first, second);
    }
}
