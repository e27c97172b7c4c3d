use crate::models::StageCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStatus {
    Completed,
    Current,
    Future,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineMarker {
    pub stage_id: String,
    pub short_name: String,
    pub status: MarkerStatus,
    /// Connector to the next marker; None on the last marker. Completed
    /// only when the stage before the connector is completed.
    pub connector_completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineView {
    pub markers: Vec<TimelineMarker>,
    pub current_name: String,
    pub current_description: String,
    pub current_focus: Vec<String>,
}

/// Derive the timeline from the ordered stage sequence and the current
/// stage. Pure: identical input yields an identical view.
///
/// An unknown current stage (possible only via a stale snapshot)
/// classifies every stage as future and leaves the stage info empty.
pub fn timeline_view(stages: &StageCatalog, current_stage: &str) -> TimelineView {
    let current_position = stages.stage_position(current_stage);
    let last = stages.stages.len().saturating_sub(1);

    let markers = stages
        .stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            let status = match current_position {
                Some(current) if index < current => MarkerStatus::Completed,
                Some(current) if index == current => MarkerStatus::Current,
                _ => MarkerStatus::Future,
            };
            let connector_completed = if index < last {
                Some(status == MarkerStatus::Completed)
            } else {
                None
            };
            TimelineMarker {
                stage_id: stage.id.clone(),
                short_name: stage.short_name.clone(),
                status,
                connector_completed,
            }
        })
        .collect();

    let current = stages.stage(current_stage);
    TimelineView {
        markers,
        current_name: current.map(|s| s.name.clone()).unwrap_or_default(),
        current_description: current.map(|s| s.description.clone()).unwrap_or_default(),
        current_focus: current.map(|s| s.focus.clone()).unwrap_or_default(),
    }
}
