// Application state: catalogs, selection, responses, presentation state.
// All mutation goes through here so every change persists immediately
// and the renderers re-derive from one place (no module globals).

use crate::export;
use crate::models::{Priority, ProcessCatalog, StageCatalog, StageDefinition};
use crate::schema::{self, LoadError};
use crate::state::{ResponseStore, SelectionState};
use crate::store::{Snapshot, StateStore};
use crate::view::{
    process_list_view, summary_view, timeline_view, ProcessListView, SummaryView, TimelineView,
    ViewState,
};
use anyhow::Result;
use std::path::Path;
use std::time::Instant;

pub struct App {
    pub processes: ProcessCatalog,
    pub stages: StageCatalog,
    pub selection: SelectionState,
    pub responses: ResponseStore,
    pub view_state: ViewState,
    store: StateStore,
}

impl App {
    /// Load both catalogs, then overlay any saved snapshot on the
    /// defaults. A schema failure is fatal and leaves nothing touched; a
    /// missing or malformed snapshot silently falls back to defaults.
    pub fn init(data_dir: &Path, store: StateStore) -> Result<Self, LoadError> {
        let (processes, stages) = schema::load_catalogs(data_dir)?;

        let (selection, responses) = match store.load() {
            Some(snapshot) => (
                SelectionState::restore(snapshot.user_selections, snapshot.current_stage),
                ResponseStore::from_map(snapshot.responses),
            ),
            None => (SelectionState::new(&stages), ResponseStore::default()),
        };

        Ok(Self {
            processes,
            stages,
            selection,
            responses,
            view_state: ViewState::default(),
            store,
        })
    }

    pub fn current_stage(&self) -> &str {
        &self.selection.current_stage
    }

    /// The stage after the current one, for the preview command
    pub fn next_stage(&self) -> Option<&StageDefinition> {
        self.stages.next_stage(self.current_stage())
    }

    pub fn set_employees(&mut self, value: &str) -> Result<(), String> {
        self.selection.set_employees(&self.stages, value)?;
        self.persist();
        Ok(())
    }

    pub fn set_revenue(&mut self, value: &str) -> Result<(), String> {
        self.selection.set_revenue(&self.stages, value)?;
        self.persist();
        Ok(())
    }

    pub fn set_funding(&mut self, value: &str) -> Result<(), String> {
        self.selection.set_funding(&self.stages, value)?;
        self.persist();
        Ok(())
    }

    /// Record a score. Validates the process, the dimension, and that
    /// the value is a real option index for that dimension.
    pub fn set_score(
        &mut self,
        process_id: &str,
        dimension_id: &str,
        value: u8,
    ) -> Result<(), String> {
        if self.processes.process(process_id).is_none() {
            return Err(format!("Unknown process: '{}'", process_id));
        }
        let dimension = self
            .processes
            .dimension(dimension_id)
            .ok_or_else(|| format!("Unknown dimension: '{}'", dimension_id))?;
        let max = dimension.options.len();
        if usize::from(value) >= max {
            return Err(format!(
                "Invalid score: {}. {} is rated 0-{}.",
                value,
                dimension.label,
                max.saturating_sub(1)
            ));
        }
        self.responses.set_score(process_id, dimension_id, value);
        self.persist();
        Ok(())
    }

    /// Record a note. Notes never affect the summary.
    pub fn set_note(
        &mut self,
        process_id: &str,
        dimension_id: &str,
        text: &str,
    ) -> Result<(), String> {
        if self.processes.process(process_id).is_none() {
            return Err(format!("Unknown process: '{}'", process_id));
        }
        if self.processes.dimension(dimension_id).is_none() {
            return Err(format!("Unknown dimension: '{}'", dimension_id));
        }
        self.responses.set_note(process_id, dimension_id, text);
        self.persist();
        Ok(())
    }

    pub fn toggle_section(&mut self, priority: Priority) {
        self.view_state.toggle(priority);
    }

    pub fn timeline(&self) -> TimelineView {
        timeline_view(&self.stages, self.current_stage())
    }

    pub fn process_list(&self, now: Instant) -> ProcessListView {
        process_list_view(
            &self.processes,
            self.current_stage(),
            &self.responses,
            &self.view_state,
            now,
        )
    }

    pub fn summary(&self) -> SummaryView {
        summary_view(&self.responses)
    }

    /// Write the CSV export into `dir`, returning the written path
    pub fn export(&self, dir: &Path) -> Result<std::path::PathBuf> {
        export::write_export(dir, &self.processes, self.current_stage(), &self.responses)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            user_selections: self.selection.selection.clone(),
            current_stage: self.selection.current_stage.clone(),
            responses: self.responses.as_map().clone(),
        }
    }

    /// Synchronous best-effort write after every mutation. A failed
    /// write never takes the session down.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.snapshot()) {
            log::warn!("could not persist state: {:#}", e);
        }
    }
}
