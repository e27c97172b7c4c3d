pub mod responses;
pub mod selection;

pub use responses::ResponseStore;
pub use selection::{Selection, SelectionState};
