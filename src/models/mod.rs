pub mod catalog;
pub mod response;
pub mod stage;

pub use catalog::{DimensionDefinition, Priority, ProcessCatalog, ProcessDefinition};
pub use response::Response;
pub use stage::{
    EmployeeRange, FundingStage, RevenueStage, StageCatalog, StageDefinition,
};
