pub mod plan;
pub mod render;
pub mod write;

pub use plan::{plan_files, FileKind, PlannedFile, ProjectPlan};
pub use write::{ensure_writable, execute_plan, GeneratedProject};
