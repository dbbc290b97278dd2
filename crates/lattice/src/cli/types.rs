//! CLI-facing enum types and their conversions to domain types.

use crate::domain::PlanStatus;
use clap::ValueEnum;

/// Plan status as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanStatusArg {
    /// Plan has not been started.
    Todo,

    /// Plan is actively being worked on.
    #[value(name = "in_progress")]
    InProgress,

    /// Plan has been completed.
    Done,

    /// Plan was abandoned.
    Cancelled,
}

impl From<PlanStatusArg> for PlanStatus {
    fn from(arg: PlanStatusArg) -> Self {
        match arg {
            PlanStatusArg::Todo => PlanStatus::Todo,
            PlanStatusArg::InProgress => PlanStatus::InProgress,
            PlanStatusArg::Done => PlanStatus::Done,
            PlanStatusArg::Cancelled => PlanStatus::Cancelled,
        }
    }
}
