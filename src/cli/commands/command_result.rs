use crate::{issues::Issue, pipeline::Outcome};

/// Result of running langc commands
#[derive(Debug, Default)]
pub struct CommandResult {
    /// Issues from the stage that halted the pipeline.
    /// Empty when every stage passed, and for non-pipeline commands.
    pub issues: Vec<Issue>,
}

impl From<Outcome> for CommandResult {
    fn from(outcome: Outcome) -> Self {
        let issues = match outcome {
            Outcome::Done { .. } => Vec::new(),
            Outcome::Halted { issues, .. } => issues,
        };
        Self { issues }
    }
}
