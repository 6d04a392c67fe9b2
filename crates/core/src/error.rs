use crate::project::ApplicationStatus;
use crate::types::Id;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Project {id} does not accept applications (status: {status})")]
    NotApplicable { id: Id, status: ApplicationStatus },
}
