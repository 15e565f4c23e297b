use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("reminder session has shut down")]
    Closed,
    #[error("reminder session task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
