use thiserror::Error;

pub type MigrationResult<T> = Result<T, MigrationError>;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("invalid migration config: {0}")]
    InvalidConfig(String),

    #[error("invalid json: {0}")]
    InvalidJson(String),

    #[error("invalid dashboard: {0}")]
    InvalidDashboard(String),
}
