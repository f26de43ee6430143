#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GuardError {
    #[error("Invalid value for settings flag '{name}': {message}")]
    InvalidFlag { name: String, message: String },
    #[error("No hooks registered for pipeline stage: '{0}'")]
    UnknownStage(String),
}
