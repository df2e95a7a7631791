use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("intersection configuration error: {0}")]
    Config(String),
}

pub type AdmissionResult<T> = Result<T, AdmissionError>;
