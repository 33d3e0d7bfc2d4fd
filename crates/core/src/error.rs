use registry_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read registry file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write registry file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to create registry directory: {0}")]
    DirCreation(std::io::Error),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
    #[error("patient {0} not found")]
    PatientNotFound(i32),
    #[error("reference document not found")]
    ReferencesNotFound,
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
