use thiserror::Error;

/// Errors emitted by the fabrication engine and its export adapters.
#[derive(Debug, Error)]
pub enum FabricaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, FabricaError>;
