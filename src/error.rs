//! Main Crate Error

#[derive(thiserror::Error, Debug)]
/// crate error enum.
pub enum Error {
    /// Misuse that has no richer description, e.g. a console still in use.
    #[error("Static error: {0}")]
    Static(&'static str),

    #[error(transparent)]
    /// Transparent [std::io::Error]
    IO(#[from] std::io::Error),
}

// Alias Result to be the crate Result.
pub type Result<T, E = Error> = core::result::Result<T, E>;
