use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteConfigError {
    #[error("Failed to parse site configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Site URL must be absolute http(s), got '{0}'")]
    InvalidSite(String),

    #[error("Redirect path must start with '/': '{0}'")]
    InvalidPath(String),

    #[error("Redirect source '{0}' is declared more than once")]
    DuplicateRedirect(String),
}
