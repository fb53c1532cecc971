use session::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("no state directory; pass --state-dir or set LIBRARY_STATE_DIR")]
    MissingStateDir,
    #[error("not authenticated; run `library-cli login` first")]
    NotAuthenticated,
    #[error("token rejected by server")]
    InvalidToken,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
