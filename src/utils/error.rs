use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Fetch failed: {url} returned status {status}")]
    FetchError { url: String, status: u16 },

    #[error("Malformed dataset: {0}")]
    MalformedDatasetError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AttendanceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check network connectivity and that the endpoint is reachable",
            Self::FetchError { .. } => "Verify the dataset URL is still published and returns 2xx",
            Self::MalformedDatasetError(_) => {
                "Inspect the remote payload against the expected course/section/student shape"
            }
            Self::IoError(_) => "Check the terminal input/output streams",
            Self::InvalidConfigValueError { .. } => "Fix the flagged CLI argument and rerun",
        }
    }
}

pub type Result<T> = std::result::Result<T, AttendanceError>;
