use crate::application::error::FetchError;

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::from_message("Request timeout".to_string())
        } else if error.is_connect() {
            FetchError::from_message(format!("Connection failed: {}", error))
        } else {
            FetchError::from_message(error.to_string())
        }
    }
}
