use std::error::Error;

#[derive(Debug)]
pub struct RequestError {
    pub status: u16,
    pub message: String,
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "request failed with status {}: {}",
            self.status, self.message
        )
    }
}

impl Error for RequestError {}
