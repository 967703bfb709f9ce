#[derive(Debug, serde::Serialize)]
pub struct SummaryDto {
    pub summary: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
