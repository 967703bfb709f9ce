pub mod captions;
pub mod gemini;

pub use captions::MockCaptions;
pub use gemini::MockGemini;
