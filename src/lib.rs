pub mod cli;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod gemini;
pub mod retry;
pub mod server;
pub mod transcript;
pub mod video_id;
