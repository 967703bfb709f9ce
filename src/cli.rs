use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tube-digest",
    about = "Tube Digest - YouTube transcript summarization service",
    long_about = "Fetches a YouTube video's transcript (manual captions, auto-generated captions, \
translated foreign captions, or a raw caption scrape) and condenses it into a short bullet-point \
summary via the Gemini API, served over a single HTTP endpoint.",
    after_help = "EXAMPLES:\n    # Start the summary server\n    tube-digest serve\n\n    # Serve on another interface/port\n    tube-digest serve --host 0.0.0.0 --port 9000\n\n    # Summarize a video through a running server\n    tube-digest summarize \"https://www.youtube.com/watch?v=dQw4w9WgXcQ\"\n\n    # Use a different server\n    tube-digest summarize \"https://youtu.be/dQw4w9WgXcQ\" --server-url http://my-server:8080"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(name = "serve")]
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value = "8080")]
        port: u16,
    },
    #[command(name = "summarize")]
    Summarize {
        video_url: String,

        #[arg(long, default_value = "http://localhost:8080")]
        server_url: String,
    },
}
