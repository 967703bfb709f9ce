use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use log::{debug, error, info, warn};
use serde::Deserialize;

use crate::config::GeminiConfig;
use crate::dto::{ErrorDto, SummaryDto};
use crate::gemini::{GeminiClient, Summarizer, Translator};
use crate::transcript::{self, CaptionSource, captions::YouTubeCaptions};
use crate::video_id::extract_video_id;

pub struct AppState<C, G> {
    pub captions: C,
    pub gemini: G,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub url: String,
}

#[get("/api/v1/health")]
pub async fn health_check() -> impl Responder {
    debug!("Health check endpoint called");
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Tube Digest summary service is running"
    }))
}

/// `GET /summary?url=<video url>`: validate, extract the video id, run the
/// transcript fallback chain, then summarize. Each step short-circuits to
/// its error response.
pub async fn summary<C, G>(
    data: web::Data<AppState<C, G>>,
    query: web::Query<SummaryQuery>,
) -> HttpResponse
where
    C: CaptionSource,
    G: Translator + Summarizer,
{
    debug!("Summary request received");

    let url = query.url.trim();
    if url.is_empty() {
        warn!("Summary request without a url parameter");
        return HttpResponse::BadRequest().json(ErrorDto::new("No URL provided."));
    }

    let Some(video_id) = extract_video_id(url) else {
        warn!("Could not extract a video id from: {url}");
        return HttpResponse::BadRequest().json(ErrorDto::new("Invalid YouTube URL format."));
    };

    info!("Fetching transcript for video {video_id}");
    let transcript =
        match transcript::fetch_transcript(&data.captions, &data.gemini, &video_id).await {
            Ok(text) => text,
            Err(e) => {
                // Availability failures describe the video, so their message
                // is safe to expose.
                warn!("Transcript unavailable for {video_id}: {e}");
                return HttpResponse::NotFound().json(ErrorDto::new(e.to_string()));
            }
        };

    if transcript.trim().is_empty() {
        warn!("Transcript for {video_id} is empty");
        return HttpResponse::NotFound().json(ErrorDto::new("Transcript is empty."));
    }

    info!(
        "Summarizing {} characters of transcript for {video_id}",
        transcript.len()
    );
    match data.gemini.summarize(&transcript).await {
        Ok(summary) => HttpResponse::Ok().json(SummaryDto { summary }),
        Err(e) => {
            error!("Summarization failed for {video_id}: {e}");
            HttpResponse::InternalServerError().json(ErrorDto::new(
                "Internal error occurred. Ensure video has English captions.",
            ))
        }
    }
}

pub async fn run_server(host: String, port: u16) -> std::io::Result<()> {
    info!("Starting Tube Digest summary service");

    let config = match GeminiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Using generation service: base={}, model={}",
        config.api_base, config.model
    );

    let app_state = web::Data::new(AppState {
        captions: YouTubeCaptions::new(),
        gemini: GeminiClient::new(config),
    });

    info!("Starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health_check)
            .route(
                "/summary",
                web::get().to(summary::<YouTubeCaptions, GeminiClient>),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
