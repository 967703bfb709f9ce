use anyhow::{Result, anyhow};
use serde_json::Value;

pub async fn request_summary(server_url: &str, video_url: &str) -> Result<Value> {
    let client = reqwest::Client::new();

    println!("🚀 Requesting summary from: {server_url}/summary");

    let response = client
        .get(format!("{server_url}/summary"))
        .query(&[("url", video_url)])
        .send()
        .await
        .map_err(|e| anyhow!("Failed to send request: {}", e))?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|e| anyhow!("Failed to read response: {}", e))?;

    let json: Value = serde_json::from_str(&response_text)
        .map_err(|e| anyhow!("Failed to parse JSON response: {}", e))?;

    if !status.is_success() {
        let detail = json["error"].as_str().unwrap_or(&response_text);
        return Err(anyhow!("Server returned error {}: {}", status, detail));
    }

    Ok(json)
}

pub async fn check_server_health(server_url: &str) -> Result<()> {
    let client = reqwest::Client::new();

    println!("🔍 Checking server health at: {server_url}/api/v1/health");

    let response = client
        .get(format!("{server_url}/api/v1/health"))
        .send()
        .await
        .map_err(|e| anyhow!("Failed to connect to server: {}", e))?;

    if response.status().is_success() {
        println!("✅ Server is healthy");
        Ok(())
    } else {
        Err(anyhow!("Server health check failed: {}", response.status()))
    }
}

pub async fn run_client(server_url: &str, video_url: &str) -> Result<()> {
    println!("🎬 Tube Digest Client");
    println!("=====================");
    println!("📺 Video: {video_url}");
    println!();

    if let Err(e) = check_server_health(server_url).await {
        eprintln!("❌ {e}");
        eprintln!("💡 Make sure the server is running: tube-digest serve");
        return Err(e);
    }

    match request_summary(server_url, video_url).await {
        Ok(result) => {
            println!("\n✅ Summary ready!");
            println!("📝 Result:");
            match result["summary"].as_str() {
                Some(summary) => println!("{summary}"),
                None => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Err(e) => {
            eprintln!("❌ Summary request failed: {e}");
            return Err(e);
        }
    }

    Ok(())
}
