use reqwest::Client;
use serde_json::json;
use tokio;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = "http://127.0.0.1:3000";

    println!("🔍 Testing SWOT Analysis API");

    // Health check
    println!("\n📋 Health Check:");
    let health_response = client
        .get(&format!("{}/health", base_url))
        .send()
        .await?;

    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    // Sample organizations
    println!("\n🏢 Sample Organizations:");
    let samples_response = client
        .get(&format!("{}/samples", base_url))
        .send()
        .await?;

    let samples_json: serde_json::Value = samples_response.json().await?;
    if let Some(names) = samples_json.as_array() {
        for sample in names {
            println!("- {}", sample["name"]);
        }
    }

    // Analysis request
    println!("\n📊 Analysis Test:");
    let analyze_payload = json!({
        "organization": "TechMinds is a 3-year-old tech startup with 50 employees focused on \
AI-driven customer service solutions. They have secured $8.5M in Series A funding, employ 30 \
PhD-level AI specialists, and compete against established CRM giants who are rapidly developing \
their own AI capabilities."
    });

    let analyze_response = client
        .post(&format!("{}/analyze", base_url))
        .header("Content-Type", "application/json")
        .json(&analyze_payload)
        .send()
        .await?;

    println!("Status: {}", analyze_response.status());
    let analyze_json: serde_json::Value = analyze_response.json().await?;
    println!(
        "Strengths found: {}",
        analyze_json["components"]["strengths"]
            .as_array()
            .map(|a| a.len())
            .unwrap_or(0)
    );
    println!(
        "Processing time: {} ms",
        analyze_json["processing_time_ms"]
    );

    println!("\n✅ Client test completed!");
    Ok(())
}
