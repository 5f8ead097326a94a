use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = std::env::var("BOT_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

    println!("Testing finance bot");

    println!("\nMain page:");
    let root_response = client.get(format!("{}/", base_url)).send().await?;
    println!("Status: {}", root_response.status());
    let root_json: serde_json::Value = root_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&root_json)?);

    println!("\nBot message:");
    let ignored_response = client
        .post(format!("{}/query", base_url))
        .json(&json!({ "bot": true, "text": "ignored message" }))
        .send()
        .await?;
    let ignored_json: serde_json::Value = ignored_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&ignored_json)?);

    println!("\nQuestion:");
    let query_payload = json!({
        "user_name": "demo",
        "text": "tell me about budgeting",
        "bot": false
    });

    let query_response = client
        .post(format!("{}/query", base_url))
        .json(&query_payload)
        .send()
        .await?;

    println!("Status: {}", query_response.status());
    let query_json: serde_json::Value = query_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&query_json)?);

    Ok(())
}
