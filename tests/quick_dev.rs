use anyhow::Result;
use serde_json::{json, Value};

// Smoke script against a locally running server. Export TOKEN with a JWT
// whose `sub` is a seeded user id before running:
//
//   TOKEN=... cargo test --test quick_dev -- --ignored --nocapture
#[tokio::test]
#[ignore]
async fn quick_dev() -> Result<()> {
    let base = "http://localhost:8080/api";
    let token = std::env::var("TOKEN").unwrap_or_default();
    let client = reqwest::Client::new();

    let res = client.get(format!("{base}/healthz")).send().await?;
    println!("healthz: {} {}", res.status(), res.text().await?);

    // Text-only post, expect 201 with the persisted record.
    let res = client
        .post(format!("{base}/posts"))
        .bearer_auth(&token)
        .json(&json!({ "text": "hello" }))
        .send()
        .await?;
    println!("text post: {}", res.status());
    println!("{:#?}", res.json::<Value>().await?);

    // Neither text nor image, expect 400.
    let res = client
        .post(format!("{base}/posts"))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await?;
    println!("empty post: {} {}", res.status(), res.text().await?);

    // Inline image, expect 201 with a res.cloudinary.com URL in `image`.
    let res = client
        .post(format!("{base}/posts"))
        .bearer_auth(&token)
        .json(&json!({
            "img": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg=="
        }))
        .send()
        .await?;
    println!("image post: {}", res.status());
    println!("{:#?}", res.json::<Value>().await?);

    let res = client
        .get(format!("{base}/posts"))
        .bearer_auth(&token)
        .send()
        .await?;
    println!("feed: {}", res.status());
    println!("{:#?}", res.json::<Value>().await?);

    Ok(())
}
