//! Register a deployed project with a 10,000 Ideas registry.
//!
//! Meant to run after a deploy:
//!
//! ```text
//! REGISTRY_ENDPOINT=https://ideas.example.com/api/register-project \
//! DEPLOYMENT_URL=my-app.example.com \
//! register_project
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::json;
use site_metadata::normalize_url;

#[derive(Parser)]
#[command(name = "register_project")]
#[command(about = "Register a project URL with the registry")]
struct Cli {
    /// Registry endpoint, e.g. https://host/api/register-project
    #[arg(long, env = "REGISTRY_ENDPOINT")]
    endpoint: String,

    /// Project URL; scheme-less values get https://
    #[arg(long, env = "DEPLOYMENT_URL")]
    url: Option<String>,
}

#[derive(Deserialize)]
struct RegisteredProject {
    title: String,
    url: Option<String>,
}

#[derive(Deserialize)]
struct RegisterResponse {
    project: RegisteredProject,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Vercel exposes the deployment host as VERCEL_URL
    let raw_url = cli
        .url
        .or_else(|| std::env::var("VERCEL_URL").ok())
        .filter(|u| !u.trim().is_empty())
        .context("No project URL: pass --url or set DEPLOYMENT_URL / VERCEL_URL")?;
    let url = normalize_url(&raw_url);

    println!("Registering {} with {}", url, cli.endpoint);

    let response = reqwest::Client::new()
        .post(&cli.endpoint)
        .json(&json!({ "url": url }))
        .send()
        .await
        .with_context(|| format!("Failed to reach registry at {}", cli.endpoint))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| "no error message".to_string());
        bail!("Registration failed ({}): {}", status, message);
    }

    let registered: RegisterResponse = response
        .json()
        .await
        .context("Registry returned an unexpected response")?;

    println!(
        "Registered \"{}\" ({})",
        registered.project.title,
        registered.project.url.as_deref().unwrap_or(&url)
    );

    Ok(())
}
