use anyhow::Result;
use serde::Serialize;
use tracing::{error, info};

use crate::firms::AreaRequest;
use crate::models::Boundary;

const USERNAME: &str = "Nepal Forest Fire Watch";
const COLOR_ACTIVE: u32 = 0xFF0000;
const COLOR_QUIET: u32 = 0x00FF00;

#[derive(Serialize, Debug)]
struct WebhookEmbed {
    title: String,
    description: String,
    color: u32,
    timestamp: String,
}

#[derive(Serialize, Debug)]
struct WebhookPayload {
    username: String,
    embeds: Vec<WebhookEmbed>,
}

/// Posts a one-line hotspot summary to a Discord-style webhook
pub struct AlertWebhook {
    url: String,
    client: reqwest::Client,
}

impl AlertWebhook {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }

    pub async fn send_summary(
        &self,
        inside: usize,
        boundary: &Boundary,
        request: Option<&AreaRequest>,
    ) -> Result<()> {
        let payload = summary_payload(inside, boundary, request);

        let response = self.client.post(&self.url).json(&payload).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            error!("Failed to send hotspot alert: {}", error_text);
            anyhow::bail!("Hotspot alert failed: {}", error_text);
        }

        info!("Sent hotspot alert: {} active hotspot(s)", inside);
        Ok(())
    }
}

fn summary_payload(
    inside: usize,
    boundary: &Boundary,
    request: Option<&AreaRequest>,
) -> WebhookPayload {
    let title = if inside > 0 {
        format!("{} active fire hotspot(s) detected", inside)
    } else {
        "No active fires detected".to_string()
    };

    let mut description = format!("Boundary: {}", boundary.source());
    if let Some(req) = request {
        description.push_str(&format!(
            "\nSensor: {}\nWindow: last {} day(s)",
            req.sensor.label(),
            req.days
        ));
    }

    WebhookPayload {
        username: USERNAME.to_string(),
        embeds: vec![WebhookEmbed {
            title,
            description,
            color: if inside > 0 { COLOR_ACTIVE } else { COLOR_QUIET },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }],
    }
}
