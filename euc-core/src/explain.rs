//! Plain-language disruption explanations from a chat-completion endpoint.

use crate::error::{EucError, Result};
use crate::impact::ImpactMetrics;
use crate::model::Disruption;
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-small-latest";
pub const FALLBACK_MESSAGE: &str = "Failed to generate explanation. Please try again.";

const MAX_TOKENS: u32 = 400;
const TEMPERATURE: f32 = 0.2;

/// Disruption facts handed to the model.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationRequest {
    pub disruption_type: String,
    pub affected_volume_tons: u64,
    pub economic_impact: String,
    pub capacity_reduction: String,
    pub time_to_resolve: String,
    pub alternative_route: String,
    pub affected_facilities: Vec<String>,
}

impl ExplanationRequest {
    pub fn from_impact(disruption: Disruption, metrics: &ImpactMetrics) -> Self {
        Self {
            disruption_type: disruption.title().to_string(),
            affected_volume_tons: metrics.affected_volume_tons,
            economic_impact: metrics.economic_impact.to_string(),
            capacity_reduction: format!("{}%", metrics.eu_capacity_reduction_pct),
            time_to_resolve: metrics.resolution_time.to_string(),
            alternative_route: metrics.alternative_route.to_string(),
            affected_facilities: metrics
                .affected_facilities
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "You are an expert supply chain analyst explaining complex supply chain disruptions to non-technical stakeholders.

Please explain this supply chain disruption in simple, clear terms that a business executive or policy maker could understand:

Disruption Type: {}
Material Volume Affected: {} tons
Economic Impact: {}
Capacity Reduction: {}
Time to Resolve: {}
Alternative Route: {}
Affected Facilities: {}

Please provide a concise explanation in exactly 3 short paragraphs:

1. **Business Impact**: What this disruption means in simple business terms
2. **Strategic Risk**: Why this threatens EU supply chain security
3. **Immediate Actions**: What decision-makers should do now

Use simple language, avoid technical jargon, and keep each paragraph to 2-3 sentences maximum.",
            self.disruption_type,
            self.affected_volume_tons,
            self.economic_impact,
            self.capacity_reduction,
            self.time_to_resolve,
            self.alternative_route,
            self.affected_facilities.join(", "),
        )
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Pull the first choice's text out of a completion response body.
fn completion_text(body: &str) -> Result<String> {
    let response: CompletionResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(EucError::EmptyCompletion)
}

#[derive(Debug, Clone)]
pub struct ExplainClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ExplainClient {
    pub fn new(client: Client, api_key: &str) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Single attempt; non-success status is an error.
    pub async fn explain(&self, request: &ExplanationRequest) -> Result<String> {
        let prompt = request.prompt();
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EucError::BadStatus {
                resource: "explanation endpoint".to_string(),
                status: status.as_u16(),
            });
        }
        let text = completion_text(&response.text().await?)?;
        info!("Received {} character explanation", text.len());
        Ok(text)
    }

    /// Like [`explain`](Self::explain) but never fails: errors are logged and
    /// replaced by [`FALLBACK_MESSAGE`].
    pub async fn explain_or_fallback(&self, request: &ExplanationRequest) -> String {
        match self.explain(request).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error calling explanation endpoint: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
