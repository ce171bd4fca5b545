//! Plain-language explanation of a disruption scenario.

use crate::config::ExplainArgs;
use euc_core::explain::{ExplanationRequest, FALLBACK_MESSAGE};
use euc_core::impact::impact_metrics;
use euc_core::model::Disruption;
use log::{info, warn};

/// Payload for `disruption`, or `None` for the baseline.
pub fn explanation_request(disruption: Disruption) -> Option<ExplanationRequest> {
    impact_metrics(disruption).map(|m| ExplanationRequest::from_impact(disruption, &m))
}

pub async fn run_explain(disruption: Disruption, api: &ExplainArgs) -> anyhow::Result<()> {
    let Some(request) = explanation_request(disruption) else {
        anyhow::bail!("no disruption selected; choose one of suez, rotterdam, china-ban");
    };
    let text = match api.client(reqwest::Client::new()) {
        Ok(client) => {
            info!("Requesting explanation for {}", disruption);
            client.explain_or_fallback(&request).await
        }
        Err(e) => {
            warn!("{}", e);
            FALLBACK_MESSAGE.to_string()
        }
    };
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use euc_core::explain::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

    #[test]
    fn baseline_has_nothing_to_explain() {
        assert!(explanation_request(Disruption::None).is_none());
        let request = explanation_request(Disruption::Rotterdam).unwrap();
        assert_eq!(request.disruption_type, "Close Rotterdam Port");
        assert_eq!(request.capacity_reduction, "15%");
    }

    #[tokio::test]
    async fn missing_key_still_succeeds() {
        let api = ExplainArgs {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        };
        assert!(run_explain(Disruption::Suez, &api).await.is_ok());
        assert!(run_explain(Disruption::None, &api).await.is_err());
    }
}
