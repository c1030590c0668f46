//! Model gateway adapters
//!
//! Each adapter implements [`ModelGateway`](flows_application::ModelGateway).

pub mod echo;
pub mod openai;

pub use echo::EchoGateway;
pub use openai::OpenAiCompatibleGateway;

use crate::config::{FileGatewayConfig, GatewayProvider};
use flows_application::{GatewayError, ModelGateway};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Build the gateway selected by `[gateway] provider`.
pub fn build_gateway(config: &FileGatewayConfig) -> Result<Arc<dyn ModelGateway>, GatewayError> {
    match config.provider {
        GatewayProvider::Echo => {
            info!("Using echo gateway");
            Ok(Arc::new(EchoGateway::new()))
        }
        GatewayProvider::OpenAi => {
            let api_key = config.resolve_api_key();
            if api_key.is_none() {
                warn!(
                    "No API key found (set {} or gateway.api_key); sending unauthenticated requests",
                    config.api_key_env
                );
            }
            info!("Using OpenAI-compatible gateway at {} ({})", config.base_url, config.model);
            let gateway = OpenAiCompatibleGateway::new(
                &config.base_url,
                &config.model,
                api_key,
                Duration::from_secs(config.timeout_seconds),
            )?;
            Ok(Arc::new(gateway))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_echo_gateway() {
        let config = FileGatewayConfig {
            provider: GatewayProvider::Echo,
            ..Default::default()
        };
        let gateway = build_gateway(&config).unwrap();
        let reply = gateway
            .generate("ping", &Default::default())
            .await
            .unwrap();
        assert_eq!(reply.text, "ping");
    }

    #[test]
    fn test_build_openai_gateway_without_key() {
        let config = FileGatewayConfig {
            api_key_env: "DEBATE_FLOWS_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(build_gateway(&config).is_ok());
    }
}
