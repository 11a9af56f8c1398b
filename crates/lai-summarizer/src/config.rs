// lai-summarizer/crates/lai-summarizer/src/config.rs

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::{info, warn};

use crate::summarizer::{policy::DEFAULT_MIN_CHARS, InputPolicy, Strategy};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub min_input_chars: usize,
    pub summary_sentences: usize,
    pub truncate_words: usize,
    pub default_strategy: Strategy,
    pub max_batch_size: usize,
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 8000,
            min_input_chars: DEFAULT_MIN_CHARS,
            summary_sentences: 3,
            truncate_words: 50,
            default_strategy: Strategy::Frequency,
            max_batch_size: 64,
            request_timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            info!("No .env file loaded ({}). Using system environment variables.", e);
        } else {
            info!("Loaded environment variables from .env file");
        }

        let default_strategy = env::var("DEFAULT_STRATEGY").unwrap_or_else(|_| "frequency".into());
        let default_strategy = Strategy::from_str(&default_strategy)
            .with_context(|| format!("Invalid DEFAULT_STRATEGY: {}", default_strategy))?;

        let config = Self {
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "8000".into())
                .parse()
                .context("API_PORT must be a port number")?,
            min_input_chars: env::var("MIN_INPUT_CHARS")
                .unwrap_or_else(|_| DEFAULT_MIN_CHARS.to_string())
                .parse()
                .context("MIN_INPUT_CHARS must be a non-negative integer")?,
            summary_sentences: env::var("SUMMARY_SENTENCES")
                .unwrap_or_else(|_| "3".into())
                .parse()
                .context("SUMMARY_SENTENCES must be a non-negative integer")?,
            truncate_words: env::var("TRUNCATE_WORDS")
                .unwrap_or_else(|_| "50".into())
                .parse()
                .context("TRUNCATE_WORDS must be a non-negative integer")?,
            default_strategy,
            max_batch_size: env::var("MAX_BATCH_SIZE")
                .unwrap_or_else(|_| "64".into())
                .parse()
                .context("MAX_BATCH_SIZE must be a non-negative integer")?,
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .context("REQUEST_TIMEOUT_SECONDS must be a number of seconds")?,
        };

        if config.summary_sentences == 0 {
            warn!("SUMMARY_SENTENCES is 0; frequency summaries will contain no sentences");
        }

        Ok(config)
    }

    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy::new(self.min_input_chars)
    }

    pub fn print_config(&self) {
        info!("Current Configuration:");
        info!("- API: {}:{}", self.api_host, self.api_port);
        info!("- Minimum Input: {} chars", self.min_input_chars);
        info!("- Default Strategy: {}", self.default_strategy);
        info!("- Summary Sentences: {}", self.summary_sentences);
        info!("- Truncate Words: {}", self.truncate_words);
        info!("- Max Batch Size: {}", self.max_batch_size);
        info!("- Request Timeout: {}s", self.request_timeout_seconds);
    }

    pub fn api_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.api_host, self.api_port)
            .parse()
            .with_context(|| format!("Invalid API address {}:{}", self.api_host, self.api_port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::Summarizer;

    fn create_test_config() -> Config {
        Config {
            api_host: "127.0.0.1".to_string(),
            api_port: 8000,
            min_input_chars: 50,
            summary_sentences: 3,
            truncate_words: 50,
            default_strategy: Strategy::Frequency,
            max_batch_size: 64,
            request_timeout_seconds: 30,
        }
    }

    // ===== Defaults =====

    #[test]
    fn test_default_matches_documented_values() {
        let config = Config::default();
        let expected = create_test_config();

        assert_eq!(config.api_host, expected.api_host);
        assert_eq!(config.api_port, expected.api_port);
        assert_eq!(config.min_input_chars, 50);
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.truncate_words, 50);
        assert_eq!(config.default_strategy, Strategy::Frequency);
    }

    #[test]
    fn test_input_policy_uses_min_chars() {
        let mut config = create_test_config();
        config.min_input_chars = 10;
        assert_eq!(config.input_policy().min_chars, 10);
    }

    // ===== API Address Tests =====

    #[test]
    fn test_api_addr_parsing() {
        let config = create_test_config();
        let addr = config.api_addr().unwrap();

        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_api_addr_with_zero_address() {
        let mut config = create_test_config();
        config.api_host = "0.0.0.0".to_string();
        config.api_port = 5000;

        let addr = config.api_addr().unwrap();
        assert_eq!(addr.port(), 5000);
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_api_addr_rejects_hostname() {
        let mut config = create_test_config();
        config.api_host = "not a host".to_string();
        assert!(config.api_addr().is_err());
    }

    // ===== Strategy wiring =====

    #[test]
    fn test_strategy_summarizer_honors_limits() {
        let mut config = create_test_config();
        config.summary_sentences = 1;
        config.truncate_words = 2;

        let frequency = Strategy::Frequency.summarizer(&config);
        assert_eq!(frequency.summarize("Alpha beta. Gamma delta. Epsilon zeta."), "Alpha beta.");

        let truncate = Strategy::Truncate.summarizer(&config);
        assert_eq!(truncate.summarize("one two three"), "one two...");
    }

    #[test]
    fn test_config_clone() {
        let config1 = create_test_config();
        let config2 = config1.clone();

        assert_eq!(config1.api_host, config2.api_host);
        assert_eq!(config1.max_batch_size, config2.max_batch_size);
    }
}
