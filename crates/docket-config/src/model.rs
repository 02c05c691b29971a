//! Configuration schema for the docket workbench.

use serde::{Deserialize, Serialize};

/// Root config for a docket workbench.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DocketConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub transfer: TransferConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl DocketConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> DocketConfigBuilder {
        DocketConfigBuilder::new()
    }
}

/// Builder for assembling a `DocketConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct DocketConfigBuilder {
    config: DocketConfig,
}

impl DocketConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: DocketConfig::default(),
        }
    }

    /// Replace the chat session configuration.
    pub fn chat(mut self, chat: ChatConfig) -> Self {
        self.config.chat = chat;
        self
    }

    /// Replace the simulated transfer configuration.
    pub fn transfer(mut self, transfer: TransferConfig) -> Self {
        self.config.transfer = transfer;
        self
    }

    /// Replace the demo data seeding configuration.
    pub fn seed(mut self, seed: SeedConfig) -> Self {
        self.config.seed = seed;
        self
    }

    /// Finalize and return the built `DocketConfig`.
    pub fn build(self) -> DocketConfig {
        self.config
    }
}

/// Configuration for the conversation session and reply reveal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Milliseconds between reveal ticks.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Greeting seeded into new sessions; `None` starts an empty transcript.
    #[serde(default = "default_greeting")]
    pub greeting: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            greeting: default_greeting(),
        }
    }
}

/// Delays for simulated upload and download transfers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferConfig {
    /// Milliseconds between the first and second upload progress stages.
    #[serde(default = "default_upload_delay_ms")]
    pub upload_delay_ms: u64,
    /// Milliseconds the completed upload lingers before settling.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Milliseconds a simulated download takes.
    #[serde(default = "default_download_delay_ms")]
    pub download_delay_ms: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            upload_delay_ms: default_upload_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            download_delay_ms: default_download_delay_ms(),
        }
    }
}

/// Demo data seeding for new workbenches.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeedConfig {
    /// Seed the demo knowledge base and requirement board.
    #[serde(default)]
    pub demo_data: bool,
}

fn default_tick_ms() -> u64 {
    20
}

fn default_greeting() -> Option<String> {
    Some("Hello! I'm your AI assistant. How can I help you today?".to_string())
}

fn default_upload_delay_ms() -> u64 {
    1000
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_download_delay_ms() -> u64 {
    2000
}
