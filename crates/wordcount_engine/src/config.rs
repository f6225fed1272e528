use std::time::Duration;

use wordcount_core::DEFAULT_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub separator: char,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

/// Everything a socket job needs, passed explicitly instead of living in globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingContext {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub batch_interval: Duration,
    /// Records printed per batch before the listing is cut off with `...`.
    pub print_limit: usize,
}

impl StreamingContext {
    pub fn new(port: u16) -> Self {
        Self {
            app_name: "netcount".to_string(),
            host: "localhost".to_string(),
            port,
            batch_interval: Duration::from_secs(1),
            print_limit: 10,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
