use serde::{Deserialize, Serialize};

/// A generated narrative report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub markdown: String,
}
