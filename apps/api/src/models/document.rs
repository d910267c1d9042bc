use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::cv::CvData;
use crate::models::theme::ThemeConfig;

/// The single CV being edited: content, look, and an edit counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvDocument {
    pub data: CvData,
    pub theme: ThemeConfig,
    /// Incremented by every successful mutation.
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

impl CvDocument {
    pub fn new() -> Self {
        CvDocument {
            data: CvData::sample(),
            theme: ThemeConfig::default(),
            revision: 0,
            updated_at: Utc::now(),
        }
    }

    /// Records that the document changed.
    pub fn touch(&mut self) {
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for CvDocument {
    fn default() -> Self {
        Self::new()
    }
}
