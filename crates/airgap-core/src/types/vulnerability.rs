use serde::{Deserialize, Serialize};

/// Known vulnerability counts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vulnerabilities {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Vulnerabilities {
    pub fn total(&self) -> u64 {
        u64::from(self.critical) + u64::from(self.high) + u64::from(self.medium) + u64::from(self.low)
    }

    pub fn has_high_or_critical(&self) -> bool {
        self.critical > 0 || self.high > 0
    }
}
