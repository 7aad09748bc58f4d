//! Support plan tiers applied to tickets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CraftnetError;

/// Support tier, lowest to highest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportPlan {
    #[default]
    Basic,
    Pro,
    Premium,
}

impl SupportPlan {
    pub const ALL: [SupportPlan; 3] = [Self::Basic, Self::Pro, Self::Premium];

    /// Label used for ticket tags and stored on subscriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for SupportPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportPlan {
    type Err = CraftnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "pro" => Ok(Self::Pro),
            "premium" => Ok(Self::Premium),
            _ => Err(CraftnetError::InvalidPlan {
                label: s.to_string(),
            }),
        }
    }
}
