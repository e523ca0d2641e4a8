//! Contract types and their fixed daily package quotas.

use serde::{Deserialize, Serialize};

/// Daily quota for a permanent contract.
pub const QUOTA_CDI: u32 = 1260;
/// Daily quota for a fixed-term contract.
pub const QUOTA_CDD: u32 = 1190;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContractType {
    /// Permanent contract
    #[default]
    #[serde(rename = "CDI")]
    Cdi,
    /// Fixed-term contract
    #[serde(rename = "CDD")]
    Cdd,
}

impl ContractType {
    pub fn code(&self) -> &'static str {
        match self {
            ContractType::Cdi => "CDI",
            ContractType::Cdd => "CDD",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CDI" => Some(ContractType::Cdi),
            "CDD" => Some(ContractType::Cdd),
            _ => None,
        }
    }

    pub fn daily_quota(&self) -> u32 {
        match self {
            ContractType::Cdi => QUOTA_CDI,
            ContractType::Cdd => QUOTA_CDD,
        }
    }
}

/// Quota for a contract code as stored in a profile. Unknown or missing
/// contracts fall back to the CDI quota.
pub fn quota_for(contract: Option<&str>) -> u32 {
    contract
        .and_then(ContractType::from_code)
        .unwrap_or_default()
        .daily_quota()
}
