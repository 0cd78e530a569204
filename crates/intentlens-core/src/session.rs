use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language the user reads the tool in. Free-text model output follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InterfaceLanguage {
    #[default]
    English,
    Chinese,
}

impl InterfaceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceLanguage::English => "English",
            InterfaceLanguage::Chinese => "Chinese",
        }
    }

    /// Language requested for `market_insight` and `rationale`.
    pub fn explanation_language(&self) -> &'static str {
        match self {
            InterfaceLanguage::English => "English",
            _ => "Chinese",
        }
    }
}

impl fmt::Display for InterfaceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(InterfaceLanguage::English),
            "chinese" | "zh" => Ok(InterfaceLanguage::Chinese),
            other => Err(format!(
                "Invalid interface language: {}. Must be one of: English, Chinese",
                other
            )),
        }
    }
}

/// Account level of the person driving the tool. Only the presentation layer
/// looks at it; the orchestrator behaves the same for every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    Guest,
    Registered,
    #[default]
    Privileged,
}

impl AccessTier {
    pub fn max_markets(&self) -> usize {
        match self {
            AccessTier::Guest => 1,
            AccessTier::Registered => 5,
            AccessTier::Privileged => 99,
        }
    }

    pub fn can_export(&self) -> bool {
        matches!(self, AccessTier::Privileged)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessTier::Guest => "guest",
            AccessTier::Registered => "registered",
            AccessTier::Privileged => "privileged",
        }
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(AccessTier::Guest),
            "registered" | "free" => Ok(AccessTier::Registered),
            "privileged" | "vip" => Ok(AccessTier::Privileged),
            other => Err(format!(
                "Invalid tier: {}. Must be one of: guest, registered, privileged",
                other
            )),
        }
    }
}

/// Per-invocation user context, passed explicitly from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(default)]
    pub interface_language: InterfaceLanguage,
    #[serde(default)]
    pub tier: AccessTier,
}

impl SessionContext {
    pub fn new(interface_language: InterfaceLanguage, tier: AccessTier) -> Self {
        Self {
            interface_language,
            tier,
        }
    }

    /// Check a market selection against the tier cap.
    pub fn check_market_count(&self, count: usize) -> Result<(), String> {
        let max = self.tier.max_markets();
        if count > max {
            return Err(format!(
                "You can only select up to {} countr{}. Current tier: {}",
                max,
                if max > 1 { "ies" } else { "y" },
                self.tier.as_str().to_uppercase()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_limits() {
        assert_eq!(AccessTier::Guest.max_markets(), 1);
        assert_eq!(AccessTier::Registered.max_markets(), 5);
        assert_eq!(AccessTier::Privileged.max_markets(), 99);
        assert!(!AccessTier::Registered.can_export());
        assert!(AccessTier::Privileged.can_export());
    }

    #[test]
    fn test_tier_parsing_accepts_legacy_names() {
        assert_eq!("vip".parse::<AccessTier>().unwrap(), AccessTier::Privileged);
        assert_eq!("free".parse::<AccessTier>().unwrap(), AccessTier::Registered);
        assert!("admin".parse::<AccessTier>().is_err());
    }

    #[test]
    fn test_explanation_language() {
        assert_eq!(InterfaceLanguage::English.explanation_language(), "English");
        assert_eq!(InterfaceLanguage::Chinese.explanation_language(), "Chinese");
    }

    #[test]
    fn test_market_count_check() {
        let guest = SessionContext::new(InterfaceLanguage::English, AccessTier::Guest);
        assert!(guest.check_market_count(1).is_ok());
        let err = guest.check_market_count(2).unwrap_err();
        assert!(err.contains("up to 1 country"));
        assert!(err.contains("GUEST"));

        let registered = SessionContext::new(InterfaceLanguage::Chinese, AccessTier::Registered);
        assert!(registered.check_market_count(5).is_ok());
        assert!(registered.check_market_count(6).unwrap_err().contains("5 countries"));
    }
}
