use intentlens_ai::distinct_markets;
use intentlens_core::SessionContext;

/// Reject a selection before any generation starts. Returns the message to show.
///
/// Repeated countries count once, matching what the run processes.
pub fn validate_selection<S: AsRef<str>>(
    seed: &str,
    markets: &[S],
    session: &SessionContext,
) -> Result<(), String> {
    if seed.trim().is_empty() {
        return Err("Please enter an English seed keyword!".to_string());
    }
    if markets.is_empty() {
        return Err("Please select at least one target market!".to_string());
    }
    session.check_market_count(distinct_markets(markets).len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intentlens_core::{AccessTier, InterfaceLanguage};

    #[test]
    fn test_blank_seed_and_empty_selection() {
        let session = SessionContext::default();
        assert_eq!(
            validate_selection("  ", &["Germany"], &session).unwrap_err(),
            "Please enter an English seed keyword!"
        );
        assert_eq!(
            validate_selection::<&str>("desk", &[], &session).unwrap_err(),
            "Please select at least one target market!"
        );
        assert!(validate_selection("desk", &["Germany"], &session).is_ok());
    }

    #[test]
    fn test_tier_cap() {
        let guest = SessionContext::new(InterfaceLanguage::English, AccessTier::Guest);
        let err = validate_selection("desk", &["Germany", "Japan"], &guest).unwrap_err();
        assert_eq!(err, "You can only select up to 1 country. Current tier: GUEST");

        let registered = SessionContext::new(InterfaceLanguage::English, AccessTier::Registered);
        assert!(validate_selection("desk", &["A", "B", "C", "D", "E"], &registered).is_ok());
        assert!(validate_selection("desk", &["A", "B", "C", "D", "E", "F"], &registered).is_err());
    }

    #[test]
    fn test_repeated_markets_count_once() {
        let guest = SessionContext::new(InterfaceLanguage::English, AccessTier::Guest);
        assert!(validate_selection("desk", &["Germany", "Germany"], &guest).is_ok());
        assert!(validate_selection("desk", &["Germany", "Japan", "Germany"], &guest).is_err());

        let registered = SessionContext::new(InterfaceLanguage::English, AccessTier::Registered);
        let markets = ["A", "B", "C", "D", "E", "A", "B"];
        assert!(validate_selection("desk", &markets, &registered).is_ok());
    }
}
