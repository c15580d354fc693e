//! Release age evaluation

use chrono::{DateTime, Utc};

/// Age is measured in 30-day months, matching how it is reported
pub const SECONDS_PER_MONTH: f64 = 30.0 * 24.0 * 60.0 * 60.0;

/// Default number of months after which an upstream counts as stale
pub const DEFAULT_STALE_AFTER_MONTHS: f64 = 6.0;

/// Returns the age of a release in 30-day months
pub fn months_since(published: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - published).num_seconds() as f64 / SECONDS_PER_MONTH
}

/// Outcome of checking a release date against the staleness threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Staleness {
    /// Whether the release is older than the threshold
    pub is_stale: bool,
    /// Age of the release in 30-day months
    pub months_since_release: f64,
}

impl Staleness {
    /// Evaluates a publish timestamp against the threshold
    ///
    /// Stale only when the age strictly exceeds the threshold, so a release
    /// exactly at the boundary still counts as maintained.
    pub fn evaluate(published: DateTime<Utc>, now: DateTime<Utc>, threshold_months: f64) -> Self {
        let months = months_since(published, now);
        Self {
            is_stale: months > threshold_months,
            months_since_release: months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_months_since_thirty_day_months() {
        let now = fixed_now();
        let published = now - Duration::days(60);
        assert_eq!(months_since(published, now), 2.0);
    }

    #[test]
    fn test_stale_just_over_threshold() {
        let now = fixed_now();
        let published = now - Duration::days(181);
        let staleness = Staleness::evaluate(published, now, DEFAULT_STALE_AFTER_MONTHS);

        assert!(staleness.is_stale);
        assert!(staleness.months_since_release > 6.0);
    }

    #[test]
    fn test_fresh_just_under_threshold() {
        let now = fixed_now();
        let published = now - Duration::days(179);
        let staleness = Staleness::evaluate(published, now, DEFAULT_STALE_AFTER_MONTHS);

        assert!(!staleness.is_stale);
        assert!(staleness.months_since_release < 6.0);
    }

    #[test]
    fn test_exactly_at_threshold_is_not_stale() {
        let now = fixed_now();
        let published = now - Duration::days(180);
        let staleness = Staleness::evaluate(published, now, DEFAULT_STALE_AFTER_MONTHS);

        assert_eq!(staleness.months_since_release, 6.0);
        assert!(!staleness.is_stale);
    }

    #[test]
    fn test_custom_threshold() {
        let now = fixed_now();
        let published = now - Duration::days(45);

        let strict = Staleness::evaluate(published, now, 1.0);
        assert!(strict.is_stale);

        let lenient = Staleness::evaluate(published, now, 2.0);
        assert!(!lenient.is_stale);
    }

    #[test]
    fn test_future_publish_date_is_not_stale() {
        let now = fixed_now();
        let published = now + Duration::days(3);
        let staleness = Staleness::evaluate(published, now, DEFAULT_STALE_AFTER_MONTHS);

        assert!(!staleness.is_stale);
        assert!(staleness.months_since_release < 0.0);
    }
}
