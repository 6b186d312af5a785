use crate::types::RiskBucket;

/// Map an exposure risk score to the matching configured bucket.
///
/// Buckets are scanned in ascending `min_risk_score` order; the first bucket
/// whose inclusive range contains `score` wins. `None` means no bucket
/// matched — the caller must suppress any score-based notification or
/// message rather than guess one.
///
/// Overlapping ranges only occur in malformed configurations; first match
/// wins there too, which after the ingest sort means the bucket with the
/// lowest `min_risk_score`.
pub fn classify(score: i64, buckets: &[RiskBucket]) -> Option<&RiskBucket> {
    buckets.iter().find(|b| b.contains(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(min: i64, max: i64, title: &str) -> RiskBucket {
        RiskBucket {
            min_risk_score: min,
            max_risk_score: max,
            alert_title: title.to_string(),
            alert_message: format!("{title} message"),
            system_notification: format!("{title} notification"),
            link_url: "https://example.org/advice".to_string(),
            callback_enabled: false,
        }
    }

    #[test]
    fn score_lands_in_the_containing_bucket() {
        let buckets = vec![bucket(0, 5, "low"), bucket(6, 10, "high")];

        let cases = [
            (0, Some("low")),
            (3, Some("low")),
            (5, Some("low")),
            (6, Some("high")),
            (7, Some("high")),
            (10, Some("high")),
            (11, None),
            (-1, None),
        ];
        for (score, expected) in cases {
            let got = classify(score, &buckets).map(|b| b.alert_title.as_str());
            assert_eq!(got, expected, "score {score}");
        }
    }

    #[test]
    fn no_buckets_means_no_match() {
        assert!(classify(7, &[]).is_none());
    }

    #[test]
    fn gap_between_buckets_is_a_miss() {
        let buckets = vec![bucket(0, 5, "low"), bucket(10, 20, "high")];
        assert!(classify(7, &buckets).is_none());
    }

    #[test]
    fn overlap_resolves_to_first_bucket() {
        // Malformed config: ranges overlap. Documented fallback is first match.
        let buckets = vec![bucket(0, 10, "first"), bucket(5, 15, "second")];
        let got = classify(7, &buckets).map(|b| b.alert_title.as_str());
        assert_eq!(got, Some("first"));
    }
}
