use reqwest::header::HeaderMap;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
}

#[derive(Debug, Default)]
pub struct RateLimitTracker {
    last: Mutex<Option<RateLimit>>,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    // Overwrites the previous reading, whatever the response status was.
    pub fn record(&self, headers: &HeaderMap) {
        let reading = RateLimit {
            limit: header_count(headers, "x-ratelimit-limit"),
            remaining: header_count(headers, "x-ratelimit-remaining"),
        };
        *self.last.lock().unwrap() = Some(reading);
    }

    pub fn snapshot(&self) -> Option<RateLimit> {
        *self.last.lock().unwrap()
    }
}

fn header_count(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn headers(limit: &str, remaining: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_str(limit).unwrap());
        headers.insert(
            "x-ratelimit-remaining",
            HeaderValue::from_str(remaining).unwrap(),
        );
        headers
    }

    #[test]
    fn test_empty_before_first_response() {
        let tracker = RateLimitTracker::new();
        assert!(tracker.snapshot().is_none());
    }

    #[test]
    fn test_record_overwrites_previous_reading() {
        let tracker = RateLimitTracker::new();

        tracker.record(&headers("5000", "4999"));
        assert_eq!(
            tracker.snapshot(),
            Some(RateLimit {
                limit: Some(5000),
                remaining: Some(4999),
            })
        );

        tracker.record(&headers("5000", "4998"));
        assert_eq!(tracker.snapshot().unwrap().remaining, Some(4998));
    }

    #[test]
    fn test_record_with_missing_headers() {
        let tracker = RateLimitTracker::new();
        tracker.record(&headers("5000", "4999"));

        tracker.record(&HeaderMap::new());
        assert_eq!(
            tracker.snapshot(),
            Some(RateLimit {
                limit: None,
                remaining: None,
            })
        );
    }
}
