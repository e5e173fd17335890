use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::github::client::GitHubClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRelation {
    pub url: String,
    pub rel: Rel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rel {
    Next,
    Last,
    First,
    Prev,
}

impl Rel {
    fn from_str(value: &str) -> Option<Self> {
        match value {
            "next" => Some(Rel::Next),
            "last" => Some(Rel::Last),
            "first" => Some(Rel::First),
            "prev" => Some(Rel::Prev),
            _ => None,
        }
    }
}

/// Parse a Link header of the form
/// `<https://api.github.com/...&page=2>; rel="next", <...&page=3>; rel="last"`.
pub fn parse_link_header(header: &str) -> Vec<LinkRelation> {
    let mut relations = Vec::new();

    for part in header.split(',') {
        let part = part.trim();

        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(segment[1..segment.len() - 1].to_string());
            } else if let Some(value) = segment.strip_prefix("rel=") {
                rel = Rel::from_str(value.trim_matches('"'));
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            relations.push(LinkRelation { url, rel });
        }
    }

    relations
}

// A next/last relation wins over first/prev. A header carrying only a
// first relation means the server has wrapped back to page one, so there
// is nothing left to fetch.
fn next_url(relations: &[LinkRelation]) -> Option<&str> {
    relations
        .iter()
        .find(|r| matches!(r.rel, Rel::Next | Rel::Last))
        .map(|r| r.url.as_str())
}

pub struct Paginator<'a> {
    client: &'a GitHubClient,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Materialize every page of a collection endpoint, in delivery order.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        first_url: &str,
        token: &str,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut url = first_url.to_string();

        loop {
            tracing::debug!("fetching page: {}", url);
            let raw = self.client.get_raw(&url, Some(token)).await?;

            let link = raw
                .headers
                .get("link")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let items: Vec<T> = self.client.parse(raw)?;
            all_items.extend(items);

            let Some(link) = link else {
                break;
            };

            let relations = parse_link_header(&link);
            match next_url(&relations) {
                Some(next) => url = next.to_string(),
                None => break,
            }
        }

        Ok(all_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_header_full() {
        let header = r#"<https://api.github.com/organizations/5430905/repos?per_page=100&page=2>; rel="next", <https://api.github.com/organizations/5430905/repos?per_page=100&page=3>; rel="last""#;

        let relations = parse_link_header(header);
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0].rel, Rel::Next);
        assert_eq!(
            relations[0].url,
            "https://api.github.com/organizations/5430905/repos?per_page=100&page=2"
        );
        assert_eq!(relations[1].rel, Rel::Last);
    }

    #[test]
    fn test_parse_link_header_empty() {
        assert!(parse_link_header("").is_empty());
    }

    #[test]
    fn test_parse_link_header_unknown_rel() {
        let header = r#"<https://api.github.com/repos?page=2>; rel="alternate""#;
        assert!(parse_link_header(header).is_empty());
    }

    #[test]
    fn test_next_url_prefers_next() {
        let header = r#"<https://example.test/repos?page=1>; rel="prev", <https://example.test/repos?page=3>; rel="next", <https://example.test/repos?page=4>; rel="last", <https://example.test/repos?page=1>; rel="first""#;

        let relations = parse_link_header(header);
        assert_eq!(
            next_url(&relations),
            Some("https://example.test/repos?page=3")
        );
    }

    #[test]
    fn test_next_url_falls_back_to_last() {
        let header = r#"<https://example.test/repos?page=4>; rel="last""#;
        let relations = parse_link_header(header);
        assert_eq!(
            next_url(&relations),
            Some("https://example.test/repos?page=4")
        );
    }

    #[test]
    fn test_next_url_stops_on_first_only() {
        let header = r#"<https://example.test/repos?page=1>; rel="first""#;
        let relations = parse_link_header(header);
        assert_eq!(next_url(&relations), None);
    }

    #[test]
    fn test_next_url_stops_on_empty_relations() {
        assert_eq!(next_url(&[]), None);
    }
}
