use url::Url;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps";

/// Build an embeddable map URL for a client.
///
/// A stored map link gets `output=embed` appended unless it already has one.
/// Without a link, the venue is used as a search query. Returns `None` when
/// both are blank.
pub fn map_embed_url(map_link: &str, venue: &str) -> Option<String> {
    let link = map_link.trim();
    if !link.is_empty() {
        if link.contains("output=embed") {
            return Some(link.to_string());
        }
        let separator = if link.contains('?') { '&' } else { '?' };
        return Some(format!("{}{}output=embed", link, separator));
    }

    let venue = venue.trim();
    if venue.is_empty() {
        return None;
    }
    let mut url = Url::parse(MAPS_SEARCH_URL).ok()?;
    url.query_pairs_mut()
        .append_pair("q", venue)
        .append_pair("output", "embed");
    Some(url.to_string())
}
