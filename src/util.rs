/// Join path segments onto a base URL, normalizing slashes between them.
pub fn build_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for seg in segments {
        url.push('/');
        url.push_str(seg.trim_start_matches('/'));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_with_single_slashes() {
        assert_eq!(
            build_url("https://api.example.com/", &["v1", "/cars"]),
            "https://api.example.com/v1/cars"
        );
    }

    #[test]
    fn bare_base_is_left_alone() {
        assert_eq!(build_url("https://api.example.com", &[]), "https://api.example.com");
    }
}
