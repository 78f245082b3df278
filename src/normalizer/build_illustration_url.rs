use reqwest::Url;

/// Turns `../images/cardlist/card/OP09-001.webp?250301` into an absolute URL on the site.
pub fn build_illustration_url(base_url: &str, relative_path: Option<&str>) -> Option<String> {
    let relative_path = relative_path?.trim();
    if relative_path.is_empty() {
        return None;
    }

    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/'))).ok()?;
    let url = base.join(&relative_path.replace("..", "")).ok()?;

    Some(url.to_string())
}
