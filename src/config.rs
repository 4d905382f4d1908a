/// Default catalog endpoint. Override with LANGUAGES_API_URL when testing
/// against a mock server.
pub const DEFAULT_LANGUAGES_URL: &str = "https://api.gog.com/v1/languages";

pub fn endpoint_url() -> String {
    std::env::var("LANGUAGES_API_URL").unwrap_or_else(|_| DEFAULT_LANGUAGES_URL.to_string())
}
