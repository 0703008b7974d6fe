#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address of the page being rendered, e.g. `https://example.pt/category.html?id=casa`.
    pub site_url: String,
    /// Manifest name resolved relative to `site_url`.
    pub manifest_name: String,
    pub log_level: String,
    pub user_agent: String,
    /// `None` leaves timeouts to the transport.
    pub request_timeout_secs: Option<u64>,
}
