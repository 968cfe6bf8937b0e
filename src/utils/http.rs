use reqwest::Client;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    concat!("PokeCatalog/", env!("CARGO_PKG_VERSION"))
}

/// Build the HTTP client shared by all catalog calls
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(get_user_agent()).build()
}
