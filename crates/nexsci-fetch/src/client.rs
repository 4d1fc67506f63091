use crate::error::Result;

/// Blocking "fetch text resource by URL" abstraction.
///
/// Both the schema documentation page and the CSV data endpoint are read
/// through this trait, so callers can inject a pre-fetched document or an
/// in-memory double instead of touching the network.
pub trait TextSource {
    /// Issue one read of `url` and return the response body as text.
    ///
    /// # Errors
    ///
    /// Returns an error on DNS/connection failure, on a non-success HTTP
    /// status, or when the body cannot be decoded. No retry is attempted.
    fn get_text(&self, url: &str) -> Result<String>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }
}

/// Settings used to build the HTTP client.
#[derive(Debug, Clone, Default)]
pub struct ClientSetting {
    pub proxies: Option<Vec<String>>,
}

impl ClientSetting {
    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.proxies = (!proxies.is_empty()).then_some(proxies);
        self
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_client {
    use super::*;
    use crate::error::FetchError;
    use crate::task_pool::POOL;
    use reqwest::{Client, Proxy};

    /// Production text source backed by `reqwest`.
    ///
    /// Requests run on a shared runtime and the caller blocks until the whole
    /// body has arrived.
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        pub fn new() -> Result<Self> {
            Self::with_setting(ClientSetting::default())
        }

        pub fn with_setting(setting: ClientSetting) -> Result<Self> {
            let mut cb = Client::builder();

            for url in setting.proxies.unwrap_or_default() {
                let proxy = if url.starts_with("https") {
                    Proxy::https(&url)
                } else {
                    Proxy::http(&url)
                };
                cb = cb.proxy(proxy.map_err(|e| FetchError::Proxy {
                    url: url.clone(),
                    message: e.to_string(),
                })?);
            }

            let client = cb
                .build()
                .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl TextSource for ReqwestClient {
        fn get_text(&self, url: &str) -> Result<String> {
            tracing::debug!(url, "GET");
            POOL.block_on(async {
                let res = self.client.get(url).send().await?.error_for_status()?;
                Ok::<_, FetchError>(res.text().await?)
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestClient;
