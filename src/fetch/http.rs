use std::time::Duration;

use crate::error::FetchError;
use crate::fetch::Store;

const USER_AGENT: &str = concat!("guestbook/", env!("CARGO_PKG_VERSION"));

/// Guestbook served over HTTP: GET reads the whole file, POST appends a fragment
pub(crate) struct HttpStore {
    agent: ureq::Agent,
    url: String,
}

impl HttpStore {
    pub(crate) fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self::build(url, timeout, ureq::Proxy::try_from_env())
    }

    fn build(url: impl Into<String>, timeout: Duration, proxy: Option<ureq::Proxy>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .proxy(proxy)
            .build()
            .into();
        HttpStore {
            agent,
            url: url.into(),
        }
    }

    fn transport_error(&self, source: ureq::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

impl Store for HttpStore {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn read(&self) -> Result<String, FetchError> {
        let mut response = self
            .agent
            .get(&self.url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| self.transport_error(e))
    }

    fn write(&self, fragment: &str) -> Result<(), FetchError> {
        // Status and body are not inspected; only transport failures surface
        self.agent
            .post(&self.url)
            .header("User-Agent", USER_AGENT)
            .header("Content-Type", "text/plain; charset=utf-8")
            .send(fragment)
            .map_err(|e| self.transport_error(e))?;
        Ok(())
    }
}
