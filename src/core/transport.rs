use crate::core::errors::{Error, Result};
use log::debug;
use reqwest::{redirect, StatusCode, Url};
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Transport
-------------------------------------------------------------------------------------------------*/

/// Performs a single GET request and returns the body of a successful (2xx) response.
///
/// [HttpsTransport] is the production implementation; tests and embedders can supply their
/// own to serve canned bodies.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>>;
}

/*-------------------------------------------------------------------------------------------------
  HTTPS Transport
-------------------------------------------------------------------------------------------------*/

/// A blocking HTTPS transport. Peer certificates are always verified (rustls with the webpki
/// roots), plain `http` URLs are refused, and redirects are not followed.
#[derive(Debug, Clone)]
pub struct HttpsTransport {
    client: reqwest::blocking::Client,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl HttpsTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .https_only(true)
            .redirect(redirect::Policy::none())
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            connect_timeout,
            timeout,
            user_agent: user_agent.to_string(),
        })
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Transport for HttpsTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("GET {url}");
        let response = self.client.get(url.clone()).send()?;
        check_status(url, response.status())?;
        Ok(response.bytes()?.to_vec())
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn check_status(url: &Url, status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Protocol {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
