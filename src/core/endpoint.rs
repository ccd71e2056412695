use crate::core::decoder::Decoder;
use crate::core::errors::{Error, Result};
use reqwest::Url;

/*-------------------------------------------------------------------------------------------------
  Vendor Endpoints
-------------------------------------------------------------------------------------------------*/

pub const CLOUDFLARE_HOST: &str = "www.cloudflare.com";
pub const CLOUDFLARE_IPV4_PATH: &str = "/ips-v4/";
pub const CLOUDFLARE_IPV6_PATH: &str = "/ips-v6/";

pub const FASTLY_HOST: &str = "api.fastly.com";
pub const FASTLY_PATH: &str = "/public-ip-list";

pub const HTTPS_PORT: u16 = 443;

/*-------------------------------------------------------------------------------------------------
  Endpoint
-------------------------------------------------------------------------------------------------*/

/// An HTTPS endpoint that publishes a list of addresses, and the [Decoder] for its response
/// body.
///
/// ```
/// use cdnipfacts::{Decoder, Endpoint};
///
/// let endpoint = Endpoint::new("www.cloudflare.com", 443, "/ips-v4/", Decoder::PlainText)?;
/// assert_eq!(endpoint.url().as_str(), "https://www.cloudflare.com/ips-v4/");
/// # Ok::<(), cdnipfacts::Error>(())
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Endpoint {
    host: String,
    port: u16,
    path: String,
    decoder: Decoder,
    url: Url,
}

impl Endpoint {
    /// Create an endpoint. The host must be non-empty, the port non-zero, and the path
    /// absolute.
    pub fn new(host: &str, port: u16, path: &str, decoder: Decoder) -> Result<Self> {
        let url = https_url(host, port, path)?;
        Ok(Self {
            host: host.to_string(),
            port,
            path: path.to_string(),
            decoder,
            url,
        })
    }

    pub fn cloudflare_ipv4() -> Self {
        Self::vendor(CLOUDFLARE_HOST, CLOUDFLARE_IPV4_PATH, Decoder::PlainText)
    }

    pub fn cloudflare_ipv6() -> Self {
        Self::vendor(CLOUDFLARE_HOST, CLOUDFLARE_IPV6_PATH, Decoder::PlainText)
    }

    pub fn fastly() -> Self {
        Self::vendor(FASTLY_HOST, FASTLY_PATH, Decoder::JsonAddresses)
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn decoder(&self) -> Decoder {
        self.decoder
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn vendor(host: &str, path: &str, decoder: Decoder) -> Self {
        let url = Url::parse(&format!("https://{host}{path}")).expect("Vendor URLs are valid");
        Self {
            host: host.to_string(),
            port: HTTPS_PORT,
            path: path.to_string(),
            decoder,
            url,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Build the `https://host:port/path` URL for an endpoint.
pub(crate) fn https_url(host: &str, port: u16, path: &str) -> Result<Url> {
    if host.is_empty() {
        return Err(Error::Endpoint("host is empty".to_string()));
    }
    if port == 0 {
        return Err(Error::Endpoint("port must be non-zero".to_string()));
    }
    if !path.starts_with('/') {
        return Err(Error::Endpoint(format!("path is not absolute: {path:?}")));
    }

    Url::parse(&format!("https://{host}:{port}{path}"))
        .map_err(|error| Error::Endpoint(format!("{host}:{port}{path}: {error}")))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
