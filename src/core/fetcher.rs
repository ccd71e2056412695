use crate::core::address_family::AddressFamily;
use crate::core::endpoint::{https_url, Endpoint};
use crate::core::errors::Result;
use crate::core::transport::{HttpsTransport, Transport};
use log::{info, warn};
use reqwest::Url;
use std::env;
use std::time::Duration;

/// An ordered list of address strings, in the order they appeared in the response body.
pub type AddressList = Vec<String>;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ fetches the addresses of one `family` published at an
/// [Endpoint] using the default fetcher configuration (see [FetcherBuilder::new]). Returns an
/// empty list when the addresses cannot be retrieved.
///
/// ```no_run
/// use cdnipfacts::{AddressFamily, Endpoint};
///
/// let addresses = cdnipfacts::get_addresses(&Endpoint::cloudflare_ipv4(), AddressFamily::IPv4);
/// for address in &addresses {
///     println!("set_real_ip_from {address};");
/// }
/// ```
pub fn get_addresses(endpoint: &Endpoint, family: AddressFamily) -> AddressList {
    match FetcherBuilder::new().build() {
        Ok(fetcher) => fetcher.fetch_endpoint(endpoint, family),
        Err(error) => {
            warn!("Unable to fetch {family} addresses from {}: {error}", endpoint.url());
            Vec::new()
        }
    }
}

/// Keep the candidates that match the `family` address pattern, preserving their order.
///
/// ```
/// use cdnipfacts::{filter_addresses, AddressFamily};
///
/// let candidates = vec!["23.235.32.0/20".to_string(), "2a04:4e40::/32".to_string()];
/// assert_eq!(filter_addresses(candidates, AddressFamily::IPv4), vec!["23.235.32.0/20"]);
/// ```
pub fn filter_addresses<I>(candidates: I, family: AddressFamily) -> AddressList
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .filter(|candidate| family.matches(candidate))
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Fetcher Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the HTTPS [Fetcher].
///
/// ```
/// let fetcher = cdnipfacts::FetcherBuilder::new()
///     .connect_timeout(2000) // 2 seconds
///     .timeout(5000) // 5 seconds
///     .user_agent("my-facts/1.0")
///     .build()?;
/// # Ok::<(), cdnipfacts::Error>(())
/// ```
///
/// The [FetcherBuilder::new] method sources configuration values from environment variables
/// when set and uses default values when they are not. [FetcherBuilder::default] ignores the
/// environment.
#[derive(Debug, Clone)]
pub struct FetcherBuilder {
    connect_timeout: u64,
    timeout: u64,
    user_agent: String,
}

/*--------------------------------------------------------------------------------------
  Fetcher Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self {
            connect_timeout: 5000, // 5 seconds
            timeout: 10000,        // 10 seconds
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl FetcherBuilder {
    /// Create a new [FetcherBuilder] reading initial configuration values from
    /// environment variables when set and default values when they are not.
    ///
    /// The environment variables used to set the initial configuration values
    /// are:
    /// - `CDNIPFACTS_CONNECT_TIMEOUT`
    /// - `CDNIPFACTS_TIMEOUT`
    /// - `CDNIPFACTS_USER_AGENT`
    pub fn new() -> Self {
        let default = FetcherBuilder::default();

        Self {
            connect_timeout: get_env_var("CDNIPFACTS_CONNECT_TIMEOUT", default.connect_timeout),
            timeout: get_env_var("CDNIPFACTS_TIMEOUT", default.timeout),
            user_agent: get_env_var("CDNIPFACTS_USER_AGENT", default.user_agent),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the maximum time (in milliseconds) to wait for the TCP connection
    /// to be established; defaults to `5000` milliseconds.
    pub fn connect_timeout(&mut self, connect_timeout: u64) -> &mut Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Set the maximum time (in milliseconds) for the whole request, from
    /// connecting until the response body has been read; defaults to `10000`
    /// milliseconds.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header sent with each request; defaults to
    /// `cdnipfacts/<version>`.
    pub fn user_agent(&mut self, user_agent: &str) -> &mut Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Result<Fetcher<HttpsTransport>> {
        let transport = HttpsTransport::new(
            Duration::from_millis(self.connect_timeout),
            Duration::from_millis(self.timeout),
            &self.user_agent,
        )?;
        Ok(Fetcher::with_transport(transport))
    }
}

/*-------------------------------------------------------------------------------------------------
  Fetcher
-------------------------------------------------------------------------------------------------*/

/// Fetches an address list over a [Transport] and filters it to one [AddressFamily].
///
/// A fetcher holds no state between calls: every call performs exactly one request, and
/// nothing is cached or retried. The `fetch_*` methods never fail; any error is logged and
/// reported as an empty list. The `try_fetch_*` methods return the error instead.
///
/// ```no_run
/// use cdnipfacts::{AddressFamily, Decoder, FetcherBuilder};
///
/// let fetcher = FetcherBuilder::new().build()?;
/// let ipv6s = fetcher.fetch_addresses(
///     "api.fastly.com",
///     443,
///     "/public-ip-list",
///     AddressFamily::IPv6,
///     |body| Decoder::JsonAddresses.decode(body),
/// );
/// # Ok::<(), cdnipfacts::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher<T = HttpsTransport> {
    transport: T,
}

/*--------------------------------------------------------------------------------------
  Fetcher Implementation
--------------------------------------------------------------------------------------*/

impl<T: Transport> Fetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /*-------------------------------------------------------------------------
      Fetch Addresses
    -------------------------------------------------------------------------*/

    /// GET `https://host:port/path`, reduce the body to candidates with `decode`, and keep
    /// the candidates that match `family`. Returns an empty list on any failure.
    pub fn fetch_addresses<D>(
        &self,
        host: &str,
        port: u16,
        path: &str,
        family: AddressFamily,
        decode: D,
    ) -> AddressList
    where
        D: FnOnce(&[u8]) -> Result<Vec<String>>,
    {
        self.try_fetch_addresses(host, port, path, family, decode)
            .unwrap_or_else(|error| {
                warn!("Unable to fetch {family} addresses from {host}:{port}{path}: {error}");
                Vec::new()
            })
    }

    /// Like [Fetcher::fetch_addresses], but returns the error on failure.
    pub fn try_fetch_addresses<D>(
        &self,
        host: &str,
        port: u16,
        path: &str,
        family: AddressFamily,
        decode: D,
    ) -> Result<AddressList>
    where
        D: FnOnce(&[u8]) -> Result<Vec<String>>,
    {
        let url = https_url(host, port, path)?;
        self.try_fetch_url(&url, family, decode)
    }

    /// Fetch the `family` addresses published at an [Endpoint], decoding the body with the
    /// endpoint's decoder. Returns an empty list on any failure.
    pub fn fetch_endpoint(&self, endpoint: &Endpoint, family: AddressFamily) -> AddressList {
        self.try_fetch_endpoint(endpoint, family)
            .unwrap_or_else(|error| {
                warn!("Unable to fetch {family} addresses from {}: {error}", endpoint.url());
                Vec::new()
            })
    }

    /// Like [Fetcher::fetch_endpoint], but returns the error on failure.
    pub fn try_fetch_endpoint(
        &self,
        endpoint: &Endpoint,
        family: AddressFamily,
    ) -> Result<AddressList> {
        let decoder = endpoint.decoder();
        self.try_fetch_url(endpoint.url(), family, |body| decoder.decode(body))
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn try_fetch_url<D>(&self, url: &Url, family: AddressFamily, decode: D) -> Result<AddressList>
    where
        D: FnOnce(&[u8]) -> Result<Vec<String>>,
    {
        let body = self.transport.get(url)?;
        let candidates = decode(&body)?;
        let addresses = filter_addresses(candidates, family);
        info!(
            "Fetched {} {family} address(es) from {url}",
            addresses.len()
        );
        Ok(addresses)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
