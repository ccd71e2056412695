use crate::core::address_family::AddressFamily;
use crate::core::endpoint::Endpoint;
use crate::core::fetcher::{AddressList, Fetcher};
use crate::core::transport::Transport;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/*-------------------------------------------------------------------------------------------------
  Fact Names
-------------------------------------------------------------------------------------------------*/

pub const CLOUDFLARE_IPV4S: &str = "cloudflare_ipv4s";
pub const CLOUDFLARE_IPV6S: &str = "cloudflare_ipv6s";
pub const FASTLY_IPV4S: &str = "fastly_ipv4s";
pub const FASTLY_IPV6S: &str = "fastly_ipv6s";

/*-------------------------------------------------------------------------------------------------
  Fact Definitions
-------------------------------------------------------------------------------------------------*/

/// A named address-list fact: the [Endpoint] that publishes it and the [AddressFamily] kept.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FactDefinition {
    pub name: &'static str,
    pub endpoint: Endpoint,
    pub family: AddressFamily,
}

/// The Cloudflare and Fastly edge address facts.
pub fn cdn_fact_definitions() -> Vec<FactDefinition> {
    vec![
        FactDefinition {
            name: CLOUDFLARE_IPV4S,
            endpoint: Endpoint::cloudflare_ipv4(),
            family: AddressFamily::IPv4,
        },
        FactDefinition {
            name: CLOUDFLARE_IPV6S,
            endpoint: Endpoint::cloudflare_ipv6(),
            family: AddressFamily::IPv6,
        },
        FactDefinition {
            name: FASTLY_IPV4S,
            endpoint: Endpoint::fastly(),
            family: AddressFamily::IPv4,
        },
        FactDefinition {
            name: FASTLY_IPV6S,
            endpoint: Endpoint::fastly(),
            family: AddressFamily::IPv6,
        },
    ]
}

/*-------------------------------------------------------------------------------------------------
  Facts
-------------------------------------------------------------------------------------------------*/

/// A zero-argument function computing a fact's value on demand.
pub type FactFn = Box<dyn Fn() -> AddressList + Send + Sync>;

/// An explicit mapping from fact name to the function that computes it. Build one at process
/// start and hand it to whatever exposes the facts.
///
/// ```no_run
/// use std::sync::Arc;
///
/// let fetcher = Arc::new(cdnipfacts::FetcherBuilder::new().build()?);
/// let facts = cdnipfacts::Facts::cdn(fetcher);
///
/// let cloudflare_ipv4s = facts.resolve("cloudflare_ipv4s").unwrap_or_default();
/// # Ok::<(), cdnipfacts::Error>(())
/// ```
#[derive(Default)]
pub struct Facts {
    facts: BTreeMap<String, FactFn>,
}

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the four CDN facts, each fetching through the shared `fetcher`.
    pub fn cdn<T>(fetcher: Arc<Fetcher<T>>) -> Self
    where
        T: Transport + Send + Sync + 'static,
    {
        let mut facts = Self::new();
        for definition in cdn_fact_definitions() {
            let fetcher = Arc::clone(&fetcher);
            let FactDefinition {
                name,
                endpoint,
                family,
            } = definition;
            facts.register(name, move || fetcher.fetch_endpoint(&endpoint, family));
        }
        facts
    }

    /// Register (or replace) a fact.
    pub fn register<F>(&mut self, name: &str, fact: F) -> &mut Self
    where
        F: Fn() -> AddressList + Send + Sync + 'static,
    {
        self.facts.insert(name.to_string(), Box::new(fact));
        self
    }

    /// Registered fact names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.facts.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.facts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Compute one fact. Returns `None` when no fact is registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<AddressList> {
        self.facts.get(name).map(|fact| fact())
    }

    /// Compute every registered fact, in name order.
    pub fn resolve_all(&self) -> BTreeMap<String, AddressList> {
        self.facts
            .iter()
            .map(|(name, fact)| (name.clone(), fact()))
            .collect()
    }
}

impl fmt::Debug for Facts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{Error, Result};
    use reqwest::Url;
    use std::thread;
    use test_log::test;

    /// Serves canned vendor bodies by host.
    struct VendorBodies;

    impl Transport for VendorBodies {
        fn get(&self, url: &Url) -> Result<Vec<u8>> {
            match (url.host_str(), url.path()) {
                (Some("www.cloudflare.com"), "/ips-v4/") => {
                    Ok(b"173.245.48.0/20\n103.21.244.0/22\n".to_vec())
                }
                (Some("www.cloudflare.com"), "/ips-v6/") => {
                    Ok(b"2400:cb00::/32\n2606:4700::/32\n".to_vec())
                }
                (Some("api.fastly.com"), "/public-ip-list") => Ok(br#"{
                    "addresses": ["23.235.32.0/20", "43.249.72.0/22"],
                    "ipv6_addresses": ["2a04:4e40::/32"]
                }"#
                .to_vec()),
                _ => Err(Error::Protocol {
                    url: url.to_string(),
                    status: 404,
                }),
            }
        }
    }

    /// Fails every request.
    struct Unreachable;

    impl Transport for Unreachable {
        fn get(&self, url: &Url) -> Result<Vec<u8>> {
            Err(Error::Protocol {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    #[test]
    fn test_cdn_fact_definitions() {
        let definitions = cdn_fact_definitions();
        let names: Vec<&str> = definitions.iter().map(|definition| definition.name).collect();
        assert_eq!(
            names,
            vec![CLOUDFLARE_IPV4S, CLOUDFLARE_IPV6S, FASTLY_IPV4S, FASTLY_IPV6S]
        );
        assert_eq!(definitions[2].endpoint, definitions[3].endpoint);
        assert!(definitions[1].family.is_ipv6());
    }

    #[test]
    fn test_cdn_facts_resolve() {
        let facts = Facts::cdn(Arc::new(Fetcher::with_transport(VendorBodies)));

        assert_eq!(facts.len(), 4);
        assert_eq!(
            facts.resolve(CLOUDFLARE_IPV4S).unwrap(),
            vec!["173.245.48.0/20", "103.21.244.0/22"]
        );
        assert_eq!(
            facts.resolve(CLOUDFLARE_IPV6S).unwrap(),
            vec!["2400:cb00::/32", "2606:4700::/32"]
        );
        assert_eq!(
            facts.resolve(FASTLY_IPV4S).unwrap(),
            vec!["23.235.32.0/20", "43.249.72.0/22"]
        );
        assert!(facts.resolve(FASTLY_IPV6S).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_fact() {
        let facts = Facts::cdn(Arc::new(Fetcher::with_transport(VendorBodies)));
        assert!(!facts.contains("akamai_ipv4s"));
        assert!(facts.resolve("akamai_ipv4s").is_none());
    }

    #[test]
    fn test_unreachable_upstream_resolves_every_fact_empty() {
        let facts = Facts::cdn(Arc::new(Fetcher::with_transport(Unreachable)));
        let values = facts.resolve_all();

        assert_eq!(values.len(), 4);
        assert!(values.values().all(|addresses| addresses.is_empty()));
    }

    #[test]
    fn test_resolve_all_in_name_order() {
        let facts = Facts::cdn(Arc::new(Fetcher::with_transport(VendorBodies)));
        let names: Vec<String> = facts.resolve_all().into_keys().collect();
        assert_eq!(
            names,
            vec![CLOUDFLARE_IPV4S, CLOUDFLARE_IPV6S, FASTLY_IPV4S, FASTLY_IPV6S]
        );
    }

    #[test]
    fn test_register_custom_fact() {
        let mut facts = Facts::new();
        assert!(facts.is_empty());

        facts.register("loopbacks", || vec!["127.0.0.1".to_string(), "::1".to_string()]);
        assert_eq!(facts.names().collect::<Vec<_>>(), vec!["loopbacks"]);
        assert_eq!(facts.resolve("loopbacks").unwrap(), vec!["127.0.0.1", "::1"]);
        assert_eq!(format!("{facts:?}"), r#"{"loopbacks"}"#);
    }

    #[test]
    fn test_facts_resolve_concurrently() {
        let facts = Facts::cdn(Arc::new(Fetcher::with_transport(VendorBodies)));
        let expected = facts.resolve_all();
        let facts = &facts;

        thread::scope(|scope| {
            let handles: Vec<_> = facts
                .names()
                .map(|name| scope.spawn(move || (name.to_string(), facts.resolve(name).unwrap())))
                .collect();
            for handle in handles {
                let (name, addresses) = handle.join().unwrap();
                assert_eq!(expected[&name], addresses);
            }
        });
    }
}
