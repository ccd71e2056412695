//! System facts for the edge IP address ranges published by Cloudflare and Fastly.
//!
//! Each fact performs one HTTPS GET against the vendor's endpoint, extracts the IPv4 or IPv6
//! address/CIDR strings from the response body and returns them in the order published. A fact
//! that cannot be retrieved (unreachable upstream, certificate failure, non-2xx status,
//! malformed body) reports an empty list rather than an error, so one unreachable vendor never
//! prevents the other facts from being evaluated.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! let fetcher = Arc::new(cdnipfacts::FetcherBuilder::new().build()?);
//! let facts = cdnipfacts::Facts::cdn(fetcher);
//!
//! for (name, addresses) in facts.resolve_all() {
//!     println!("{name}: {addresses:?}");
//! }
//! # Ok::<(), cdnipfacts::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::address_family::AddressFamily;
pub use crate::core::decoder::{json_addresses, plain_text, Decoder};
pub use crate::core::endpoint::Endpoint;
pub use crate::core::errors::{Error, Result};
pub use crate::core::facts::{
    cdn_fact_definitions, FactDefinition, FactFn, Facts, CLOUDFLARE_IPV4S, CLOUDFLARE_IPV6S,
    FASTLY_IPV4S, FASTLY_IPV6S,
};
pub use crate::core::fetcher::{filter_addresses, get_addresses, AddressList, Fetcher, FetcherBuilder};
pub use crate::core::transport::{HttpsTransport, Transport};

/*--------------------------------------------------------------------------------------
  Re-exported Crates
--------------------------------------------------------------------------------------*/

pub use reqwest::Url;
