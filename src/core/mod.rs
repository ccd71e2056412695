/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address_family;
pub mod decoder;
pub mod endpoint;
pub mod errors;
pub mod facts;
pub mod fetcher;
pub mod transport;
