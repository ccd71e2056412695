use crate::cli::FactResult;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Fact Results
--------------------------------------------------------------------------------------*/

pub fn fact_results(fact_results: &[FactResult]) {
    let count_facts = fact_results.len();
    info!("Resolved {count_facts} fact(s)");

    for fact_result in fact_results {
        let count_addresses = fact_result.addresses.len();
        if count_addresses > 0 {
            info!(
                "{}: {count_addresses} {} address(es)",
                fact_result.name, fact_result.family
            );
        } else {
            warn!(
                "{}: no {} addresses; the upstream may be unreachable",
                fact_result.name, fact_result.family
            );
        };
    }
}
