use crate::cli;
use cdnipfacts::{AddressFamily, AddressList, FactDefinition, Facts};
use log::error;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Select Facts from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn select_facts<'d>(
    args: &cli::Args,
    definitions: &'d [FactDefinition],
) -> Vec<&'d FactDefinition> {
    let family = match (args.ipv4, args.ipv6) {
        (true, false) => Some(AddressFamily::IPv4),
        (false, true) => Some(AddressFamily::IPv6),
        _ => None,
    };
    let include_family =
        |definition: &FactDefinition| family.map_or(true, |family| definition.family == family);

    match args.facts.as_ref() {
        Some(names) => names
            .iter()
            .filter_map(|name| {
                definitions
                    .iter()
                    .find(|definition| definition.name == name.to_lowercase())
                    .or_else(|| {
                        error!("Unknown fact: {:?}", name);
                        None
                    })
            })
            .filter(|definition| include_family(definition))
            .collect(),
        None => definitions
            .iter()
            .filter(|definition| include_family(definition))
            .collect(),
    }
}

/*--------------------------------------------------------------------------------------
  Resolve Facts
--------------------------------------------------------------------------------------*/

#[derive(Debug)]
pub struct FactResult {
    pub name: &'static str,
    pub family: AddressFamily,
    pub addresses: AddressList,
}

pub fn resolve_facts(facts: &Facts, selected: &[&FactDefinition]) -> Vec<FactResult> {
    selected
        .iter()
        .map(|definition| FactResult {
            name: definition.name,
            family: definition.family,
            addresses: facts.resolve(definition.name).unwrap_or_default(),
        })
        .collect()
}
