use crate::cli::FactResult;
use cdnipfacts::{AddressList, FactDefinition};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Fact Names
--------------------------------------------------------------------------------------*/

pub fn fact_names(definitions: &[FactDefinition]) {
    for definition in definitions {
        println!("{}", definition.name);
    }
}

/*--------------------------------------------------------------------------------------
  JSON
--------------------------------------------------------------------------------------*/

/// Print a JSON object mapping each fact name to its address array (the shape of a Facter
/// external fact).
pub fn json(fact_results: &[FactResult]) -> serde_json::Result<()> {
    let facts: BTreeMap<&str, &AddressList> = fact_results
        .iter()
        .map(|fact_result| (fact_result.name, &fact_result.addresses))
        .collect();

    println!("{}", serde_json::to_string_pretty(&facts)?);
    Ok(())
}

/*--------------------------------------------------------------------------------------
  Fact Table
--------------------------------------------------------------------------------------*/

pub fn fact_table(fact_results: &[FactResult]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Fact")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Family")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Address")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for fact_result in fact_results {
        for address in &fact_result.addresses {
            table.add_row(vec![
                Cell::new(fact_result.name),
                Cell::new(fact_result.family),
                Cell::new(address).add_attribute(Attribute::Bold),
            ]);
        }
    }

    println!("{table}");

    // Print fact-table summary
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for fact_result in fact_results {
        summary_table.add_row(vec![
            Cell::new(fact_result.addresses.len()),
            Cell::new(fact_result.name),
        ]);
    }

    if let Some(column) = summary_table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{summary_table}");
}

/*--------------------------------------------------------------------------------------
  Addresses One Per Line
--------------------------------------------------------------------------------------*/

pub fn addresses(fact_results: &[FactResult]) {
    for fact_result in fact_results {
        for address in &fact_result.addresses {
            println!("{address}");
        }
    }
}

/*--------------------------------------------------------------------------------------
  nginx real_ip Directives
--------------------------------------------------------------------------------------*/

pub fn nginx_real_ip(fact_results: &[FactResult]) {
    for fact_result in fact_results {
        println!("# {}", fact_result.name);
        for address in &fact_result.addresses {
            println!("set_real_ip_from {};", address.trim());
        }
    }
}
