//! NetCDF metadata inspection and variable discovery
//!
//! Helpers for examining a concentration file before running the phenology
//! scan: global attributes, variable listings, per-variable descriptions,
//! and discovery of likely sea-ice concentration variables.

use crate::errors::{IceSeasonError, Result};
use crate::phenology::netcdf::TIME_DIM;
use netcdf::{AttributeValue, File};

/// Prints global attributes, dimensions and variables of a NetCDF file.
pub fn print_metadata(file: &File) -> Result<()> {
    println!("\n===== Global Attributes =====");
    for attr in file.attributes() {
        println!("- {}: {:?}", attr.name(), attr.value()?);
    }

    println!("\n===== Dimensions =====");
    let mut dimensions: Vec<_> = file.dimensions().collect();
    dimensions.sort_by(|a, b| a.name().cmp(&b.name()));
    for dim in dimensions {
        let length_info = if dim.is_unlimited() {
            format!("{} (unlimited)", dim.len())
        } else {
            dim.len().to_string()
        };
        println!("- {} = {}", dim.name(), length_info);
    }

    println!("\n===== Variables =====");
    let mut variables: Vec<_> = file.variables().collect();
    variables.sort_by(|a, b| a.name().cmp(&b.name()));
    for var in variables {
        let dims: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| format!("{}[{}]", d.name(), d.len()))
            .collect();
        if dims.is_empty() {
            println!("- {}: scalar", var.name());
        } else {
            println!("- {} ({})", var.name(), dims.join(", "));
        }
    }

    let candidates = find_concentration_variables(file);
    if !candidates.is_empty() {
        println!(
            "\n💡 Candidate concentration variables: {}",
            candidates.join(", ")
        );
    }

    Ok(())
}

/// Describes a specific variable showing its data type, shape, and attributes.
pub fn describe_variable(file: &File, var_name: &str) -> Result<()> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| IceSeasonError::VariableNotFound {
            var: var_name.to_string(),
        })?;

    println!("\n Variable Description: {}", var_name);
    println!("={}", "=".repeat(var_name.len() + 25));

    let data_type = format!("{:?}", var.vartype()).to_lowercase();
    println!(" Data type: {}", data_type);

    let dims: Vec<String> = var
        .dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    let shape: Vec<usize> = var.dimensions().iter().map(|dim| dim.len()).collect();

    if dims.is_empty() {
        println!(" Dimensions: (scalar)");
    } else {
        println!(" Dimensions: [{}]", dims.join(", "));
        println!(
            " Shape: ({})",
            shape
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" × ")
        );
    }

    let attributes: Vec<_> = var.attributes().collect();
    if attributes.is_empty() {
        println!("\n  Attributes: (none)");
    } else {
        println!("\n  Attributes:");
        for attr in attributes {
            match attr.value() {
                Ok(AttributeValue::Str(s)) => println!("   • {}: \"{}\"", attr.name(), s),
                Ok(AttributeValue::Float(v)) => println!("   • {}: {}", attr.name(), v),
                Ok(AttributeValue::Double(v)) => println!("   • {}: {}", attr.name(), v),
                Ok(AttributeValue::Int(v)) => println!("   • {}: {}", attr.name(), v),
                Ok(value) => println!("   • {}: {:?}", attr.name(), value),
                Err(e) => println!("   • {}: (error reading value: {})", attr.name(), e),
            }
        }
    }

    let total_elements: usize = shape.iter().product();
    println!("\n Total elements: {}", total_elements);

    Ok(())
}

/// Returns the names of variables that look like sea-ice concentration
/// fields: three dimensions, one of them the time axis.
///
/// ACCESS-OM2 ice output names the concentration variable `aice`; CMIP6
/// archives use `siconc`. Both match here without being special-cased.
#[must_use]
pub fn find_concentration_variables(file: &File) -> Vec<String> {
    file.variables()
        .filter(|var| {
            let dims: Vec<String> = var
                .dimensions()
                .iter()
                .map(|d| d.name().to_string())
                .collect();
            dims.len() == 3 && dims.iter().any(|d| d == TIME_DIM)
        })
        .map(|var| var.name())
        .collect()
}
