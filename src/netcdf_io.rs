//! NetCDF output for computed phenology grids
//!
//! Writes each of the three per-year grids to its own self-describing file,
//! copying the spatial coordinate variables over from the concentration
//! file so the outputs stay georeferenced.

use crate::errors::{IceSeasonError, Result};
use crate::phenology::SeasonFields;
use chrono::{Datelike, Utc};
use ndarray::{Array1, Array2};
use netcdf::{create, AttributeValue, File};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Writes phenology grids next to the concentration file they came from,
/// one NetCDF file per field.
pub struct SeasonWriter<'a> {
    input_file: &'a File,
    output_dir: &'a Path,
}

impl<'a> SeasonWriter<'a> {
    /// Create a new writer for the given input file and output directory.
    pub fn new(input_file: &'a File, output_dir: &'a Path) -> Self {
        Self {
            input_file,
            output_dir,
        }
    }

    /// Writes the advance, retreat and duration grids.
    ///
    /// `dim_names` are the two spatial dimension names of the source
    /// variable, in (y, x) order; matching 1-D coordinate variables are
    /// copied over from the input file when present. Existing output files
    /// are replaced. Returns the paths written, in (advance, retreat,
    /// duration) order.
    ///
    /// # Errors
    ///
    /// Returns an error if `dim_names` does not name exactly two dimensions
    /// or if any file operation fails.
    pub fn write_fields(
        &self,
        fields: &SeasonFields,
        dim_names: &[String],
        prefix: &str,
    ) -> Result<Vec<PathBuf>> {
        if dim_names.len() != 2 {
            return Err(IceSeasonError::InvalidInput {
                message: format!(
                    "expected two spatial dimension names, got {}",
                    dim_names.len()
                ),
            });
        }

        let year = fields.season_start.year();
        let specs: [(&Array2<f32>, &str, &str); 3] = [
            (
                &fields.advance,
                "advance",
                "day of first sustained sea-ice advance",
            ),
            (&fields.retreat, "retreat", "day of final sea-ice retreat"),
            (&fields.duration, "duration", "length of the sea-ice season"),
        ];

        let mut paths = Vec::with_capacity(specs.len());
        for (data, field, long_name) in specs {
            let path = self
                .output_dir
                .join(format!("{}_{}_{}.nc", prefix, field, year));
            self.write_field(data, dim_names, field, long_name, &path, fields)?;
            paths.push(path);
        }

        Ok(paths)
    }

    fn write_field(
        &self,
        data: &Array2<f32>,
        dim_names: &[String],
        field: &str,
        long_name: &str,
        path: &Path,
        fields: &SeasonFields,
    ) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }

        let mut file = create(path)?;

        // Define dimensions
        for (dim_name, &dim_len) in dim_names.iter().zip(data.shape()) {
            file.add_dimension(dim_name, dim_len)?;
        }

        // Copy 1-D coordinate variables for the spatial dimensions
        for dim_name in dim_names {
            let coord = match self.input_file.variable(dim_name) {
                Some(v) if v.dimensions().len() == 1 && v.dimensions()[0].name() == *dim_name => v,
                _ => continue,
            };

            let values = Array1::from(coord.get_values::<f64, _>(..)?);
            let mut new_coord = file.add_variable::<f64>(dim_name, &[dim_name.as_str()])?;
            for attr in coord.attributes() {
                match attr.value()? {
                    AttributeValue::Str(val) => {
                        new_coord.put_attribute(attr.name(), val)?;
                    }
                    AttributeValue::Float(val) => {
                        new_coord.put_attribute(attr.name(), val)?;
                    }
                    AttributeValue::Floats(vals) => {
                        new_coord.put_attribute(attr.name(), vals)?;
                    }
                    AttributeValue::Double(val) => {
                        new_coord.put_attribute(attr.name(), val)?;
                    }
                    AttributeValue::Doubles(vals) => {
                        new_coord.put_attribute(attr.name(), vals)?;
                    }
                    _ => {}
                }
            }
            new_coord.put(values.view(), ..)?;
        }

        let dim_refs: Vec<&str> = dim_names.iter().map(|s| s.as_str()).collect();
        let mut var = file.add_variable::<f32>(field, &dim_refs)?;
        var.put_attribute("long_name", long_name)?;
        var.put_attribute("units", "day of sea-ice year")?;
        var.put_attribute("season_start", fields.season_start.to_string())?;
        var.put_attribute("_FillValue", f32::NAN)?;
        var.put(data.view(), ..)?;

        // Add history attribute
        file.add_attribute(
            "history",
            format!("Created by IceSeason on {}", Utc::now().to_rfc3339()),
        )?;

        Ok(())
    }
}
