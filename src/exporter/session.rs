use crate::{
    channel::Channel,
    config::ExporterConfig,
    error::{ExportError, Result},
    format::{char_buffer, iso_8601, profile_id, NcChar},
    profile::Profile,
};
use chrono::Utc;
use log::debug;
use netcdf::FileMut;
use std::{convert::TryFrom, path::Path};
use strum::IntoEnumIterator;

/// Name of the depth dimension.
const Z_DIM: &str = "z";
/// Name of the profile dimension, always of length 1.
const PROFILE_DIM: &str = "profile";
/// Name of the dimension of the `profile` identifier character buffer.
const PROFILE_ID_LENGTH_DIM: &str = "profile_id_length";

/// NCEI template identification.
const TEMPLATE_VERSION: &str = "NCEI_NetCDF_Profile_Orthogonal_Template_v2.0";
const CONVENTIONS: &str = "CF-1.6, ACDD-1.3";

// Fill values of the station variables. The valid_max attributes of lat and lon repeat them.
const TIME_FILL: i32 = 0;
const LAT_FILL: f64 = 180.0;
const LON_FILL: f64 = 360.0;

const WGS84_EPSG: f64 = 4326.0;
const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
const WGS84_INVERSE_FLATTENING: f64 = 298.257_223_563;

/// An open NetCDF file being populated from one profile. Lives for a single `write` call.
pub(super) struct WriteSession<'a> {
    file: FileMut,
    profile: &'a Profile,
    config: &'a ExporterConfig,
}

impl<'a> WriteSession<'a> {
    /// Create (or overwrite) the file at `path`.
    pub(super) fn create(
        path: &Path,
        profile: &'a Profile,
        config: &'a ExporterConfig,
    ) -> Result<Self> {
        let file = netcdf::create(path).map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(WriteSession {
            file,
            profile,
            config,
        })
    }

    /// Dimensions, station variables and global attributes.
    pub(super) fn write_header(&mut self) -> Result<()> {
        debug!("generating header");

        self.file.add_dimension(Z_DIM, self.profile.num_valid())?;
        self.file.add_dimension(PROFILE_DIM, 1)?;

        self.write_profile_id()?;
        self.write_time()?;
        self.write_position()?;
        self.write_crs()?;
        self.write_global_attributes()
    }

    fn write_profile_id(&mut self) -> Result<()> {
        let id = profile_id(self.profile.meta());
        let id_length = id.len().max(self.config.profile_id_length);

        let buffer = char_buffer(&id, id_length);

        self.file.add_dimension(PROFILE_ID_LENGTH_DIM, id_length)?;
        let mut var = self
            .file
            .add_variable::<NcChar>("profile", &[PROFILE_DIM, PROFILE_ID_LENGTH_DIM])?;
        var.put_values(&buffer, ..)?;
        var.put_attribute("long_name", "Unique identifier for each feature instance")?;
        var.put_attribute("cf_role", "profile_id")?;

        Ok(())
    }

    fn write_time(&mut self) -> Result<()> {
        let secs = self.profile.meta().utc_time().timestamp();
        let secs = i32::try_from(secs).map_err(|_| ExportError::TimeOutOfRange(secs))?;

        let mut var = self.file.add_variable::<i32>("time", &[PROFILE_DIM])?;
        var.set_fill_value(TIME_FILL)?;
        var.put_values(&[secs], ..)?;
        var.put_attribute("long_name", "cast time")?;
        var.put_attribute("standard_name", "time")?;
        var.put_attribute("units", "seconds since 1970-01-01 00:00:00")?;
        var.put_attribute("axis", "T")?;
        var.put_attribute("ancillary_variables", "")?;
        var.put_attribute("comment", "")?;

        Ok(())
    }

    fn write_position(&mut self) -> Result<()> {
        let meta = self.profile.meta();

        let mut var = self.file.add_variable::<f64>("lat", &[PROFILE_DIM])?;
        var.set_fill_value(LAT_FILL)?;
        var.put_values(&[meta.latitude()], ..)?;
        var.put_attribute("long_name", "latitude")?;
        var.put_attribute("standard_name", "latitude")?;
        var.put_attribute("units", "degrees_north")?;
        var.put_attribute("axis", "Y")?;
        var.put_attribute("valid_min", -90.0_f64)?;
        var.put_attribute("valid_max", LAT_FILL)?;
        var.put_attribute("ancillary_variables", "")?;
        var.put_attribute("comment", "")?;

        let mut var = self.file.add_variable::<f64>("lon", &[PROFILE_DIM])?;
        var.set_fill_value(LON_FILL)?;
        var.put_values(&[meta.longitude()], ..)?;
        var.put_attribute("long_name", "longitude")?;
        var.put_attribute("standard_name", "longitude")?;
        var.put_attribute("units", "degrees_east")?;
        var.put_attribute("axis", "X")?;
        var.put_attribute("valid_min", -180.0_f64)?;
        var.put_attribute("valid_max", LON_FILL)?;
        var.put_attribute("ancillary_variables", "")?;
        var.put_attribute("comment", "")?;

        Ok(())
    }

    fn write_crs(&mut self) -> Result<()> {
        let mut var = self.file.add_variable::<f64>("crs", &[PROFILE_DIM])?;
        var.put_values(&[WGS84_EPSG], ..)?;
        var.put_attribute("grid_mapping_name", "latitude_longitude")?;
        var.put_attribute("epsg_code", "EPSG:4326")?;
        var.put_attribute("semi_major_axis", WGS84_SEMI_MAJOR_AXIS)?;
        var.put_attribute("inverse_flattening", WGS84_INVERSE_FLATTENING)?;

        Ok(())
    }

    fn write_global_attributes(&mut self) -> Result<()> {
        let meta = self.profile.meta();
        let created = iso_8601(&Utc::now().naive_utc());
        let source = format!("sensor: {}, probe type: {}", meta.sensor(), meta.probe());

        let file = &mut self.file;
        file.add_attribute("ncei_template_version", TEMPLATE_VERSION)?;
        file.add_attribute("featureType", "profile")?;
        file.add_attribute("title", "Sound speed profile")?;
        file.add_attribute("summary", "")?;
        file.add_attribute("keywords", "")?;
        file.add_attribute("Conventions", CONVENTIONS)?;
        file.add_attribute("date_created", created.as_str())?;
        file.add_attribute("cdm_data_type", "Station")?;
        file.add_attribute("comment", self.config.app.provenance().as_str())?;
        file.add_attribute("references", self.config.references.as_str())?;
        file.add_attribute("platform", meta.vessel())?;
        file.add_attribute("project", meta.project())?;
        file.add_attribute("source", source.as_str())?;

        Ok(())
    }

    /// One variable per channel, except channels whose valid samples are all zero.
    pub(super) fn write_body(&mut self) -> Result<()> {
        debug!("generating body");

        for channel in Channel::iter() {
            // No valid samples has no mean to test, the channel is declared empty.
            if self.profile.valid_mean(channel) == Some(0.0) {
                debug!("skipping {}: all valid samples are zero", channel);
                continue;
            }

            let values: Vec<f32> = self
                .profile
                .valid_values(channel)
                .into_iter()
                .map(|v| v as f32)
                .collect();

            let mut var = self
                .file
                .add_variable::<f32>(channel.var_name(), &[PROFILE_DIM, Z_DIM])?;
            if !values.is_empty() {
                var.put_values(&values, ..)?;
            }
            var.put_attribute("long_name", channel.long_name())?;
            var.put_attribute("standard_name", channel.standard_name())?;
            var.put_attribute("units", channel.units())?;
        }

        Ok(())
    }

    /// Close the file, flushing everything to disk.
    pub(super) fn finalize(self) -> Result<()> {
        Ok(self.file.close()?)
    }
}
