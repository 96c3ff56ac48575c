//! The NCEI profile-orthogonal NetCDF writer.
//!
//! One call to `NceiExporter::write` produces exactly one NetCDF-4 file. The file is created,
//! populated with the fixed header (dimensions, station variables, global attributes), then with
//! the per-depth science variables, and finally closed.
//!
//! Useful links:
//!   - <http://www.nodc.noaa.gov/data/formats/netcdf/v2.0/profileOrthogonal.cdl>
//!   - <http://puma.nerc.ac.uk/cgi-bin/cf-checker.pl>
use crate::{
    config::ExporterConfig,
    error::{ExportError, Result},
    profile::Profile,
};
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

use self::session::WriteSession;

/// Writer for NCEI profile-orthogonal NetCDF files.
#[derive(Debug, Clone, Default)]
pub struct NceiExporter {
    config: ExporterConfig,
}

impl NceiExporter {
    /// Short name of the format, also used for the output sub-directory.
    pub const NAME: &'static str = "NCEI";

    /// File extension of the output files.
    pub const EXTENSION: &'static str = "nc";

    /// Create an exporter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ssp_ncei::{AppIdentity, ExporterConfig, NceiExporter};
    ///
    /// let cfg = ExporterConfig::new().with_app(AppIdentity::new("Sound Speed Manager", "2.1.0"));
    /// let exporter = NceiExporter::with_config(cfg);
    /// assert_eq!(exporter.config().app.version, "2.1.0");
    /// ```
    pub fn with_config(config: ExporterConfig) -> Self {
        NceiExporter { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    /// Write `profile` to a new NetCDF file and return the path of that file.
    ///
    /// When `data_file` is given the file is written to `data_path/data_file`, adding the `.nc`
    /// extension if the name has none. Otherwise the name is taken from the profile's original
    /// path (or `output.nc` without one) and the file goes in the `ncei` sub-directory of
    /// `data_path`, which is created if needed.
    ///
    /// An existing file at the output path is overwritten. `data_append` is accepted for
    /// compatibility with other writers, but it is ignored: a new file is always created.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ssp_ncei::NceiExporter;
    /// # use ssp_ncei::doctest::make_test_profile;
    ///
    /// let prof = make_test_profile();
    /// let path = NceiExporter::new().write(&prof, "/tmp/ssp", Some("cast_001"), false)?;
    /// assert!(path.ends_with("cast_001.nc"));
    /// # Ok::<(), ssp_ncei::ExportError>(())
    /// ```
    pub fn write<P: AsRef<Path>>(
        &self,
        profile: &Profile,
        data_path: P,
        data_file: Option<&str>,
        data_append: bool,
    ) -> Result<PathBuf> {
        debug!("*** {} ***: start", Self::NAME);

        if data_append {
            debug!("append is not supported, creating a new file");
        }

        profile.check_parallel()?;

        let file_path = self.output_path(profile, data_path.as_ref(), data_file)?;
        info!("output file: {}", file_path.display());

        let mut session = WriteSession::create(&file_path, profile, &self.config)?;
        session.write_header()?;
        session.write_body()?;
        session.finalize()?;

        debug!("*** {} ***: done", Self::NAME);
        Ok(file_path)
    }

    // Resolve the path `write` will use, creating the `ncei` sub-directory when the name is
    // derived from the profile.
    fn output_path(
        &self,
        profile: &Profile,
        data_path: &Path,
        data_file: Option<&str>,
    ) -> Result<PathBuf> {
        match data_file {
            Some(name) if !name.is_empty() => {
                let name = if name.contains('.') {
                    name.to_owned()
                } else {
                    format!("{}.{}", name, Self::EXTENSION)
                };
                Ok(data_path.join(name))
            }
            _ => {
                let name = match profile.meta().original_path().and_then(Path::file_name) {
                    Some(base) => format!("{}.{}", base.to_string_lossy(), Self::EXTENSION),
                    None => format!("output.{}", Self::EXTENSION),
                };

                let dir = data_path.join(Self::NAME.to_lowercase());
                if !dir.exists() {
                    fs::create_dir_all(&dir).map_err(|source| ExportError::Io {
                        path: dir.clone(),
                        source,
                    })?;
                }

                Ok(dir.join(name))
            }
        }
    }
}


mod session;
