#![warn(missing_docs)]
//! Write oceanographic sound speed profiles to NetCDF-4 files that follow the CF-1.6 and
//! ACDD-1.3 conventions and the NCEI profile-orthogonal template (v2.0).
//!
//! A `Profile` holds the cast metadata (`ProfileMeta`) and the per-depth temperature, salinity
//! and sound speed samples together with a validity mask. `NceiExporter::write` turns one profile
//! into one file: only valid samples are written, in their original order, and a channel whose
//! valid samples average to zero is left out of the file entirely.
//!
//! ```rust,no_run
//! use chrono::{TimeZone, Utc};
//! use ssp_ncei::{NceiExporter, Profile, ProfileMeta};
//!
//! let meta = ProfileMeta::new(Utc.with_ymd_and_hms(2019, 6, 1, 12, 30, 15).unwrap(), 43.13, -70.94)
//!     .with_vessel("R/V Gulf Surveyor")
//!     .with_project("Portsmouth Harbor");
//!
//! let prof = Profile::new(meta)
//!     .with_temperature_profile(vec![10.0, 11.0, 0.0, 12.0])
//!     .with_salinity_profile(vec![35.0, 35.0, 0.0, 36.0])
//!     .with_speed_profile(vec![1500.0, 1502.0, 0.0, 1501.0])
//!     .with_validity_mask(vec![true, true, false, true]);
//!
//! // Written to /tmp/ssp/ncei/output.nc
//! let path = NceiExporter::new().write(&prof, "/tmp/ssp", None, false)?;
//! # Ok::<(), ssp_ncei::ExportError>(())
//! ```

//
// API
//
pub use crate::{
    channel::Channel,
    config::{AppIdentity, ExporterConfig},
    error::{ExportError, Result},
    exporter::NceiExporter,
    profile::{doctest, Profile, ProfileMeta},
};

pub mod format;

//
// Internal use only
//

mod channel;
mod config;
mod error;
mod exporter;
mod profile;
