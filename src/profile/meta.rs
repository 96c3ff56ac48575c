use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Placeholder used for sensor and probe descriptions that were never set.
const UNKNOWN: &str = "Unknown";

/// Cast metadata: when and where the profile was taken, and with what.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMeta {
    /// Time of the cast in UTC.
    utc_time: DateTime<Utc>,
    /// Latitude in degrees north, WGS84.
    latitude: f64,
    /// Longitude in degrees east, WGS84.
    longitude: f64,
    vessel: String,
    project: String,
    sensor: String,
    probe: String,
    /// Path of the file the profile was originally imported from, if any.
    original_path: Option<PathBuf>,
}

impl ProfileMeta {
    /// Create a new `ProfileMeta` for a cast at the given time and position.
    ///
    /// The vessel and project names start out empty, the sensor and probe descriptions start out
    /// as `"Unknown"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use ssp_ncei::ProfileMeta;
    ///
    /// let meta = ProfileMeta::new(Utc.with_ymd_and_hms(2019, 6, 1, 12, 0, 0).unwrap(), 43.1, -70.7);
    ///
    /// assert_eq!(meta.latitude(), 43.1);
    /// assert_eq!(meta.longitude(), -70.7);
    /// assert_eq!(meta.sensor(), "Unknown");
    /// assert!(meta.original_path().is_none());
    /// ```
    #[inline]
    pub fn new(utc_time: DateTime<Utc>, latitude: f64, longitude: f64) -> Self {
        ProfileMeta {
            utc_time,
            latitude,
            longitude,
            vessel: String::new(),
            project: String::new(),
            sensor: UNKNOWN.to_owned(),
            probe: UNKNOWN.to_owned(),
            original_path: None,
        }
    }

    /// Builder method to set the vessel name.
    #[inline]
    pub fn with_vessel<S: Into<String>>(mut self, vessel: S) -> Self {
        self.vessel = vessel.into();
        self
    }

    /// Builder method to set the project name.
    #[inline]
    pub fn with_project<S: Into<String>>(mut self, project: S) -> Self {
        self.project = project.into();
        self
    }

    /// Builder method to set the sensor name.
    #[inline]
    pub fn with_sensor<S: Into<String>>(mut self, sensor: S) -> Self {
        self.sensor = sensor.into();
        self
    }

    /// Builder method to set the probe type.
    #[inline]
    pub fn with_probe<S: Into<String>>(mut self, probe: S) -> Self {
        self.probe = probe.into();
        self
    }

    /// Builder method to set the path of the file this profile was imported from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::{Path, PathBuf};
    /// # use ssp_ncei::doctest::make_test_meta;
    ///
    /// let meta = make_test_meta().with_original_path(PathBuf::from("casts/0001.cnv"));
    /// assert_eq!(meta.original_path().unwrap(), Path::new("casts/0001.cnv"));
    ///
    /// let meta = meta.with_original_path(None);
    /// assert!(meta.original_path().is_none());
    /// ```
    #[inline]
    pub fn with_original_path<P>(mut self, path: P) -> Self
    where
        Option<PathBuf>: From<P>,
    {
        self.original_path = Option::from(path);
        self
    }

    /// Time of the cast in UTC.
    #[inline]
    pub fn utc_time(&self) -> DateTime<Utc> {
        self.utc_time
    }

    /// Latitude in degrees north.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees east.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Name of the vessel that took the cast.
    #[inline]
    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    /// Name of the project the cast belongs to.
    #[inline]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Name of the sensor.
    #[inline]
    pub fn sensor(&self) -> &str {
        &self.sensor
    }

    /// Probe type.
    #[inline]
    pub fn probe(&self) -> &str {
        &self.probe
    }

    /// Path of the file the profile was originally imported from.
    #[inline]
    pub fn original_path(&self) -> Option<&Path> {
        self.original_path.as_deref()
    }
}
