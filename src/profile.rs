//! Data type and methods to store a sound speed profile.

use crate::{
    channel::Channel,
    error::{ExportError, Result},
};
use itertools::izip;

pub use self::meta::ProfileMeta;

/// A single cast: metadata plus the per-depth samples.
///
/// The sample profiles are stored in parallel vectors together with a validity mask that flags
/// which depth samples are usable. A channel that was never measured is a vector of zeros rather
/// than an empty vector, so all four vectors always have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    meta: ProfileMeta,

    // Profiles
    temperature: Vec<f64>,
    salinity: Vec<f64>,
    speed: Vec<f64>,

    // Which samples are usable
    valid: Vec<bool>,
}

impl Profile {
    /// Create a new profile with no samples.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ssp_ncei::Profile;
    /// # use ssp_ncei::doctest::make_test_meta;
    ///
    /// let prof = Profile::new(make_test_meta());
    /// assert_eq!(prof.num_samples(), 0);
    /// assert_eq!(prof.num_valid(), 0);
    /// ```
    #[inline]
    pub fn new(meta: ProfileMeta) -> Self {
        Profile {
            meta,
            temperature: vec![],
            salinity: vec![],
            speed: vec![],
            valid: vec![],
        }
    }

    /// Builder method to replace the cast metadata.
    #[inline]
    pub fn with_meta(mut self, meta: ProfileMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Get the cast metadata.
    #[inline]
    pub fn meta(&self) -> &ProfileMeta {
        &self.meta
    }

    /// Builder method for the temperature profile in &deg;C.
    ///
    /// # Examples
    /// ```rust
    /// use ssp_ncei::Profile;
    /// # use ssp_ncei::doctest::make_test_meta;
    ///
    /// let prof = Profile::new(make_test_meta())
    ///     .with_temperature_profile(vec![10.0, 11.0, 0.0, 12.0])
    ///     .with_salinity_profile(vec![35.0, 35.0, 0.0, 36.0])
    ///     .with_speed_profile(vec![1500.0, 1502.0, 0.0, 1501.0])
    ///     .with_validity_mask(vec![true, true, false, true]);
    ///
    /// assert_eq!(prof.num_samples(), 4);
    /// assert_eq!(prof.num_valid(), 3);
    /// ```
    #[inline]
    pub fn with_temperature_profile(self, temperature: Vec<f64>) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Builder method for the salinity profile.
    ///
    /// See `with_temperature_profile` for an example of usage.
    #[inline]
    pub fn with_salinity_profile(self, salinity: Vec<f64>) -> Self {
        Self { salinity, ..self }
    }

    /// Builder method for the sound speed profile in m/s.
    ///
    /// See `with_temperature_profile` for an example of usage.
    #[inline]
    pub fn with_speed_profile(self, speed: Vec<f64>) -> Self {
        Self { speed, ..self }
    }

    /// Builder method for the validity mask, `true` marks a usable sample.
    ///
    /// See `with_temperature_profile` for an example of usage.
    #[inline]
    pub fn with_validity_mask(self, valid: Vec<bool>) -> Self {
        Self { valid, ..self }
    }

    /// Get the temperature profile.
    #[inline]
    pub fn temperature_profile(&self) -> &[f64] {
        &self.temperature
    }

    /// Get the salinity profile.
    #[inline]
    pub fn salinity_profile(&self) -> &[f64] {
        &self.salinity
    }

    /// Get the sound speed profile.
    #[inline]
    pub fn speed_profile(&self) -> &[f64] {
        &self.speed
    }

    /// Get the validity mask.
    #[inline]
    pub fn validity_mask(&self) -> &[bool] {
        &self.valid
    }

    /// Get the full, unfiltered profile of a channel.
    #[inline]
    pub fn channel_profile(&self, channel: Channel) -> &[f64] {
        match channel {
            Channel::Temperature => &self.temperature,
            Channel::Salinity => &self.salinity,
            Channel::SoundSpeed => &self.speed,
        }
    }

    /// Number of depth samples, valid or not.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.valid.len()
    }

    /// Number of depth samples flagged as valid.
    #[inline]
    pub fn num_valid(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    /// Check that all of the sample profiles and the validity mask have the same length.
    pub fn check_parallel(&self) -> Result<()> {
        let n = self.valid.len();
        if self.temperature.len() == n && self.salinity.len() == n && self.speed.len() == n {
            Ok(())
        } else {
            Err(ExportError::LengthMismatch {
                temperature: self.temperature.len(),
                salinity: self.salinity.len(),
                speed: self.speed.len(),
                mask: n,
            })
        }
    }

    /// Get the valid samples of a channel, in the order they appear in the profile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ssp_ncei::Channel;
    /// # use ssp_ncei::doctest::make_test_profile;
    ///
    /// let prof = make_test_profile();
    /// assert_eq!(prof.valid_values(Channel::Temperature), vec![10.0, 11.0, 12.0]);
    /// ```
    pub fn valid_values(&self, channel: Channel) -> Vec<f64> {
        izip!(self.channel_profile(channel), &self.valid)
            .filter(|&(_, &valid)| valid)
            .map(|(&val, _)| val)
            .collect()
    }

    /// Mean of the valid samples of a channel, `None` if there are no valid samples.
    pub fn valid_mean(&self, channel: Channel) -> Option<f64> {
        let (sum, count) = izip!(self.channel_profile(channel), &self.valid)
            .filter(|&(_, &valid)| valid)
            .fold((0.0, 0usize), |(sum, count), (&val, _)| (sum + val, count + 1));

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

// Fixtures shared by the doc examples, tests and benches.
#[doc(hidden)]
pub mod doctest {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub fn make_test_meta() -> ProfileMeta {
        ProfileMeta::new(
            Utc.with_ymd_and_hms(2019, 6, 1, 12, 30, 15).unwrap(),
            43.135_216_8,
            -70.939_401_2,
        )
        .with_vessel("R/V Gulf Surveyor")
        .with_project("Portsmouth Harbor")
        .with_sensor("CTD")
        .with_probe("SBE 19plus")
    }

    pub fn make_test_profile() -> Profile {
        Profile::new(make_test_meta())
            .with_temperature_profile(vec![10.0, 11.0, 0.0, 12.0])
            .with_salinity_profile(vec![35.0, 35.0, 0.0, 36.0])
            .with_speed_profile(vec![1500.0, 1502.0, 0.0, 1501.0])
            .with_validity_mask(vec![true, true, false, true])
    }
}


mod meta;
