//! The per-depth science channels of a sound speed profile and the CF metadata written with them.

use std::fmt::Display;
use strum_macros::{EnumIter, IntoStaticStr};

/// A per-depth channel of a profile.
///
/// Channels are written in the order they are declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr, Hash, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Channel {
    /// Sea water temperature in &deg;C.
    Temperature,
    /// Practical salinity.
    Salinity,
    /// Speed of sound in m/s.
    SoundSpeed,
}

impl Channel {
    /// Name of the NetCDF variable holding this channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ssp_ncei::Channel;
    ///
    /// assert_eq!(Channel::SoundSpeed.var_name(), "sound_speed");
    /// ```
    #[inline]
    pub fn var_name(self) -> &'static str {
        self.into()
    }

    /// Value of the `long_name` attribute.
    pub fn long_name(self) -> &'static str {
        use Channel::*;

        match self {
            Temperature => "temperature in sea water",
            Salinity => "salinity in sea water",
            SoundSpeed => "sound speed in sea water",
        }
    }

    /// Value of the CF `standard_name` attribute.
    pub fn standard_name(self) -> &'static str {
        use Channel::*;

        match self {
            Temperature => "sea_water_temperature",
            Salinity => "sea_water_salinity",
            // Contractual, even though CF names sound speed speed_of_sound_in_sea_water.
            SoundSpeed => "sea_water_speed",
        }
    }

    /// UDUNITS compatible units string.
    pub fn units(self) -> &'static str {
        use Channel::*;

        match self {
            Temperature => "degree_C",
            Salinity => "1e-3",
            SoundSpeed => "m s-1",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.var_name())
    }
}
