//! Text formatting for the string valued fields of the file.
use crate::profile::ProfileMeta;
use chrono::{NaiveDateTime, Timelike};
use netcdf::types::{NcTypeDescriptor, NcVariableType};

/// One byte of a NetCDF `char` (text) variable.
#[doc(hidden)]
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NcChar(pub u8);

unsafe impl NcTypeDescriptor for NcChar {
    fn type_descriptor() -> NcVariableType {
        NcVariableType::Char
    }
}

/// Encode `text` as a fixed length `char` buffer, NUL padded up to `length` bytes.
///
/// Text longer than `length` is kept whole.
///
/// # Examples
///
/// ```rust
/// use ssp_ncei::format::{char_buffer, NcChar};
///
/// let buf = char_buffer("ab", 4);
/// assert_eq!(buf, vec![NcChar(b'a'), NcChar(b'b'), NcChar(0), NcChar(0)]);
/// assert_eq!(char_buffer("abc", 2).len(), 3);
/// ```
pub fn char_buffer(text: &str, length: usize) -> Vec<NcChar> {
    let mut buffer: Vec<NcChar> = text.bytes().map(NcChar).collect();
    if buffer.len() < length {
        buffer.resize(length, NcChar(0));
    }
    buffer
}

/// Format a time as ISO-8601 without a UTC offset, e.g. `2019-06-01T12:30:15`.
///
/// Microseconds are only shown when they are non-zero.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use ssp_ncei::format::iso_8601;
///
/// let t = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap().and_hms_opt(12, 30, 15).unwrap();
/// assert_eq!(iso_8601(&t), "2019-06-01T12:30:15");
///
/// let t = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap().and_hms_micro_opt(12, 30, 15, 250).unwrap();
/// assert_eq!(iso_8601(&t), "2019-06-01T12:30:15.000250");
/// ```
pub fn iso_8601(time: &NaiveDateTime) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Shortest text that reads back as the same `f64`, always with a decimal point or an exponent.
///
/// Exponent notation is used below 1e-4 and from 1e16 up, with at least two exponent digits.
pub fn shortest_repr(val: f64) -> String {
    if val.is_nan() {
        return "nan".to_owned();
    } else if val.is_infinite() {
        return if val > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let abs = val.abs();
    if abs != 0.0 && (abs < 1.0e-4 || abs >= 1.0e16) {
        let sci = format!("{:e}", val);
        match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => sci,
        }
    } else {
        let plain = format!("{}", val);
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    }
}

/// Compose the unique profile identifier: cast time, longitude, latitude and vessel name.
///
/// The longitude is printed with 7 decimals, the latitude is its shortest text truncated to 7
/// characters.
///
/// # Examples
///
/// ```rust
/// # use ssp_ncei::doctest::make_test_meta;
/// use ssp_ncei::format::profile_id;
///
/// let meta = make_test_meta();
/// assert_eq!(
///     profile_id(&meta),
///     "2019-06-01T12:30:15 -70.9394012 43.1352 R/V Gulf Surveyor"
/// );
/// ```
pub fn profile_id(meta: &ProfileMeta) -> String {
    let lat: String = shortest_repr(meta.latitude()).chars().take(7).collect();

    format!(
        "{} {:.7} {} {}",
        iso_8601(&meta.utc_time().naive_utc()),
        meta.longitude(),
        lat,
        meta.vessel()
    )
}
