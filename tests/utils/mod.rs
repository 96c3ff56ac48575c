use chrono::{TimeZone, Utc};
use netcdf::AttributeValue;
use ssp_ncei::{NceiExporter, Profile, ProfileMeta};
use std::path::PathBuf;
use tempfile::TempDir;

/// Generate a test that writes a profile and checks the per-depth variables of the output.
///
/// Each expected channel is either `None` (variable must be absent) or `Some(vec![...])`.
#[allow(unused_macros)] // False alarm
macro_rules! check_channels {
    ($test_name:ident, $profile:expr, z = $z:expr, $($var:expr => $expected:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let (_tmp, path) = utils::write_to_temp(&$profile);
            let file = netcdf::open(&path).unwrap();

            assert_eq!(file.dimension("z").unwrap().len(), $z);

            $(
                let expected: Option<Vec<f32>> = $expected;
                match (file.variable($var), expected) {
                    (Some(var), Some(expected)) => {
                        let vals: Vec<f32> = var.get_values(..).unwrap();
                        assert_eq!(vals, expected, "values of {}", $var);
                    }
                    (None, None) => {}
                    (Some(_), None) => panic!("{} should not be in the file", $var),
                    (None, Some(_)) => panic!("{} is missing from the file", $var),
                }
            )+
        }
    };
}

pub fn meta() -> ProfileMeta {
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

pub fn make_profile(temp: &[f64], sal: &[f64], speed: &[f64], valid: &[bool]) -> Profile {
    Profile::new(meta())
        .with_temperature_profile(temp.to_vec())
        .with_salinity_profile(sal.to_vec())
        .with_speed_profile(speed.to_vec())
        .with_validity_mask(valid.to_vec())
}

/// temp=[10,11,0,12], sal=[35,35,0,36], speed=[1500,1502,0,1501], mask=[T,T,F,T]
pub fn standard_profile() -> Profile {
    make_profile(
        &[10.0, 11.0, 0.0, 12.0],
        &[35.0, 35.0, 0.0, 36.0],
        &[1500.0, 1502.0, 0.0, 1501.0],
        &[true, true, false, true],
    )
}

/// Write a profile with the default exporter into a fresh temporary directory. The directory is
/// removed when the returned `TempDir` is dropped.
pub fn write_to_temp(profile: &Profile) -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let path = NceiExporter::new()
        .write(profile, tmp.path(), Some("test_cast"), false)
        .unwrap();

    (tmp, path)
}

#[allow(dead_code)]
pub fn str_value(val: AttributeValue) -> String {
    match val {
        AttributeValue::Str(s) => s,
        other => panic!("expected a text attribute, found {:?}", other),
    }
}

#[allow(dead_code)]
pub fn f64_value(val: AttributeValue) -> f64 {
    match val {
        AttributeValue::Double(d) => d,
        other => panic!("expected a double attribute, found {:?}", other),
    }
}

/// Text value of a variable attribute.
#[allow(dead_code)]
pub fn var_str_attr(file: &netcdf::File, var: &str, attr: &str) -> String {
    let var = file
        .variable(var)
        .unwrap_or_else(|| panic!("missing variable {}", var));
    let attr = var
        .attribute(attr)
        .unwrap_or_else(|| panic!("missing attribute {}", attr));
    str_value(attr.value().unwrap())
}

/// Double value of a variable attribute.
#[allow(dead_code)]
pub fn var_f64_attr(file: &netcdf::File, var: &str, attr: &str) -> f64 {
    let var = file
        .variable(var)
        .unwrap_or_else(|| panic!("missing variable {}", var));
    let attr = var
        .attribute(attr)
        .unwrap_or_else(|| panic!("missing attribute {}", attr));
    f64_value(attr.value().unwrap())
}

/// Text value of a global attribute.
#[allow(dead_code)]
pub fn global_str_attr(file: &netcdf::File, attr: &str) -> String {
    let attr = file
        .attribute(attr)
        .unwrap_or_else(|| panic!("missing global attribute {}", attr));
    str_value(attr.value().unwrap())
}
