//! Error types for the ssp-ncei crate.
use std::path::PathBuf;

/// Error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("Unable to create output directory {path:?}: {source}")]
    Io {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The output file could not be created or opened for writing.
    #[error("Unable to create output file {path:?}: {source}")]
    Create {
        /// File that could not be created.
        path: PathBuf,
        /// Error reported by the NetCDF library.
        #[source]
        source: netcdf::Error,
    },
    /// The NetCDF library rejected a dimension, variable or
    /// attribute declaration.
    #[error("NetCDF container error: {0}")]
    Container(#[from] netcdf::Error),
    /// The sample arrays and the validity mask are not parallel.
    #[error(
        "Sample arrays are not parallel: temperature {temperature}, salinity {salinity}, \
         sound speed {speed}, validity mask {mask}."
    )]
    LengthMismatch {
        /// Length of the temperature array.
        temperature: usize,
        /// Length of the salinity array.
        salinity: usize,
        /// Length of the sound speed array.
        speed: usize,
        /// Length of the validity mask.
        mask: usize,
    },
    /// The cast time does not fit in the 32 bit `time` variable.
    #[error("Cast time {0} s is outside the range of a 32 bit time variable.")]
    TimeOutOfRange(i64),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, ExportError>;
