use std::{fmt, io};

use thiserror::Error;

use crate::version::InnoVersion;

/// The maximum supported Inno Version by this library.
///
/// Inno Setup versions newer than this version are likely to have breaking changes where the
/// changes have not yet been implemented into this library.
pub(crate) const MAX_SUPPORTED_VERSION: InnoVersion = InnoVersion::new(6, 6, u8::MAX, u8::MAX);

/// Upper bound on a single Pascal string's byte length.
///
/// No real Inno Setup installer stores a string anywhere near this size; a length field this
/// large is a corrupt or hostile input and is rejected before an allocation is attempted.
pub(crate) const MAX_STRING_SIZE: u32 = 64 * 1024 * 1024;

/// Upper bound on any record count field (languages, files, components, ...).
pub(crate) const MAX_ENTRY_COUNT: u32 = 1 << 24;

#[derive(Error, Debug)]
pub enum InnoError {
    #[error("File is not an Inno installer")]
    NotInnoFile,
    #[error("No valid Inno Setup loader signature could be found in the executable")]
    NoLoader,
    #[error(
        "Inno Setup loader offset table CRC32 mismatch. Expected {expected} but calculated {actual}"
    )]
    LoaderCrcMismatch { actual: u32, expected: u32 },
    #[error("Unexpected data at end of {0} Inno header stream")]
    UnexpectedExtraData(HeaderStream),
    #[error(
        "Inno Setup version {0} is newer than the maximum supported version {MAX_SUPPORTED_VERSION}"
    )]
    UnsupportedVersion(InnoVersion),
    #[error("Unknown Inno setup version: {0}")]
    UnknownVersion(String),
    #[error("Unknown Inno Setup loader signature: {0:?}")]
    UnknownLoaderSignature([u8; 12]),
    #[error(
        "Inno CRC32 checksum mismatch reading {location}. Expected {expected} but calculated {actual}"
    )]
    CrcChecksumMismatch {
        location: &'static str,
        actual: u32,
        expected: u32,
    },
    #[error("Failed to decompress {location}: {reason}")]
    DecompressError {
        location: &'static str,
        reason: String,
    },
    #[error("Truncated {location}: expected at least {needed} more byte(s)")]
    Truncated {
        location: &'static str,
        needed: usize,
    },
    #[error("String length {0} exceeds the maximum allowed size of {MAX_STRING_SIZE} bytes")]
    OversizeString(u32),
    #[error("Entry count {actual} for {field} exceeds the maximum allowed count of {MAX_ENTRY_COUNT}")]
    OversizeCount { field: &'static str, actual: u32 },
    #[error("Invalid value {value} for enum {name}")]
    InvalidEnumValue { name: &'static str, value: u32 },
    #[error("Invalid {encoding} encoding encountered while decoding {location}")]
    InvalidEncoding {
        encoding: &'static str,
        location: &'static str,
    },
    #[error(
        "Inno CRC32 checksum mismatch reading a block. Expected {expected} but calculated {actual}"
    )]
    BlockCrcMismatch { actual: u32, expected: u32 },
    #[error(transparent)]
    Io(io::Error),
}

/// Reading the metadata stream passes through several generic `io::Read` adapters (block
/// reader, decompressor, CRC reader) before a caller sees a [`Result<_, InnoError>`]. Rather
/// than thread a dedicated error type through every one of those adapters, the specific
/// [`InnoError`] is embedded in the [`io::Error`] at the point it is first detected (see
/// [`read::block`](crate::read::block) and the `oversize_*` helpers below) and recovered here.
impl From<io::Error> for InnoError {
    fn from(err: io::Error) -> Self {
        let embeds_inno_error = err
            .get_ref()
            .is_some_and(|inner| inner.downcast_ref::<InnoError>().is_some());

        if !embeds_inno_error {
            return Self::Io(err);
        }

        let kind = err.kind();
        match err.into_inner() {
            Some(inner) => match inner.downcast::<InnoError>() {
                Ok(inno_err) => *inno_err,
                Err(inner) => Self::Io(io::Error::new(kind, inner)),
            },
            None => Self::Io(io::Error::from(kind)),
        }
    }
}

/// Builds an [`io::Error`] that [`InnoError::from`] will unpack back into [`InnoError::OversizeString`].
pub(crate) fn oversize_string_error(size: u32) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, InnoError::OversizeString(size))
}

/// Builds an [`io::Error`] that [`InnoError::from`] will unpack back into [`InnoError::OversizeCount`].
pub(crate) fn oversize_count_error(actual: u32, field: &'static str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        InnoError::OversizeCount { field, actual },
    )
}

/// Builds an [`io::Error`] that [`InnoError::from`] will unpack back into [`InnoError::BlockCrcMismatch`].
pub(crate) fn block_crc_mismatch_error(actual: u32, expected: u32) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        InnoError::BlockCrcMismatch { actual, expected },
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderStream {
    Primary,
    Secondary,
}

impl fmt::Display for HeaderStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("Primary"),
            Self::Secondary => f.write_str("Secondary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InnoError, block_crc_mismatch_error, oversize_count_error, oversize_string_error};

    #[test]
    fn embedded_oversize_string_error_round_trips() {
        let err = InnoError::from(oversize_string_error(123));
        assert!(matches!(err, InnoError::OversizeString(123)));
    }

    #[test]
    fn embedded_oversize_count_error_round_trips() {
        let err = InnoError::from(oversize_count_error(5, "language"));
        assert!(matches!(
            err,
            InnoError::OversizeCount {
                field: "language",
                actual: 5
            }
        ));
    }

    #[test]
    fn embedded_block_crc_mismatch_round_trips() {
        let err = InnoError::from(block_crc_mismatch_error(1, 2));
        assert!(matches!(
            err,
            InnoError::BlockCrcMismatch {
                actual: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn plain_io_error_without_embedded_variant_stays_io() {
        let err = InnoError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(err, InnoError::Io(_)));
    }
}
