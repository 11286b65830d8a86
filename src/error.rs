use core::fmt;

/// An error from decoding the headers of a BMP file.
///
/// Every variant is final: the decoder never retries and never falls back to
/// a default value for a field it rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmpHeaderError {
  /// The byte source couldn't be opened, or a read failed for a reason other
  /// than reaching the end of the data.
  SourceUnavailable,

  /// The data ended before a complete header record was read.
  TruncatedInput,

  /// The file header doesn't start with the `BM` tag.
  ///
  /// Other tags (`BA`, `CI`, `CP`, `IC`, `PT`) belong to OS/2 formats and are
  /// rejected here as well.
  UnsupportedFormat {
    /// The little-endian `u16` found where `0x4D42` was expected.
    file_type: u16,
  },

  /// The info header declares a compression method other than `BI_RGB`.
  UnsupportedCompression {
    /// The compression method found in the info header.
    compression_method: u32,
  },
}

impl fmt::Display for BmpHeaderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::SourceUnavailable => f.write_str("the bitmap could not be opened or read"),
      Self::TruncatedInput => f.write_str("the data ended before the bitmap headers were complete"),
      Self::UnsupportedFormat { file_type } => {
        write!(f, "not a BM-type bitmap (file type {file_type:#06x})")
      }
      Self::UnsupportedCompression { compression_method } => {
        write!(f, "compressed bitmaps are not supported (compression method {compression_method})")
      }
    }
  }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for BmpHeaderError {}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl From<std::io::Error> for BmpHeaderError {
  #[inline]
  fn from(err: std::io::Error) -> Self {
    match err.kind() {
      std::io::ErrorKind::UnexpectedEof => Self::TruncatedInput,
      _ => {
        log::debug!("bitmap source unavailable: {err}");
        Self::SourceUnavailable
      }
    }
  }
}
