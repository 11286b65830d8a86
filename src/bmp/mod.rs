//! Module for the headers of Windows Bitmap files (BMP).
//!
//! ## Parsing The Format
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! * A bitmap file always starts with a "file header". This is always 14 bytes.
//!   * A tag for the kind of bitmap you're expected to find. Windows bitmaps
//!     use `BM`, which reads as `0x4D42` in a little-endian `u16`.
//!   * A total size of the file, to check if a file was unexpectedly truncated
//!   * Two reserved `u16` values.
//!   * The position of the bitmap data within the file.
//! * Next is an "info header". There's many versions of this header, this
//!   module only reads the 40 byte `BITMAPINFOHEADER` fields. The first 4 bytes
//!   are the size of the full info header, which is recorded but not acted on.
//!
//! Everything after those 54 bytes (bitmasks, color table, pixels, ICC
//! profile) is outside the scope of this module. Only uncompressed (`BI_RGB`)
//! bitmaps are accepted.

use crate::{try_pull_pod, BmpHeaderError};

mod raw_headers;
use raw_headers::*;

mod file_header;
pub use file_header::*;

mod info_header;
pub use info_header::*;

mod consistency;
pub use consistency::*;

mod report;
pub use report::*;


/// The `BM` tag, read as a little-endian `u16`.
pub const BMP_FILE_TYPE: u16 = u16::from_le_bytes(*b"BM");

/// Compression method value for uncompressed pixel data.
pub const BI_RGB: u32 = 0;

/// Byte length of the file header.
pub const FILE_HEADER_LEN: usize = core::mem::size_of::<BitmapFileHeader>();

/// Byte length of the `BITMAPINFOHEADER`.
pub const INFO_HEADER_LEN: usize = core::mem::size_of::<BitmapInfoHeader>();

/// Byte length of both headers together, where a palette or pixel data can
/// begin at the earliest.
pub const HEADERS_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

/// The validated file header and info header of a BMP file.
///
/// A value of this type only exists if both records were read in full and
/// passed validation. It's a read-only view afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpHeaderDecoder {
  file_header: BmpFileHeader,
  info_header: BmpInfoHeader,
}
impl BmpHeaderDecoder {
  /// Tries to get both headers and the remaining bytes from the bytes of a BMP
  /// file.
  ///
  /// The remaining bytes start right after the info header's first 40 bytes.
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), BmpHeaderError> {
    let (raw_file, rest) = try_pull_pod::<BitmapFileHeader>(bytes)?;
    let file_header = Self::accept_file_header(raw_file)?;
    let (raw_info, rest) = try_pull_pod::<BitmapInfoHeader>(rest)?;
    let info_header = Self::accept_info_header(raw_info)?;
    Ok((Self::finish(file_header, info_header), rest))
  }

  /// Reads both headers from a stream.
  ///
  /// Exactly 54 bytes are consumed on success. Hitting the end of the stream
  /// early gives [`BmpHeaderError::TruncatedInput`], any other I/O failure
  /// gives [`BmpHeaderError::SourceUnavailable`].
  #[cfg(feature = "std")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
  pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self, BmpHeaderError> {
    let raw_file = crate::try_read_pod::<BitmapFileHeader, R>(&mut reader)?;
    let file_header = Self::accept_file_header(raw_file)?;
    let raw_info = crate::try_read_pod::<BitmapInfoHeader, R>(&mut reader)?;
    let info_header = Self::accept_info_header(raw_info)?;
    Ok(Self::finish(file_header, info_header))
  }

  /// Opens the file at `path` and reads both headers from it.
  ///
  /// The file is closed before this returns, whatever the outcome.
  #[cfg(feature = "std")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
  pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, BmpHeaderError> {
    let path = path.as_ref();
    log::debug!("opening bitmap `{}`", path.display());
    let file = std::fs::File::open(path)?;
    Self::from_reader(file)
  }

  /// The decoded file header.
  #[inline]
  #[must_use]
  pub const fn file_header(&self) -> &BmpFileHeader {
    &self.file_header
  }

  /// The decoded info header.
  #[inline]
  #[must_use]
  pub const fn info_header(&self) -> &BmpInfoHeader {
    &self.info_header
  }

  /// Checks the recorded sizes against the real length of the file.
  ///
  /// This never affects decoding, it just reports what it finds.
  #[inline]
  #[must_use]
  pub const fn consistency(&self, actual_len: u64) -> BmpConsistency {
    BmpConsistency::check(&self.file_header, actual_len)
  }

  /// A [`Display`](core::fmt::Display)-able report of every field.
  #[inline]
  #[must_use]
  pub const fn report(&self) -> BmpReport<'_> {
    BmpReport::new(self)
  }

  fn accept_file_header(raw: BitmapFileHeader) -> Result<BmpFileHeader, BmpHeaderError> {
    log::trace!("raw file header: {raw:?}");
    BmpFileHeader::from(raw).validate().map_err(|e| {
      log::debug!("rejected file header: {e}");
      e
    })
  }

  fn accept_info_header(raw: BitmapInfoHeader) -> Result<BmpInfoHeader, BmpHeaderError> {
    log::trace!("raw info header: {raw:?}");
    BmpInfoHeader::from(raw).validate().map_err(|e| {
      log::debug!("rejected info header: {e}");
      e
    })
  }

  fn finish(file_header: BmpFileHeader, info_header: BmpInfoHeader) -> Self {
    log::debug!(
      "decoded bitmap headers: {}x{} at {} bpp, pixel data at {:#x}",
      info_header.width(),
      info_header.height(),
      info_header.color_depth(),
      file_header.data_address()
    );
    Self { file_header, info_header }
  }
}
