use super::*;

/// The header at the start of all BMP files.
///
/// Corresponds to the 14 byte `BITMAPFILEHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpFileHeader {
  file_type: u16,
  file_size: u32,
  reserved1: u16,
  reserved2: u16,
  data_address: u32,
}
impl From<BitmapFileHeader> for BmpFileHeader {
  #[inline]
  #[must_use]
  fn from(raw: BitmapFileHeader) -> Self {
    Self {
      file_type: raw.ty.get(),
      file_size: raw.file_size.get(),
      reserved1: raw.reserved1.get(),
      reserved2: raw.reserved2.get(),
      data_address: raw.bitmap_offset.get(),
    }
  }
}
impl From<[u8; 14]> for BmpFileHeader {
  #[inline]
  #[must_use]
  fn from(value: [u8; 14]) -> Self {
    Self::from(bytemuck::cast::<[u8; 14], BitmapFileHeader>(value))
  }
}
impl BmpFileHeader {
  /// Fails unless this header carries the `BM` tag.
  #[inline]
  pub const fn validate(self) -> Result<Self, BmpHeaderError> {
    if self.file_type == BMP_FILE_TYPE {
      Ok(self)
    } else {
      Err(BmpHeaderError::UnsupportedFormat { file_type: self.file_type })
    }
  }

  /// The file's tag, as a little-endian `u16`.
  ///
  /// Always [`BMP_FILE_TYPE`] for a header that came out of the decoder.
  #[inline]
  #[must_use]
  pub const fn file_type(&self) -> u16 {
    self.file_type
  }

  /// The total size of the file, as recorded in the header.
  ///
  /// If this doesn't match the actual size of the file, there might be some
  /// sort of data loss or corruption. See
  /// [`BmpHeaderDecoder::consistency`].
  #[inline]
  #[must_use]
  pub const fn file_size(&self) -> u32 {
    self.file_size
  }

  #[inline]
  #[must_use]
  #[allow(missing_docs)]
  pub const fn reserved1(&self) -> u16 {
    self.reserved1
  }

  #[inline]
  #[must_use]
  #[allow(missing_docs)]
  pub const fn reserved2(&self) -> u16 {
    self.reserved2
  }

  /// The byte index within the file where the pixel data starts.
  #[inline]
  #[must_use]
  pub const fn data_address(&self) -> u32 {
    self.data_address
  }
}
