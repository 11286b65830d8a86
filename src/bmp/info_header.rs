use super::*;

/// Header for Windows 3.1 or later.
///
/// Corresponds to the 40 byte `BITMAPINFOHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeader {
  header_size: u32,
  width: i32,
  height: i32,
  color_planes_count: u16,
  color_depth: u16,
  compression_method: u32,
  image_size: u32,
  horizontal_resolution: u32,
  vertical_resolution: u32,
  palette_color_count: u32,
  important_color_count: u32,
}
impl From<BitmapInfoHeader> for BmpInfoHeader {
  #[inline]
  #[must_use]
  fn from(raw: BitmapInfoHeader) -> Self {
    Self {
      header_size: raw.size.get(),
      width: raw.width.get(),
      height: raw.height.get(),
      color_planes_count: raw.planes.get(),
      color_depth: raw.bits_per_pixel.get(),
      compression_method: raw.compression.get(),
      image_size: raw.image_size.get(),
      horizontal_resolution: raw.pixels_per_meter_x.get(),
      vertical_resolution: raw.pixels_per_meter_y.get(),
      palette_color_count: raw.colors_used.get(),
      important_color_count: raw.important_colors.get(),
    }
  }
}
impl From<[u8; 40]> for BmpInfoHeader {
  #[inline]
  #[must_use]
  fn from(value: [u8; 40]) -> Self {
    Self::from(bytemuck::cast::<[u8; 40], BitmapInfoHeader>(value))
  }
}
impl BmpInfoHeader {
  /// Fails unless the pixel data is stored uncompressed (`BI_RGB`).
  #[inline]
  pub const fn validate(self) -> Result<Self, BmpHeaderError> {
    if self.compression_method == BI_RGB {
      Ok(self)
    } else {
      Err(BmpHeaderError::UnsupportedCompression { compression_method: self.compression_method })
    }
  }

  /// Size of the info header as the file declares it.
  ///
  /// This is stored, not checked. Files using a larger header version still
  /// decode here, but only their first 40 bytes are looked at.
  #[inline]
  #[must_use]
  pub const fn header_size(&self) -> u32 {
    self.header_size
  }

  /// Image pixel width.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> i32 {
    self.width
  }

  /// Image pixel height.
  ///
  /// * A positive height indicates that the origin is the **bottom** left.
  /// * A negative height indicates that the image origin is the **top** left.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> i32 {
    self.height
  }

  /// Should be 1.
  #[inline]
  #[must_use]
  pub const fn color_planes_count(&self) -> u16 {
    self.color_planes_count
  }

  /// Bits per pixel. Should be 1, 4, 8, 16, 24, or 32.
  #[inline]
  #[must_use]
  pub const fn color_depth(&self) -> u16 {
    self.color_depth
  }

  /// Always [`BI_RGB`] for a header that came out of the decoder.
  #[inline]
  #[must_use]
  pub const fn compression_method(&self) -> u32 {
    self.compression_method
  }

  /// Byte size of the pixel data. Zero is allowed for `BI_RGB` images.
  #[inline]
  #[must_use]
  pub const fn image_size(&self) -> u32 {
    self.image_size
  }

  /// Pixels per meter of the intended device, wide.
  #[inline]
  #[must_use]
  pub const fn horizontal_resolution(&self) -> u32 {
    self.horizontal_resolution
  }

  /// Pixels per meter of the intended device, tall.
  #[inline]
  #[must_use]
  pub const fn vertical_resolution(&self) -> u32 {
    self.vertical_resolution
  }

  /// The number of color table entries that are used. If zero, the maximum
  /// number according to the bits per pixel is implied.
  #[inline]
  #[must_use]
  pub const fn palette_color_count(&self) -> u32 {
    self.palette_color_count
  }

  /// The number of colors that are important, if zero then all colors are
  /// important.
  #[inline]
  #[must_use]
  pub const fn important_color_count(&self) -> u32 {
    self.important_color_count
  }

  /// If the rows are stored top to bottom (negative height).
  #[inline]
  #[must_use]
  pub const fn is_top_down(&self) -> bool {
    self.height < 0
  }

  /// Width without its sign.
  #[inline]
  #[must_use]
  pub const fn abs_width(&self) -> u32 {
    self.width.unsigned_abs()
  }

  /// Height without its sign.
  #[inline]
  #[must_use]
  pub const fn abs_height(&self) -> u32 {
    self.height.unsigned_abs()
  }
}
