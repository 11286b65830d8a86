use super::*;
use core::fmt;

/// Formats a header value as zero-padded hex: `0x4d42`, `0x0036`.
///
/// Values wider than four hex digits print in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct HexField(pub u32);
impl From<u16> for HexField {
  #[inline]
  fn from(value: u16) -> Self {
    Self(u32::from(value))
  }
}
impl From<u32> for HexField {
  #[inline]
  fn from(value: u32) -> Self {
    Self(value)
  }
}
impl fmt::Display for HexField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:#06x}", self.0)
  }
}

/// Text report of both headers, one field per line.
///
/// `file_type` and `data_address` print as [`HexField`], everything else in
/// decimal.
#[derive(Debug, Clone, Copy)]
pub struct BmpReport<'a> {
  headers: &'a BmpHeaderDecoder,
}
impl<'a> BmpReport<'a> {
  #[inline]
  #[must_use]
  pub(crate) const fn new(headers: &'a BmpHeaderDecoder) -> Self {
    Self { headers }
  }
}
impl fmt::Display for BmpReport<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let fh = self.headers.file_header();
    let ih = self.headers.info_header();
    writeln!(f, "File type:             {}", HexField::from(fh.file_type()))?;
    writeln!(f, "File size:             {}", fh.file_size())?;
    writeln!(f, "Reserved 1:            {}", fh.reserved1())?;
    writeln!(f, "Reserved 2:            {}", fh.reserved2())?;
    writeln!(f, "Data address:          {}", HexField::from(fh.data_address()))?;
    writeln!(f, "Header size:           {}", ih.header_size())?;
    writeln!(f, "Width:                 {}", ih.width())?;
    writeln!(f, "Height:                {}", ih.height())?;
    writeln!(f, "Color planes:          {}", ih.color_planes_count())?;
    writeln!(f, "Color depth:           {}", ih.color_depth())?;
    writeln!(f, "Compression method:    {}", ih.compression_method())?;
    writeln!(f, "Image size:            {}", ih.image_size())?;
    writeln!(f, "Horizontal resolution: {}", ih.horizontal_resolution())?;
    writeln!(f, "Vertical resolution:   {}", ih.vertical_resolution())?;
    writeln!(f, "Palette colors:        {}", ih.palette_color_count())?;
    writeln!(f, "Important colors:      {}", ih.important_color_count())
  }
}
