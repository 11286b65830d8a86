use super::*;

/// Advisory cross-checks between the file header and the real file length.
///
/// The decoder accepts files that fail these, same as most bitmap readers do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpConsistency {
  /// The recorded `file_size` equals the real length.
  pub file_size_matches: bool,

  /// The recorded `data_address` points past the two headers and not past
  /// the end of the file.
  pub data_address_in_bounds: bool,
}
impl BmpConsistency {
  #[inline]
  #[must_use]
  pub(crate) const fn check(file_header: &BmpFileHeader, actual_len: u64) -> Self {
    let data_address = file_header.data_address() as u64;
    Self {
      file_size_matches: file_header.file_size() as u64 == actual_len,
      data_address_in_bounds: data_address >= HEADERS_LEN as u64 && data_address <= actual_len,
    }
  }

  /// If every check passed.
  #[inline]
  #[must_use]
  pub const fn is_consistent(self) -> bool {
    self.file_size_matches && self.data_address_in_bounds
  }
}
