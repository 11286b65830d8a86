use bytemuck::{pod_read_unaligned, Pod};

use crate::BmpHeaderError;
use core::mem::size_of;

/// Splits a `T` off the front of `bytes`, returning it with the bytes after.
#[inline]
pub(crate) fn try_pull_pod<T: Pod>(bytes: &[u8]) -> Result<(T, &[u8]), BmpHeaderError> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let a: T = pod_read_unaligned(head);
    Ok((a, tail))
  } else {
    Err(BmpHeaderError::TruncatedInput)
  }
}

/// Reads exactly one `T` worth of bytes from the stream.
#[cfg(feature = "std")]
#[inline]
pub(crate) fn try_read_pod<T: Pod, R: std::io::Read>(reader: &mut R) -> Result<T, BmpHeaderError> {
  let mut a: T = bytemuck::Zeroable::zeroed();
  reader.read_exact(bytemuck::bytes_of_mut(&mut a))?;
  Ok(a)
}
