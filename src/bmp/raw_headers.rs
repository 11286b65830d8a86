//! Byte-exact mirrors of the two on-disk header records.
//!
//! Every field is an alignment-1 little-endian wrapper, so these structs have
//! no padding and the same layout on every target. The offsets are checked
//! below against the file format's table.

use core::mem::{offset_of, size_of};
use pack1::*;

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapFileHeader {
  pub ty: U16LE,
  pub file_size: U32LE,
  pub reserved1: U16LE,
  pub reserved2: U16LE,
  pub bitmap_offset: U32LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapInfoHeader {
  pub size: U32LE,
  pub width: I32LE,
  pub height: I32LE,
  pub planes: U16LE,
  pub bits_per_pixel: U16LE,
  pub compression: U32LE,
  pub image_size: U32LE,
  pub pixels_per_meter_x: U32LE,
  pub pixels_per_meter_y: U32LE,
  pub colors_used: U32LE,
  pub important_colors: U32LE,
}

const _: () = {
  assert!(size_of::<BitmapFileHeader>() == 14);
  assert!(offset_of!(BitmapFileHeader, ty) == 0);
  assert!(offset_of!(BitmapFileHeader, file_size) == 2);
  assert!(offset_of!(BitmapFileHeader, reserved1) == 6);
  assert!(offset_of!(BitmapFileHeader, reserved2) == 8);
  assert!(offset_of!(BitmapFileHeader, bitmap_offset) == 10);
};

// Offsets are relative to the start of the info header, which sits at file
// offset 14.
const _: () = {
  assert!(size_of::<BitmapInfoHeader>() == 40);
  assert!(offset_of!(BitmapInfoHeader, size) == 0);
  assert!(offset_of!(BitmapInfoHeader, width) == 4);
  assert!(offset_of!(BitmapInfoHeader, height) == 8);
  assert!(offset_of!(BitmapInfoHeader, planes) == 12);
  assert!(offset_of!(BitmapInfoHeader, bits_per_pixel) == 14);
  assert!(offset_of!(BitmapInfoHeader, compression) == 16);
  assert!(offset_of!(BitmapInfoHeader, image_size) == 20);
  assert!(offset_of!(BitmapInfoHeader, pixels_per_meter_x) == 24);
  assert!(offset_of!(BitmapInfoHeader, pixels_per_meter_y) == 28);
  assert!(offset_of!(BitmapInfoHeader, colors_used) == 32);
  assert!(offset_of!(BitmapInfoHeader, important_colors) == 36);
};
