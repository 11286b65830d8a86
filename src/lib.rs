#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for reading the header metadata of Windows Bitmap (BMP) files.
//!
//! Only the two fixed-size records that begin every Windows BMP file are
//! decoded: the 14 byte file header and the 40 byte `BITMAPINFOHEADER`. Pixel
//! data, palettes, and the other header versions are left alone.
//!
//! ```
//! use bmpinfo::bmp::BmpHeaderDecoder;
//!
//! let mut bytes = [0_u8; 54];
//! bytes[0..2].copy_from_slice(b"BM");
//! bytes[2..6].copy_from_slice(&54_u32.to_le_bytes());
//! bytes[10..14].copy_from_slice(&54_u32.to_le_bytes());
//! bytes[14..18].copy_from_slice(&40_u32.to_le_bytes());
//!
//! let (decoder, rest) = BmpHeaderDecoder::try_from_bytes(&bytes).unwrap();
//! assert_eq!(decoder.file_header().file_size(), 54);
//! assert!(rest.is_empty());
//! ```

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

mod util;
pub(crate) use util::*;

pub mod bmp;
