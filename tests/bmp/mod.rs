#![cfg(feature = "std")]

use bmpinfo::{bmp::*, BmpHeaderError};
use walkdir::WalkDir;

#[test]
fn test_BmpHeaderDecoder_no_panics() {
  // iter ALL files in the test folder, even non-bmp files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = BmpHeaderDecoder::try_from_bytes(&v);
    let _ = BmpHeaderDecoder::open(entry.path());
  }
  // even totally random data should never panic the decoder!
  for len in [0, 13, 54, 1024] {
    for _ in 0..10 {
      let v = super::rand_bytes(len);
      let _ = BmpHeaderDecoder::try_from_bytes(&v);
      let _ = BmpHeaderDecoder::from_reader(v.as_slice());
    }
  }
}

#[test]
fn test_random_bytes_with_a_bm_tag() {
  for _ in 0..32 {
    let mut v = super::rand_bytes(54);
    v[0..2].copy_from_slice(b"BM");
    v[30..34].copy_from_slice(&[0; 4]);
    let (d, rest) = BmpHeaderDecoder::try_from_bytes(&v).unwrap();
    assert!(rest.is_empty());
    assert_eq!(&d.file_header().file_size().to_le_bytes()[..], &v[2..6]);
    assert_eq!(&d.file_header().data_address().to_le_bytes()[..], &v[10..14]);
    assert_eq!(&d.info_header().width().to_le_bytes()[..], &v[18..22]);
    assert_eq!(&d.info_header().height().to_le_bytes()[..], &v[22..26]);
    assert_eq!(&d.info_header().color_depth().to_le_bytes()[..], &v[28..30]);
    assert_eq!(&d.info_header().important_color_count().to_le_bytes()[..], &v[50..54]);
    assert_eq!(BmpHeaderDecoder::from_reader(v.as_slice()), Ok(d));
  }
}

#[test]
fn test_sample_asset() {
  let d = BmpHeaderDecoder::open("assets/sample.bmp").unwrap();
  let fh = d.file_header();
  assert_eq!(fh.file_type(), BMP_FILE_TYPE);
  assert_eq!(fh.file_size(), 70);
  assert_eq!(fh.data_address(), 54);
  let ih = d.info_header();
  assert_eq!(ih.header_size(), 40);
  assert_eq!((ih.width(), ih.height()), (2, 2));
  assert_eq!(ih.color_planes_count(), 1);
  assert_eq!(ih.color_depth(), 24);
  assert_eq!(ih.image_size(), 16);
  assert_eq!(ih.horizontal_resolution(), 2835);
  assert_eq!(ih.vertical_resolution(), 2835);
  assert!(d.consistency(70).is_consistent());
}

#[test]
fn test_fixtures() {
  let d = BmpHeaderDecoder::open("tests/bmp/rgb24_2x2.bmp").unwrap();
  assert_eq!(d, BmpHeaderDecoder::open("assets/sample.bmp").unwrap());

  let d = BmpHeaderDecoder::open("tests/bmp/top_down_4x-3.bmp").unwrap();
  assert_eq!(d.info_header().width(), 4);
  assert_eq!(d.info_header().height(), -3);
  assert!(d.info_header().is_top_down());

  assert_eq!(
    BmpHeaderDecoder::open("tests/bmp/rle8_compressed.bmp"),
    Err(BmpHeaderError::UnsupportedCompression { compression_method: 1 })
  );
  assert_eq!(
    BmpHeaderDecoder::open("tests/bmp/os2_tag.bmp"),
    Err(BmpHeaderError::UnsupportedFormat { file_type: u16::from_le_bytes(*b"BA") })
  );
  assert_eq!(
    BmpHeaderDecoder::open("tests/bmp/truncated_info.bmp"),
    Err(BmpHeaderError::TruncatedInput)
  );
  assert!(matches!(
    BmpHeaderDecoder::open("tests/bmp/not_a_bitmap.txt"),
    Err(BmpHeaderError::UnsupportedFormat { .. })
  ));
}

#[test]
fn test_missing_file() {
  assert_eq!(
    BmpHeaderDecoder::open("tests/bmp/this_file_does_not_exist.bmp"),
    Err(BmpHeaderError::SourceUnavailable)
  );
  // a directory opens on some platforms but can't be read from
  assert_eq!(BmpHeaderDecoder::open("tests/bmp/"), Err(BmpHeaderError::SourceUnavailable));
}

#[test]
#[cfg(feature = "cli")]
fn test_cli_exit_status() {
  use std::process::Command;
  let exe = env!("CARGO_BIN_EXE_bmpinfo");

  let out = Command::new(exe).output().unwrap();
  assert!(out.status.success());
  let stdout = String::from_utf8(out.stdout).unwrap();
  assert!(stdout.starts_with("File type:             0x4d42\n"));
  assert!(stdout.contains("Data address:          0x0036\n"));
  assert_eq!(stdout.lines().count(), 16);

  let out = Command::new(exe).arg("tests/bmp/rle8_compressed.bmp").output().unwrap();
  assert!(!out.status.success());
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8(out.stderr).unwrap();
  assert!(stderr.contains("compressed bitmaps are not supported"));
}
