//! In-memory image fixtures carrying hand-built EXIF blocks.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;

fn rationals(components: [u32; 3]) -> Value {
    fractions(components.map(|num| (num, 1)))
}

fn fractions(components: [(u32, u32); 3]) -> Value {
    Value::Rational(
        components
            .iter()
            .map(|&(num, denom)| Rational { num, denom })
            .collect(),
    )
}

fn ascii(text: &str) -> Value {
    Value::Ascii(vec![text.as_bytes().to_vec()])
}

fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

fn jpeg_with_fields(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }

    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).unwrap();
    let tiff = tiff.into_inner();

    let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();

    // SOI, APP1 with the Exif identifier, EOI
    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}

pub fn jpeg_with_gps(
    latitude: [u32; 3],
    longitude: [u32; 3],
    refs: Option<(&str, &str)>,
) -> Vec<u8> {
    let mut fields = vec![
        field(Tag::ImageDescription, ascii("fixture")),
        field(Tag::GPSLatitude, rationals(latitude)),
        field(Tag::GPSLongitude, rationals(longitude)),
    ];
    if let Some((lat_ref, lon_ref)) = refs {
        fields.push(field(Tag::GPSLatitudeRef, ascii(lat_ref)));
        fields.push(field(Tag::GPSLongitudeRef, ascii(lon_ref)));
    }

    jpeg_with_fields(&fields)
}

/// Components given as `(numerator, denominator)` pairs
pub fn jpeg_with_gps_fractions(latitude: [(u32, u32); 3], longitude: [(u32, u32); 3]) -> Vec<u8> {
    jpeg_with_fields(&[
        field(Tag::ImageDescription, ascii("fixture")),
        field(Tag::GPSLatitude, fractions(latitude)),
        field(Tag::GPSLongitude, fractions(longitude)),
    ])
}

pub fn jpeg_with_latitude_only(latitude: [u32; 3]) -> Vec<u8> {
    jpeg_with_fields(&[
        field(Tag::ImageDescription, ascii("fixture")),
        field(Tag::GPSLatitude, rationals(latitude)),
    ])
}

pub fn jpeg_without_gps() -> Vec<u8> {
    jpeg_with_fields(&[field(Tag::ImageDescription, ascii("fixture"))])
}

/// PNG signature followed by an empty IEND chunk
pub fn png_without_exif() -> Vec<u8> {
    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    png.extend_from_slice(&[0, 0, 0, 0]);
    png.extend_from_slice(b"IEND");
    png.extend_from_slice(&[0xae, 0x42, 0x60, 0x82]);
    png
}
