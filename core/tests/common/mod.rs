//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::{Cursor, Read};
use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

pub fn fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../fixtures/arp");
    path.push(filename);
    path
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    let path = fixture_path(name);
    std::fs::read(&path).unwrap_or_else(|e| {
        panic!("failed to read fixture {}: {e}", path.display());
    })
}

pub fn fixed_time() -> DateTime<Local> {
    let naive = NaiveDate::from_ymd_opt(2025, 1, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 58))
        .expect("valid timestamp");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("local time should exist")
}

/// Reads one part of an OOXML package as text.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("report should be a zip");
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("missing part {name}: {e}"));
    let mut text = String::new();
    part.read_to_string(&mut text).expect("part should be utf-8");
    text
}

pub fn sheet_xml(bytes: &[u8], index: usize) -> String {
    read_part(bytes, &format!("xl/worksheets/sheet{index}.xml"))
}

pub fn row_count(sheet_xml: &str) -> usize {
    sheet_xml.matches("<row ").count()
}

fn attr_value(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| {
            attr.unescape_value()
                .expect("attribute should unescape")
                .into_owned()
        })
}

/// Style (`s`) index of the cell at `cell_ref`, or `None` when the cell is
/// missing or unstyled.
pub fn cell_style_index(sheet_xml: &str, cell_ref: &str) -> Option<usize> {
    let mut reader = Reader::from_str(sheet_xml);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).expect("sheet xml should parse") {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"c" => {
                if attr_value(&e, b"r").as_deref() == Some(cell_ref) {
                    return attr_value(&e, b"s")
                        .map(|s| s.parse().expect("style index should be numeric"));
                }
            }
            Event::Eof => return None,
            _ => {}
        }
        buf.clear();
    }
}

/// Follows a cell style index through `cellXfs` to its fill and returns the
/// fill's foreground `rgb` attribute (e.g. `FFC6EFCE`).
pub fn fill_rgb_for_style(styles_xml: &str, style_index: usize) -> Option<String> {
    let mut reader = Reader::from_str(styles_xml);
    let mut buf = Vec::new();
    let mut in_cell_xfs = false;
    let mut in_fills = false;
    let mut xf_fill_ids: Vec<usize> = Vec::new();
    let mut fills: Vec<Option<String>> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).expect("styles xml should parse") {
            Event::Start(e) => match e.name().as_ref() {
                b"cellXfs" => in_cell_xfs = true,
                b"fills" => in_fills = true,
                b"fill" if in_fills => fills.push(None),
                b"xf" if in_cell_xfs => xf_fill_ids.push(fill_id(&e)),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"xf" if in_cell_xfs => xf_fill_ids.push(fill_id(&e)),
                b"fgColor" if in_fills => {
                    if let Some(slot) = fills.last_mut() {
                        if slot.is_none() {
                            *slot = attr_value(&e, b"rgb");
                        }
                    }
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"cellXfs" => in_cell_xfs = false,
                b"fills" => in_fills = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let fill = *xf_fill_ids.get(style_index)?;
    fills.get(fill)?.clone()
}

fn fill_id(xf: &BytesStart<'_>) -> usize {
    attr_value(xf, b"fillId")
        .map(|v| v.parse().expect("fillId should be numeric"))
        .unwrap_or(0)
}

/// Deterministic pseudo-random ARP-ish dump: a mix of valid addresses,
/// near-misses and noise lines.
pub fn synthetic_dump(seed: u64, lines: usize) -> String {
    let mut out = String::new();
    for i in 0..lines {
        let mut hasher = DefaultHasher::new();
        (seed, i).hash(&mut hasher);
        let h = hasher.finish();
        let a = (h & 0x3) as u8;
        let b = ((h >> 8) & 0x7) as u8;
        let line = match (h >> 16) % 7 {
            0 | 1 | 2 => format!("10.{a}.{b}.{} aa:bb:cc:dd:ee:ff", (h >> 24) % 16),
            3 => format!("  10.{a}.{b}.9\tdyn"),
            4 => format!("10.{a}.{b} short"),
            5 => format!("host 10.{a}.{b}.1"),
            _ => format!("10.{a}.{b}.x{} bad", (h >> 24) % 4),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
