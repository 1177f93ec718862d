// ABOUTME: This module handles output formatting for the PDC CLI
// ABOUTME: It renders image lists, the image detail report, human-readable sizes and JSON

use anyhow::{Context, Result, anyhow};
use chrono::DateTime;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::io::Write;

use crate::constants::{layout, messages};
use crate::types::{ImageDetails, ImageSummary};

const SIZE_UNITS: [&str; 4] = ["", "Ki", "Mi", "Gi"];
const LAST_SIZE_UNIT: &str = "Ti";

/// How command results are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json(JsonFormatter),
}

impl OutputMode {
    pub fn new(json: bool, pretty: bool) -> Self {
        if json {
            OutputMode::Json(JsonFormatter::new(pretty))
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

/// Human-readable size with one decimal and a binary unit prefix. The unit
/// never goes past `Ti`.
pub fn size_format(bytes: u64) -> String {
    let mut num = bytes as f64;
    for unit in SIZE_UNITS {
        if num < 1024.0 {
            return format!("{:.1} {}B", num, unit);
        }
        num /= 1024.0;
    }
    format!("{:.1} {}B", num, LAST_SIZE_UNIT)
}

/// Unix timestamp rendered in UTC.
pub fn format_mtime(mtime: i64) -> Result<String> {
    let timestamp = DateTime::from_timestamp(mtime, 0)
        .ok_or_else(|| anyhow!("Modification time {} is out of range", mtime))?;
    Ok(timestamp.format(layout::MTIME_FORMAT).to_string())
}

/// Streams image records as lines, writing the header lazily before the
/// first record so that an empty listing produces no output at all.
pub struct ImageListWriter {
    with_sha256: bool,
    header_written: bool,
}

impl ImageListWriter {
    pub fn new(with_sha256: bool) -> Self {
        Self {
            with_sha256,
            header_written: false,
        }
    }

    pub fn write_image<W: Write + ?Sized>(&mut self, out: &mut W, record: &Value) -> Result<()> {
        let image = ImageSummary::from_record(record).context("Malformed image record")?;

        if !self.header_written {
            writeln!(
                out,
                "{}",
                self.row(messages::FILE_NAME_HEADER, messages::SHA256_HEADER)
            )?;
            writeln!(out)?;
            self.header_written = true;
        }

        writeln!(out, "{}", self.row(&image.file_name, &image.sha256))?;
        Ok(())
    }

    fn row(&self, file_name: &str, sha256: &str) -> String {
        if self.with_sha256 {
            format!(
                "{:<width$}{}",
                file_name,
                sha256,
                width = layout::FILE_NAME_WIDTH
            )
        } else {
            file_name.to_string()
        }
    }
}

/// Fixed-layout detail report for a single image.
pub fn format_image_details(image: &ImageDetails) -> Result<String> {
    let mut report = String::new();
    let field = |report: &mut String, label: &str, value: &str| {
        writeln!(
            report,
            "{:<width$} {}",
            label,
            value,
            width = layout::DETAIL_LABEL_WIDTH
        )
    };
    let checksum = |report: &mut String, label: &str, value: &str| {
        writeln!(
            report,
            " {:<width$} {}",
            label,
            value,
            width = layout::CHECKSUM_LABEL_WIDTH
        )
    };

    field(&mut report, "File Name", &image.file_name)?;
    field(&mut report, "Image Type", optional(&image.image_type))?;
    field(&mut report, "Image Format", optional(&image.image_format))?;
    field(&mut report, "Arch", optional(&image.arch))?;
    field(
        &mut report,
        "Disc",
        &format!("{} / {}", image.disc_number, image.disc_count),
    )?;
    field(
        &mut report,
        "Modified",
        &format!("{} ({})", image.mtime, modified(image)?),
    )?;
    field(
        &mut report,
        "Size",
        &format!("{} ({})", image.size, size_format(image.size)),
    )?;
    field(
        &mut report,
        "Bootable",
        if image.bootable { "yes" } else { "no" },
    )?;
    field(&mut report, "Volume ID", optional(&image.volume_id))?;
    field(&mut report, "Implant MD5", optional(&image.implant_md5))?;
    field(&mut report, "Subvariant", optional(&image.subvariant))?;

    report.push_str("\nChecksums:\n");
    checksum(&mut report, "MD5", optional(&image.md5))?;
    checksum(&mut report, "SHA1", optional(&image.sha1))?;
    checksum(&mut report, "SHA256", optional(&image.sha256))?;

    if !image.composes().is_empty() {
        report.push_str("\nUsed in composes:\n");
        for compose in image.composes() {
            writeln!(report, " * {}", compose)?;
        }
    }

    Ok(report)
}

fn modified(image: &ImageDetails) -> Result<String> {
    let seconds = image
        .mtime_seconds()
        .ok_or_else(|| anyhow!("Modification time {} is out of range", image.mtime))?;
    format_mtime(seconds)
}

// Null values print as `None`.
fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(messages::NULL_VALUE)
}
