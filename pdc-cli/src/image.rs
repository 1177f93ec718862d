// ABOUTME: Handlers for the `image list` and `image info` commands
// ABOUTME: Query an ImageCatalog and render results; failures are returned, never exited on

use anyhow::{Context, Result};
use futures_util::TryStreamExt;
use pdc_sdk::{ImageCatalog, ImageFilters, ImageRecord};
use std::io::Write;
use thiserror::Error;

use crate::constants::{EXIT_FAILURE, messages};
use crate::output::{ImageListWriter, OutputMode, format_image_details};
use crate::types::ImageDetails;

/// User-visible outcomes of `image info` that are not a single image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{}", messages::NOT_FOUND)]
    NotFound,

    #[error("{}", messages::AMBIGUOUS)]
    Ambiguous { candidates: Vec<ImageRecord> },
}

impl ImageError {
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Print the message, and for ambiguous matches the candidate list with
    /// checksums so the user can pick one with `--sha256`.
    pub fn report<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self)?;
        if let ImageError::Ambiguous { candidates } = self {
            let mut writer = ImageListWriter::new(true);
            for candidate in candidates {
                writer.write_image(out, candidate)?;
            }
        }
        Ok(())
    }
}

pub async fn list_images<C, W>(
    catalog: &C,
    filters: &ImageFilters,
    show_sha256: bool,
    mode: OutputMode,
    out: &mut W,
) -> Result<()>
where
    C: ImageCatalog + ?Sized,
    W: Write + ?Sized,
{
    log::debug!("Listing images with filters {:?}", filters.to_query());
    let mut images = catalog.list_images(filters);

    match mode {
        OutputMode::Json(formatter) => {
            let records: Vec<ImageRecord> = images.try_collect().await?;
            writeln!(out, "{}", formatter.format(&records)?)?;
        }
        OutputMode::Text => {
            let mut writer = ImageListWriter::new(show_sha256);
            while let Some(record) = images.try_next().await? {
                writer.write_image(out, &record)?;
            }
        }
    }

    Ok(())
}

/// Show one image by file name. Zero or several matches come back as an
/// [`ImageError`] inside the returned error.
pub async fn image_info<C, W>(
    catalog: &C,
    file_name: &str,
    sha256: Option<&str>,
    mode: OutputMode,
    out: &mut W,
) -> Result<()>
where
    C: ImageCatalog + ?Sized,
    W: Write + ?Sized,
{
    let filters = ImageFilters::by_file_name(file_name, sha256.map(str::to_string));
    let page = catalog.find_images(&filters).await?;
    log::debug!("{} image(s) match {}", page.count, file_name);

    if page.count > 1 {
        return Err(ImageError::Ambiguous {
            candidates: page.results,
        }
        .into());
    }
    let record = match (page.count, page.results.into_iter().next()) {
        (1, Some(record)) => record,
        _ => return Err(ImageError::NotFound.into()),
    };

    match mode {
        OutputMode::Json(formatter) => {
            writeln!(out, "{}", formatter.format(&record)?)?;
        }
        OutputMode::Text => {
            let details = ImageDetails::from_record(&record)
                .with_context(|| format!("Malformed image record for {}", file_name))?;
            write!(out, "{}", format_image_details(&details)?)?;
        }
    }

    Ok(())
}
