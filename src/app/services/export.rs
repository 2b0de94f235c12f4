//! PDF export planning.
//!
//! Rasterizing HTML and encoding PDF pages is left to external facilities
//! behind [`Rasterizer`] and [`PdfSink`]. This module fixes the physical page
//! layout and print typography, slices a raster into A4 pages, and names the
//! downloaded file. Export only reads from the store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::domain::PersonalInfo;
use crate::app::infrastructure::error::ExportError;
use crate::app::infrastructure::storage::KeyValueStorage;
use crate::app::services::render::{SURFACE_ID, render_page};
use crate::app::services::store::ResumeStore;

/// File name used when the resume has no name to derive one from.
pub const DEFAULT_FILE_NAME: &str = "resume.pdf";

/// Heights below this many millimetres are rounding noise, not a page.
const PAGE_EPSILON_MM: f64 = 0.01;

/// Physical page and typography settings forced onto the cloned surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub padding_mm: f64,
    /// Raster upscale factor for output quality
    pub scale: f64,
    pub px_per_mm: f64,
    pub font_family: String,
    pub line_height: f64,
    pub h1_px: u32,
    pub h2_px: u32,
    pub h3_px: u32,
    pub body_px: u32,
    pub background: String,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self::a4()
    }
}

impl ExportLayout {
    pub fn a4() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            padding_mm: 15.0,
            scale: 2.0,
            px_per_mm: 3.78,
            font_family: "Arial, sans-serif".to_string(),
            line_height: 1.5,
            h1_px: 24,
            h2_px: 20,
            h3_px: 18,
            body_px: 12,
            background: "#ffffff".to_string(),
        }
    }

    /// Viewport width the surface is laid out at before upscaling.
    pub fn window_width_px(&self) -> u32 {
        (self.page_width_mm * self.px_per_mm).round() as u32
    }

    pub fn window_height_px(&self) -> u32 {
        (self.page_height_mm * self.px_per_mm).round() as u32
    }

    /// Stylesheet appended to the page for export: fixed page width and
    /// padding, print-safe fonts, and `.no-pdf` elements hidden.
    pub fn print_css(&self) -> String {
        format!(
            "#{id} {{ width: {w}mm; min-height: {h}mm; padding: {p}mm; margin: 0; box-sizing: border-box; transform: none; background: {bg}; }}\n\
             #{id} * {{ font-family: {font} !important; line-height: {lh} !important; letter-spacing: normal !important; word-spacing: normal !important; }}\n\
             #{id} h1 {{ font-size: {h1}px !important; }}\n\
             #{id} h2 {{ font-size: {h2}px !important; }}\n\
             #{id} h3 {{ font-size: {h3}px !important; }}\n\
             #{id} p, #{id} li {{ font-size: {body}px !important; }}\n\
             #{id} .no-pdf {{ display: none !important; }}",
            id = SURFACE_ID,
            w = self.page_width_mm,
            h = self.page_height_mm,
            p = self.padding_mm,
            bg = self.background,
            font = self.font_family,
            lh = self.line_height,
            h1 = self.h1_px,
            h2 = self.h2_px,
            h3 = self.h3_px,
            body = self.body_px,
        )
    }
}

/// A rasterized surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width_px: u32,
    pub height_px: u32,
    /// Encoded image data, typically PNG.
    pub data: Vec<u8>,
}

/// Placement of the full raster on one page. The image is drawn at
/// `offset_y_mm` (zero or negative) so that the page shows the next band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice {
    pub index: usize,
    pub offset_y_mm: f64,
    pub image_width_mm: f64,
    pub image_height_mm: f64,
}

/// Turns a rendered HTML page into a raster.
pub trait Rasterizer {
    fn rasterize(&mut self, html: &str, layout: &ExportLayout) -> Result<Raster, ExportError>;
}

/// Encodes the paginated raster into a PDF.
pub trait PdfSink {
    fn assemble(
        &mut self,
        raster: &Raster,
        pages: &[PageSlice],
        layout: &ExportLayout,
    ) -> Result<Vec<u8>, ExportError>;
}

/// A finished export ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl ExportedFile {
    /// Write into `dir` under the export's file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// `<Name>_resume.pdf` with each run of non-alphanumeric characters replaced
/// by `_`, or [`DEFAULT_FILE_NAME`] when nothing usable remains. Letters from
/// any script count as alphanumeric.
pub fn export_file_name(info: &PersonalInfo) -> String {
    let words: Vec<&str> = info
        .name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();
    if words.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        format!("{}_resume.pdf", words.join("_"))
    }
}

/// Lay a raster of the given pixel size over as many pages as it needs. The
/// raster is scaled to the page width; every page but the first shifts it up
/// by one more page height. Always at least one page.
pub fn paginate(raster_width_px: u32, raster_height_px: u32, layout: &ExportLayout) -> Vec<PageSlice> {
    let image_width_mm = layout.page_width_mm;
    let image_height_mm = if raster_width_px == 0 {
        0.0
    } else {
        f64::from(raster_height_px) * image_width_mm / f64::from(raster_width_px)
    };

    let mut pages = vec![PageSlice {
        index: 0,
        offset_y_mm: 0.0,
        image_width_mm,
        image_height_mm,
    }];
    let mut height_left = image_height_mm - layout.page_height_mm;
    while height_left > PAGE_EPSILON_MM {
        pages.push(PageSlice {
            index: pages.len(),
            offset_y_mm: height_left - image_height_mm,
            image_width_mm,
            image_height_mm,
        });
        height_left -= layout.page_height_mm;
    }
    pages
}

/// Render the store's document with its selected template, rasterize it, and
/// assemble the PDF.
pub fn export_pdf<S, R, P>(
    store: &ResumeStore<S>,
    rasterizer: &mut R,
    sink: &mut P,
    layout: &ExportLayout,
) -> Result<ExportedFile, ExportError>
where
    S: KeyValueStorage,
    R: Rasterizer + ?Sized,
    P: PdfSink + ?Sized,
{
    let document = store.resume_data();
    let template = store.selected_template();
    let html = render_page(document, template, &layout.print_css());
    debug!(template = %template, bytes = html.len(), "export surface rendered");

    let raster = rasterizer.rasterize(&html, layout)?;
    if raster.width_px == 0 || raster.height_px == 0 {
        return Err(ExportError::Rasterize(format!(
            "empty raster ({}x{})",
            raster.width_px, raster.height_px
        )));
    }

    let pages = paginate(raster.width_px, raster.height_px, layout);
    let bytes = sink.assemble(&raster, &pages, layout)?;
    let file_name = export_file_name(&document.personal_info);

    info!(file = %file_name, pages = pages.len(), bytes = bytes.len(), "resume exported");
    Ok(ExportedFile {
        file_name,
        bytes,
        page_count: pages.len(),
    })
}
