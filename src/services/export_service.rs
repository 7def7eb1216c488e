use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;
use tracing::debug;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
    #[error("Could not write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Injected document-export capability.
#[cfg_attr(test, mockall::automock)]
pub trait ReceiptExporter {
    /// Render `lines` under `title` on a single page and save it as
    /// `filename` (extension included). Returns the written path.
    fn export(&self, title: &str, lines: &[String], filename: &str)
        -> Result<PathBuf, ExportError>;
}

/// One-page A4 PDF writer.
///
/// Mirrors the card layout: bold 18pt title at the top, then the receipt
/// lines at 11pt with a fixed 8mm step. Exactly five lines are written so
/// there is no page-overflow handling.
pub struct PdfExporter {
    output_dir: PathBuf,
}

// A4 is 210x297mm; coordinates measure from the bottom-left corner.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 10.0;
const TITLE_Y_MM: f32 = PAGE_HEIGHT_MM - 20.0;
const FIRST_LINE_Y_MM: f32 = PAGE_HEIGHT_MM - 35.0;
const LINE_STEP_MM: f32 = 8.0;

impl PdfExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl ReceiptExporter for PdfExporter {
    fn export(
        &self,
        title: &str,
        lines: &[String],
        filename: &str,
    ) -> Result<PathBuf, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "receipt");
        let layer = doc.get_page(page).get_layer(layer);

        let title_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        layer.use_text(title, 18.0, Mm(MARGIN_LEFT_MM), Mm(TITLE_Y_MM), &title_font);

        let mut y = FIRST_LINE_Y_MM;
        for line in lines {
            layer.use_text(line.as_str(), 11.0, Mm(MARGIN_LEFT_MM), Mm(y), &body_font);
            y -= LINE_STEP_MM;
        }

        let path = self.output_dir.join(filename);
        let file = File::create(&path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        debug!("Wrote receipt PDF to {}", path.display());
        Ok(path)
    }
}
