// printpdf-backed canvas for the drawing fallback

use std::borrow::Cow;
use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use tracing::warn;

use super::fallback::{Canvas, CanvasError, FontStyle, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};

const LAYER_NAME: &str = "Layer 1";

/// Drawn in place of characters the builtin fonts cannot encode
const UNENCODABLE: char = '?';

/// Characters outside Latin-1 that WinAnsiEncoding still maps
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

fn is_win_ansi(c: char) -> bool {
    match c {
        // no-break space and soft hyphen have no code of their own
        '\u{a0}' | '\u{ad}' => false,
        ' '..='~' | '\u{a1}'..='\u{ff}' => true,
        _ => WIN_ANSI_EXTRAS.contains(c),
    }
}

/// Text as the builtin Helvetica can show it. Unencodable characters become
/// `?` and are logged.
pub fn win_ansi_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_win_ansi) {
        return Cow::Borrowed(text);
    }

    warn!(
        "Fallback PDF cannot encode all characters of {:?}; substituting '{}'",
        text, UNENCODABLE
    );
    Cow::Owned(
        text.chars()
            .map(|c| if is_win_ansi(c) { c } else { UNENCODABLE })
            .collect(),
    )
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// A US-Letter PDF document drawn with the builtin Helvetica fonts
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    style: FontStyle,
    size: f32,
}

impl PdfCanvas {
    pub fn new(title: &str) -> Result<Self, CanvasError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            pt_to_mm(PAGE_WIDTH_PT),
            pt_to_mm(PAGE_HEIGHT_PT),
            LAYER_NAME,
        );
        let layer = doc.get_page(page).get_layer(layer);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| CanvasError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| CanvasError::Pdf(e.to_string()))?;

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            style: FontStyle::Regular,
            size: 10.0,
        })
    }
}

impl Canvas for PdfCanvas {
    fn set_font(&mut self, style: FontStyle, size: f32) {
        self.style = style;
        self.size = size;
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        let font = match self.style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        };
        self.layer.use_text(
            win_ansi_text(text),
            self.size,
            pt_to_mm(x),
            pt_to_mm(y),
            font,
        );
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            pt_to_mm(PAGE_WIDTH_PT),
            pt_to_mm(PAGE_HEIGHT_PT),
            LAYER_NAME,
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn finish(self) -> Result<Vec<u8>, CanvasError> {
        let mut writer = BufWriter::new(Vec::<u8>::new());
        self.doc
            .save(&mut writer)
            .map_err(|e| CanvasError::Pdf(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| CanvasError::Pdf(e.to_string()))
    }
}

/// Text shown by every page's content stream, in drawing order
#[cfg(test)]
pub(crate) fn drawn_text(bytes: &[u8]) -> Vec<String> {
    use printpdf::lopdf::content::Content;
    use printpdf::lopdf::{Document, Object};

    let doc = Document::load_mem(bytes).unwrap();
    let mut runs = Vec::new();
    for page_id in doc.get_pages().values() {
        let content = Content::decode(&doc.get_page_content(*page_id).unwrap()).unwrap();
        for op in content.operations.iter().filter(|op| op.operator == "Tj") {
            if let Some(Object::String(encoded, _)) = op.operands.first() {
                runs.push(Document::decode_text(Some("WinAnsiEncoding"), encoded));
            }
        }
    }
    runs
}
