//! PDF backend — deterministic single-column layout over printpdf's
//! built-in Helvetica faces.
//!
//! Geometry: US letter, 0.75" side and 0.5" top/bottom margins, centered
//! 24 pt name, 14 pt accent-colored section headings, 10 pt body. Body
//! text is word-wrapped with the static metric tables and a new page is
//! started whenever a line would cross the bottom margin.
//!
//! Nothing time- or randomness-dependent may enter the output: metadata
//! dates and the document id are pinned so identical documents render to
//! identical bytes.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use time::OffsetDateTime;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::font_metrics::{FontMetricTable, HELVETICA, HELVETICA_BOLD};
use crate::render::{
    contact_line, education_line, experience_heading, link_line, project_line, RenderBackend,
    EDUCATION_HEADING, EXPERIENCE_HEADING, PROJECTS_HEADING, SKILLS_HEADING, SKILL_SEPARATOR,
    SUMMARY_HEADING,
};

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_SIDE_MM: f32 = 19.05;
const MARGIN_TOP_MM: f32 = 12.7;
const MARGIN_BOTTOM_MM: f32 = 12.7;
const TEXT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_SIDE_MM;

const PT_TO_MM: f32 = 0.352_778;
const LINE_SPACING: f32 = 1.35;

const NAME_SIZE: f32 = 24.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;

const SECTION_GAP_MM: f32 = 3.0;
const ENTRY_GAP_MM: f32 = 2.0;
const BULLET_INDENT_MM: f32 = 4.0;

// Heading accent: #2C3E50.
const ACCENT: (f32, f32, f32) = (0.173, 0.243, 0.314);

pub struct PdfBackend;

impl RenderBackend for PdfBackend {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, resume: &ResumeDocument, path: &Path) -> Result<(), AppError> {
        let title = if resume.name.trim().is_empty() {
            "CV".to_string()
        } else {
            resume.name.trim().to_string()
        };

        let (doc, page, layer) =
            PdfDocument::new(title.as_str(), Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");

        // Pinned metadata: identical documents must render to identical bytes.
        let doc = doc
            .with_creation_date(OffsetDateTime::UNIX_EPOCH)
            .with_mod_date(OffsetDateTime::UNIX_EPOCH)
            .with_metadata_date(OffsetDateTime::UNIX_EPOCH)
            .with_document_id("tailor-cv".to_string());

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_err)?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(render_err)?;

        {
            let layer = doc.get_page(page).get_layer(layer);
            let mut composer = PageComposer {
                doc: &doc,
                layer,
                regular,
                bold,
                oblique,
                y: PAGE_HEIGHT_MM - MARGIN_TOP_MM,
            };
            compose(&mut composer, resume);
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file)).map_err(render_err)?;
        Ok(())
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Oblique,
}

/// Cursor over the document: tracks the current layer and baseline,
/// breaking to a fresh page when a line would cross the bottom margin.
struct PageComposer<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    y: f32,
}

impl PageComposer<'_> {
    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Oblique => &self.oblique,
        }
    }

    // Oblique shares the regular face's widths.
    fn metrics(face: Face) -> &'static FontMetricTable {
        match face {
            Face::Bold => &HELVETICA_BOLD,
            _ => &HELVETICA,
        }
    }

    fn line_height(size: f32) -> f32 {
        size * PT_TO_MM * LINE_SPACING
    }

    fn break_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_TOP_MM;
    }

    /// Moves the cursor down one line, breaking the page first if the new
    /// baseline would fall below the bottom margin. Returns the baseline.
    fn advance(&mut self, size: f32) -> f32 {
        let height = Self::line_height(size);
        if self.y - height < MARGIN_BOTTOM_MM {
            self.break_page();
        }
        self.y -= height;
        self.y
    }

    fn gap(&mut self, mm: f32) {
        // May dip below the margin; the next advance() starts a new page.
        self.y -= mm;
    }

    fn set_accent(&self, on: bool) {
        let (r, g, b) = if on { ACCENT } else { (0.0, 0.0, 0.0) };
        self.layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    fn text_at(&mut self, text: &str, face: Face, size: f32, x: f32) {
        let y = self.advance(size);
        self.layer.use_text(text, size, Mm(x), Mm(y), self.font(face));
    }

    fn centered(&mut self, text: &str, face: Face, size: f32) {
        let width_mm = Self::metrics(face).measure_str(text) * size * PT_TO_MM;
        let x = ((PAGE_WIDTH_MM - width_mm) / 2.0).max(MARGIN_SIDE_MM);
        self.text_at(text, face, size, x);
    }

    fn paragraph(&mut self, text: &str, face: Face, size: f32, x: f32) {
        let width_em = (TEXT_WIDTH_MM - (x - MARGIN_SIDE_MM)) / (size * PT_TO_MM);
        for line in Self::metrics(face).wrap(text, width_em) {
            self.text_at(&line, face, size, x);
        }
    }

    fn heading(&mut self, title: &str) {
        self.gap(SECTION_GAP_MM);
        self.set_accent(true);
        self.text_at(title, Face::Bold, HEADING_SIZE, MARGIN_SIDE_MM);
        self.set_accent(false);
        self.gap(1.0);
    }

    /// A `•`-prefixed achievement with a hanging indent for wrapped lines.
    fn bullet(&mut self, text: &str, size: f32) {
        let indent_x = MARGIN_SIDE_MM + BULLET_INDENT_MM;
        let width_em = (TEXT_WIDTH_MM - BULLET_INDENT_MM) / (size * PT_TO_MM);
        for (i, line) in HELVETICA.wrap(text, width_em).iter().enumerate() {
            if i == 0 {
                let y = self.advance(size);
                self.layer
                    .use_text("•", size, Mm(MARGIN_SIDE_MM), Mm(y), &self.regular);
                self.layer
                    .use_text(line.as_str(), size, Mm(indent_x), Mm(y), &self.regular);
            } else {
                self.text_at(line, Face::Regular, size, indent_x);
            }
        }
    }

    /// A line opening with a bold lead (`Title - Company`, `Degree - …`,
    /// `Name: …`): the lead is drawn bold, the rest fills the remainder of
    /// the baseline and wraps full-width below it.
    fn lead_line(&mut self, lead: &str, rest: &str, size: f32) {
        if lead.is_empty() {
            if !rest.is_empty() {
                self.paragraph(rest, Face::Regular, size, MARGIN_SIDE_MM);
            }
            return;
        }

        let em_mm = size * PT_TO_MM;
        let lead_width_mm = HELVETICA_BOLD.measure_str(lead) * em_mm;
        let y = self.advance(size);
        self.layer
            .use_text(lead, size, Mm(MARGIN_SIDE_MM), Mm(y), &self.bold);

        if rest.is_empty() {
            return;
        }

        let rest_x = MARGIN_SIDE_MM + lead_width_mm + HELVETICA.space_width * em_mm;
        let first_line_limit_em = (TEXT_WIDTH_MM - (rest_x - MARGIN_SIDE_MM)).max(0.0) / em_mm;

        // Greedy-fill the remainder of the lead's baseline, then wrap what
        // is left at full width.
        let mut words = rest.split_whitespace().peekable();
        let mut first = String::new();
        let mut width = 0.0_f32;
        while let Some(word) = words.peek() {
            let word_width = HELVETICA.measure_str(word);
            let space_width = if first.is_empty() {
                0.0
            } else {
                HELVETICA.space_width
            };
            if width + space_width + word_width > first_line_limit_em {
                break;
            }
            if !first.is_empty() {
                first.push(' ');
            }
            width += space_width + word_width;
            first.push_str(word);
            words.next();
        }

        if !first.is_empty() {
            self.layer
                .use_text(first.as_str(), size, Mm(rest_x), Mm(y), &self.regular);
        }

        let remainder = words.collect::<Vec<_>>().join(" ");
        if !remainder.is_empty() {
            self.paragraph(&remainder, Face::Regular, size, MARGIN_SIDE_MM);
        }
    }
}

fn compose(c: &mut PageComposer, resume: &ResumeDocument) {
    if !resume.name.trim().is_empty() {
        c.set_accent(true);
        c.centered(resume.name.trim(), Face::Bold, NAME_SIZE);
        c.set_accent(false);
    }
    if let Some(contact) = contact_line(resume) {
        c.centered(&contact, Face::Regular, BODY_SIZE);
    }
    if let Some(links) = link_line(resume) {
        c.centered(&links, Face::Regular, BODY_SIZE);
    }
    c.gap(SECTION_GAP_MM);

    if !resume.summary.trim().is_empty() {
        c.heading(SUMMARY_HEADING);
        c.paragraph(resume.summary.trim(), Face::Regular, BODY_SIZE, MARGIN_SIDE_MM);
    }

    if !resume.skills.is_empty() {
        c.heading(SKILLS_HEADING);
        // Generator-ranked relevance order, rendered exactly as given.
        c.paragraph(
            &resume.skills.join(SKILL_SEPARATOR),
            Face::Regular,
            BODY_SIZE,
            MARGIN_SIDE_MM,
        );
    }

    if !resume.experience.is_empty() {
        c.heading(EXPERIENCE_HEADING);
        for entry in &resume.experience {
            if let Some((lead, rest)) = experience_heading(entry) {
                c.lead_line(&lead, &rest, BODY_SIZE);
            }
            if !entry.period.trim().is_empty() {
                c.text_at(entry.period.trim(), Face::Oblique, BODY_SIZE, MARGIN_SIDE_MM);
            }
            for achievement in &entry.achievements {
                if !achievement.trim().is_empty() {
                    c.bullet(achievement.trim(), BODY_SIZE);
                }
            }
            c.gap(ENTRY_GAP_MM);
        }
    }

    if !resume.education.is_empty() {
        c.heading(EDUCATION_HEADING);
        for entry in &resume.education {
            if let Some((lead, rest)) = education_line(entry) {
                c.lead_line(&lead, &rest, BODY_SIZE);
            }
        }
    }

    if !resume.projects.is_empty() {
        c.heading(PROJECTS_HEADING);
        for entry in &resume.projects {
            if let Some((lead, rest)) = project_line(entry) {
                c.lead_line(&lead, &rest, BODY_SIZE);
            }
        }
    }
}
