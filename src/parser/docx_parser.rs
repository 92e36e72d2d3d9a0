//! DOCX structural extractor.
//!
//! Projects the package's XML parts into a normalized [`DocumentModel`].
//! Formatting attributes are taken as written on paragraphs and runs; style
//! cascading is not resolved (the engine only consults the flat style list
//! for a document default). Missing optional parts and missing per-paragraph
//! metadata degrade to `None` fields, never to errors.

use std::fs;
use std::io::Read;
use std::path::Path;

use roxmltree::Node;

use crate::detect::detect_package_from_bytes;
use crate::error::{Error, Result};
use crate::model::{
    Alignment, DocumentModel, Header, Indentation, LineRule, Orientation, PageSettings, Paragraph,
    Run, Spacing, Style, StyleKind,
};

use super::package::{part_names, DocxPackage};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// DOCX document parser.
///
/// Construction drains the needed parts out of the archive; [`parse`]
/// projects them into the model, running independent parts concurrently.
///
/// [`parse`]: DocxParser::parse
pub struct DocxParser {
    document_xml: String,
    styles_xml: Option<String>,
    header_xml: Vec<String>,
    has_settings_part: bool,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Open a DOCX package from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_package_from_bytes(data)?;
        let mut package = DocxPackage::from_bytes(data)?;

        let document_xml = package.read_required_part(part_names::DOCUMENT)?;
        let styles_xml = package.read_part(part_names::STYLES);
        let has_settings_part = package.has_part(part_names::SETTINGS);

        let header_names = package.header_part_names();
        let header_xml = header_names
            .iter()
            .filter_map(|name| package.read_part(name))
            .collect();

        Ok(Self {
            document_xml,
            styles_xml,
            header_xml,
            has_settings_part,
        })
    }

    /// Open a DOCX package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse the retained parts into a normalized document model.
    ///
    /// The mandatory document part, the styles part and the header parts are
    /// independent, so they are projected concurrently. Only the document
    /// part's failure is fatal; each optional part is bulkheaded and
    /// degrades to an absent slice of the model.
    pub fn parse(&self) -> Result<DocumentModel> {
        let (body, (styles, headers)) = rayon::join(
            || self.parse_document(),
            || rayon::join(|| self.parse_styles(), || self.parse_headers()),
        );
        let (paragraphs, page_settings) = body?;

        Ok(DocumentModel {
            paragraphs,
            styles,
            page_settings,
            headers,
        })
    }

    /// Parse `word/document.xml`: body paragraphs plus section geometry.
    fn parse_document(&self) -> Result<(Vec<Paragraph>, Option<PageSettings>)> {
        let xml = roxmltree::Document::parse(&self.document_xml)
            .map_err(|e| Error::xml(part_names::DOCUMENT, e))?;
        let body = wml(xml.root_element(), "body")
            .ok_or_else(|| Error::InvalidDocument("missing w:body element".to_string()))?;

        let mut paragraphs = Vec::new();
        for node in body.children().filter(|n| is_wml(*n, "p")) {
            let index = paragraphs.len();
            paragraphs.push(parse_paragraph(node, index));
        }

        let page_settings = self.parse_page_settings(body);
        Ok((paragraphs, page_settings))
    }

    /// Section geometry from `w:body/w:sectPr`, each attribute defaulting to
    /// US Letter with 1-inch margins when absent. A document with neither a
    /// `sectPr` nor a settings part carries no page-setup evidence at all,
    /// and the model keeps that unknown.
    fn parse_page_settings(&self, body: Node) -> Option<PageSettings> {
        let sect = wml(body, "sectPr");
        if sect.is_none() && !self.has_settings_part {
            return None;
        }

        let mut page = PageSettings::default();
        if let Some(sect) = sect {
            if let Some(size) = wml(sect, "pgSz") {
                if let Some(w) = attr_i32(size, "w") {
                    page.page_width = w;
                }
                if let Some(h) = attr_i32(size, "h") {
                    page.page_height = h;
                }
                if size.attribute((WML_NS, "orient")) == Some("landscape") {
                    page.orientation = Orientation::Landscape;
                }
            }
            if let Some(margins) = wml(sect, "pgMar") {
                if let Some(v) = attr_i32(margins, "top") {
                    page.margin_top = v;
                }
                if let Some(v) = attr_i32(margins, "bottom") {
                    page.margin_bottom = v;
                }
                if let Some(v) = attr_i32(margins, "left") {
                    page.margin_left = v;
                }
                if let Some(v) = attr_i32(margins, "right") {
                    page.margin_right = v;
                }
            }
        }
        Some(page)
    }

    /// Flat style list from `word/styles.xml`. A malformed styles part is
    /// treated as absent.
    fn parse_styles(&self) -> Vec<Style> {
        let Some(text) = &self.styles_xml else {
            return Vec::new();
        };
        let xml = match roxmltree::Document::parse(text) {
            Ok(xml) => xml,
            Err(e) => {
                log::warn!("ignoring malformed styles part: {e}");
                return Vec::new();
            }
        };

        let mut styles = Vec::new();
        for node in xml.root_element().children().filter(|n| is_wml(*n, "style")) {
            let kind = match node.attribute((WML_NS, "type")) {
                Some("paragraph") => StyleKind::Paragraph,
                Some("character") => StyleKind::Character,
                _ => continue,
            };
            let Some(id) = node.attribute((WML_NS, "styleId")) else {
                continue;
            };

            let mut style = Style::new(id, kind);
            style.name = wml_attr(node, "name").map(String::from);
            if let Some(rpr) = wml(node, "rPr") {
                style.font_family = font_family_from(rpr);
                style.font_size = wml_attr(rpr, "sz").and_then(points_from_half_points);
                style.bold = wml_toggle(rpr, "b");
                style.italic = wml_toggle(rpr, "i");
                style.underline = underline_from(rpr);
            }
            styles.push(style);
        }
        styles
    }

    /// Header content from every `word/headerN.xml` part. A malformed header
    /// is skipped; the remaining headers still count as evidence.
    fn parse_headers(&self) -> Vec<Header> {
        self.header_xml
            .iter()
            .filter_map(|text| match roxmltree::Document::parse(text) {
                Ok(xml) => {
                    let mut paragraphs = Vec::new();
                    for node in xml.root_element().children().filter(|n| is_wml(*n, "p")) {
                        let index = paragraphs.len();
                        paragraphs.push(parse_paragraph(node, index));
                    }
                    let text = paragraphs
                        .iter()
                        .map(|p| p.text.as_str())
                        .collect::<Vec<_>>()
                        .join("\n");
                    Some(Header { text, paragraphs })
                }
                Err(e) => {
                    log::warn!("skipping malformed header part: {e}");
                    None
                }
            })
            .collect()
    }
}

/// Project one `w:p` node into a paragraph. Indentation and spacing
/// sub-objects are created only when the corresponding properties exist,
/// preserving the unknown/known distinction; alignment defaults to left
/// because its absence is a structural default, not missing evidence.
fn parse_paragraph(node: Node, index: usize) -> Paragraph {
    let mut paragraph = Paragraph::new(index);
    let ppr = wml(node, "pPr");

    paragraph.style_id = ppr.and_then(|p| wml_attr(p, "pStyle")).map(String::from);
    paragraph.alignment = ppr
        .and_then(|p| wml_attr(p, "jc"))
        .map(parse_alignment)
        .unwrap_or_default();
    paragraph.indentation = ppr.and_then(|p| wml(p, "ind")).map(parse_indentation);
    paragraph.spacing = ppr.and_then(|p| wml(p, "spacing")).map(parse_spacing);

    for run_node in node.children().filter(|n| is_wml(*n, "r")) {
        let run = parse_run(run_node);
        paragraph.text.push_str(&run.text);
        paragraph.runs.push(run);
    }
    paragraph
}

/// Project one `w:r` node into a run.
fn parse_run(node: Node) -> Run {
    let mut run = Run::default();

    if let Some(rpr) = wml(node, "rPr") {
        run.font_family = font_family_from(rpr);
        run.font_size = wml_attr(rpr, "sz").and_then(points_from_half_points);
        run.bold = wml_toggle(rpr, "b").unwrap_or(false);
        run.italic = wml_toggle(rpr, "i").unwrap_or(false);
        run.underline = underline_from(rpr).unwrap_or(false);
        run.color = wml_attr(rpr, "color")
            .filter(|v| *v != "auto")
            .map(String::from);
    }

    for child in node.children().filter(|n| is_wml(*n, "t")) {
        if let Some(text) = child.text() {
            run.text.push_str(text);
        }
    }
    run
}

fn parse_alignment(val: &str) -> Alignment {
    match val {
        "center" => Alignment::Center,
        "right" | "end" => Alignment::Right,
        "both" | "justify" | "distribute" => Alignment::Justify,
        _ => Alignment::Left,
    }
}

fn parse_indentation(node: Node) -> Indentation {
    Indentation {
        left: attr_i32(node, "left").or_else(|| attr_i32(node, "start")),
        right: attr_i32(node, "right").or_else(|| attr_i32(node, "end")),
        first_line: attr_i32(node, "firstLine"),
        hanging: attr_i32(node, "hanging"),
    }
}

fn parse_spacing(node: Node) -> Spacing {
    let line_rule = match node.attribute((WML_NS, "lineRule")) {
        Some("auto") => Some(LineRule::Auto),
        Some("exact") => Some(LineRule::Exact),
        // "atLeast" and unrecognized rules carry no usable discriminator.
        _ => None,
    };
    Spacing {
        before: attr_i32(node, "before"),
        after: attr_i32(node, "after"),
        line: attr_i32(node, "line"),
        line_rule,
    }
}

/// Font family from `w:rFonts`, preferring the ascii-range family over the
/// high-ansi fallback.
fn font_family_from(rpr: Node) -> Option<String> {
    let rfonts = wml(rpr, "rFonts")?;
    rfonts
        .attribute((WML_NS, "ascii"))
        .or_else(|| rfonts.attribute((WML_NS, "hAnsi")))
        .filter(|f| !f.is_empty())
        .map(String::from)
}

/// Convert a half-point size attribute to points, rejecting non-numeric and
/// out-of-range values back to unknown rather than passing garbage through.
fn points_from_half_points(val: &str) -> Option<f32> {
    let half: f32 = val.trim().parse().ok()?;
    if !half.is_finite() || half <= 0.0 {
        return None;
    }
    let points = half / 2.0;
    (4.0..=72.0).contains(&points).then_some(points)
}

/// WML boolean toggle element (`w:b`, `w:i`): present with no `w:val`, or a
/// val other than "0"/"false", means on.
fn wml_toggle(parent: Node, name: &str) -> Option<bool> {
    wml(parent, name).map(|n| {
        n.attribute((WML_NS, "val"))
            .map_or(true, |v| v != "0" && v != "false")
    })
}

/// Underline carries an enumerated `w:val` rather than a toggle; anything
/// but "none" counts as underlined.
fn underline_from(rpr: Node) -> Option<bool> {
    wml(rpr, "u").map(|n| n.attribute((WML_NS, "val")).map_or(true, |v| v != "none"))
}

fn is_wml(node: Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

fn wml<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_wml(*n, name))
}

fn wml_attr<'a, 'input>(node: Node<'a, 'input>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

fn attr_i32(node: Node, attr: &str) -> Option<i32> {
    node.attribute((WML_NS, attr))
        .and_then(|v| v.trim().parse().ok())
}
