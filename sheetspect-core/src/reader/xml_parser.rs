//! XML parsing for formatting attributes that calamine does not expose

use anyhow::Result;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::BufReader;
use zip::ZipArchive;

use crate::report::{AlignmentInfo, CellFormat, CellRef, FillInfo, FontInfo};

/// Extract column widths and per-cell style indices from a worksheet.
///
/// Widths are keyed by 0-based column index and only present when the
/// `<col>` declaration carries an explicit `width` attribute. Style
/// indices are keyed by 0-based (row, col) and only present when the
/// cell carries an `s` attribute.
pub fn parse_sheet_xml(
    archive: &mut ZipArchive<impl std::io::Read + std::io::Seek>,
    sheet_index: usize,
) -> Result<(HashMap<u32, f64>, HashMap<(u32, u32), usize>)> {
    let mut widths = HashMap::new();
    let mut style_indices = HashMap::new();

    // Sheet files are named sheet1.xml, sheet2.xml, etc. (1-indexed)
    let sheet_path = format!("xl/worksheets/sheet{}.xml", sheet_index + 1);

    let sheet_xml = match archive.by_name(&sheet_path) {
        Ok(file) => file,
        Err(_) => return Ok((widths, style_indices)),
    };

    let buf_reader = BufReader::new(sheet_xml);
    let mut reader = Reader::from_reader(buf_reader);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"col" => {
                    // Column declaration covering min..=max (1-based)
                    let mut min_col = None;
                    let mut max_col = None;
                    let mut width = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"min" => {
                                min_col = String::from_utf8_lossy(&attr.value).parse::<u32>().ok();
                            }
                            b"max" => {
                                max_col = String::from_utf8_lossy(&attr.value).parse::<u32>().ok();
                            }
                            b"width" => {
                                width = String::from_utf8_lossy(&attr.value).parse::<f64>().ok();
                            }
                            _ => {}
                        }
                    }

                    if let (Some(w), Some(min), Some(max)) = (width, min_col, max_col) {
                        for col in min..=max {
                            widths.insert(col.saturating_sub(1), w);
                        }
                    }
                }
                b"c" => {
                    // Cell element with an optional style attribute `s`
                    let mut cell = None;
                    let mut style_index = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"r" => {
                                let reference = String::from_utf8_lossy(&attr.value);
                                cell = CellRef::parse(&reference).ok();
                            }
                            b"s" => {
                                style_index =
                                    String::from_utf8_lossy(&attr.value).parse::<usize>().ok();
                            }
                            _ => {}
                        }
                    }

                    if let (Some(cell), Some(index)) = (cell, style_index) {
                        style_indices.insert((cell.row, cell.col), index);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    Ok((widths, style_indices))
}

/// Parse xl/styles.xml into the cellXfs style table.
///
/// Each entry resolves its font and fill through the fonts/fills tables,
/// so worksheet cells can be mapped to a full [`CellFormat`] by style
/// index. A workbook without a styles part yields an empty table.
pub fn parse_style_sheet(
    archive: &mut ZipArchive<impl std::io::Read + std::io::Seek>,
) -> Result<Vec<CellFormat>> {
    let styles_xml = match archive.by_name("xl/styles.xml") {
        Ok(file) => file,
        Err(_) => return Ok(Vec::new()),
    };

    let buf_reader = BufReader::new(styles_xml);
    let mut reader = Reader::from_reader(buf_reader);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    let mut fonts: Vec<FontInfo> = Vec::new();
    // Visible background per fill: fgColor of a patternFill whose type is not "none"
    let mut fills: Vec<Option<String>> = Vec::new();
    let mut cell_xfs: Vec<CellFormat> = Vec::new();

    let mut in_fonts = false;
    let mut in_fills = false;
    let mut in_cell_xfs = false;

    let mut current_font: Option<FontInfo> = None;
    let mut in_fill = false;
    let mut fill_visible = false;
    let mut current_fill: Option<String> = None;
    let mut current_xf: Option<CellFormat> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"fonts" => in_fonts = true,
                b"fills" => in_fills = true,
                b"cellXfs" => in_cell_xfs = true,
                b"font" if in_fonts => current_font = Some(FontInfo::default()),
                b"fill" if in_fills => {
                    in_fill = true;
                    fill_visible = false;
                    current_fill = None;
                }
                b"patternFill" if in_fill => {
                    fill_visible = pattern_is_visible(&e);
                }
                b"xf" if in_cell_xfs => {
                    current_xf = Some(resolve_xf(&e, &fonts, &fills));
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // A childless declaration is already complete
                b"font" if in_fonts => fonts.push(FontInfo::default()),
                b"fill" if in_fills => fills.push(None),
                b"xf" if in_cell_xfs => {
                    cell_xfs.push(resolve_xf(&e, &fonts, &fills));
                }
                b"patternFill" if in_fill => {
                    fill_visible = pattern_is_visible(&e);
                }
                b"b" => {
                    if let Some(font) = current_font.as_mut() {
                        font.bold = true;
                    }
                }
                b"i" => {
                    if let Some(font) = current_font.as_mut() {
                        font.italic = true;
                    }
                }
                b"sz" => {
                    if let Some(font) = current_font.as_mut() {
                        if let Some(value) = attr_value(&e, b"val") {
                            if let Ok(size) = value.parse::<f64>() {
                                font.size = size;
                            }
                        }
                    }
                }
                b"name" => {
                    if let Some(font) = current_font.as_mut() {
                        if let Some(value) = attr_value(&e, b"val") {
                            font.name = value;
                        }
                    }
                }
                b"color" => {
                    if let Some(font) = current_font.as_mut() {
                        font.color = attr_value(&e, b"rgb");
                    }
                }
                b"fgColor" if in_fill => {
                    if fill_visible {
                        current_fill = attr_value(&e, b"rgb");
                    }
                }
                b"alignment" => {
                    if let Some(xf) = current_xf.as_mut() {
                        apply_alignment(&e, &mut xf.alignment);
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"fonts" => in_fonts = false,
                b"fills" => in_fills = false,
                b"cellXfs" => in_cell_xfs = false,
                b"font" => {
                    if let Some(font) = current_font.take() {
                        if in_fonts {
                            fonts.push(font);
                        }
                    }
                }
                b"fill" => {
                    if in_fill {
                        fills.push(current_fill.take());
                        in_fill = false;
                    }
                }
                b"xf" => {
                    if let Some(xf) = current_xf.take() {
                        if in_cell_xfs {
                            cell_xfs.push(xf);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(cell_xfs)
}

/// Look up a single attribute on an element
fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return attr.unescape_value().ok().map(|value| value.to_string());
        }
    }
    None
}

/// A patternFill renders a background unless its type is missing or "none"
fn pattern_is_visible(e: &BytesStart) -> bool {
    match attr_value(e, b"patternType") {
        Some(pattern) => pattern != "none",
        None => false,
    }
}

/// Build the base format for an xf entry from its fontId/fillId attributes.
/// Alignment is filled in later from the nested element, if any.
fn resolve_xf(e: &BytesStart, fonts: &[FontInfo], fills: &[Option<String>]) -> CellFormat {
    let font_id = attr_value(e, b"fontId")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    let fill_id = attr_value(e, b"fillId")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);

    CellFormat {
        font: fonts.get(font_id).cloned().unwrap_or_default(),
        alignment: AlignmentInfo::default(),
        fill: FillInfo {
            background: fills.get(fill_id).cloned().flatten(),
        },
    }
}

fn apply_alignment(e: &BytesStart, alignment: &mut AlignmentInfo) {
    for attr in e.attributes().flatten() {
        let value = match attr.unescape_value() {
            Ok(value) => value,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"horizontal" => alignment.horizontal = Some(value.to_string()),
            b"vertical" => alignment.vertical = Some(value.to_string()),
            b"wrapText" => {
                alignment.wrap_text = value.as_ref() == "1" || value.eq_ignore_ascii_case("true");
            }
            _ => {}
        }
    }
}
