use sheetspect_core::report::{CellFormat, CellRef, ColumnWidth};
use sheetspect_core::{InspectOutcome, InspectRequest, Inspector};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const TEMPLATE_SHEET: &str = "MANUAL MONTHLY TEMPLATE";

// Helper to create a minimal valid XLSX file for testing.
// Each sheet is (name, inner worksheet XML); styles is the full styles.xml
// content when the workbook should carry one.
fn create_mock_xlsx(
    path: &Path,
    sheets: &[(&str, &str)],
    styles: Option<&str>,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    // 1. [Content_Types].xml
    zip.start_file("[Content_Types].xml", options)?;
    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
"#,
    );
    for (i, _) in sheets.iter().enumerate() {
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            i + 1
        ));
    }
    if styles.is_some() {
        content_types.push_str(
            r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );
    }
    content_types.push_str("</Types>");
    zip.write_all(content_types.as_bytes())?;

    // 2. _rels/.rels
    zip.start_file("_rels/.rels", options)?;
    zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#.as_bytes())?;

    // 3. xl/workbook.xml
    zip.start_file("xl/workbook.xml", options)?;
    let mut workbook_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets>
"#,
    );
    for (i, (name, _)) in sheets.iter().enumerate() {
        workbook_xml.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            name,
            i + 1,
            i + 1
        ));
    }
    workbook_xml.push_str("</sheets></workbook>");
    zip.write_all(workbook_xml.as_bytes())?;

    // 4. xl/_rels/workbook.xml.rels
    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    let mut rels_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for (i, _) in sheets.iter().enumerate() {
        rels_xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            i + 1, i + 1
        ));
    }
    rels_xml.push_str("</Relationships>");
    zip.write_all(rels_xml.as_bytes())?;

    // 5. xl/styles.xml
    if let Some(styles_xml) = styles {
        zip.start_file("xl/styles.xml", options)?;
        zip.write_all(styles_xml.as_bytes())?;
    }

    // 6. sheets
    for (i, (_, body)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        let sheet_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">{}</worksheet>"#,
            body
        );
        zip.write_all(sheet_xml.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

// Two fonts, a solid yellow fill, and one styled xf with alignment
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<fonts count="2">
<font><sz val="11"/><name val="Calibri"/></font>
<font><b/><i/><sz val="14"/><color rgb="FFFF0000"/><name val="Arial"/></font>
</fonts>
<fills count="3">
<fill><patternFill patternType="none"/></fill>
<fill><patternFill patternType="gray125"/></fill>
<fill><patternFill patternType="solid"><fgColor rgb="FFFFFF00"/><bgColor indexed="64"/></patternFill></fill>
</fills>
<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>
<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
<cellXfs count="2">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
<xf numFmtId="0" fontId="1" fillId="2" borderId="0" xfId="0" applyFont="1" applyFill="1" applyAlignment="1"><alignment horizontal="center" vertical="top" wrapText="1"/></xf>
</cellXfs>
<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>
</styleSheet>"#;

const STYLED_SHEET_BODY: &str = r#"<cols><col min="1" max="1" width="20.5" customWidth="1"/><col min="3" max="5" width="11" customWidth="1"/></cols><sheetData><row r="1"><c r="A1" s="1"><v>42</v></c></row></sheetData>"#;

fn request(cell: &str) -> InspectRequest {
    InspectRequest {
        sheet: TEMPLATE_SHEET.to_string(),
        cell: CellRef::parse(cell).unwrap(),
        columns: 9,
    }
}

fn expect_report(outcome: InspectOutcome) -> sheetspect_core::FormatReport {
    match outcome {
        InspectOutcome::Report(report) => report,
        other => panic!("Expected a report, got {:?}", other),
    }
}

#[test]
fn test_report_matches_sheet_formatting() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("styled.xlsx");
    create_mock_xlsx(
        &path,
        &[(TEMPLATE_SHEET, STYLED_SHEET_BODY)],
        Some(STYLES_XML),
    )?;

    let outcome = Inspector::new(request("A1")).inspect_file(&path)?;
    let report = expect_report(outcome);

    assert_eq!(report.sheet, TEMPLATE_SHEET);
    assert_eq!(report.cell, "A1");

    // Columns A..I: explicit for A and C..E, default elsewhere
    assert_eq!(report.columns.len(), 9);
    let widths: Vec<ColumnWidth> = report.columns.iter().map(|c| c.width).collect();
    assert_eq!(widths[0], ColumnWidth::Explicit(20.5));
    assert_eq!(widths[1], ColumnWidth::Default);
    for i in 2..5 {
        assert_eq!(widths[i], ColumnWidth::Explicit(11.0));
    }
    for i in 5..9 {
        assert_eq!(widths[i], ColumnWidth::Default);
    }
    assert_eq!(report.columns[0].column, "A");
    assert_eq!(report.columns[0].index, 1);
    assert_eq!(report.columns[8].column, "I");
    assert_eq!(report.columns[8].index, 9);

    let format = &report.cell_format;
    assert_eq!(format.font.name, "Arial");
    assert_eq!(format.font.size, 14.0);
    assert!(format.font.bold);
    assert!(format.font.italic);
    assert_eq!(format.font.color.as_deref(), Some("FFFF0000"));
    assert_eq!(format.alignment.horizontal.as_deref(), Some("center"));
    assert_eq!(format.alignment.vertical.as_deref(), Some("top"));
    assert!(format.alignment.wrap_text);
    assert_eq!(format.fill.background.as_deref(), Some("FFFFFF00"));

    Ok(())
}

#[test]
fn test_missing_sheet_reports_not_found() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("other.xlsx");
    create_mock_xlsx(&path, &[("Sheet1", "<sheetData/>")], None)?;

    let outcome = Inspector::new(request("A1")).inspect_file(&path)?;

    assert_eq!(
        outcome,
        InspectOutcome::SheetNotFound {
            sheet: TEMPLATE_SHEET.to_string(),
            available: vec!["Sheet1".to_string()],
        }
    );

    Ok(())
}

#[test]
fn test_unstyled_workbook_reports_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bare.xlsx");
    create_mock_xlsx(&path, &[(TEMPLATE_SHEET, "<sheetData/>")], None)?;

    let outcome = Inspector::new(request("A1")).inspect_file(&path)?;
    let report = expect_report(outcome);

    for column in &report.columns {
        assert_eq!(column.width, ColumnWidth::Default);
    }

    // Calibri 11, nothing applied, no colors
    assert_eq!(report.cell_format, CellFormat::default());

    Ok(())
}

#[test]
fn test_cell_without_style_index_uses_base_format() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("styled.xlsx");
    create_mock_xlsx(
        &path,
        &[(TEMPLATE_SHEET, STYLED_SHEET_BODY)],
        Some(STYLES_XML),
    )?;

    // B2 carries no style attribute, so it resolves to cellXfs entry 0
    let outcome = Inspector::new(request("B2")).inspect_file(&path)?;
    let report = expect_report(outcome);

    assert_eq!(report.cell, "B2");
    assert_eq!(report.cell_format, CellFormat::default());

    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("styled.xlsx");
    create_mock_xlsx(
        &path,
        &[(TEMPLATE_SHEET, STYLED_SHEET_BODY)],
        Some(STYLES_XML),
    )?;

    let inspector = Inspector::new(request("A1"));
    let first = inspector.inspect_file(&path)?;
    let second = inspector.inspect_file(&path)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_json_report_shape() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("styled.xlsx");
    create_mock_xlsx(
        &path,
        &[(TEMPLATE_SHEET, STYLED_SHEET_BODY)],
        Some(STYLES_XML),
    )?;

    let outcome = Inspector::new(request("A1")).inspect_file(&path)?;
    let report = expect_report(outcome);

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["sheet"], TEMPLATE_SHEET);
    assert_eq!(json["cell"], "A1");
    assert_eq!(json["columns"][0]["column"], "A");
    assert_eq!(json["columns"][0]["width"], 20.5);
    assert_eq!(json["columns"][1]["width"], "default");
    assert_eq!(json["cell_format"]["font"]["name"], "Arial");
    assert_eq!(json["cell_format"]["font"]["bold"], true);
    assert_eq!(json["cell_format"]["alignment"]["horizontal"], "center");
    assert_eq!(json["cell_format"]["fill"]["background"], "FFFFFF00");

    Ok(())
}

#[test]
fn test_non_xlsx_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("styled.xlsb");
    create_mock_xlsx(
        &path,
        &[(TEMPLATE_SHEET, STYLED_SHEET_BODY)],
        Some(STYLES_XML),
    )?;

    let result = Inspector::new(request("A1")).inspect_file(&path);
    assert!(result.is_err());

    Ok(())
}
