use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, Error)]
pub enum XlsxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// A single worksheet cell. Strings are written as inline strings, so the
/// workbook needs no shared-string table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn number(value: impl Into<f64>) -> Self {
        Cell::Number(value.into())
    }
}

/// Writes a one-sheet .xlsx workbook: a header row followed by data rows,
/// with fixed column display widths.
///
/// An .xlsx file is a zip archive of OOXML parts; this emits the minimal set
/// a spreadsheet application needs (content types, package rels, workbook,
/// one worksheet).
pub fn write_workbook(
    path: &Path,
    sheet_name: &str,
    headers: &[&str],
    rows: &[Vec<Cell>],
    col_widths: &[f64],
) -> Result<(), XlsxError> {
    let file = std::fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(PACKAGE_RELS.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml(sheet_name).as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(WORKBOOK_RELS.as_bytes())?;

    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(worksheet_xml(headers, rows, col_widths).as_bytes())?;

    zip.finish()?;
    Ok(())
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        xml_escape(sheet_name)
    )
}

fn worksheet_xml(headers: &[&str], rows: &[Vec<Cell>], col_widths: &[f64]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    if !col_widths.is_empty() {
        xml.push_str("<cols>");
        for (i, width) in col_widths.iter().enumerate() {
            let _ = write!(
                xml,
                r#"<col min="{0}" max="{0}" width="{1}" customWidth="1"/>"#,
                i + 1,
                width
            );
        }
        xml.push_str("</cols>");
    }

    xml.push_str("<sheetData>");
    let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::text(*h)).collect();
    write_row(&mut xml, 1, &header_cells);
    for (i, row) in rows.iter().enumerate() {
        write_row(&mut xml, i + 2, row);
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn write_row(xml: &mut String, row_number: usize, cells: &[Cell]) {
    let _ = write!(xml, r#"<row r="{}">"#, row_number);
    for (col, cell) in cells.iter().enumerate() {
        let reference = cell_ref(col, row_number);
        match cell {
            Cell::Number(value) => {
                let _ = write!(xml, r#"<c r="{}"><v>{}</v></c>"#, reference, value);
            }
            Cell::Text(value) => {
                let _ = write!(
                    xml,
                    r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    reference,
                    xml_escape(value)
                );
            }
        }
    }
    xml.push_str("</row>");
}

/// A1-style cell reference from zero-based column and one-based row.
fn cell_ref(col: usize, row: usize) -> String {
    format!("{}{}", column_letters(col), row)
}

fn column_letters(mut col: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (col % 26) as u8);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).expect("column letters are ASCII")
}

fn xml_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(6), "G");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(51), "AZ");
        assert_eq!(column_letters(52), "BA");
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(0, 1), "A1");
        assert_eq!(cell_ref(4, 12), "E12");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(xml_escape("Press de Banca"), "Press de Banca");
    }

    #[test]
    fn test_worksheet_xml_layout() {
        let rows = vec![vec![Cell::number(1u32), Cell::text("Lunes")]];
        let xml = worksheet_xml(&["Semana", "Día"], &rows, &[10.0, 15.0]);

        assert!(xml.contains(r#"<col min="1" max="1" width="10" customWidth="1"/>"#));
        assert!(xml.contains(r#"<c r="A1" t="inlineStr"><is><t>Semana</t></is></c>"#));
        assert!(xml.contains(r#"<c r="A2"><v>1</v></c>"#));
        assert!(xml.contains(r#"<c r="B2" t="inlineStr"><is><t>Lunes</t></is></c>"#));
    }

    #[test]
    fn test_workbook_archive_parts() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("test.xlsx");

        let rows = vec![vec![Cell::number(10u32), Cell::text("x & y")]];
        write_workbook(&path, "Semana 1", &["A", "B"], &rows, &[10.0, 10.0]).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"xl/workbook.xml".to_string()));
        assert!(names.contains(&"xl/_rels/workbook.xml.rels".to_string()));
        assert!(names.contains(&"xl/worksheets/sheet1.xml".to_string()));

        use std::io::Read;
        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();
        assert!(sheet.contains("x &amp; y"));
    }
}
