//! In-memory BC template used by the unit tests.

use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

pub const SHEET_TEMPLATE: &str = concat!(
    r#"<?xml version="1.0" encoding="utf-8"?>"#,
    r#"<x:worksheet xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:x="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<x:sheetData>"#,
    r#"<x:row r="1"><x:c r="A1" t="inlineStr"><x:is><x:t>Achat</x:t></x:is></x:c></x:row>"#,
    r#"<x:row r="2"><x:c r="A2" t="inlineStr"><x:is><x:t>38</x:t></x:is></x:c></x:row>"#,
    r#"<x:row r="3"><x:c r="A3" t="inlineStr"><x:is><x:t>Type document</x:t></x:is></x:c></x:row>"#,
    r#"</x:sheetData>"#,
    r#"<x:tableParts count="1"><x:tablePart r:id="rId1" /></x:tableParts>"#,
    r#"</x:worksheet>"#,
);

fn table(id: u32, end_col: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><x:table xmlns:x="http://schemas.openxmlformats.org/spreadsheetml/2006/main" id="{id}" name="Table{id}" displayName="Table{id}" ref="A3:{end_col}4"><x:autoFilter ref="A3:{end_col}4" /></x:table>"#
    )
}

pub fn template_parts() -> Vec<(String, String)> {
    vec![
        ("[Content_Types].xml".to_string(), "<Types/>".to_string()),
        ("_rels/.rels".to_string(), "<Relationships/>".to_string()),
        ("xl/workbook.xml".to_string(), "<workbook><sheets/></workbook>".to_string()),
        ("xl/styles.xml".to_string(), "<styleSheet/>".to_string()),
        ("xl/worksheets/sheet1.xml".to_string(), SHEET_TEMPLATE.to_string()),
        ("xl/worksheets/sheet2.xml".to_string(), SHEET_TEMPLATE.to_string()),
        ("xl/tables/table1.xml".to_string(), table(1, "AR")),
        ("xl/tables/table2.xml".to_string(), table(2, "AL")),
    ]
}

pub fn template_bytes() -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in template_parts() {
        writer.start_file(name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn read_part(archive: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(archive)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}
