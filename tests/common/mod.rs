use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

pub fn sheet(header_row: u32) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<x:worksheet xmlns:x="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
            r#"<x:sheetData>"#,
            r#"<x:row r="1"><x:c r="A1" t="inlineStr"><x:is><x:t>Achat</x:t></x:is></x:c></x:row>"#,
            r#"<x:row r="2" />"#,
            r#"<x:row r="{}"><x:c r="A3" t="inlineStr"><x:is><x:t>Type document</x:t></x:is></x:c></x:row>"#,
            r#"</x:sheetData>"#,
            r#"</x:worksheet>"#,
        ),
        header_row
    )
}

/// Minimal BC template archive. `header_row` lets tests break the row 3 anchor.
pub fn template(header_row: u32) -> Vec<u8> {
    let parts = vec![
        ("[Content_Types].xml", "<Types/>".to_string()),
        ("_rels/.rels", "<Relationships/>".to_string()),
        ("xl/workbook.xml", "<workbook/>".to_string()),
        ("xl/worksheets/sheet1.xml", sheet(header_row)),
        ("xl/worksheets/sheet2.xml", sheet(header_row)),
        ("xl/tables/table1.xml", r#"<x:table ref="A3:AR4"><x:autoFilter ref="A3:AR4" /></x:table>"#.to_string()),
    ];

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer.start_file(name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn read_part(archive: &[u8], name: &str) -> Option<String> {
    let mut archive = ZipArchive::new(Cursor::new(archive)).unwrap();
    let mut file = archive.by_name(name).ok()?;
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    Some(content)
}
