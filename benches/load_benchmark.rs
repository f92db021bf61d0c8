//! Benchmarks for sheetload parsing performance.
//!
//! Run with: cargo bench
//!
//! Synthetic single-sheet workbooks at various row counts, loaded
//! through the full calamine read path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheetload::{slice_range, SheetLoader};
use std::io::{Cursor, Write};

/// Creates a synthetic XLSX workbook with a header row and the given
/// number of data rows.
fn create_test_xlsx(row_count: usize) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
    )
    .unwrap();

    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Sheet1" sheetId="1" r:id="rId1"/>
  </sheets>
</workbook>"#,
    )
    .unwrap();

    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#,
    )
    .unwrap();

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1"><c r="A1" t="inlineStr"><is><t>Id</t></is></c><c r="B1" t="inlineStr"><is><t>Name</t></is></c><c r="C1" t="inlineStr"><is><t>Score</t></is></c></row>"#,
    );

    for i in 0..row_count {
        let r = i + 2;
        content.push_str(&format!(
            "\n    <row r=\"{r}\"><c r=\"A{r}\"><v>{i}</v></c><c r=\"B{r}\" t=\"inlineStr\"><is><t>name-{i}</t></is></c><c r=\"C{r}\"><v>{}</v></c></row>",
            i as f64 * 0.5
        ));
    }

    content.push_str("\n  </sheetData>\n</worksheet>");

    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

fn bench_table_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_load");

    for &rows in &[100usize, 1_000, 10_000] {
        let file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .unwrap();
        std::fs::write(file.path(), create_test_xlsx(rows)).unwrap();

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), file.path(), |b, path| {
            b.iter(|| {
                let mut loader = SheetLoader::new(path, 0);
                assert!(loader.parse().unwrap());
                black_box(loader.row_count());
            });
        });
    }

    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");

    for &rows in &[100usize, 1_000] {
        let file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .unwrap();
        std::fs::write(file.path(), create_test_xlsx(rows)).unwrap();
        let bottom_right = format!("C{}", rows + 1);

        group.bench_with_input(BenchmarkId::from_parameter(rows), file.path(), |b, path| {
            b.iter(|| {
                let rect = slice_range(path, 0, "A1", &bottom_right).unwrap();
                black_box(rect.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table_load, bench_slice);
criterion_main!(benches);
