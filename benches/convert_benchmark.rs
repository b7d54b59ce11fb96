//! Benchmarks for the glyphdown conversion pipeline.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the full page pipeline over synthetic glyph
//! streams.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glyphdown::{
    convert_document, ConvertOptions, Glyph, MarkupStyle, Page, PageConverter, PageObject,
    StyleSheet,
};

const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;

fn style_sheet() -> StyleSheet {
    StyleSheet::new()
        .with_font("Serif-Regular", MarkupStyle::Plain)
        .with_font("Serif-Bold", MarkupStyle::Bold)
        .with_font("Serif-Italic", MarkupStyle::Italic)
}

/// Builds a page of `line_count` text lines, alternating body text with
/// the occasional heading and emphasized word.
fn synthetic_page(number: u32, line_count: usize) -> Page {
    let mut page = Page::new(number, PAGE_WIDTH, PAGE_HEIGHT);
    for line in 0..line_count {
        let top = 40.0 + 12.0 * line as f64;
        let text = if line % 10 == 0 {
            "B2.  Operations in deep space"
        } else {
            "The crew consults rule 2B3 before committing the maneuver"
        };
        for (i, ch) in text.chars().enumerate() {
            let font = if line % 10 == 0 || (line % 3 == 0 && i < 8) {
                "Serif-Bold"
            } else {
                "Serif-Regular"
            };
            let font = if ch == ' ' { "Serif-Regular" } else { font };
            let x0 = 140.0 + 5.0 * i as f64;
            page.push(PageObject::Glyph(Glyph {
                text: ch.to_string(),
                font_name: format!("FCVRLH+{font}"),
                x0,
                x1: x0 + 5.0,
                y0: PAGE_HEIGHT - top - 10.0,
                y1: PAGE_HEIGHT - top,
                top,
                bottom: top + 10.0,
                doctop: 842.0 * number as f64 + top,
                height: 10.0,
                fill_color: vec![0.0, 0.0, 0.0, 1.0],
            }));
        }
    }
    page
}

fn bench_page_conversion(c: &mut Criterion) {
    let options = ConvertOptions::new().with_styles(style_sheet());
    let converter = PageConverter::new(options);
    let page = synthetic_page(4, 55);

    c.bench_function("convert_page_55_lines", |b| {
        b.iter(|| converter.convert_page(black_box(&page)).unwrap());
    });
}

fn bench_document_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_document");

    for page_count in [1u32, 5, 10] {
        let pages: Vec<Page> = (0..page_count)
            .map(|n| synthetic_page(n + 2, 55))
            .collect();

        let sequential = ConvertOptions::new().with_styles(style_sheet()).sequential();
        group.bench_function(format!("{page_count}_pages_sequential"), |b| {
            b.iter(|| convert_document(black_box(&pages), &sequential).unwrap());
        });

        let parallel = ConvertOptions::new().with_styles(style_sheet());
        group.bench_function(format!("{page_count}_pages_parallel"), |b| {
            b.iter(|| convert_document(black_box(&pages), &parallel).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_page_conversion, bench_document_conversion);
criterion_main!(benches);
