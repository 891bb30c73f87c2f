use anyhow::Result;
use chartplot_core::{Chart, ChartDocument, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_doc(series: usize, n: usize) -> ChartDocument {
    let mut json = String::from(r#"{"title": "bench", "series": ["#);
    for s in 0..series {
        if s > 0 { json.push(','); }
        json.push_str(&format!(r#"{{"name": "s{s}", "points": ["#));
        for i in 0..n {
            if i > 0 { json.push(','); }
            let x = i as f64;
            let y = (i as f64 * 0.01 + s as f64).sin() * 10.0;
            json.push_str(&format!(r#"{{"real": {{"x": {x}, "y": {y}}}}}"#));
        }
        json.push_str("]}");
    }
    json.push_str("]}");
    ChartDocument::from_json_str(&json).expect("bench doc")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("3x{n}"), |b| {
            let chart = Chart::from_document(&build_doc(3, n)).expect("chart");
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
