//! Benchmarks for fragment rendering performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use guidebook_renderer::{FragmentRenderer, MarkdownBackend};

/// Generate a chapter with the given number of sections.
fn generate_chapter(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * (300 + paragraphs_per_section * 120));
    md.push_str("# Chapter 4: Database-Driven Responses\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "Paragraph {j} of section {i} has **bold**, *italic* and `code` spans.\n\n"
            ));
        }
        md.push_str("```elixir\n# File: lib/repo.ex\ndefmodule Repo do\nend\n```\n\n");
        md.push_str("> **Note**: callouts are grouped.\n> Second line.\n\n");
        md.push_str("- first item\n- second [link](next.html)\n\n");
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    let renderer = FragmentRenderer::new().with_chapter_extraction();

    c.bench_function("render_simple_chapter", |b| {
        b.iter(|| renderer.render("# Chapter 1: Intro\n\nSimple content."));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = FragmentRenderer::new().with_chapter_extraction();
    let mut group = c.benchmark_group("render_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_chapter(sections, paragraphs);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("chapter", format!("{sections}s_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| renderer.render(md)),
        );
    }

    group.finish();
}

fn bench_render_backends(c: &mut Criterion) {
    let markdown = generate_chapter(20, 3);
    let mut group = c.benchmark_group("render_by_backend");
    group.throughput(Throughput::Bytes(markdown.len() as u64));

    for backend in [MarkdownBackend::Rules, MarkdownBackend::CommonMark] {
        let renderer = FragmentRenderer::new()
            .with_chapter_extraction()
            .with_backend(backend);
        group.bench_with_input(
            BenchmarkId::new("backend", format!("{backend:?}")),
            &markdown,
            |b, md| b.iter(|| renderer.render(md)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_varying_sizes,
    bench_render_backends
);
criterion_main!(benches);
