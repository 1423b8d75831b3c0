//! Benchmarks for tokenization and anchor resolution
//!
//! Run with: cargo bench anchors

use draft_anchor::anchor::{overlay, resolve, select_range, tokenize};
use draft_anchor::editable::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Roughly one screen of prose: 594 words, under the label limit
fn draft_text() -> String {
    "the quick brown fox jumps over a lazy dog\n".repeat(66)
}

// ============================================================================
// Tokenization
// ============================================================================

#[divan::bench]
fn tokenize_600_words(bencher: divan::Bencher) {
    let text = draft_text();
    bencher.bench(|| tokenize(divan::black_box(&text)).count());
}

#[divan::bench]
fn tokenize_long_space_runs(bencher: divan::Bencher) {
    let text = "word          ".repeat(500);
    bencher.bench(|| tokenize(divan::black_box(&text)).count());
}

// ============================================================================
// Resolution (recomputed per call)
// ============================================================================

#[divan::bench]
fn overlay_600_words(bencher: divan::Bencher) {
    let text = draft_text();
    bencher.bench(|| overlay(divan::black_box(&text)));
}

#[divan::bench]
fn resolve_first_anchor(bencher: divan::Bencher) {
    let text = draft_text();
    bencher.bench(|| resolve(divan::black_box(&text), "a"));
}

#[divan::bench]
fn resolve_last_double_anchor(bencher: divan::Bencher) {
    let text = draft_text();
    bencher.bench(|| resolve(divan::black_box(&text), "vt"));
}

#[divan::bench]
fn select_range_across_draft(bencher: divan::Bencher) {
    let text = draft_text();
    bencher.bench(|| select_range(divan::black_box(&text), "b", Some("uz"), true));
}

// ============================================================================
// Applying edits to host buffers
// ============================================================================

#[divan::bench]
fn replace_word_rope(bencher: divan::Bencher) {
    let text = draft_text();
    bencher
        .with_inputs(|| RopeBuffer::from_text(&text))
        .bench_values(|mut buf| {
            buf.replace(1200..1205, "QUICK");
            buf.len_chars()
        });
}

#[divan::bench]
fn replace_word_string(bencher: divan::Bencher) {
    let text = draft_text();
    bencher
        .with_inputs(|| StringBuffer::from_text(&text))
        .bench_values(|mut buf| {
            buf.replace(1200..1205, "QUICK");
            buf.len_chars()
        });
}
