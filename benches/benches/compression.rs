//! Benchmarks for Huffman compression and decompression
//!
//! Run with: cargo bench --bench compression

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hzip_core::FrequencyTable;
use hzip_tree::{CodeTable, HuffmanTree};

/// Deterministic English-like sample text of the requested size.
fn sample_text(len: usize) -> Vec<u8> {
    const PHRASE: &[u8] = b"the quick brown fox jumps over the lazy dog. \
                            pack my box with five dozen liquor jugs. ";
    PHRASE.iter().copied().cycle().take(len).collect()
}

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Build");

    for size in [4 * 1024, 64 * 1024] {
        let input = sample_text(size);
        let freqs = FrequencyTable::from_bytes(&input);

        group.bench_with_input(BenchmarkId::new("build", size), &freqs, |b, freqs| {
            b.iter(|| {
                let tree = HuffmanTree::build(black_box(freqs)).unwrap();
                CodeTable::from_tree(&tree)
            });
        });
    }

    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compress");

    for size in [4 * 1024, 64 * 1024, 512 * 1024] {
        let input = sample_text(size);

        group.bench_with_input(BenchmarkId::new("compress", size), &input, |b, input| {
            b.iter(|| hzip::compress(black_box(input)).unwrap());
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decompress");

    for size in [4 * 1024, 64 * 1024, 512 * 1024] {
        let input = sample_text(size);
        let compressed = hzip::compress(&input).unwrap();

        group.bench_with_input(
            BenchmarkId::new("decompress", size),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    hzip::decompress(black_box(&compressed.payload), black_box(&compressed.tree))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tree_build, bench_compress, bench_decompress);
criterion_main!(benches);
