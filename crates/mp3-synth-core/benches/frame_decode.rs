use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mp3_synth_core::{DecoderConfig, Phase, SampleLayout, SynthesisDecoder, FRAME_INPUT_BYTES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_frames(count: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut memory = vec![0u8; FRAME_INPUT_BYTES * count];
    rng.fill(&mut memory[..]);
    // Unit gains as seen through the word-swapped layout
    for frame in memory.chunks_exact_mut(FRAME_INPUT_BYTES) {
        frame[..8].copy_from_slice(&[0, 0, 1, 0, 0, 0, 1, 0]);
    }
    memory
}

fn bench_decode_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_frame");
    for layout in [SampleLayout::WordSwapped, SampleLayout::BigEndian] {
        let input = generate_frames(1, 42);
        let config = DecoderConfig::new().with_layout(layout);
        let mut decoder = SynthesisDecoder::new(config);
        group.bench_with_input(BenchmarkId::new("layout", layout.name()), &input, |b, input| {
            b.iter(|| {
                let mut memory = input.clone();
                let summary = decoder
                    .decode_frame(&mut memory, 0, Phase::new(15).unwrap())
                    .unwrap();
                black_box((summary, memory))
            })
        });
    }
    group.finish();
}

fn bench_decode_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_frames");
    for &count in &[1usize, 8, 32] {
        let input = generate_frames(count, 7);
        let mut decoder = SynthesisDecoder::default();
        group.bench_with_input(BenchmarkId::new("frames", count), &count, |b, &count| {
            b.iter(|| {
                let mut memory = input.clone();
                let summaries = decoder
                    .decode_frames(&mut memory, 0, count, Phase::new(0).unwrap())
                    .unwrap();
                black_box(summaries)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode_frame, bench_decode_frames);
criterion_main!(benches);
