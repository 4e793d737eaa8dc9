//! Helpers for building frames in external memory

use crate::synth::decoder::{FRAME_BYTES, FRAME_INPUT_BYTES};
use crate::types::{GainPair, SampleLayout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Subband samples per frame
pub const FRAME_SAMPLES: usize = FRAME_BYTES / 2;

/// Store `value` at logical byte offset `offset` of `buf`
pub fn put_sample(buf: &mut [u8], offset: usize, value: i16, layout: SampleLayout) {
    let p = offset ^ layout.address_xor();
    buf[p..p + 2].copy_from_slice(&layout.encode(value));
}

/// Load the sample at logical byte offset `offset` of `buf`
pub fn get_sample(buf: &[u8], offset: usize, layout: SampleLayout) -> i16 {
    let p = offset ^ layout.address_xor();
    layout.decode([buf[p], buf[p + 1]])
}

/// Write one frame (header + subband samples) at `base`
pub fn write_frame(buf: &mut [u8], base: usize, gains: GainPair, samples: &[i16], layout: SampleLayout) {
    assert_eq!(samples.len(), FRAME_SAMPLES);
    put_sample(buf, base, gains.primary, layout);
    put_sample(buf, base + 4, gains.alternate, layout);
    for (i, &s) in samples.iter().enumerate() {
        put_sample(buf, base + 8 + 2 * i, s, layout);
    }
}

/// Build a buffer holding a single frame at address 0
pub fn frame_buffer(gains: GainPair, samples: &[i16], layout: SampleLayout) -> Vec<u8> {
    let mut buf = vec![0u8; FRAME_INPUT_BYTES];
    write_frame(&mut buf, 0, gains, samples, layout);
    buf
}

/// PCM samples decoded in place at `base`
pub fn read_pcm(buf: &[u8], base: usize, layout: SampleLayout) -> Vec<i16> {
    (0..FRAME_SAMPLES)
        .map(|i| get_sample(buf, base + 2 * i, layout))
        .collect()
}

/// Deterministic subband samples, kept small enough that the window sums stay in range
pub fn random_samples(seed: u64) -> Vec<i16> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..FRAME_SAMPLES)
        .map(|_| rng.gen_range(-2048i16..=2048))
        .collect()
}

/// Single nonzero subband sample
pub fn impulse(index: usize, value: i16) -> Vec<i16> {
    let mut samples = vec![0i16; FRAME_SAMPLES];
    samples[index] = value;
    samples
}
