//! Both external memory layouts decode the same logical stream identically

use super::utils::*;
use crate::synth::decoder::{SynthesisDecoder, FRAME_INPUT_BYTES};
use crate::types::{DecoderConfig, GainPair, Phase, SampleLayout};

fn decoder(layout: SampleLayout) -> SynthesisDecoder {
    SynthesisDecoder::new(DecoderConfig::new().with_layout(layout))
}

/// Big-endian bytes seen as little-endian host words
fn swap_words(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(4)
        .flat_map(|w| [w[3], w[2], w[1], w[0]])
        .collect()
}

#[test]
fn test_word_swap_is_byte_reversal_per_word() {
    let mut be = vec![0u8; 8];
    put_sample(&mut be, 0, 0x1234, SampleLayout::BigEndian);
    put_sample(&mut be, 6, -2, SampleLayout::BigEndian);
    let swapped = swap_words(&be);
    assert_eq!(get_sample(&swapped, 0, SampleLayout::WordSwapped), 0x1234);
    assert_eq!(get_sample(&swapped, 6, SampleLayout::WordSwapped), -2);
}

#[test]
fn test_layouts_decode_identically() {
    let frames = 2;
    let mut be = vec![0u8; FRAME_INPUT_BYTES * frames];
    for i in 0..frames {
        write_frame(
            &mut be,
            i * FRAME_INPUT_BYTES,
            GainPair::new(3, -2),
            &random_samples(30 + i as u64),
            SampleLayout::BigEndian,
        );
    }
    let mut swapped = swap_words(&be);

    let start = Phase::new(12).unwrap();
    let be_summaries = decoder(SampleLayout::BigEndian)
        .decode_frames(&mut be, 0, frames, start)
        .unwrap();
    let swapped_summaries = decoder(SampleLayout::WordSwapped)
        .decode_frames(&mut swapped, 0, frames, start)
        .unwrap();

    assert_eq!(be_summaries, swapped_summaries);
    assert_eq!(be_summaries[0].gains, GainPair::new(3, -2));
    assert_eq!(swap_words(&swapped), be);
    assert!(read_pcm(&be, 0, SampleLayout::BigEndian).iter().any(|&s| s != 0));
}
