//! Parity checks for the concrete windowed-diff scenarios and the universal
//! properties that tie `XORCompress` and `Diff` together end to end.

use xorsig::{diff, BitPosition, BitString, Digest};

#[test]
fn diff_marks_mismatched_three_bit_windows() {
    let a = BitString::new(&[0xa8, 0x1b]);
    let b = BitString::new(&[0xb4, 0x7a]);
    let out = diff(&a, &b, &BitPosition::new(0, 3)).unwrap();
    assert_eq!(out.bytes(), vec![0x54]);
}

#[test]
fn diff_of_identical_inputs_is_all_zero() {
    let text = BitString::new(b"identical payload, compared with itself");
    let out = diff(&text, &text, &BitPosition::new(0, 4)).unwrap();
    assert!(out.bytes().iter().all(|byte| *byte == 0));
}

#[test]
fn diff_localizes_a_single_byte_change() {
    let mut modified = b"the payload is mostly the same across both sides".to_vec();
    let original = BitString::new(&modified);
    modified[20] ^= 0xff;
    let changed = BitString::new(&modified);

    let out = diff(&original, &changed, &BitPosition::new(0, 8)).unwrap();
    assert!(out.bytes().iter().any(|byte| *byte != 0));
}

#[test]
fn digest_diff_end_to_end_via_envelopes() {
    let a_source = BitString::new(b"version one of the document body");
    let mut b_bytes = b"version one of the document body".to_vec();
    b_bytes[10] = b'X';
    let b_source = BitString::new(&b_bytes);

    let digest_a = Digest::new(&a_source).unwrap();
    let digest_b = Digest::new(&b_source).unwrap();

    let loaded_a = Digest::load(&digest_a.emit()).unwrap();
    let loaded_b = Digest::load(&digest_b.emit()).unwrap();

    let result = xorsig::digest::diff(&loaded_a, &loaded_b, &BitPosition::new(0, 8)).unwrap();
    assert!(result.bytes().iter().any(|byte| *byte != 0));

    let self_diff = xorsig::digest::diff(&loaded_a, &loaded_a, &BitPosition::new(0, 8)).unwrap();
    assert!(self_diff.bytes().iter().all(|byte| *byte == 0));
}

#[test]
fn xor_compress_shrinks_by_roughly_window_over_advance() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 255) as u8).collect();
    let source = BitString::new(&data);
    let compressed = source.xor_compress(1, 8).unwrap();
    // outLen = (N - 1)*A + W with N = ceil(L/W) = 1000, A=1, W=8, L=8000 bits.
    let compressed_len = compressed.length().to_string().parse::<i128>().unwrap();
    assert_eq!(compressed_len, 1007);
}
