//! End-to-end tests against the compiled `xorsig` binary: build a digest
//! from a file, diff two digests, and check the expected failure modes for
//! malformed envelopes.

use std::io::Write;
use std::process::Command;

fn xorsig_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_xorsig"))
}

#[test]
fn digest_then_diff_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_a = dir.path().join("a.txt");
    let input_b = dir.path().join("b.txt");
    std::fs::write(&input_a, b"the original content of file a").unwrap();
    std::fs::write(&input_b, b"the original content of file B").unwrap();

    let digest_a = dir.path().join("a.xsig");
    let digest_b = dir.path().join("b.xsig");

    let status = xorsig_bin()
        .args(["digest", input_a.to_str().unwrap(), "-o", digest_a.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let status = xorsig_bin()
        .args(["digest", input_b.to_str().unwrap(), "-o", digest_b.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    assert!(digest_a.exists());
    assert!(digest_b.exists());

    let output = xorsig_bin()
        .args(["diff", digest_a.to_str().unwrap(), digest_b.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.trim().is_empty());
}

#[test]
fn digest_without_output_flag_prints_hex_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("payload.bin");
    std::fs::write(&input, [0xf8, 0x80]).unwrap();

    let output = xorsig_bin()
        .args(["digest", input.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn diff_with_pretty_flag_renders_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let digest_a = dir.path().join("a.xsig");
    let digest_b = dir.path().join("b.xsig");
    let input_a = dir.path().join("a.txt");
    let input_b = dir.path().join("b.txt");
    std::fs::write(&input_a, b"alpha payload contents").unwrap();
    std::fs::write(&input_b, b"beta payload contents!").unwrap();

    for (input, out) in [(&input_a, &digest_a), (&input_b, &digest_b)] {
        let status = xorsig_bin()
            .args(["digest", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
            .status()
            .unwrap();
        assert!(status.success());
    }

    let output = xorsig_bin()
        .args([
            "diff",
            digest_a.to_str().unwrap(),
            digest_b.to_str().unwrap(),
            "--pretty",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--") || stdout.contains('\u{2588}'));
}

#[test]
fn diff_rejects_malformed_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.xsig");
    let bad = dir.path().join("bad.xsig");

    let input = dir.path().join("input.txt");
    std::fs::write(&input, b"some content").unwrap();
    let status = xorsig_bin()
        .args(["digest", input.to_str().unwrap(), "-o", good.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let mut bad_file = std::fs::File::create(&bad).unwrap();
    bad_file.write_all(&[0, 0]).unwrap(); // too short to hold a version field
    drop(bad_file);

    let output = xorsig_bin()
        .args(["diff", good.to_str().unwrap(), bad.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn digest_reports_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let output = xorsig_bin()
        .args(["digest", missing.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
