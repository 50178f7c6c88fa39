//! Integration tests for the batch driver: real files in, glitched files out.

use glitchbend_core::{run_batch, BatchRequest, Error, GlitchSpec, Mode};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn request(inputs: Vec<PathBuf>, out: &TempDir, mode: Mode) -> BatchRequest {
    BatchRequest {
        input_files: inputs,
        output_dir: Some(out.path().to_path_buf()),
        spec: GlitchSpec {
            mode,
            count: 1,
            size: 5,
            skip_header: false,
        },
        iterations: 3,
        seed: 4242,
    }
}

#[test]
fn test_batch_ordering_and_naming() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let a = write_input(&in_dir, "a.png", &vec![1u8; 64]);
    let b = write_input(&in_dir, "b.png", &vec![2u8; 64]);

    let result = run_batch(&request(vec![a, b], &out_dir, Mode::Zero)).unwrap();

    // 2 files × 3 iterations, file-major then iteration-minor.
    let names: Vec<String> = result
        .outputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "a_glitched_zero_1.png",
            "a_glitched_zero_2.png",
            "a_glitched_zero_3.png",
            "b_glitched_zero_1.png",
            "b_glitched_zero_2.png",
            "b_glitched_zero_3.png",
        ]
    );

    for path in &result.outputs {
        assert!(path.exists(), "missing output {path:?}");
    }

    assert_eq!(result.stats.files_read, 2);
    assert_eq!(result.stats.outputs_written, 6);
    assert_eq!(result.stats.input_bytes, 128);
}

#[test]
fn test_iterations_start_from_pristine_source() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let input = write_input(&in_dir, "seq.bin", &(0u8..200).collect::<Vec<_>>());
    let result = run_batch(&request(vec![input], &out_dir, Mode::Remove)).unwrap();

    // One 5-byte removal per iteration. If iterations chained on each
    // other's output the lengths would be 195, 190, 185; independent
    // iterations all come out at 195.
    for path in &result.outputs {
        assert_eq!(fs::read(path).unwrap().len(), 195);
    }
}

#[test]
fn test_header_preserved_on_disk() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let bytes: Vec<u8> = (0u8..=255).cycle().take(500).collect();
    let input = write_input(&in_dir, "img.gif", &bytes);

    let mut req = request(vec![input], &out_dir, Mode::Change);
    req.spec.skip_header = true;
    req.spec.count = 50;

    let result = run_batch(&req).unwrap();
    for path in &result.outputs {
        let out = fs::read(path).unwrap();
        assert_eq!(&out[..100], &bytes[..100]);
    }
}

#[test]
fn test_collision_overwrites_silently() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let input = write_input(&in_dir, "x.dat", &vec![7u8; 40]);
    let req = request(vec![input], &out_dir, Mode::Zero);

    run_batch(&req).unwrap();
    let second = run_batch(&req).unwrap();
    assert_eq!(second.outputs.len(), 3);
}

#[test]
fn test_missing_input_is_fatal() {
    let out_dir = TempDir::new().unwrap();
    let req = request(vec![PathBuf::from("/no/such/file.bin")], &out_dir, Mode::Zero);

    match run_batch(&req) {
        Err(Error::ReadInput { path, .. }) => {
            assert_eq!(path, PathBuf::from("/no/such/file.bin"));
        }
        other => panic!("expected ReadInput error, got {other:?}"),
    }
}

#[test]
fn test_unwritable_output_dir_is_fatal() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let input = write_input(&in_dir, "x.dat", &vec![7u8; 40]);
    let mut req = request(vec![input], &out_dir, Mode::Zero);
    req.output_dir = Some(out_dir.path().join("does-not-exist"));

    assert!(matches!(run_batch(&req), Err(Error::WriteOutput { .. })));
}

#[test]
fn test_empty_input_file_passes_through() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let input = write_input(&in_dir, "empty.bin", &[]);
    let result = run_batch(&request(vec![input], &out_dir, Mode::Change)).unwrap();

    // Every attempt skips on an empty buffer; outputs exist and are empty.
    for path in &result.outputs {
        assert_eq!(fs::read(path).unwrap().len(), 0);
    }
}
