use std::fs;

use matbench_core::{
    config::{GeneratorSettings, MatrixFormat},
    matrix_io::{binary_len, read_matrix_binary},
    BenchError, Matrix, MatrixKind,
};
use matbench_tools::generate;

fn settings(dir: &tempfile::TempDir, name: &str, size: i32, kind: MatrixKind) -> GeneratorSettings {
    GeneratorSettings {
        size,
        kind,
        output: dir.path().join(name),
        ..GeneratorSettings::default()
    }
}

#[test]
fn deterministic_kinds_round_trip_bit_identical() {
    let dir = tempfile::tempdir().unwrap();
    for kind in [MatrixKind::Zeros, MatrixKind::Ones, MatrixKind::Identity] {
        for size in [1, 2, 8, 100] {
            let settings = settings(&dir, &format!("{kind}_{size}.bin"), size, kind);
            let generated = generate::run(&settings).expect("generation failed");
            let size_on_disk = fs::metadata(&settings.output).unwrap().len() as usize;
            assert_eq!(size_on_disk, binary_len(size as usize));

            let restored = read_matrix_binary(&settings.output).expect("read back failed");
            assert_eq!(restored.dim(), size as usize);
            assert_eq!(bits(restored.as_slice()), bits(generated.as_slice()));
            assert!(restored.approx_eq(&generated, 0.0));
        }
    }
}

#[test]
fn same_seed_reproduces_random_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = settings(&dir, "a.bin", 32, MatrixKind::Random);
    first.seed = Some(0xA11CE);
    let mut second = settings(&dir, "b.bin", 32, MatrixKind::Random);
    second.seed = Some(0xA11CE);

    generate::run(&first).unwrap();
    generate::run(&second).unwrap();
    assert_eq!(
        fs::read(&first.output).unwrap(),
        fs::read(&second.output).unwrap()
    );

    let restored = read_matrix_binary(&first.output).unwrap();
    assert!(restored.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn random_text_read_back_matches_within_print_precision() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings(&dir, "random.txt", 12, MatrixKind::Random);
    settings.format = MatrixFormat::Text;
    settings.seed = Some(0xBEEF);
    let generated = generate::run(&settings).unwrap();

    let text = fs::read_to_string(&settings.output).unwrap();
    let values: Vec<f64> = text
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    let restored = Matrix::from_row_major(12, values).expect("square text payload");
    assert!(restored.approx_eq(&generated, 1e-6));
}

#[test]
fn text_format_writes_one_line_per_row() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings(&dir, "eye.txt", 3, MatrixKind::Identity);
    settings.format = MatrixFormat::Text;
    settings.preview = Some(2);
    generate::run(&settings).unwrap();

    let text = fs::read_to_string(&settings.output).unwrap();
    assert_eq!(
        text,
        "1.000000 0.000000 0.000000\n0.000000 1.000000 0.000000\n0.000000 0.000000 1.000000\n"
    );
}

#[test]
fn non_positive_size_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    for size in [0, -5] {
        let settings = settings(&dir, "never.bin", size, MatrixKind::Zeros);
        let err = generate::run(&settings).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BenchError>(),
            Some(BenchError::InvalidDimension(_))
        ));
        assert!(!settings.output.exists());
    }
}

fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.to_bits()).collect()
}
