//! `generate_matrix`: builds a square test matrix and saves it for the benchmark programs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{
    builder::{PossibleValuesParser, TypedValueParser},
    Parser,
};
use matbench_core::{
    config::{GeneratorSettings, MatrixFormat},
    generate_matrix,
    matrix_io::{write_matrix_binary, write_matrix_text},
    seeded_rng, Matrix, MatrixKind,
};

#[derive(Debug, Parser)]
#[command(
    name = "generate_matrix",
    about = "Generate test matrices for matrix multiplication",
    version
)]
pub struct GenerateArgs {
    /// Matrix dimension
    #[arg(short = 'n', long = "size", default_value_t = 1024, allow_negative_numbers = true)]
    pub size: i32,

    /// Matrix type
    #[arg(
        short = 't',
        long = "type",
        default_value = "random",
        value_parser = PossibleValuesParser::new(MatrixKind::ALL.map(MatrixKind::name))
            .try_map(|tag| tag.parse::<MatrixKind>())
    )]
    pub kind: MatrixKind,

    /// Output filename
    #[arg(short, long, default_value = "matrix.bin")]
    pub output: PathBuf,

    /// Save in text format instead of binary
    #[arg(long)]
    pub text: bool,

    /// Random seed for reproducibility (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Print the top-left KxK corner of the matrix after saving
    #[arg(long, value_name = "K")]
    pub preview: Option<usize>,
}

impl From<GenerateArgs> for GeneratorSettings {
    fn from(args: GenerateArgs) -> Self {
        Self {
            size: args.size,
            kind: args.kind,
            output: args.output,
            format: if args.text {
                MatrixFormat::Text
            } else {
                MatrixFormat::Binary
            },
            seed: args.seed,
            preview: args.preview,
        }
    }
}

/// Generates the matrix described by `settings`, writes it to `settings.output` and returns it.
pub fn run(settings: &GeneratorSettings) -> Result<Matrix> {
    println!(
        "Generating {n}x{n} {kind} matrix...",
        n = settings.size,
        kind = settings.kind
    );

    let mut rng = seeded_rng(settings.seed);
    let matrix = generate_matrix(settings.size, settings.kind, &mut rng)?;
    tracing::info!(
        n = matrix.dim(),
        kind = %settings.kind,
        seed = ?settings.seed,
        checksum = matrix.checksum(),
        "matrix generated"
    );

    match settings.format {
        MatrixFormat::Binary => write_matrix_binary(&matrix, &settings.output)?,
        MatrixFormat::Text => write_matrix_text(&matrix, &settings.output)?,
    }
    println!(
        "Saved {n}x{n} matrix to {}",
        settings.output.display(),
        n = matrix.dim()
    );

    if let Some(max) = settings.preview {
        print!("{}", matrix.preview(max));
    }

    println!("Done!");
    Ok(matrix)
}

fn parse_seed(value: &str) -> Result<u64> {
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16).context("expected hex literal")
    } else {
        value.parse().context("expected integer seed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_seeds() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed("0xA11CE").unwrap(), 0xA11CE);
        assert_eq!(parse_seed("0Xff").unwrap(), 255);
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("0xzz").is_err());
    }

    #[test]
    fn defaults_match_settings_defaults() {
        let args = GenerateArgs::try_parse_from(["generate_matrix"]).unwrap();
        assert_eq!(GeneratorSettings::from(args), GeneratorSettings::default());
    }

    #[test]
    fn flags_map_onto_settings() {
        let args = GenerateArgs::try_parse_from([
            "generate_matrix",
            "-n",
            "8",
            "-t",
            "identity",
            "-o",
            "eye.txt",
            "--text",
            "--seed",
            "0x10",
        ])
        .unwrap();
        let settings = GeneratorSettings::from(args);
        assert_eq!(settings.size, 8);
        assert_eq!(settings.kind, MatrixKind::Identity);
        assert_eq!(settings.output, PathBuf::from("eye.txt"));
        assert_eq!(settings.format, MatrixFormat::Text);
        assert_eq!(settings.seed, Some(16));
    }

    #[test]
    fn unknown_type_is_rejected_by_parser() {
        assert!(GenerateArgs::try_parse_from(["generate_matrix", "-t", "triangular"]).is_err());
    }

    #[test]
    fn negative_size_reaches_validation() {
        let args = GenerateArgs::try_parse_from(["generate_matrix", "-n", "-3"]).unwrap();
        assert_eq!(args.size, -3);
    }
}
