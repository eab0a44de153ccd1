use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use contact_cli::cli::{CheckArgs, Cli, Command, NormalizeArgs, NormalizerArgs};
use contact_cli::commands::{run_check_date, run_check_phone, run_normalize};
use contact_cli::summary::{check_table, skipped_lines, summary_table};
use tempfile::TempDir;

fn sample_input() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/contacts_sample.csv")
}

fn normalize_args(input: PathBuf) -> NormalizeArgs {
    NormalizeArgs {
        input,
        output_dir: None,
        output: None,
        dry_run: false,
        options: NormalizerArgs::default(),
    }
}

#[test]
fn normalize_writes_valid_rows_in_header_order() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let args = NormalizeArgs {
        output: Some(output.clone()),
        ..normalize_args(sample_input())
    };

    let result = run_normalize(&args).unwrap();

    assert_eq!(result.output_path.as_deref(), Some(output.as_path()));
    assert_eq!(result.output.processed(), 5);
    assert_eq!(result.output.normalized_count(), 3);
    assert_eq!(result.output.skipped_count(), 2);

    let written = fs::read_to_string(&output).unwrap().replace("\r\n", "\n");
    insta::assert_snapshot!("normalized_csv", written);
}

#[test]
fn skipped_rows_are_reported_with_original_values() {
    let args = NormalizeArgs {
        dry_run: true,
        ..normalize_args(sample_input())
    };
    let result = run_normalize(&args).unwrap();

    let lines = skipped_lines(&result.output.skipped);
    assert_eq!(
        lines[0],
        "Row: {'name': 'Bob', 'phone': '054123', 'dob': '09/09/90', 'email': 'bob@example.com'}, \
         Reason: {'phone': 'Phone number length invalid: 6 digits (must be 8-15)'}"
    );
    assert!(lines[1].starts_with("Row: {'name': 'Dee', 'phone': 'o522458591'"));
    assert!(lines[1].contains("'dob': 'Invalid date format: not a date."));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let args = NormalizeArgs {
        output_dir: Some(dir.path().join("results")),
        dry_run: true,
        ..normalize_args(sample_input())
    };

    let result = run_normalize(&args).unwrap();

    assert!(result.dry_run);
    assert!(result.output_path.is_none());
    assert!(!dir.path().join("results").exists());
}

#[test]
fn output_dir_gets_timestamped_file() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("nested").join("results");
    let args = NormalizeArgs {
        output_dir: Some(results.clone()),
        ..normalize_args(sample_input())
    };

    let result = run_normalize(&args).unwrap();

    let path = result.output_path.unwrap();
    assert_eq!(path.parent(), Some(results.as_path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("normalized_contacts_"));
    assert!(name.ends_with(".csv"));
    assert_eq!(name.len(), "normalized_contacts_YYYYMMDD_HHMMSS.csv".len());
    assert!(path.is_file());
}

#[test]
fn all_rows_skipped_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "phone;dob\n054123;31/02/2001\n").unwrap();
    let output = dir.path().join("out.csv");
    let args = NormalizeArgs {
        output: Some(output.clone()),
        ..normalize_args(input)
    };

    let result = run_normalize(&args).unwrap();

    assert_eq!(result.output.skipped_count(), 1);
    assert!(result.output_path.is_none());
    assert!(!output.exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = run_normalize(&normalize_args(dir.path().join("missing.csv"))).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("read input"));
    assert!(message.contains("CSV file not found"));
}

#[test]
fn config_file_settings_apply() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("contacts.toml");
    fs::write(
        &config,
        "[phone]\ndefault_country_code = \"+44\"\n\n[date]\npivot_year = 95\n",
    )
    .unwrap();
    let input = dir.path().join("contacts.csv");
    fs::write(&input, "phone;dob\n02079460958;09/09/90\n").unwrap();

    let args = NormalizeArgs {
        dry_run: true,
        options: NormalizerArgs {
            config: Some(config),
            ..NormalizerArgs::default()
        },
        ..normalize_args(input)
    };
    let result = run_normalize(&args).unwrap();

    let row = &result.output.normalized[0];
    assert_eq!(row.get("phone"), Some("+442079460958"));
    assert_eq!(row.get("dob"), Some("2090-09-09"));
}

#[test]
fn invalid_config_is_an_error() {
    let args = NormalizeArgs {
        options: NormalizerArgs {
            pivot_year: Some(150),
            ..NormalizerArgs::default()
        },
        ..normalize_args(sample_input())
    };
    let err = run_normalize(&args).unwrap_err();
    assert!(format!("{err:#}").contains("invalid pivot year '150'"));
}

#[test]
fn summary_table_lists_counts() {
    let args = NormalizeArgs {
        dry_run: true,
        ..normalize_args(sample_input())
    };
    let result = run_normalize(&args).unwrap();
    let rendered = summary_table(&result).to_string();
    for label in ["Processed", "Normalized", "Skipped"] {
        assert!(rendered.contains(label), "missing {label}");
    }
}

#[test]
fn check_commands_report_each_value() {
    let phones = CheckArgs {
        values: vec!["0585108603".to_string(), "054123".to_string()],
        options: NormalizerArgs::default(),
    };
    let outcomes = run_check_phone(&phones).unwrap();
    assert_eq!(outcomes[0].result, Ok("+971585108603".to_string()));
    assert!(!outcomes[1].is_ok());
    assert_eq!(outcomes.iter().filter(|outcome| outcome.is_ok()).count(), 1);
    assert!(check_table(&outcomes).to_string().contains("FAIL"));

    let dates = CheckArgs {
        values: vec!["5th April 2004".to_string()],
        options: NormalizerArgs {
            pivot_year: Some(10),
            ..NormalizerArgs::default()
        },
    };
    let outcomes = run_check_date(&dates).unwrap();
    assert_eq!(outcomes[0].result, Ok("2004-04-05".to_string()));
    assert!(check_table(&outcomes).to_string().contains("2004-04-05"));
}

#[test]
fn cli_parses_normalize_flags() {
    let cli = Cli::try_parse_from([
        "contact-normalizer",
        "--log-data",
        "normalize",
        "contacts.csv",
        "--country-code",
        "+44",
        "--pivot-year",
        "30",
        "--dry-run",
    ])
    .unwrap();

    assert!(cli.log_data);
    let Command::Normalize(args) = cli.command else {
        panic!("expected normalize command");
    };
    assert_eq!(args.input, PathBuf::from("contacts.csv"));
    assert_eq!(args.options.country_code.as_deref(), Some("+44"));
    assert_eq!(args.options.pivot_year, Some(30));
    assert!(args.dry_run);
}

#[test]
fn cli_has_no_apply_mode_flag() {
    let result = Cli::try_parse_from([
        "contact-normalizer",
        "normalize",
        "contacts.csv",
        "--apply-all-registered",
    ]);
    assert!(result.is_err());
}

#[test]
fn config_normalizer_section_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("contacts.toml");
    fs::write(&config, "[normalizer]\napply_all_registered = true\n").unwrap();

    let args = NormalizeArgs {
        dry_run: true,
        options: NormalizerArgs {
            config: Some(config),
            ..NormalizerArgs::default()
        },
        ..normalize_args(sample_input())
    };
    let err = run_normalize(&args).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
fn cli_requires_check_values() {
    assert!(Cli::try_parse_from(["contact-normalizer", "check-phone"]).is_err());
}
