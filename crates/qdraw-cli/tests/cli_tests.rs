//! CLI command parsing and end-to-end tests.
//!
//! Argument parsing is checked via clap `try_parse_from` on a mirror of the
//! CLI structs; the commands themselves run through the built binary.

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand, ValueEnum};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    enum TestFormat {
        Svg,
        Json,
    }

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "qdraw")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Render {
            #[arg(short, long)]
            input: String,
            #[arg(short, long)]
            output: Option<String>,
            #[arg(long, default_value = "0.6")]
            scale: f64,
            #[arg(long)]
            no_cluster: bool,
            #[arg(long)]
            no_labels: bool,
            #[arg(long, conflicts_with = "style_file")]
            style: Option<String>,
            #[arg(long)]
            style_file: Option<String>,
            #[arg(long)]
            symbols_file: Option<String>,
            #[arg(short, long, value_enum, default_value = "svg")]
            format: TestFormat,
        },
        Styles {
            #[arg(long)]
            styles_file: Option<String>,
        },
        Version,
    }

    #[test]
    fn test_parse_render_minimal() {
        let cli = TestCli::try_parse_from(["qdraw", "render", "-i", "bell.json"]).unwrap();
        match cli.command {
            TestCommands::Render {
                input,
                output,
                scale,
                no_cluster,
                no_labels,
                style,
                style_file,
                symbols_file,
                format,
            } => {
                assert_eq!(input, "bell.json");
                assert!(output.is_none());
                assert!((scale - 0.6).abs() < f64::EPSILON);
                assert!(!no_cluster);
                assert!(!no_labels);
                assert!(style.is_none());
                assert!(style_file.is_none());
                assert!(symbols_file.is_none());
                assert_eq!(format, TestFormat::Svg);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_parse_render_all_options() {
        let cli = TestCli::try_parse_from([
            "qdraw",
            "render",
            "-i",
            "qft.json",
            "-o",
            "qft.svg",
            "--scale",
            "1.2",
            "--no-cluster",
            "--no-labels",
            "--style",
            "garnacha",
            "--symbols-file",
            "symbols.yaml",
            "-f",
            "json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Render {
                output,
                scale,
                no_cluster,
                no_labels,
                style,
                symbols_file,
                format,
                ..
            } => {
                assert_eq!(output.as_deref(), Some("qft.svg"));
                assert!((scale - 1.2).abs() < f64::EPSILON);
                assert!(no_cluster);
                assert!(no_labels);
                assert_eq!(style.as_deref(), Some("garnacha"));
                assert_eq!(symbols_file.as_deref(), Some("symbols.yaml"));
                assert_eq!(format, TestFormat::Json);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_parse_render_missing_input_fails() {
        assert!(TestCli::try_parse_from(["qdraw", "render"]).is_err());
    }

    #[test]
    fn test_parse_style_and_style_file_conflict() {
        let result = TestCli::try_parse_from([
            "qdraw",
            "render",
            "-i",
            "bell.json",
            "--style",
            "default",
            "--style-file",
            "mine.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_format_fails() {
        let result =
            TestCli::try_parse_from(["qdraw", "render", "-i", "bell.json", "-f", "png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_styles() {
        let cli = TestCli::try_parse_from(["qdraw", "styles"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Styles { styles_file: None }));
    }

    #[test]
    fn test_parse_version_with_verbosity() {
        let cli = TestCli::try_parse_from(["qdraw", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, TestCommands::Version));
    }
}

// ============================================================================
// Binary end-to-end
// ============================================================================

mod binary {
    use std::path::{Path, PathBuf};
    use std::process::{Command, Output};

    use qdraw_ir::Circuit;

    fn qdraw(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_qdraw"))
            .args(args)
            .output()
            .expect("failed to run qdraw")
    }

    fn write_bell(dir: &Path) -> PathBuf {
        let path = dir.join("bell.json");
        std::fs::write(&path, Circuit::bell().unwrap().to_json().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_render_svg_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_bell(dir.path());

        let out = qdraw(&["render", "-i", input.to_str().unwrap()]);
        assert!(out.status.success());
        let stdout = String::from_utf8(out.stdout).unwrap();
        assert!(stdout.starts_with("<svg"));
        assert!(stdout.contains("|q_1⟩"));
    }

    #[test]
    fn test_render_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_bell(dir.path());
        let output = dir.path().join("bell.figure.json");

        let out = qdraw(&[
            "render",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--format",
            "json",
            "--style",
            "garnacha",
        ]);
        assert!(out.status.success());

        let figure: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(figure["facecolor"], "#5e2129");
        assert!(!figure["primitives"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_with_style_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_bell(dir.path());
        let style = dir.path().join("mine.yaml");
        std::fs::write(&style, "facecolor: \"#123456\"\n").unwrap();

        let out = qdraw(&[
            "render",
            "-i",
            input.to_str().unwrap(),
            "--style-file",
            style.to_str().unwrap(),
        ]);
        assert!(out.status.success());
        assert!(String::from_utf8(out.stdout).unwrap().contains("#123456"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let out = qdraw(&["render", "-i", missing.to_str().unwrap()]);
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8(out.stderr).unwrap().contains("File not found"));
    }

    #[test]
    fn test_invalid_circuit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(
            &input,
            r#"{"num_qubits": 1, "instructions": [{"kind": {"Gate": {"kind": {"Standard": "H"}}}, "targets": [4]}]}"#,
        )
        .unwrap();

        let out = qdraw(&["render", "-i", input.to_str().unwrap()]);
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8(out.stderr).unwrap().contains("Parse error"));
    }

    #[test]
    fn test_styles_lists_builtin_styles() {
        let out = qdraw(&["styles"]);
        assert!(out.status.success());
        let stdout = String::from_utf8(out.stdout).unwrap();
        for name in ["default", "garnacha", "color-blind", "cachirulo"] {
            assert!(stdout.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_version() {
        let out = qdraw(&["version"]);
        assert!(out.status.success());
        assert!(String::from_utf8(out.stdout).unwrap().contains("qdraw"));
    }
}
