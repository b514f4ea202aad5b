//! Behaviour-driven step definitions driving the validate CLI scenarios.

use super::helpers::{TWO_RECORD_DOCUMENT, write_document};
use super::*;
use camino::Utf8PathBuf;
use chorusmap_data::TableError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

use crate::validate::run_validate_with;

const UNKNOWN_ICON_DOCUMENT: &str = r#"[
    {
        "Project name": "Cephalopod chorus",
        "Organization/Project lead": null,
        "Target species": "Octopuses",
        "Country": "Portugal",
        "Region/Location": "Azores",
        "Latitude": null,
        "Longitude": null,
        "Contact": null,
        "Website": null,
        "Paper": null,
        "Species Icon": "octopus"
    }
]"#;

#[derive(Debug)]
struct ValidateWorld {
    _tmp: TempDir,
    doc_path: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ValidateWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let doc_path =
            Utf8PathBuf::from_path_buf(tmp.path().join("projects.json")).expect("utf-8 workspace");

        Self {
            _tmp: tmp,
            doc_path,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }
}

#[fixture]
fn world() -> ValidateWorld {
    ValidateWorld::new()
}

#[given("a projects document with one located and one unlocated record")]
fn valid_document_exists(#[from(world)] world: &ValidateWorld) {
    write_document(&world.doc_path, TWO_RECORD_DOCUMENT);
}

#[given("a projects document whose species icon is not in the catalogue")]
fn document_with_unknown_icon(#[from(world)] world: &ValidateWorld) {
    write_document(&world.doc_path, UNKNOWN_ICON_DOCUMENT);
}

#[given("no document exists at the table path")]
fn no_document_exists(#[from(world)] world: &ValidateWorld) {
    assert!(!world.doc_path.exists());
}

#[when("I run the validate command")]
fn run_validate_command(#[from(world)] world: &ValidateWorld) {
    let invocation = vec![
        "chorusmap".to_string(),
        "validate".to_string(),
        format!("--{ARG_TABLE}"),
        world.doc_path.as_str().to_string(),
    ];
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Validate(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_validate_with(args, &mut *buffer)
        }
        other => panic!("expected validate command, found {other:?}"),
    });

    world.result.replace(Some(outcome));
}

#[then("the summary reports two records and one marker")]
fn summary_reports_counts(#[from(world)] world: &ValidateWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    assert_eq!(stdout, format!("{}: 2 records, 1 markers\n", world.doc_path));
}

#[then("validation fails naming the offending record")]
fn validation_fails_naming_record(#[from(world)] world: &ValidateWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::Table(TableError::Record { index, name, .. }) => {
            assert_eq!(*index, 0);
            assert_eq!(name, "Cephalopod chorus");
        }
        other => panic!("expected a record error, found {other:?}"),
    }
    assert!(error.to_string().contains("octopus"));
}

#[then("validation fails before reading the table")]
fn validation_fails_for_missing_path(#[from(world)] world: &ValidateWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(*field, ARG_TABLE);
            assert_eq!(path, &world.doc_path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_validate_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/validate_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ValidateWorld) {
            let _ = world;
        }
    };
}

register_validate_scenario!(validate_happy_path, "summarising a well-formed document");
register_validate_scenario!(validate_unknown_icon, "rejecting an unknown species icon");
register_validate_scenario!(validate_missing_document, "rejecting a missing document path");
