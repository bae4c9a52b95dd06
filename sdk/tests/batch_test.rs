use std::fs;
use std::path::Path;
use tempfile::TempDir;
use nestgen::{
    convert_directory, report_to_json, BatchOptions, Converter, InputStatus,
};

const USER: &str = "package models\n\ntype User struct {\n\tID string `json:\"id\" bson:\"_id\"`\n\tName string `json:\"name\" bson:\"name\"`\n}\n";
const POST: &str = "package models\n\ntype Post struct {\n\tTitle string `json:\"title\" bson:\"title\"`\n\tdraft bool\n}\n";
const DUPLICATE: &str = "type Broken struct {\n\tA string `json:\"a\" bson:\"x\"`\n\tB string `json:\"b\" bson:\"x\"`\n}\n";

fn write(dir: &Path, name: &str, content: &str) {
    if let Some(parent) = dir.join(name).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_converts_each_input() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "user.go", USER);
    write(input.path(), "post.go", POST);
    write(input.path(), "helpers.go", "package models\n\nfunc noop() {}\n");

    let options = BatchOptions::new(output.path().join("out_schemas"));
    let report = convert_directory(&Converter::default(), input.path(), &options).unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.failed(), 0);

    let user = fs::read_to_string(output.path().join("out_schemas/user.schemas.ts")).unwrap();
    assert!(user.contains("class User {"));

    match report.get(&input.path().join("post.go")) {
        Some(InputStatus::Written { struct_name, rejected, .. }) => {
            assert_eq!(struct_name, "Post");
            assert_eq!(rejected.len(), 1);
        }
        other => panic!("expected Written, got {:?}", other),
    }
}

#[test]
fn test_failures_are_isolated() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "a_broken.go", DUPLICATE);
    write(input.path(), "b_user.go", USER);
    fs::write(input.path().join("c_binary.go"), [0xff, 0xfe, 0x00]).unwrap();

    let options = BatchOptions::new(output.path());
    let report = convert_directory(&Converter::default(), input.path(), &options).unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.written(), 1);
    assert!(matches!(
        report.get(&input.path().join("a_broken.go")),
        Some(InputStatus::Failed { error }) if error.contains("defined twice")
    ));
    assert!(output.path().join("user.schemas.ts").exists());
    assert!(!output.path().join("broken.schemas.ts").exists());
}

#[test]
fn test_output_name_conflict() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "1.go", USER);
    write(input.path(), "2.go", &USER.replace("type User", "type USER"));

    let report = convert_directory(&Converter::default(), input.path(), &BatchOptions::new(output.path())).unwrap();

    assert_eq!(report.written(), 1);
    assert!(matches!(
        report.get(&input.path().join("2.go")),
        Some(InputStatus::Failed { error }) if error.contains("already claimed by struct \"User\"")
    ));
    let written = fs::read_to_string(output.path().join("user.schemas.ts")).unwrap();
    assert!(written.contains("class User {"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "user.go", USER);

    let mut options = BatchOptions::new(output.path().join("never"));
    options.dry_run = true;
    let report = convert_directory(&Converter::default(), input.path(), &options).unwrap();

    assert!(matches!(report.outcomes[0].status, InputStatus::DryRun { .. }));
    assert!(!output.path().join("never").exists());
}

#[test]
fn test_recursive_scan() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "user.go", USER);
    write(input.path(), "blog/post.go", POST);

    let flat = convert_directory(&Converter::default(), input.path(), &BatchOptions::new(output.path())).unwrap();
    assert_eq!(flat.outcomes.len(), 1);

    let mut options = BatchOptions::new(output.path());
    options.recursive = true;
    let deep = convert_directory(&Converter::default(), input.path(), &options).unwrap();
    assert_eq!(deep.written(), 2);
    assert!(output.path().join("post.schemas.ts").exists());
}

#[test]
fn test_missing_input_directory() {
    let output = TempDir::new().unwrap();
    let missing = output.path().join("nope");
    assert!(convert_directory(&Converter::default(), &missing, &BatchOptions::new(output.path())).is_err());
}

#[test]
fn test_report_to_json() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "user.go", USER);

    let report = convert_directory(&Converter::default(), input.path(), &BatchOptions::new(output.path())).unwrap();
    let json = report_to_json(&report).unwrap();
    assert!(json.contains("\"status\": \"written\""));
    assert!(json.contains("\"struct_name\": \"User\""));
}

#[cfg(unix)]
#[test]
fn test_symlinked_inputs_are_read() {
    let source = TempDir::new().unwrap();
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(source.path(), "user.go", USER);
    std::os::unix::fs::symlink(source.path().join("user.go"), input.path().join("user.go")).unwrap();
    std::os::unix::fs::symlink(source.path().join("gone.go"), input.path().join("dangling.go")).unwrap();

    let report = convert_directory(&Converter::default(), input.path(), &BatchOptions::new(output.path())).unwrap();

    assert_eq!(report.outcomes.len(), 2);
    assert!(matches!(
        report.get(&input.path().join("user.go")),
        Some(InputStatus::Written { struct_name, .. }) if struct_name == "User"
    ));
    assert!(matches!(
        report.get(&input.path().join("dangling.go")),
        Some(InputStatus::Failed { .. })
    ));
    assert!(output.path().join("user.schemas.ts").exists());
}
