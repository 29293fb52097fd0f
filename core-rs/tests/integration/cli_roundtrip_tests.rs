//! Integration tests for the vqb CLI
//!
//! Runs the compiled binary against configuration files on disk and checks
//! the emitted SPARQL and metadata answers.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const ONTOLOGY_YAML: &str = r#"
classes:
  "http://ex.org/onto#Person":
    defaultLabelProperty: "http://ex.org/onto#name"
properties:
  "http://ex.org/onto#name":
    multilingual: true
    optionalEnabled: true
"#;

const QUERY_YAML: &str = r#"
criteria:
  - class: "http://ex.org/onto#Person"
    viewVariable: true
"#;

fn vqb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vqb"))
}

#[test]
fn test_compile_prints_sparql() {
    let dir = TempDir::new().unwrap();
    let ontology = dir.path().join("ontology.yaml");
    let query = dir.path().join("query.yaml");
    fs::write(&ontology, ONTOLOGY_YAML).unwrap();
    fs::write(&query, QUERY_YAML).unwrap();

    let output = vqb()
        .args(["compile", "--ontology"])
        .arg(&ontology)
        .arg("--query")
        .arg(&query)
        .output()
        .expect("Failed to run vqb");

    assert!(
        output.status.success(),
        "vqb compile failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SELECT DISTINCT ?Person_1_label"));
    assert!(stdout.contains("OPTIONAL"));
}

#[test]
fn test_compile_json_format() {
    let dir = TempDir::new().unwrap();
    let ontology = dir.path().join("ontology.yaml");
    let query = dir.path().join("query.yaml");
    fs::write(&ontology, ONTOLOGY_YAML).unwrap();
    fs::write(&query, QUERY_YAML).unwrap();

    let output = vqb()
        .args(["compile", "--format", "json", "--ontology"])
        .arg(&ontology)
        .arg("--query")
        .arg(&query)
        .output()
        .expect("Failed to run vqb");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output is valid JSON");
    assert_eq!(parsed["projection"][0], "Person_1_label");
    assert!(parsed["sparql"].as_str().unwrap().contains("SELECT"));
}

#[test]
fn test_inspect_reports_metadata() {
    let dir = TempDir::new().unwrap();
    let ontology = dir.path().join("ontology.yaml");
    fs::write(&ontology, ONTOLOGY_YAML).unwrap();

    let output = vqb()
        .args(["inspect", "--ontology"])
        .arg(&ontology)
        .arg("http://ex.org/onto#Person")
        .output()
        .expect("Failed to run vqb");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://ex.org/onto#name"));
}

#[test]
fn test_parse_path_accepts_sequence() {
    let output = vqb()
        .args(["parse-path", "<http://ex.org/p1>/<http://ex.org/p2>"])
        .output()
        .expect("Failed to run vqb");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sequence"));
}

#[test]
fn test_parse_path_rejects_garbage() {
    let output = vqb()
        .args(["parse-path", "<http://unterminated"])
        .output()
        .expect("Failed to run vqb");

    assert!(!output.status.success());
}

#[test]
fn test_compile_fails_cleanly_on_missing_file() {
    let output = vqb()
        .args([
            "compile",
            "--ontology",
            "/nonexistent/ontology.yaml",
            "--query",
            "/nonexistent/query.yaml",
        ])
        .output()
        .expect("Failed to run vqb");

    assert!(!output.status.success());
}
