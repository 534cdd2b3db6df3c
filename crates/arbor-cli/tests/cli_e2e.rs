//! End-to-end tests driving the CLI pipeline over temporary files.

use std::fs;

use tempfile::tempdir;

use arbor_cli::Args;

fn args(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        links: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_nested_tree() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("tree.json");
    let output_path = temp_dir.path().join("layout.json");

    fs::write(
        &input_path,
        r#"{"id": "root", "children": [{"id": "a"}, {"id": "b"}, {"id": "c"}]}"#,
    )
    .unwrap();

    arbor_cli::run(&args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    ))
    .expect("pipeline succeeds");

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();

    assert_eq!(document["root"], "root");
    assert_eq!(document["deep"], 2);
    assert_eq!(document["size"], 3.0);
    assert!(document.get("links").is_none());

    let nodes = document["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 4);

    let root = nodes.iter().find(|n| n["id"] == "root").unwrap();
    assert_eq!(root["left"], 0.5);
    assert_eq!(root["top"], 1.5);
    assert!(root.get("parent").is_none());

    let b = nodes.iter().find(|n| n["id"] == "b").unwrap();
    assert_eq!(b["left"], 1.5);
    assert_eq!(b["top"], 1.5);
    assert_eq!(b["parent"], "root");
}

#[test]
fn e2e_flat_records_match_the_nested_form() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let nested_input = temp_dir.path().join("nested.json");
    let nested_output = temp_dir.path().join("nested_layout.json");
    fs::write(
        &nested_input,
        r#"{"id": "root", "children": [{"id": "a", "children": [{"id": "a1"}]}, {"id": "b"}]}"#,
    )
    .unwrap();

    let flat_input = temp_dir.path().join("flat.json");
    let flat_output = temp_dir.path().join("flat_layout.json");
    fs::write(
        &flat_input,
        r#"[
            {"id": "root"},
            {"id": "a", "parent": "root"},
            {"id": "a1", "parent": "a"},
            {"id": "b", "parent": "root"}
        ]"#,
    )
    .unwrap();

    arbor_cli::run(&args(
        &nested_input.to_string_lossy(),
        &nested_output.to_string_lossy(),
    ))
    .expect("nested pipeline succeeds");
    arbor_cli::run(&args(
        &flat_input.to_string_lossy(),
        &flat_output.to_string_lossy(),
    ))
    .expect("flat pipeline succeeds");

    // The same tree through either shape yields the same document.
    let nested: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&nested_output).unwrap()).unwrap();
    let flat: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&flat_output).unwrap()).unwrap();
    assert_eq!(nested, flat);
}

#[test]
fn e2e_links_and_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("tree.json");
    let output_path = temp_dir.path().join("layout.json");
    let config_path = temp_dir.path().join("config.toml");

    fs::write(
        &input_path,
        r#"{"id": "root", "children": [{"id": "a"}]}"#,
    )
    .unwrap();
    fs::write(
        &config_path,
        r#"
        [output]
        pretty = true
        scale = 100.0
        link_samples = 4
        "#,
    )
    .unwrap();

    let mut run_args = args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    );
    run_args.links = true;
    run_args.config = Some(config_path.to_string_lossy().to_string());

    arbor_cli::run(&run_args).expect("pipeline succeeds");

    let raw = fs::read_to_string(&output_path).unwrap();
    assert!(raw.contains('\n'), "pretty output has newlines");

    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(document["size"], 100.0);

    let links = document["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["source"], "root");
    assert_eq!(links[0]["target"], "a");

    let points = links[0]["points"].as_array().unwrap();
    assert_eq!(points.len(), 4);
    // Scaled endpoints: root center to child center.
    assert_eq!(points[0][0], 50.0);
    assert_eq!(points[0][1], 50.0);
    assert_eq!(points[3][0], 150.0);
    assert_eq!(points[3][1], 50.0);
}

#[test]
fn e2e_duplicate_ids_fail() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("tree.json");
    let output_path = temp_dir.path().join("layout.json");

    fs::write(
        &input_path,
        r#"{"id": "root", "children": [{"id": "x"}, {"id": "x"}]}"#,
    )
    .unwrap();

    let result = arbor_cli::run(&args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    ));

    assert!(result.is_err());
    assert!(!output_path.exists(), "no partial output is written");
}

#[test]
fn e2e_malformed_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("tree.json");
    let output_path = temp_dir.path().join("layout.json");

    fs::write(&input_path, r#"{"name": "no id field"}"#).unwrap();

    let result = arbor_cli::run(&args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    ));

    assert!(result.is_err());
}
