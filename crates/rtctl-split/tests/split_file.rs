//! File-level splitter behavior

use rtctl_split::split_file;
use rtctl_test_utils::{aggregate_file, role_template, unscoped_role_template, SAMPLE_HEADER};

use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::fs;

#[test]
fn splits_into_one_file_per_scope() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roletemplates.yaml");
    let out_dir = dir.path().join("roletemplates");
    fs::write(
        &input,
        aggregate_file(&[
            role_template("global-view-users", "global"),
            role_template("global-manage-users", "global"),
            role_template("namespace-view-secrets", "namespace"),
            role_template("cluster-view-nodes", "cluster"),
        ]),
    )
    .unwrap();

    let report = split_file(&input, &out_dir).unwrap();

    assert_eq!(report.counts["platform"], 2);
    assert_eq!(report.counts["namespace"], 1);
    assert_eq!(report.counts["cluster"], 1);
    assert_eq!(report.total(), 4);
    assert_eq!(report.dropped, 0);

    for scope in ["platform", "namespace", "cluster"] {
        let path = out_dir.join(format!("{scope}-roletemplates.yaml"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(SAMPLE_HEADER), "{scope} file keeps header");
    }
}

#[test]
fn global_documents_land_renamed_in_the_platform_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roletemplates.yaml");
    let out_dir = dir.path().join("out");
    fs::write(
        &input,
        aggregate_file(&[role_template("global-view-users", "global")]),
    )
    .unwrap();

    split_file(&input, &out_dir).unwrap();

    let content = fs::read_to_string(out_dir.join("platform-roletemplates.yaml")).unwrap();
    assert!(content.contains("iam.theriseunion.io/scope: platform"));
    assert!(content.contains("name: platform-view-users"));
    assert!(!content.contains("scope: global"));
    assert!(!out_dir.join("global-roletemplates.yaml").exists());
}

#[test]
fn unlabeled_documents_appear_in_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roletemplates.yaml");
    let out_dir = dir.path().join("out");
    fs::write(
        &input,
        aggregate_file(&[
            role_template("cluster-view-nodes", "cluster"),
            unscoped_role_template("mystery"),
        ]),
    )
    .unwrap();

    let report = split_file(&input, &out_dir).unwrap();

    assert_eq!(report.dropped, 1);
    assert_eq!(report.total(), 1);
    for entry in fs::read_dir(&out_dir).unwrap() {
        let content = fs::read_to_string(entry.unwrap().path()).unwrap();
        assert!(!content.contains("name: mystery"));
    }
}

#[test]
fn non_global_documents_survive_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roletemplates.yaml");
    let out_dir = dir.path().join("out");
    let doc = role_template("cluster-view-nodes", "cluster");
    fs::write(&input, aggregate_file(&[doc.clone()])).unwrap();

    split_file(&input, &out_dir).unwrap();

    let content = fs::read_to_string(out_dir.join("cluster-roletemplates.yaml")).unwrap();
    assert_eq!(content, format!("{SAMPLE_HEADER}---\n{doc}"));
}

#[test]
fn output_files_are_valid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roletemplates.yaml");
    let out_dir = dir.path().join("out");
    fs::write(
        &input,
        aggregate_file(&[
            role_template("global-view-users", "global"),
            role_template("workspace-view-projects", "workspace"),
        ]),
    )
    .unwrap();

    split_file(&input, &out_dir).unwrap();

    for entry in fs::read_dir(&out_dir).unwrap() {
        let content = fs::read_to_string(entry.unwrap().path()).unwrap();
        for doc in serde_yaml::Deserializer::from_str(&content) {
            serde_yaml::Value::deserialize(doc).expect("output parses");
        }
    }
}

#[test]
fn missing_input_is_a_fatal_read_error() {
    let err = split_file("no/such/input.yaml", "out").unwrap_err();
    assert!(err.to_string().contains("no/such/input.yaml"));
}

#[test]
fn rerunning_the_split_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("roletemplates.yaml");
    let out_dir = dir.path().join("out");
    fs::write(
        &input,
        aggregate_file(&[role_template("cluster-view-nodes", "cluster")]),
    )
    .unwrap();

    split_file(&input, &out_dir).unwrap();
    let first = fs::read_to_string(out_dir.join("cluster-roletemplates.yaml")).unwrap();

    split_file(&input, &out_dir).unwrap();
    let second = fs::read_to_string(out_dir.join("cluster-roletemplates.yaml")).unwrap();
    assert_eq!(second, first);
}
