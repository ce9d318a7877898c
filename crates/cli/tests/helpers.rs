use std::fs;

use parrotng::commands::{collect_candidates, load_config_or_default};
use parrotng::{canonicalize_or_current, sha256_file};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_relative_path() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current("nested").expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn sha256_file_hashes_contents() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("abc.swf");
    fs::write(&path, b"abc").unwrap();
    assert_eq!(
        sha256_file(&path).unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert!(sha256_file(&tmp.path().join("missing.swf")).is_err());
}

#[test]
fn collect_candidates_filters_directories_by_extension() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("b.swf"), b"FWS").unwrap();
    fs::write(root.join("a.SWF"), b"FWS").unwrap();
    fs::write(root.join("notes.txt"), b"notes").unwrap();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("c.swf"), b"FWS").unwrap();

    let exts = vec!["swf".to_string()];
    let input = vec![root.to_string_lossy().to_string()];

    let flat = collect_candidates(&input, &exts, false).unwrap();
    let names: Vec<String> =
        flat.iter().map(|p| p.file_name().unwrap().to_string_lossy().to_string()).collect();
    assert_eq!(names, vec!["a.SWF", "b.swf"]);

    let deep = collect_candidates(&input, &exts, true).unwrap();
    assert_eq!(deep.len(), 3);
    assert!(deep.iter().any(|p| p.ends_with("sub/c.swf")));
}

#[test]
fn collect_candidates_takes_named_files_regardless_of_extension() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("movie.bin");
    fs::write(&file, b"FWS").unwrap();
    let found =
        collect_candidates(&[file.to_string_lossy().to_string()], &["swf".to_string()], false)
            .unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn collect_candidates_rejects_missing_inputs() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.swf").to_string_lossy().to_string();
    let err = collect_candidates(&[missing], &["swf".to_string()], false).unwrap_err();
    assert!(err.to_string().contains("Input does not exist"));
}

#[test]
fn load_config_or_default_without_path_uses_defaults() {
    let config = load_config_or_default(None).unwrap();
    assert_eq!(config.disassembler.backend, "swfdump");
}
