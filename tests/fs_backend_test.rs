use docstash::store::backend::StorageBackend;
use docstash::store::fs_backend::FsBackend;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Put
    backend
        .put("doc-1", &json!({"document_id": "doc-1"}))
        .unwrap();

    // 2. Get
    let value = backend.get("doc-1").unwrap();
    assert_eq!(value, Some(json!({"document_id": "doc-1"})));

    // 3. Delete
    backend.delete("doc-1").unwrap();
    assert_eq!(backend.get("doc-1").unwrap(), None);
}

#[test]
fn test_fs_backend_missing_file_reads_empty() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get("nothing").unwrap(), None);
    assert!(backend.list().unwrap().is_empty());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.put("doc-1", &json!({"k": "v"})).unwrap();

    // Verify the collection file exists
    assert!(backend.data_file().exists());

    // Verify NO .tmp files are left behind
    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_list_ascending_by_id() {
    let (_dir, backend) = setup();

    backend.put("c", &json!({"document_id": "c"})).unwrap();
    backend.put("a", &json!({"document_id": "a"})).unwrap();
    backend.put("b", &json!({"document_id": "b"})).unwrap();

    let ids: Vec<String> = backend
        .list()
        .unwrap()
        .into_iter()
        .map(|value| value["document_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_fs_backend_put_replaces_existing() {
    let (_dir, backend) = setup();

    backend.put("doc-1", &json!({"v": 1})).unwrap();
    backend.put("doc-1", &json!({"v": 2})).unwrap();

    assert_eq!(backend.get("doc-1").unwrap(), Some(json!({"v": 2})));
    assert_eq!(backend.list().unwrap().len(), 1);
}

#[test]
fn test_fs_backend_delete_absent_is_noop() {
    let (_dir, backend) = setup();

    backend.delete("never-there").unwrap();
    assert!(backend.list().unwrap().is_empty());
}

#[test]
fn test_fs_backend_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    let backend = FsBackend::new(dir.path());
    backend.put("doc-1", &json!({"k": "v"})).unwrap();
    drop(backend);

    let reopened = FsBackend::new(dir.path());
    assert_eq!(reopened.get("doc-1").unwrap(), Some(json!({"k": "v"})));
}

#[test]
fn test_fs_backend_ignores_unrelated_files() {
    let (dir, backend) = setup();

    backend.put("doc-1", &json!({"k": "v"})).unwrap();

    // Junk next to the collection file is not part of the collection
    fs::write(dir.path().join("junk.txt"), "ignore me").unwrap();

    assert_eq!(backend.list().unwrap().len(), 1);
}

#[test]
fn test_fs_backend_creates_directory_on_first_write() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deeply").join("nested");
    let backend = FsBackend::new(&nested);

    backend.put("doc-1", &json!({"k": "v"})).unwrap();

    assert!(nested.join("documents.json").exists());
}

#[test]
fn test_fs_backend_ids_with_path_hostile_characters() {
    let (_dir, backend) = setup();

    // Ids are opaque strings; they must work as keys even when they would
    // not work as filenames
    let id = "weird/../id with spaces:and#symbols";
    backend.put(id, &json!({"k": "v"})).unwrap();

    assert_eq!(backend.get(id).unwrap(), Some(json!({"k": "v"})));
    assert_eq!(backend.list().unwrap().len(), 1);

    backend.delete(id).unwrap();
    assert_eq!(backend.get(id).unwrap(), None);
}
