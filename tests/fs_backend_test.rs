use std::fs;
use tempfile::TempDir;
use visadesk::model::Client;
use visadesk::store::fs_backend::FsBackend;
use visadesk::store::{AdminStore, CollectionFile, StorageBackend};

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn basic_read_write_round_trip() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read_file(CollectionFile::Clients).unwrap(), None);

    backend
        .write_file(CollectionFile::Clients, r#"[{"hello":"world"}]"#)
        .unwrap();
    assert_eq!(
        backend.read_file(CollectionFile::Clients).unwrap(),
        Some(r#"[{"hello":"world"}]"#.to_string())
    );
}

#[test]
fn writes_land_in_the_named_file_with_no_tmp_leftovers() {
    let (dir, backend) = setup();

    backend.write_file(CollectionFile::Manifest, "[]").unwrap();

    let expected = dir.path().join("manifest.json");
    assert!(expected.exists());
    assert_eq!(fs::read_to_string(&expected).unwrap(), "[]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn data_dir_is_created_on_first_write() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deep").join("data");
    let backend = FsBackend::new(nested.clone());

    backend.write_file(CollectionFile::Logs, "[]").unwrap();
    assert!(nested.join("logs.json").exists());
}

#[test]
fn corrupt_file_reads_as_empty_collection() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("clients.json"), "][ garbage").unwrap();

    let store = AdminStore::new(backend);
    let clients: Vec<Client> = store.load_records(CollectionFile::Clients).unwrap();
    assert!(clients.is_empty());
}

#[test]
fn each_collection_owns_its_own_file() {
    let (dir, backend) = setup();
    backend.write_file(CollectionFile::Services, "[1]").unwrap();
    backend.write_file(CollectionFile::Emails, "[2]").unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("services.json")).unwrap(),
        "[1]"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("emails.json")).unwrap(),
        "[2]"
    );
    assert!(!dir.path().join("manifest.json").exists());
}
