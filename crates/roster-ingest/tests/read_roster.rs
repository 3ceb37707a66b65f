use std::io::Write;

use roster_ingest::read_roster;

#[test]
fn reads_roster_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "First Name,Last Name,Email\nAvery,Reed,avery@example.com\nBlair,Soto,blair@example.com\n"
    )
    .unwrap();

    let table = read_roster(file.path()).unwrap();
    assert_eq!(table.headers, vec!["First Name", "Last Name", "Email"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.header_index("Email"), Some(2));
    assert_eq!(table.header_index("email"), None);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_roster(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, roster_ingest::IngestError::Io(_)));
}
