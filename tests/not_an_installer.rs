use std::io::Cursor;

use innometa::Inno;
use innometa::error::InnoError;

#[test]
fn empty_input_is_rejected() {
    let err = Inno::new(Cursor::new(Vec::new())).unwrap_err();
    assert!(matches!(err, InnoError::NotInnoFile));
}

#[test]
fn arbitrary_non_installer_bytes_are_rejected() {
    let data = vec![0u8; 4096];
    let err = Inno::new(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, InnoError::NotInnoFile));
}
