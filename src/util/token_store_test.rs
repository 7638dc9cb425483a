use super::*;

// =============================================================
// Token slot contract (process-local cell in native builds)
// =============================================================

#[test]
fn empty_slot_reads_none() {
    clear();
    assert_eq!(read(), None);
}

#[test]
fn write_then_read_round_trips() {
    write("abc123");
    assert_eq!(read(), Some("abc123".to_owned()));
    clear();
}

#[test]
fn clear_removes_token() {
    write("abc123");
    clear();
    assert_eq!(read(), None);
}

#[test]
fn clear_is_idempotent() {
    write("abc123");
    clear();
    clear();
    assert_eq!(read(), None);
}

#[test]
fn empty_string_reads_as_absent() {
    write("");
    assert_eq!(read(), None);
    clear();
}
