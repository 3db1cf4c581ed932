use bytes::Bytes;

pub const CONFLICT_HEAD_MARKER: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_END_MARKER: &str = ">>>>>>>";

/// Both versions of a conflicting file, head first, between conflict markers
///
/// A side that deleted the file contributes nothing. Each version is terminated with a
/// newline so the markers always start their own line.
pub fn conflict_content(head: Option<&[u8]>, target: Option<&[u8]>) -> Bytes {
    let mut content = Vec::new();

    content.extend_from_slice(CONFLICT_HEAD_MARKER.as_bytes());
    push_version(&mut content, head);
    content.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    push_version(&mut content, target);
    content.extend_from_slice(CONFLICT_END_MARKER.as_bytes());

    Bytes::from(content)
}

fn push_version(content: &mut Vec<u8>, version: Option<&[u8]>) {
    let Some(version) = version.filter(|version| !version.is_empty()) else {
        return;
    };

    content.extend_from_slice(version);
    if !version.ends_with(b"\n") {
        content.push(b'\n');
    }
}
