/* JSON number grammar checks over a whole token. */

/// `-?(0|[1-9][0-9]*)`
pub fn is_integer(token: &str) -> bool {
    let b = token.as_bytes();
    let i = usize::from(b.first() == Some(&b'-'));
    scan_int_part(b, i) == Some(b.len())
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
pub fn is_number(token: &str) -> bool {
    let b = token.as_bytes();
    let i = usize::from(b.first() == Some(&b'-'));
    let Some(mut i) = scan_int_part(b, i) else {
        return false;
    };
    if b.get(i) == Some(&b'.') {
        match scan_digits(b, i + 1) {
            Some(j) => i = j,
            None => return false,
        }
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        match scan_digits(b, i) {
            Some(j) => i = j,
            None => return false,
        }
    }
    i == b.len()
}

/// Whether a byte ends an unquoted token.
pub fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t' | b'\n' | b'\r' | b'{' | b'}' | b'[' | b']' | b',' | b':' | b'"'
    )
}

fn scan_int_part(b: &[u8], i: usize) -> Option<usize> {
    match b.get(i) {
        Some(b'0') => Some(i + 1),
        Some(b'1'..=b'9') => scan_digits(b, i),
        _ => None,
    }
}

fn scan_digits(b: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    while matches!(b.get(i), Some(b'0'..=b'9')) {
        i += 1;
    }
    (i > start).then_some(i)
}
