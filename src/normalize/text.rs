use std::borrow::Cow;

/// Undo Latin-1/UTF-8 mojibake ("AtlÃ©tico" -> "Atlético").
///
/// Each char is taken as one byte, percent-encoded and decoded back as UTF-8.
/// Text that cannot be read that way (a char above U+00FF, or bytes that are
/// not valid UTF-8) is returned unchanged. Valid text that happens to decode
/// will also be rewritten; there is no way to tell the two apart.
pub fn repair_mangled_text(value: &str) -> Cow<'_, str> {
    if value.is_ascii() {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() * 3);
    for ch in value.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Cow::Borrowed(value);
        }
        encoded.push_str(&format!("%{:02x}", code));
    }

    match urlencoding::decode(&encoded) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Borrowed(value),
    }
}
