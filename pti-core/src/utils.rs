//! Shared string and path helpers for generated configuration.

/// Convert a package name to camelCase (e.g., "@scope/pkg-name" -> "scopePkgName")
///
/// Every run of non-alphanumeric characters is a word boundary.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    for part in s.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if result.is_empty() {
            result.extend(first.to_lowercase());
        } else {
            result.extend(first.to_uppercase());
        }
        result.push_str(chars.as_str());
    }
    result
}

/// Join path segments with `/` and normalize them the way Node's
/// `path.join` does: `.` and empty segments vanish, `..` consumes the
/// previous named segment.
///
/// Generated configs are consumed by Node tooling on every platform, so
/// the separator is always a forward slash.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in segments.iter().flat_map(|s| s.as_ref().split('/')) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if *last != ".." => {
                    parts.pop();
                }
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
