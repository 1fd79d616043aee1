use crate::compat::{String, Vec};

/// Remove dot-segments and empty segments from a path.
///
/// `.` and `..` only match whole segments; `..` above the root is dropped.
/// The result always starts with `/` and ends with `/` when the last
/// segment named a directory (a trailing slash, `.` or `..`).
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let mut directory = false;

    let mut pieces = path.split('/').peekable();
    while let Some(segment) = pieces.next() {
        match segment {
            "" => {
                if pieces.peek().is_none() {
                    directory = true;
                }
            }
            "." => directory = true,
            ".." => {
                segments.pop();
                directory = true;
            }
            _ => {
                segments.push(segment);
                directory = false;
            }
        }
    }

    let mut result = String::with_capacity(path.len() + 1);
    for segment in &segments {
        result.push('/');
        result.push_str(segment);
    }
    if directory || segments.is_empty() {
        result.push('/');
    }
    result
}

/// The directory part of a path: everything up to and including the last
/// `/`, or nothing when there is no `/`.
pub fn directory_of(path: &str) -> &str {
    path.rfind('/').map_or("", |pos| &path[..=pos])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_segments() {
        assert_eq!(normalize_path("/a/b/../../c"), "/c");
        assert_eq!(normalize_path("/a/./b/."), "/a/b/");
        assert_eq!(normalize_path("/a/b/.."), "/a/");
        assert_eq!(normalize_path("/../../c"), "/c");
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(normalize_path("//a///b//"), "/a/b/");
        assert_eq!(normalize_path("/a//"), "/a/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_relative_input_becomes_absolute() {
        assert_eq!(normalize_path("a/b"), "/a/b");
        assert_eq!(normalize_path("."), "/");
        assert_eq!(normalize_path(".."), "/");
    }

    #[test]
    fn test_dots_inside_segments_are_data() {
        assert_eq!(normalize_path("/whiz./bang../..."), "/whiz./bang../...");
        assert_eq!(normalize_path("/.a/..b"), "/.a/..b");
    }

    #[test]
    fn test_idempotent() {
        for path in ["/a/b/../c/./", "a//b/..", "/./../x/y/."] {
            let once = normalize_path(path);
            assert_eq!(normalize_path(&once), once);
        }
    }

    #[test]
    fn test_directory_of() {
        assert_eq!(directory_of("/a/b/c"), "/a/b/");
        assert_eq!(directory_of("/"), "/");
        assert_eq!(directory_of("file"), "");
    }
}
