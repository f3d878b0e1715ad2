//! Path algebra for the namespace.
//!
//! Paths are absolute, `/`-separated, and stored without a trailing slash
//! — except the root, which is the single path `"/"`. The root is its own
//! container and has no parent.

/// The root collection's path.
pub const ROOT: &str = "/";

/// Normalize to absolute form: leading slash, collapsed separators, no
/// trailing slash (root excepted).
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push('/');
    for component in path.split('/').filter(|c| !c.is_empty()) {
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(component);
    }
    out
}

/// Append `name` to a container path.
///
/// `merge("/", "a") == "/a"`, `merge("/a", "b") == "/a/b"`. A trailing
/// slash on `name` (the child-record convention for collections) is
/// dropped.
pub fn merge(container: &str, name: &str) -> String {
    let container = normalize(container);
    let name = name.trim_matches('/');
    if name.is_empty() {
        return container;
    }
    if container == ROOT {
        format!("/{name}")
    } else {
        format!("{container}/{name}")
    }
}

/// Split into `(parent, basename)`. Returns `None` for the root, which
/// has no parent.
pub fn split(path: &str) -> Option<(String, String)> {
    let path = normalize(path);
    if path == ROOT {
        return None;
    }
    let cut = path.rfind('/').expect("normalized path has a slash");
    let parent = if cut == 0 {
        ROOT.to_string()
    } else {
        path[..cut].to_string()
    };
    Some((parent, path[cut + 1..].to_string()))
}

/// Basename of a path; `None` for the root.
pub fn basename(path: &str) -> Option<String> {
    split(path).map(|(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_forms() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/a/b/"), "/a/b");
        assert_eq!(normalize("a//b"), "/a/b");
        assert_eq!(normalize("///"), "/");
    }

    #[test]
    fn merge_at_root_and_below() {
        assert_eq!(merge("/", "a"), "/a");
        assert_eq!(merge("/a", "b"), "/a/b");
        assert_eq!(merge("/a/", "b/"), "/a/b");
        assert_eq!(merge("/a", ""), "/a");
    }

    #[test]
    fn split_returns_parent_and_basename() {
        assert_eq!(split("/a"), Some(("/".to_string(), "a".to_string())));
        assert_eq!(split("/a/b"), Some(("/a".to_string(), "b".to_string())));
        assert_eq!(split("/a/b/"), Some(("/a".to_string(), "b".to_string())));
    }

    #[test]
    fn root_has_no_parent() {
        assert_eq!(split("/"), None);
        assert_eq!(basename("/"), None);
    }

    #[test]
    fn merge_split_roundtrip() {
        for (container, name) in [("/", "top"), ("/archive", "2015"), ("/a/b", "c")] {
            let path = merge(container, name);
            let (parent, base) = split(&path).unwrap();
            assert_eq!(parent, normalize(container));
            assert_eq!(base, name);
        }
    }
}
