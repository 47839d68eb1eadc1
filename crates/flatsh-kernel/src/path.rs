//! Absolute-path string helpers.
//!
//! Every filesystem entry is keyed by an absolute path: a string starting
//! with `/`, with no trailing slash except the root `/` itself. Resolution
//! is purely textual: `.` and `..` segments are not collapsed, except for
//! the dedicated `parent` pop that backs `cd ..`.

/// Resolve a command argument against the current working directory.
///
/// Absolute arguments are returned unchanged; relative arguments are
/// appended to `cwd` with exactly one `/` in between.
///
/// ```
/// use flatsh_kernel::path::resolve;
///
/// assert_eq!(resolve("/", "docs"), "/docs");
/// assert_eq!(resolve("/docs", "a.txt"), "/docs/a.txt");
/// assert_eq!(resolve("/docs", "/etc"), "/etc");
/// ```
pub fn resolve(cwd: &str, arg: &str) -> String {
    if arg.starts_with('/') {
        arg.to_string()
    } else {
        format!("{}{}", with_trailing_slash(cwd), arg)
    }
}

/// The path one level above `cwd`: pop the last `/`-delimited segment.
///
/// The root is its own parent.
pub fn parent(cwd: &str) -> String {
    if cwd == "/" {
        return "/".to_string();
    }
    match cwd.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => cwd[..idx].to_string(),
    }
}

/// The final segment of a path (empty for the root).
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Append `name` under `dir` with a single separating slash.
pub fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// The path with exactly one trailing slash (`/` stays `/`).
pub fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// The path without a trailing slash, never emptied (`/` stays `/`).
pub fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
