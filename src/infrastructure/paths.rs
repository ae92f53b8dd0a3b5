//! Data directory resolution.
//!
//! Everything vitrine persists (the key-value store and the trace file) lives
//! in one directory. It is chosen from an environment snapshot so that callers
//! and tests never touch the real process environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

const APP_DIR: &str = "vitrine";

/// Returns the data directory for vitrine storage.
///
/// Resolution order:
///
/// 1. `VITRINE_DATA_DIR`, tilde-expanded.
/// 2. `$XDG_DATA_HOME/vitrine`.
/// 3. `$HOME/.local/share/vitrine`.
/// 4. `./.vitrine` when no home directory is known.
///
/// Empty values count as unset.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use std::path::PathBuf;
/// use vitrine::infrastructure::resolve_data_dir;
///
/// let mut env = BTreeMap::new();
/// env.insert("HOME".to_string(), "/home/ana".to_string());
/// assert_eq!(resolve_data_dir(&env), PathBuf::from("/home/ana/.local/share/vitrine"));
/// ```
#[must_use]
pub fn resolve_data_dir(env: &BTreeMap<String, String>) -> PathBuf {
    let var = |name: &str| env.get(name).map(String::as_str).filter(|v| !v.trim().is_empty());

    if let Some(dir) = var("VITRINE_DATA_DIR") {
        return expand_tilde(dir, var("HOME"));
    }
    if let Some(xdg) = var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    var("HOME").map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| PathBuf::from(home).join(".local").join("share").join(APP_DIR),
    )
}

/// Replaces a leading `~` with `home`.
///
/// Paths without a leading tilde, and tilde paths when `home` is unknown, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use vitrine::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/data", Some("/home/ana")), PathBuf::from("/home/ana/data"));
/// assert_eq!(expand_tilde("~", Some("/home/ana")), PathBuf::from("/home/ana"));
/// assert_eq!(expand_tilde("/srv/vitrine", Some("/home/ana")), PathBuf::from("/srv/vitrine"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&str>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (p, Some(home)) if p.starts_with("~/") => PathBuf::from(home).join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn explicit_dir_wins() {
        let env = env(&[
            ("VITRINE_DATA_DIR", "/srv/vitrine"),
            ("XDG_DATA_HOME", "/xdg"),
            ("HOME", "/home/ana"),
        ]);
        assert_eq!(resolve_data_dir(&env), PathBuf::from("/srv/vitrine"));
    }

    #[test]
    fn explicit_dir_expands_tilde() {
        let env = env(&[("VITRINE_DATA_DIR", "~/vitrine-data"), ("HOME", "/home/ana")]);
        assert_eq!(resolve_data_dir(&env), PathBuf::from("/home/ana/vitrine-data"));
    }

    #[test]
    fn xdg_before_home() {
        let env = env(&[("XDG_DATA_HOME", "/xdg"), ("HOME", "/home/ana")]);
        assert_eq!(resolve_data_dir(&env), PathBuf::from("/xdg/vitrine"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let env = env(&[("VITRINE_DATA_DIR", ""), ("XDG_DATA_HOME", "  "), ("HOME", "/home/ana")]);
        assert_eq!(resolve_data_dir(&env), PathBuf::from("/home/ana/.local/share/vitrine"));
    }

    #[test]
    fn falls_back_to_working_directory() {
        assert_eq!(resolve_data_dir(&BTreeMap::new()), PathBuf::from(".vitrine"));
    }

    #[test]
    fn tilde_without_home_is_kept() {
        assert_eq!(expand_tilde("~/x", None), PathBuf::from("~/x"));
        assert_eq!(expand_tilde("~user/x", Some("/home/ana")), PathBuf::from("~user/x"));
    }
}
