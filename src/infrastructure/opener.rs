//! Opening links in the user's browser.

use crate::domain::{Result, VitrineError};
use std::process::{Command, Stdio};

/// Program and leading arguments used to open a URL on this platform.
#[must_use]
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Hands `url` to the platform opener without waiting for it to exit.
///
/// Only `http` and `https` URLs are accepted so that catalog data cannot
/// launch arbitrary local files or programs.
///
/// # Errors
///
/// Returns [`VitrineError::Io`] if the opener cannot be started and
/// [`VitrineError::Config`] for URLs with another scheme.
pub fn open_link(url: &str) -> Result<()> {
    if !is_web_url(url) {
        return Err(VitrineError::Config(format!("refusing to open non-web link {url:?}")));
    }

    let (program, args) = opener_command();
    tracing::debug!(program, url, "opening link");

    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_urls_are_opened() {
        assert!(is_web_url("https://pluga.co/ferramentas/slack"));
        assert!(is_web_url("HTTP://example.com"));
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url(""));
    }

    #[test]
    fn rejected_urls_never_spawn() {
        let err = open_link("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, VitrineError::Config(_)));
    }

    #[test]
    fn opener_is_known_for_platform() {
        let (program, _) = opener_command();
        assert!(!program.is_empty());
    }
}
