//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "quizbox";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        resolve_dirs_with(|name| env::var(name).ok())
    }

    fn assume_yes(&self) -> bool {
        env::var("QUIZBOX_ASSUME_YES")
            .map(|v| is_truthy(&v))
            .unwrap_or(false)
    }
}

/// 変数取得関数を受け取ってディレクトリを解決する（空文字は未設定扱い）
fn resolve_dirs_with(get: impl Fn(&str) -> Option<String>) -> Result<Dirs, Error> {
    let var = |name: &str| get(name).filter(|s| !s.is_empty()).map(PathBuf::from);

    if let Some(home) = var("QUIZBOX_HOME") {
        return Ok(Dirs {
            data_dir: home.join("data"),
            state_dir: home.join("state"),
        });
    }

    let home = var("HOME");
    let data_base = var("XDG_DATA_HOME")
        .or_else(|| home.as_ref().map(|h| h.join(".local").join("share")))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    let state_base = var("XDG_STATE_HOME")
        .or_else(|| home.as_ref().map(|h| h.join(".local").join("state")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(Dirs {
        data_dir: data_base.join(APP_DIR),
        state_dir: state_base.join(APP_DIR),
    })
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| m.get(name).cloned()
    }

    #[test]
    fn test_quizbox_home_wins() {
        let dirs = resolve_dirs_with(vars(&[("QUIZBOX_HOME", "/q"), ("HOME", "/home/u")])).unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/q/data"));
        assert_eq!(dirs.state_dir, PathBuf::from("/q/state"));
    }

    #[test]
    fn test_xdg_dirs() {
        let dirs = resolve_dirs_with(vars(&[
            ("XDG_DATA_HOME", "/xd"),
            ("XDG_STATE_HOME", "/xs"),
            ("HOME", "/home/u"),
        ]))
        .unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/xd/quizbox"));
        assert_eq!(dirs.state_dir, PathBuf::from("/xs/quizbox"));
    }

    #[test]
    fn test_home_fallback_and_empty_is_unset() {
        let dirs = resolve_dirs_with(vars(&[("QUIZBOX_HOME", ""), ("HOME", "/home/u")])).unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/home/u/.local/share/quizbox"));
        assert_eq!(dirs.state_dir, PathBuf::from("/home/u/.local/state/quizbox"));
    }

    #[test]
    fn test_no_home_is_env_error() {
        let err = resolve_dirs_with(vars(&[])).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" Yes "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
