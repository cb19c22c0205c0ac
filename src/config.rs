use std::env;

pub const DEFAULT_PROMPT: &str = "* ";
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub prompt: String,
    /// Deepest paren nesting a form may have before it is rejected unread.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Defaults overridden by `TINYLISP_PROMPT` and `TINYLISP_MAX_DEPTH`.
    pub fn from_env() -> Config {
        Config::from_vars(env::var("TINYLISP_PROMPT").ok(),
            env::var("TINYLISP_MAX_DEPTH").ok())
    }

    fn from_vars(prompt: Option<String>, max_depth: Option<String>) -> Config {
        let mut config = Config::default();
        if let Some(prompt) = prompt {
            config.prompt = prompt;
        }
        if let Some(raw) = max_depth {
            match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_depth = depth,
                _ => warn!("ignoring TINYLISP_MAX_DEPTH={:?}, using {}", raw,
                    DEFAULT_MAX_DEPTH),
            }
        }
        config
    }
}

#[test]
fn test_defaults() {
    assert_eq!(Config::from_vars(None, None), Config::default());
    assert_eq!(Config::default().prompt, "* ");
}

#[test]
fn test_overrides() {
    let config = Config::from_vars(Some("> ".to_string()),
        Some(" 12 ".to_string()));
    assert_eq!(config.prompt, "> ");
    assert_eq!(config.max_depth, 12);
}

#[test]
fn test_bad_depth_falls_back() {
    for raw in &["", "deep", "-3", "0"] {
        let config = Config::from_vars(None, Some(raw.to_string()));
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }
}
