//! Filesystem locations and environment names for a run.

use std::path::PathBuf;

/// The environment variable holding the highest-priority API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
/// The environment variable overriding the default model.
pub const MODEL_ENV: &str = "LTB_MODEL";

/// Paths consulted by a single run.
///
/// Every location is an explicit value; tests point a run at a temp
/// directory instead of the production paths in [`Config::default`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `letter_*.md` session memories
    pub memory_dir: PathBuf,
    /// Directory receiving generated drafts
    pub drafts_dir: PathBuf,
    /// Project-local API key file
    pub project_key_file: PathBuf,
    /// Per-user global API key file, `None` when no home directory is known
    pub global_key_file: Option<PathBuf>,
    /// Environment variable consulted before any key file
    pub key_env_var: String,
    /// Ignore file the key setup appends to
    pub gitignore_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            memory_dir: PathBuf::from(".memory"),
            drafts_dir: PathBuf::from("drafts"),
            project_key_file: PathBuf::from(".memory/.blog_config"),
            global_key_file: dirs::home_dir().map(|home| home.join(".claude").join(".credentials")),
            key_env_var: API_KEY_ENV.to_string(),
            gitignore_file: PathBuf::from(".gitignore"),
        }
    }
}
