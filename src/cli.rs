use std::{
    fmt::{self, Display},
    str::FromStr,
};

use clap::{command, Parser};

/// The default model to use for draft generation.
pub const DEFAULT_MODEL: Model = Model::Sonnet4;

/// Claude models supported by LTB
#[derive(Debug, Clone, Copy)]
pub enum Model {
    Sonnet4,
    Opus4,
    Haiku35,
}

impl Model {
    pub fn all_models() -> Vec<String> {
        [Model::Sonnet4, Model::Opus4, Model::Haiku35]
            .iter()
            .map(|m| m.to_string())
            .collect()
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude-sonnet-4-20250514" => Ok(Model::Sonnet4),
            "sonnet-4" => Ok(Model::Sonnet4),
            "sonnet" => Ok(Model::Sonnet4),
            "claude-opus-4-20250514" => Ok(Model::Opus4),
            "opus-4" => Ok(Model::Opus4),
            "opus" => Ok(Model::Opus4),
            "claude-3-5-haiku-20241022" => Ok(Model::Haiku35),
            "haiku-3-5" => Ok(Model::Haiku35),
            "haiku" => Ok(Model::Haiku35),
            _ => Err(format!(
                "Invalid model: {}. Choose from: sonnet, opus, haiku (or a full model id).",
                s
            )),
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Sonnet4 => write!(f, "claude-sonnet-4-20250514"),
            Model::Opus4 => write!(f, "claude-opus-4-20250514"),
            Model::Haiku35 => write!(f, "claude-3-5-haiku-20241022"),
        }
    }
}

/// CLI for `ltb`
///
/// The three modes are mutually exclusive. With no flag, the full generate
/// pipeline runs: newest letter in, one draft out.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Set up a project-specific API key
    #[arg(long, conflicts_with = "check_key")]
    pub setup_project: bool,
    /// Check which API key source is being used
    #[arg(long)]
    pub check_key: bool,
    /// Model used for generation, also settable via the LTB_MODEL env var
    #[arg(short, long, conflicts_with_all = ["setup_project", "check_key"])]
    pub model: Option<Model>,
}
