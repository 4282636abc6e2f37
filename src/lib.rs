//! # Letter to Blog (`ltb`)
//! Turn your session memory letters into blog post drafts!
//!
//! A command line program that takes the most recent session memory ("letter") from the
//! `.memory/` directory, asks Claude to rewrite it as a public-ready blog post, and saves
//! the result to `drafts/` as markdown with frontmatter.
//!
//! ## Usage
//! These are the library crate documentation for `ltb`. For usage of the binary install the local binary crate (`cargo install ltb`) and see
//! ```shell
//! $ ltb --help
//! ```
//!
//! ## Environment Variables:
//! - `ANTHROPIC_API_KEY`: The Anthropic API key. Optional if a project key file
//!   (`.memory/.blog_config`) or a global key file (`~/.claude/.credentials`) exists,
//!   but always wins over both when set.
//! - `LTB_MODEL`: Optional. The model to use for generation (default: claude-sonnet-4-20250514,
//!   also valid: claude-opus-4-20250514, claude-3-5-haiku-20241022)
//!
//! ## Notes:
//! - Letter filenames embed a sortable date (`letter_2024-06-15.md`), so the
//!   lexically greatest name is the newest. File contents and mtimes are never consulted.
//! - Rerunning on the same day regenerates and overwrites that day's draft for the
//!   same letter. Drafts are meant for review before publishing, not as a stable archive.
//!
pub mod anthropic;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod drafts;
pub mod errors;
pub mod memory;
pub mod pipeline;
