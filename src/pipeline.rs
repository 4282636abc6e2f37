//! The generate pipeline and the key management entry points.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Local;

use crate::anthropic::{build_instruction, AnthropicClient, BlogGenerator};
use crate::cli::Model;
use crate::config::Config;
use crate::credentials::{mask_key, resolve_api_key, setup_project_key};
use crate::drafts::write_draft;
use crate::errors::LtbError;
use crate::memory::latest_letter;

/// Run the full letter-to-blog pipeline.
///
/// The key is resolved first: a missing credential ends the run before any
/// file is read or any network call is made.
pub fn run_generate(config: &Config, model: Option<Model>) -> Result<(), LtbError> {
    println!("Letter to Blog: generating blog post...");

    let credential = resolve_api_key(config).ok_or(LtbError::MissingApiKey)?;
    println!("Using API key from: {}", credential.source);

    let client = AnthropicClient::new(&credential.key, model)?;
    let output_file = generate_draft(config, &client)?;

    println!("Success! Blog post saved to: {}", output_file.display());
    println!("Ready for review and publishing!");
    Ok(())
}

/// Locate the newest letter, run it through the generator, and write the
/// draft. Takes any [`BlogGenerator`], not just the Anthropic client.
pub fn generate_draft(
    config: &Config,
    generator: &dyn BlogGenerator,
) -> Result<PathBuf, LtbError> {
    let memory_file = latest_letter(&config.memory_dir)?;
    println!("Reading: {}", memory_file.display());

    let memory_content = fs::read_to_string(&memory_file)?;

    let today = Local::now().date_naive();
    let instruction = build_instruction(&memory_content, today);

    println!("Calling the Anthropic API...");
    let blog_content = generator.generate(&instruction)?;

    let output_file = write_draft(&config.drafts_dir, today, &memory_file, &blog_content)?;
    println!("Blog post generated: {}", output_file.display());
    Ok(output_file)
}

/// Run interactive project key setup against stdin.
pub fn run_setup(config: &Config) -> Result<(), LtbError> {
    let stdin = io::stdin();
    setup_project_key(config, &mut stdin.lock())
}

/// Report which API key source would be used, with the key partially masked.
/// A missing key reports the same remediation options as the generate path.
pub fn run_check_key(config: &Config) -> Result<(), LtbError> {
    let credential = resolve_api_key(config).ok_or(LtbError::MissingApiKey)?;
    println!("API key found from: {}", credential.source);
    println!("   Key: {}", mask_key(&credential.key));
    Ok(())
}
