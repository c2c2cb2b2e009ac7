use crate::materialize::materialize;
use crate::openai::{Completer, OpenAiClient};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use wpgen_core::completion::{
    CompletionOutcome, CompletionRequest, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
use wpgen_core::config::{ApiKey, Credential, API_KEY_ENV};
use wpgen_core::plugin::{format_summary, Plugin};
use wpgen_core::prompt::{build_messages, PromptConfig};

#[derive(Debug, Clone, clap::Args)]
pub struct GenerateOptions {
    /// Name of the plugin to create
    #[clap(long)]
    pub name: String,

    /// What the plugin should do
    #[clap(long)]
    pub prompt: String,

    /// Model name for plugin generation
    #[clap(long, env = "WPGEN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Directory the plugin files are written under
    #[clap(long, env = "WPGEN_OUT_DIR", default_value = "out")]
    pub out: PathBuf,

    /// OpenAI-compatible API base URL
    #[clap(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Module entry point
pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let credential = Credential::from_value(std::env::var(API_KEY_ENV).ok());
    let base_url = options.base_url.clone();

    execute(options, credential, &global, |api_key| {
        OpenAiClient::new(&base_url, api_key)
    })
    .await?;

    Ok(())
}

/// Generate a plugin and write it to disk.
///
/// `connect` is only called once the credential is known to be present, so a
/// missing key never reaches the network.
pub async fn execute<C, F>(
    options: GenerateOptions,
    credential: Credential,
    global: &crate::Global,
    connect: F,
) -> Result<Vec<PathBuf>>
where
    C: Completer,
    F: FnOnce(ApiKey) -> Result<C>,
{
    let Credential::Present(api_key) = credential else {
        return Err(Error::MissingCredential(API_KEY_ENV.to_string()).into());
    };
    let client = connect(api_key)?;

    if global.verbose {
        eprintln!("API base URL: {}", options.base_url);
        eprintln!("Model: {}", options.model);
        eprintln!("Output directory: {}", options.out.display());
    }

    println!("Asking {}...", options.model);

    let messages = build_messages(&PromptConfig::default(), &options.name, &options.prompt);
    let request = CompletionRequest::new(&options.model, messages);

    let plugin = match client.complete(&request).await {
        CompletionOutcome::Success(plugin) => plugin,
        CompletionOutcome::Refusal { message, raw } => {
            log::warn!("Model refused: {}", message);
            return Err(Error::Refused(raw).into());
        }
        CompletionOutcome::TransportError(detail) => {
            return Err(Error::Transport(detail).into());
        }
    };

    print_summary(&plugin);

    if !options.out.is_dir() {
        fs::create_dir_all(&options.out).with_context(|| {
            f!("Failed to create output directory {}", options.out.display())
        })?;
    }

    let written = materialize(&options.out, &plugin)?;

    if global.verbose {
        for path in &written {
            eprintln!("Wrote {}", path.display());
        }
    }

    println!("{}", "Plugin generated.".green().bold());

    Ok(written)
}

fn print_summary(plugin: &Plugin) {
    let summary = format_summary(plugin);
    let mut lines = summary.lines();

    if let Some(name) = lines.next() {
        println!("{}", name.bold().cyan());
    }
    for line in lines {
        println!("{}", line);
    }
}
