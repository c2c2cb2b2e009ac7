use crate::prelude::{eprintln, *};
use clap::Parser;

mod error;
mod generate;
mod materialize;
mod openai;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate the files of a WordPress plugin with an OpenAI model"
)]
pub struct App {
    #[clap(flatten)]
    pub options: crate::generate::GenerateOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "WPGEN_VERBOSE", default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match crate::generate::run(app.options, app.global).await {
        Ok(()) => Ok(()),
        // Anticipated failures get their message alone, without a report
        Err(report) => match report.downcast_ref::<Error>() {
            Some(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
            None => Err(report),
        },
    }
}
