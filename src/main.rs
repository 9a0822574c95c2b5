use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use nutriplan::Provider;
use nutriplan::core::config::{self, CliOverrides};
use nutriplan::core::currency::Currency;
use nutriplan::core::state::App;
use nutriplan::inference::{GeneratorSettings, LlmPlanGenerator, build_provider};

#[derive(Parser)]
#[command(name = "nutriplan", about = "Personalized weekly meal plans with an LLM")]
struct Args {
    /// LLM provider to use
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Model name (overrides config and NUTRIPLAN_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Currency for the budget and cost estimate
    #[arg(short, long, value_enum)]
    currency: Option<Currency>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to nutriplan.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("nutriplan.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            log::warn!("Config load failed: {}", e);
            config::NutriConfig::default()
        }
    };

    let overrides = CliOverrides {
        provider: args.provider.map(Provider::as_str),
        model: args.model.as_deref(),
        currency: args.currency,
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::info!(
        "NutriPlan starting up with provider: {}, model: {}, currency: {}",
        resolved.provider,
        resolved.model_name,
        resolved.currency.code()
    );

    let provider = match build_provider(&resolved) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Provider setup failed: {}", e);
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let generator = LlmPlanGenerator::new(
        provider,
        GeneratorSettings {
            model: resolved.model_name.clone(),
            effort: resolved.effort,
            max_output_tokens: resolved.max_output_tokens,
            system_prompt: resolved.system_prompt.clone(),
            region: resolved.region.clone(),
        },
    );

    let app = App::from_config(&resolved);
    match nutriplan::tui::run(app, std::sync::Arc::new(generator)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
