use pom_scan::adapters::outbound::console::StderrProgressReporter;
use pom_scan::adapters::outbound::network::GitHubClient;
use pom_scan::application::dto::ScanRequest;
use pom_scan::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pom_scan::application::use_cases::{CollectInventoryUseCase, ScanOrgUseCase};
use pom_scan::cli::Args;
use pom_scan::config::ScanSettings;
use pom_scan::shared::error::ExitCode;
use pom_scan::shared::Result;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // clap exits with status 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let working_dir = std::env::current_dir()?;
    let settings = ScanSettings::load(args, &working_dir)?;

    let mut request = ScanRequest::new(settings.organization.as_str())?;
    if let Some(limit) = settings.max_concurrency {
        request = request.with_max_concurrency(limit)?;
    }

    // Create adapters (Dependency Injection)
    let api = Arc::new(GitHubClient::with_base_url(&settings.api_url)?);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = CollectInventoryUseCase::new(ScanOrgUseCase::new(api), progress_reporter);
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let output = formatter.format(&response.view, &response.metadata)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&output)?;

    if settings.fail_on_error && response.view.error_count() > 0 {
        return Ok(ExitCode::RepositoryErrors);
    }
    Ok(ExitCode::Success)
}
