use clap::Parser;
use retreat_registration::domain::ports::{Clock, SubmissionSink};
use retreat_registration::utils::logger::{self, LogFormat};
use retreat_registration::utils::validation::Validate;
use retreat_registration::{
    render_page, Answers, CliConfig, DryRunSink, FixedClock, FormConfig, GoogleFormsSink,
    HtmlFieldRenderer, LoggingNavigator, RegistrationEngine, RegistrationError, RegistrationForm,
    SystemClock,
};
use std::sync::Arc;

fn exit_with(e: &RegistrationError) -> ! {
    tracing::error!(
        "❌ Registration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code());
}

async fn submit_with<S: SubmissionSink>(
    sink: S,
    config: &FormConfig,
    form: &mut RegistrationForm,
) -> Result<(), RegistrationError> {
    let engine =
        RegistrationEngine::with_success_route(sink, LoggingNavigator, &config.form.success_route);
    engine.submit(form).await.map(|_| ())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, LogFormat::from_json_flag(cli.json_logs));

    tracing::info!("🚀 Starting retreat-registration");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading form definition from: {}", path);
            match FormConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}'", path);
                    exit_with(&e);
                }
            }
        }
        None => FormConfig::default(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.form.endpoint = endpoint.clone();
        tracing::info!("🔧 Endpoint overridden to: {}", endpoint);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let clock: Arc<dyn Clock> = match cli.today_date() {
        Ok(Some(today)) => Arc::new(FixedClock(today)),
        Ok(None) => Arc::new(SystemClock),
        Err(e) => exit_with(&e),
    };
    tracing::info!(
        "✅ Form '{}' ready ({} fields, minimum age {}, today {})",
        config.event.title,
        config.fields.len(),
        config.form.min_age,
        clock.today()
    );

    let mut form = RegistrationForm::from_config(&config, clock);

    let answers = match &cli.answers {
        Some(path) => match Answers::from_file(path) {
            Ok(answers) => Some(answers),
            Err(e) => exit_with(&e),
        },
        None => None,
    };

    if let Some(answers) = &answers {
        if let Err(e) = answers.replay(&mut form) {
            exit_with(&e);
        }
        match form.error() {
            Some(err) => tracing::warn!("⚠️  Submit disabled: {}", err),
            None => tracing::info!("Submit enabled"),
        }
    }

    if let Some(path) = &cli.render {
        let html = render_page(&form, &config.event, config.endpoint(), &HtmlFieldRenderer);
        if let Err(e) = std::fs::write(path, html).map_err(RegistrationError::IoError) {
            exit_with(&e);
        }
        tracing::info!("📄 Registration page written to: {}", path);
        println!("📄 Registration page written to: {}", path);
    }

    if answers.is_none() {
        if cli.render.is_none() {
            println!("Nothing to do: pass --answers to submit or --render to write the page");
        }
        return;
    }

    let outcome = if cli.dry_run {
        submit_with(DryRunSink, &config, &mut form).await
    } else {
        submit_with(GoogleFormsSink::new(config.endpoint()), &config, &mut form).await
    };

    match outcome {
        Ok(()) => {
            let verb = if cli.dry_run { "validated" } else { "submitted" };
            tracing::info!("✅ Registration {} successfully!", verb);
            println!("✅ Registration {} successfully!", verb);
        }
        Err(e) => exit_with(&e),
    }
}
