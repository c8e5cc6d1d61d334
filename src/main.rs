use clap::Parser;
use secure_etl::config::cli::CliArgs;
use secure_etl::config::load_dotenv;
use secure_etl::utils::logger;
use secure_etl::{
    AppConfig, CommandMailTransport, DataFetcher, DataPersister, MySqlConnector, Notifier,
    Plan, ReqwestHttp, Result, SecureEtlError, Settings, Workflow,
};
use std::io::{BufRead, Write};
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting secure-etl");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = run(&args).await {
        tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(args: &CliArgs) -> Result<()> {
    let settings = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => Settings::default(),
    };
    let settings = args.apply_overrides(settings);

    // .env 只補上尚未設定的變數
    load_dotenv();
    let config = AppConfig::from_env();
    let plan = Plan::new(&settings, &config)?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No external calls will be made");
        println!("{}", plan);
        return Ok(());
    }

    let user_input = match &args.input {
        Some(value) => value.clone(),
        None => prompt_user_input()?,
    };

    let http = ReqwestHttp::new(Duration::from_secs(settings.fetch.timeout_seconds))?;
    let fetcher = DataFetcher::new(http, &settings.fetch.endpoint)?;

    let AppConfig {
        database,
        admin_email,
    } = config;
    let persister = DataPersister::new(MySqlConnector, database);
    let notifier = Notifier::new(CommandMailTransport::new(settings.mail.program.as_str()));

    let workflow = Workflow::new(fetcher, persister, notifier, admin_email, settings.mail.subject);
    let report = workflow.run(&user_input).await?;

    tracing::info!("✅ Run completed successfully!");
    println!(
        "✅ Stored {} byte payload ({} row) and notified {}",
        report.payload_bytes, report.rows_inserted, report.recipient
    );
    Ok(())
}

fn prompt_user_input() -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Enter your name: ").map_err(SecureEtlError::Input)?;
    stdout.flush().map_err(SecureEtlError::Input)?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(SecureEtlError::Input)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
