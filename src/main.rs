use clap::Parser;
use factory_method::utils::error::{ErrorSeverity, FactoryError};
use factory_method::utils::logger;
use factory_method::{CliConfig, ConcreteCreator, Driver};

// 依錯誤嚴重程度決定退出碼
fn exit_code(e: &FactoryError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting factory-method driver");
    tracing::debug!("Run settings: {:?}", settings);

    let driver = Driver::new(ConcreteCreator::new())
        .with_sequence(settings.sequence)
        .with_label_prefix(settings.label_prefix);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = driver.run(&mut out) {
        tracing::error!(
            "❌ Driver failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    // driver 在此釋放 creator
    drop(driver);
    Ok(())
}
