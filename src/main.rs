use clap::Parser;
use marks_eval::adapters::output::write_report;
use marks_eval::utils::logger;
use marks_eval::{CliConfig, EvalError, EvaluationSession, PromptedReader, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting marks-eval");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = run(&settings) {
        exit_with(&e);
    }

    Ok(())
}

fn run(settings: &Settings) -> marks_eval::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let reader = PromptedReader::new(stdin.lock(), stdout.lock());
    let mut session = EvaluationSession::new(reader);
    let evaluation = session.run()?;

    // 顯示結果由呼叫端負責
    let mut out = session.into_source().into_writer();
    write_report(&mut out, &evaluation, settings.format)
}

fn exit_with(e: &EvalError) -> ! {
    tracing::error!("❌ {} (exit code {})", e, e.exit_code());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

    // 提示語沒有換行，先補一行避免錯誤訊息黏在同一行
    if matches!(e, EvalError::InputFormat { .. } | EvalError::InputExhausted) {
        println!();
    }
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
