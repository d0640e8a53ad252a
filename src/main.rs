use clap::Parser;
use il_bank_validator::utils::error::{BankValidatorError, ErrorSeverity};
use il_bank_validator::utils::{logger, validation::Validate};
use il_bank_validator::{
    default_registry, validate_text, BatchConfig, BatchEngine, BatchPipeline, CliCommand, CliConfig,
    LocalStorage,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let exit_code = match cli.command {
        CliCommand::Check {
            ref bank,
            ref branch,
            ref account,
        } => {
            logger::init_cli_logger(cli.verbose);
            run_check(bank, branch, account)
        }
        CliCommand::Batch {
            config,
            input,
            output,
            format,
        } => run_batch(cli.verbose, config, input, output, format).await,
        CliCommand::Banks => {
            logger::init_cli_logger(cli.verbose);
            for rule in default_registry().rules() {
                println!("{:>3}  {}", rule.code, rule.name);
            }
            0
        }
    };

    std::process::exit(exit_code);
}

fn run_check(bank: &str, branch: &str, account: &str) -> i32 {
    tracing::debug!("Checking bank={} branch={} account={}", bank, branch, account);

    match validate_text(bank, branch, account) {
        Ok(true) => {
            println!("✅ valid");
            0
        }
        Ok(false) => {
            println!("❌ invalid");
            1
        }
        Err(e) => report_error(&e),
    }
}

async fn run_batch(
    verbose: bool,
    config_path: Option<String>,
    input: Option<String>,
    output: Option<String>,
    formats: Vec<String>,
) -> i32 {
    // 載入 TOML 配置，未指定時使用預設值
    let mut config = match config_path {
        Some(ref path) => match BatchConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                logger::init_cli_logger(verbose);
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                return 3;
            }
        },
        None => BatchConfig::default(),
    };

    let verbose = verbose || config.verbose_logging();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    // 應用命令列覆蓋設定
    if let Some(input) = input {
        tracing::info!("🔧 Input overridden to: {}", input);
        config.batch.input_path = Some(input);
    }
    if let Some(output) = output {
        tracing::info!("🔧 Output overridden to: {}", output);
        config.output.path = output;
    }
    if !formats.is_empty() {
        config.output.formats = formats;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 3;
    }

    let storage = LocalStorage::new(config.output.path.clone());
    let engine = BatchEngine::new(BatchPipeline::new(storage, config));

    match engine.run().await {
        Ok(outcome) => {
            println!("✅ Batch validation completed");
            println!(
                "📊 {} total, {} valid, {} invalid, {} rejected",
                outcome.summary.total,
                outcome.summary.valid,
                outcome.summary.invalid,
                outcome.summary.rejected
            );
            println!("📁 Report saved to: {}", outcome.output_path);
            0
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &BankValidatorError) -> i32 {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    }
}
