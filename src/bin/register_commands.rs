use clap::Parser;
use roll_bot::config::register::RegisterConfig;
use roll_bot::core::commands::all_commands;
use roll_bot::core::CommandRegistry;
use roll_bot::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = RegisterConfig::parse();
    logger::init_cli_logger(args.verbose);

    let commands = all_commands();

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    let settings = match args.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    println!("Registering commands...");

    match settings.client().overwrite_commands(&commands).await {
        Ok(registered) => {
            println!("✅ Commands registered successfully:");
            println!("{}", serde_json::to_string_pretty(&registered)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Failed to register commands: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
