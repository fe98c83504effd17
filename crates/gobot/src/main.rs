//! gobot: WhatsApp weather and translation bot
//!
//! Mention the bot in a chat with a comma-delimited command:
//!   @gobot weather, London
//!   @gobot trans-en, 你好
//!   @gobot trans-zh, how are you

use std::sync::Arc;

use gobot_core::Config;
use gobot_whatsapp::WhatsAppBot;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("gobot {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting gobot...");
    tracing::info!("Gateway: {}", config.gateway.base_url);
    tracing::info!("Trigger: {}", config.trigger);

    let bot =
        WhatsAppBot::new(&config).map_err(|e| anyhow::anyhow!("Failed to create bot: {}", e))?;

    if !bot.health_check().await? {
        anyhow::bail!("Gateway is not reachable at {}", config.gateway.base_url);
    }

    // Login or restore
    bot.login()
        .await
        .map_err(|e| anyhow::anyhow!("Error logging in: {}", e))?;

    // Verify phone connectivity
    if !bot.admin_test().await? {
        anyhow::bail!("Error pinging the paired phone");
    }

    let bot = Arc::new(bot);
    let (shutdown_tx, _) = tokio::sync::broadcast::channel::<()>(1);

    let run_bot = Arc::clone(&bot);
    let shutdown_rx = shutdown_tx.subscribe();
    let handle = tokio::spawn(async move {
        if let Err(e) = run_bot.run(shutdown_rx).await {
            tracing::error!("Bot loop error: {}", e);
        }
    });

    tracing::info!("gobot is running, press Ctrl+C to exit");

    wait_for_signal().await?;

    tracing::info!("Shutting down now.");
    let _ = shutdown_tx.send(());
    let _ = handle.await;

    // Disconnect safe: persist the renewed session for the next run
    bot.shutdown()
        .await
        .map_err(|e| anyhow::anyhow!("Error saving session: {}", e))?;

    Ok(())
}

/// Block until SIGINT or SIGTERM arrives
async fn wait_for_signal() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    Ok(())
}

fn print_help() {
    println!("gobot - WhatsApp weather and translation bot");
    println!();
    println!("Usage:");
    println!("  gobot              Start the bot");
    println!("  gobot --help       Show this help message");
    println!("  gobot --version    Show version");
    println!();
    println!("Environment Variables:");
    println!("  WEATHER_API_KEY       OpenWeatherMap API key (required for weather)");
    println!("  WEATHER_API_URL       Weather API base URL");
    println!("  TRANSLATE_API_URL     Translation API base URL");
    println!("  GOBOT_GATEWAY_URL     WhatsApp gateway base URL (default: http://localhost:8090)");
    println!("  GOBOT_TRIGGER         Trigger mention (default: @gobot)");
    println!("  GOBOT_POLL_INTERVAL   Message poll interval in seconds (default: 2)");
    println!("  GOBOT_SESSION_PATH    Session file path (default: <tmp>/gobot-session.json)");
    println!();
    println!("Configuration can also be provided via ./gobot.toml");
}
