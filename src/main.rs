//! verishot CLI
//!
//! Runs the verification capture scenarios against a locally running
//! web application and writes review screenshots to the output directory.

use anyhow::Context;
use clap::{Parser, Subcommand};
use verishot::scenario::{LoginCapture, PaddingCapture, Target, DEFAULT_BASE_URL};

/// verishot verification capture harness
#[derive(Parser, Debug)]
#[command(name = "verishot")]
#[command(version)]
#[command(about = "Capture verification screenshots of a local web app")]
struct Args {
    /// Scenario to run (default: all)
    #[command(subcommand)]
    command: Option<Command>,

    /// Base URL of the running application
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory screenshots are written to
    #[arg(long, default_value = ".")]
    out_dir: std::path::PathBuf,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Marketing page and login flow capture
    Login,
    /// Mobile-viewport responsive padding capture
    Padding,
    /// Both scenarios, in order
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let target = Target::new(&args.base_url, &args.out_dir)
        .with_context(|| format!("invalid base URL: {}", args.base_url))?;

    let command = args.command.unwrap_or(Command::All);
    match command {
        Command::Login => run_login(&args, &target).await?,
        Command::Padding => run_padding(&args, &target).await?,
        Command::All => {
            run_login(&args, &target).await?;
            run_padding(&args, &target).await?;
        }
    }

    Ok(())
}

async fn run_login(args: &Args, target: &Target) -> anyhow::Result<()> {
    let mut scenario = LoginCapture::new(target.clone());
    scenario.browser.headless = !args.headed;
    scenario.browser.chrome_path = args.chrome_path.clone();

    let report = scenario.run().await.context("login capture failed")?;
    tracing::info!(
        "Login capture wrote {} and {}",
        report.marketing_shot.display(),
        report.app_shot.display()
    );
    Ok(())
}

async fn run_padding(args: &Args, target: &Target) -> anyhow::Result<()> {
    let mut scenario = PaddingCapture::new(target.clone());
    scenario.browser.headless = !args.headed;
    scenario.browser.chrome_path = args.chrome_path.clone();

    let report = scenario.run().await.context("padding capture failed")?;
    tracing::info!(
        "Padding capture wrote {} ({} paragraphs injected)",
        report.verification_shot.display(),
        report.injected
    );
    Ok(())
}
