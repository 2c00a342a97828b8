use clap::Parser;
use tracing_subscriber::EnvFilter;

use leetcode_mentor::mentor::cli::Args;
use leetcode_mentor::mentor::pipeline::run_submission;
use leetcode_mentor::mentor::presenter::ConsolePresenter;
use leetcode_mentor::mentor::tips::render_tips;
use leetcode_mentor::mentor::types::ProblemSubmission;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let statement = args.resolve_statement().await?;
    let submission = ProblemSubmission::new(statement, args.difficulty, args.language);

    // Credential is read once here and handed down as a value; nothing below
    // touches the environment.
    let api_key = std::env::var("GEMINI_API_KEY").ok();
    let config = args.session_config(api_key);

    let mut presenter = ConsolePresenter::new();
    run_submission(&config, &submission, &mut presenter).await?;

    if args.tips {
        println!("\n{}", render_tips());
    }

    Ok(())
}
