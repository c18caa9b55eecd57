use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use trading_api_demo::config::{self, GeneratorConfig, ServerConfig};
use trading_api_demo::{build_document, create_app, produce_demo};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trading API demo documentation generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write openapi_demo.json and api_documentation_demo.html (the default)
    Generate(GenerateArgs),
    /// Serve the generated documentation over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Directory to write into (defaults to DEMO_OUTPUT_DIR or the working directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Fail instead of replacing existing files
    #[arg(long)]
    no_clobber: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Port to listen on (defaults to DEMO_PORT or 8090)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();
    init_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => generate(args)?,
        Commands::Serve(args) => serve(args).await?,
    }

    Ok(())
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = GeneratorConfig::from_env()?.with_overrides(args.out_dir, args.no_clobber);

    println!("🚀 Генерация демонстрационной OpenAPI документации...");

    let report = produce_demo(&config).with_context(|| {
        format!("failed to generate demo documentation in {}", config.output_dir.display())
    })?;

    println!(
        "✅ Демонстрационная OpenAPI спецификация сохранена в {} ({} байт, sha256 {})",
        report.json.path.display(),
        report.json.bytes,
        report.json.sha256
    );
    println!(
        "✅ HTML документация сохранена в {} ({} байт, sha256 {})",
        report.html.path.display(),
        report.html.bytes,
        report.html.sha256
    );
    println!("🎉 Генерация завершена успешно!");

    Ok(())
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?.with_port(args.port);

    let doc = build_document();
    let app = create_app(&doc)?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("serving documentation on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
