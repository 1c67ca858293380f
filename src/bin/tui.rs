use clap::Parser;
use mandel_plot::cli::CommonArgs;
use std::path::PathBuf;

/// Explore the Mandelbrot set in the terminal.
#[derive(Debug, Parser)]
#[command(name = "mandel_plot-tui", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Directory for the log file (stdout belongs to the terminal)
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let appender = tracing_appender::rolling::never(&cli.log_dir, "mandel_plot.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(cli.common.env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let settings = cli.common.plot_config()?.validate()?;
    mandel_plot::run_tui(settings)?;

    Ok(())
}
