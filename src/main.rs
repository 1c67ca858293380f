use clap::Parser;
use mandel_plot::cli::CommonArgs;
use mandel_plot::{Change, MandelbrotPlot, Outcome, PlotPresenterPort, TextPresenter, parse_key_script};
use std::sync::Arc;
use tracing::info;

/// Plot the Mandelbrot set as text, optionally after replaying a key script.
#[derive(Debug, Parser)]
#[command(name = "mandel_plot", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Keys to replay before printing, e.g. "]]ll+e"
    #[arg(short, long, default_value = "")]
    keys: String,
}

fn setup_logging(common: &CommonArgs) {
    tracing_subscriber::fmt()
        .with_env_filter(common.env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(&cli.common);

    let settings = cli.common.plot_config()?.validate()?;
    let commands = parse_key_script(&cli.keys, &settings.key_steps)
        .map_err(|key| format!("unknown key {key:?} in --keys"))?;

    let mut plot = MandelbrotPlot::new(settings.viewport.clone(), settings.repaint_engine())?;
    let presenter = Arc::new(TextPresenter::new());
    plot.subscribe(Arc::clone(&presenter) as Arc<dyn PlotPresenterPort>);

    let mut denied = 0usize;
    for command in commands {
        match plot.apply_command(command) {
            Outcome::Rejected(_) => denied += 1,
            Outcome::Applied(Change::Quit) => break,
            Outcome::Applied(_) => {}
        }
    }

    info!(generation = plot.generation(), denied, "replay finished");
    print!("{}", presenter.render(&plot.bounds(), plot.grid()));

    Ok(())
}
