use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kurbo::{BezPath, Circle, Shape};
use rturtle::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rturtle", about = "Compile filled vector outlines into turtle plotter scripts")]
struct Cli {
    /// Config file (defaults to ~/.rturtle/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fill color for solid contours
    #[arg(long, global = true)]
    fill: Option<String>,

    /// Output vocabulary
    #[arg(long, value_enum, global = true)]
    dialect: Option<DialectArg>,

    /// Write the script here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Compile every visible path of an SVG file
    Svg {
        input: PathBuf,

        /// Center the outline horizontally on the home position
        #[arg(long)]
        center: bool,
    },
    /// Compile a built-in shape
    Demo {
        #[arg(value_enum, default_value = "square")]
        shape: DemoShape,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Plotter,
    Python,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Plotter => Dialect::Plotter,
            DialectArg::Python => Dialect::PythonTurtle,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DemoShape {
    /// 10x10 square
    Square,
    /// Square with a square hole
    Frame,
    /// Circle with a circular hole (cubic curves)
    Ring,
}

fn main() {
    init_logging();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RTURTLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => RenderConfig::default_config_path()?,
    };
    let mut config = RenderConfig::load_from_path(&config_path)?;
    if let Some(fill) = cli.fill {
        config.fill_color = fill;
    }
    if let Some(dialect) = cli.dialect {
        config.dialect = dialect.into();
    }

    let script = match cli.command {
        CliCommand::Svg { input, center } => {
            config.center_horizontally |= center;
            compile_svg(&input, &config)
                .with_context(|| format!("compile {}", input.display()))?
        }
        CliCommand::Demo { shape } => compile_bezpath(&demo_path(shape), &config),
    };

    match cli.output {
        Some(path) => script.write_to_path(&path)?,
        None => print!("{}", script.to_text()),
    }

    Ok(())
}

fn demo_path(shape: DemoShape) -> BezPath {
    let mut path = BezPath::new();
    match shape {
        DemoShape::Square => push_square(&mut path, 0.0, 10.0),
        DemoShape::Frame => {
            push_square(&mut path, 0.0, 100.0);
            push_square(&mut path, 30.0, 70.0);
        }
        DemoShape::Ring => {
            path.extend(Circle::new((50.0, 50.0), 50.0).path_elements(0.1));
            path.extend(Circle::new((50.0, 50.0), 25.0).path_elements(0.1));
        }
    }
    path
}

fn push_square(path: &mut BezPath, min: f64, max: f64) {
    path.move_to((min, min));
    path.line_to((max, min));
    path.line_to((max, max));
    path.line_to((min, max));
    path.close_path();
}
