//! Syntree CLI
//!
//! Usage:
//!   syntree [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>      Output file (default: <FILE>.<type>, or stdout)
//!   -t, --type <TYPE>        Output type: svg or dot
//!       --hns <N>            Horizontal node separation [1, 300]
//!       --vns <N>            Vertical node separation [1, 300]
//!       --pmw <N>            Horizontal page margin [1, 300]
//!       --pmh <N>            Vertical page margin [1, 300]
//!       --fts <N>            Font size [1, 100]
//!   -s, --stylesheet <FILE>  Color stylesheet (TOML format)
//!   -d, --debug              Log the laid out tree
//!   -h, --help               Print help
//!   -V, --version            Print version

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use syntree::layout::SEPARATION_RANGE;
use syntree::renderer::{FONT_SIZE_RANGE, MARGIN_RANGE};
use syntree::{
    render_with_config, LayoutConfig, OutputFormat, RenderConfig, RenderError, Stylesheet,
    SvgConfig,
};

#[derive(Parser)]
#[command(name = "syntree", version)]
#[command(about = "Draw bracket-notated trees as SVG or Graphviz DOT")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (default: the input file name plus the type extension, or stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output type
    #[arg(short = 't', long = "type", value_enum, default_value_t = OutputFormat::Svg)]
    file_type: OutputFormat,

    /// Horizontal node separation
    #[arg(long, default_value_t = 25.0, value_parser = separation)]
    hns: f64,

    /// Vertical node separation
    #[arg(long, default_value_t = 25.0, value_parser = separation)]
    vns: f64,

    /// Horizontal page margin
    #[arg(long, default_value_t = 20.0, value_parser = margin)]
    pmw: f64,

    /// Vertical page margin
    #[arg(long, default_value_t = 20.0, value_parser = margin)]
    pmh: f64,

    /// Font size
    #[arg(long, default_value_t = 12.0, value_parser = font_size)]
    fts: f64,

    /// Stylesheet file for label colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Debug mode: log the tree with its coordinates
    #[arg(short, long)]
    debug: bool,
}

fn separation(s: &str) -> Result<f64, String> {
    in_range(s, SEPARATION_RANGE)
}

fn margin(s: &str) -> Result<f64, String> {
    in_range(s, MARGIN_RANGE)
}

fn font_size(s: &str) -> Result<f64, String> {
    in_range(s, FONT_SIZE_RANGE)
}

fn in_range(s: &str, range: RangeInclusive<f64>) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{} is out of range [{}, {}]",
            value,
            range.start(),
            range.end()
        ))
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("syntree=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RenderConfig::new()
        .with_layout(LayoutConfig::new().with_h_sep(cli.hns).with_v_sep(cli.vns))
        .with_svg(
            SvgConfig::new()
                .with_margins(cli.pmw, cli.pmh)
                .with_font_size(cli.fts),
        )
        .with_stylesheet(stylesheet)
        .with_format(cli.file_type)
        .with_debug(cli.debug);

    let output = match render_with_config(&source, config) {
        Ok(output) => output,
        Err(RenderError::Parse(errors)) => {
            for error in &errors {
                eprint!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let target = cli.output.clone().or_else(|| {
        cli.input.as_ref().map(|input| {
            let mut name = input.clone().into_os_string();
            name.push(".");
            name.push(cli.file_type.extension());
            PathBuf::from(name)
        })
    });

    let written = match &target {
        Some(path) => fs::write(path, &output),
        None => io::stdout().write_all(output.as_bytes()),
    };
    if let Err(e) = written {
        let name = target
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdout>".to_string());
        eprintln!("Error writing '{}': {}", name, e);
        std::process::exit(1);
    }
    tracing::info!(output = ?target, "done");
}

fn print_intro() {
    println!(
        r#"Syntree - draw bracket-notated trees

USAGE:
    syntree [OPTIONS] [FILE]
    echo '[S [NP a] [VP b]]' | syntree > tree.svg

Labels are plain words or raw strings with properties:
    [S [NP R"(label = "the dog" color = red)"] [VP barks]]

Run `syntree --help` for all options."#
    );
}
