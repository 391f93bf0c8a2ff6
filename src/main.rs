use clap::{ArgEnum, Parser, Subcommand};
use directories::ProjectDirs;
use log::{info, warn, LevelFilter};
use statr::{
    input::{read_pairs, read_sample},
    plot::{regression_plot, Plot, Series, Style},
    stats,
    summary::{history_path, Summary},
    ui, Sample,
};
use std::{
    error::Error,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// descriptive statistics and charts for samples of numbers
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Log at debug level
    #[clap(short = 'v', long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Range, mean, median, quartiles and standard deviations of a sample
    #[clap(allow_negative_numbers = true)]
    Describe {
        /// Values of the sample; read from --file or stdin when omitted
        values: Vec<String>,

        /// File holding the sample (JSON array, or whitespace/comma separated)
        #[clap(short = 'f', long)]
        file: Option<PathBuf>,

        #[clap(long, arg_enum, default_value_t = Format::Text)]
        format: Format,

        /// Append the summary to the history log
        #[clap(long)]
        save: bool,
    },

    /// Density of a normal distribution at X
    #[clap(allow_negative_numbers = true)]
    Density {
        x: f64,

        #[clap(short = 'm', long, default_value_t = 0.0)]
        mean: f64,

        #[clap(short = 's', long, default_value_t = 1.0)]
        stddev: f64,
    },

    /// Chart x/y pairs in the terminal
    Plot {
        /// File holding the pairs ({"x": [..], "y": [..]}, or one pair per line)
        #[clap(short = 'f', long)]
        file: PathBuf,

        /// Color and shape of the series, e.g. "r", "go", "k-"
        #[clap(long)]
        style: Option<String>,

        #[clap(short = 't', long, default_value = "statr")]
        title: String,
    },

    /// Fit a line through x/y pairs
    Regress {
        /// File holding the pairs ({"x": [..], "y": [..]}, or one pair per line)
        #[clap(short = 'f', long)]
        file: PathBuf,

        /// Color and shape of the data series
        #[clap(long, default_value = "r")]
        style: String,

        /// Chart the data and the fitted line
        #[clap(long)]
        plot: bool,

        #[clap(long, arg_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_logging(args.verbose);
    info!("running {:?}", args.command);

    match args.command {
        Command::Describe {
            values,
            file,
            format,
            save,
        } => {
            let sample = gather(values, file)?;
            let summary = Summary::new(&sample)?;

            match format {
                Format::Text => print!("{}", summary),
                Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }

            if save {
                match history_path() {
                    Some(path) => summary.save(&path)?,
                    None => warn!("no home directory, summary not saved"),
                }
            }
        }
        Command::Density { x, mean, stddev } => {
            println!("{}", stats::normal_density(x, mean, stddev)?);
        }
        Command::Plot { file, style, title } => {
            let paired = read_pairs(file)?;
            let style = style.as_deref().unwrap_or_default().parse::<Style>()?;

            let plot = Plot::new(title).series(Series::new("data", paired.points(), style));
            ui::show(&plot)?;
        }
        Command::Regress {
            file,
            style,
            plot,
            format,
        } => {
            let paired = read_pairs(file)?;
            let (fit, chart) = regression_plot(&paired.x, &paired.y, style.parse::<Style>()?)?;

            if plot {
                ui::show(&chart)?;
            }

            match format {
                Format::Text => println!(
                    "slope {}\nintercept {}\nr {}\np {}\nstderr {}\nintercept stderr {}",
                    fit.slope,
                    fit.intercept,
                    fit.r_value,
                    fit.p_value,
                    fit.stderr,
                    fit.intercept_stderr
                ),
                Format::Json => println!("{}", serde_json::to_string_pretty(&fit)?),
            }
        }
    }

    Ok(())
}

/// values from the command line, else the file, else stdin
fn gather(values: Vec<String>, file: Option<PathBuf>) -> statr::Result<Sample> {
    if !values.is_empty() {
        return values.join(" ").parse();
    }

    match file {
        Some(path) => read_sample(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text.parse()
        }
    }
}

fn init_logging(verbose: bool) {
    let level = match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    let proj_dirs = match ProjectDirs::from("", "", "statr") {
        Some(proj_dirs) => proj_dirs,
        None => {
            eprintln!("statr: no home directory, logging disabled");
            return;
        }
    };

    // a log that cannot be opened must not stop the command
    let log_path = proj_dirs.data_local_dir().join("statr.log");
    if let Err(err) = open_log(&log_path, level) {
        eprintln!("statr: logging disabled, cannot open {:?}: {}", log_path, err);
    }
}

fn open_log(log_path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    simple_logging::log_to_file(log_path, level)
}
