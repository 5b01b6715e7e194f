//! # cmparser
//!
//! Command-line front end: parses a binary `.caffemodel` and dumps its layer
//! structure and weight blobs into an output directory.
//!
//! ## Usage
//! ```bash
//! # Parse a model; output lands in ./caffedata
//! cmparser -f ./bvlc_alexnet.caffemodel
//!
//! # Choose the output directory and write plain f32 `.data` files
//! cmparser -f ./bvlc_alexnet.caffemodel -o ./alexnet-dump --raw-data
//! ```

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use caffemodel_parser::config::DEFAULT_OUT_DIR;
use caffemodel_parser::{CaffeModel, DataLayout, Error, ExportConfig, LogSink, Result, sinkln};
use clap::{CommandFactory, Parser};
use clap::error::{ContextKind, ContextValue, ErrorKind};

#[derive(Parser, Debug)]
#[command(
    name = "cmparser",
    version,
    about = "Parse a binary caffemodel and dump its layers and weights",
    long_about = "Parse a binary caffemodel and dump its layers and weights.\n\n\
                  A log of the network structure is written to <OUT_DIR>/cmparser.log \
                  (and echoed to stdout), and every weight blob is written to \
                  <OUT_DIR>/layer_<name>.weight<i>.txt and .data."
)]
struct Cli {
    /// Binary .caffemodel to parse
    #[arg(short = 'f', long = "file-name", value_name = "FILE")]
    file_name: Option<PathBuf>,

    /// Directory receiving the log and the weight dumps
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Write .data files as plain little-endian f32 instead of the legacy
    /// binary+text interleave
    #[arg(long)]
    raw_data: bool,
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os().collect()) {
        Ok(cli) => cli,
        Err(e) => {
            // usage and argument errors go to stdout along with everything else
            println!("{}", e.render().to_string().trim_end());
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}

/// Parse arguments, dropping everything from the first unsupported option on
fn parse_args(mut args: Vec<OsString>) -> std::result::Result<Cli, clap::Error> {
    loop {
        let err = match Cli::try_parse_from(&args) {
            Ok(cli) => return Ok(cli),
            Err(e) if e.kind() == ErrorKind::UnknownArgument => e,
            Err(e) => return Err(e),
        };

        let bad = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(bad)) => bad.clone(),
            _ => return Err(err),
        };
        let Some(position) = rejected_position(&args, &bad) else {
            return Err(err);
        };

        println!(
            "Warning: Unsupported option: {} found, the rest options are ignored!!!",
            bad
        );
        args.truncate(position);
    }
}

/// Index in `args` of the argument clap rejected as `bad`.
///
/// Values consumed by options such as `-f <FILE>` are skipped, so a stray
/// positional equal to an option's value is located correctly.
fn rejected_position(args: &[OsString], bad: &str) -> Option<usize> {
    let command = Cli::command();
    let takes_value = |arg: &str| {
        command.get_arguments().any(|opt| {
            opt.get_action().takes_values()
                && (opt.get_long().is_some_and(|l| arg.strip_prefix("--") == Some(l))
                    || opt.get_short().is_some_and(|c| {
                        arg.len() == 1 + c.len_utf8() && arg.starts_with('-') && arg.ends_with(c)
                    }))
        })
    };
    let name_of = |arg: &str| arg.split('=').next().unwrap_or_default().to_string();
    let bad_name = name_of(bad);

    let mut idx = 1;
    while idx < args.len() {
        let arg = args[idx].to_str();
        if arg.is_some_and(|a| a == bad || (a.starts_with('-') && name_of(a) == bad_name)) {
            return Some(idx);
        }
        if arg.is_some_and(|a| takes_value(a)) {
            idx += 1;
        }
        idx += 1;
    }
    None
}

fn run(cli: Cli) -> Result<()> {
    let layout = if cli.raw_data {
        DataLayout::Raw
    } else {
        DataLayout::Interleaved
    };
    let config = ExportConfig::new(cli.out_dir).with_layout(layout);

    // a directory that cannot be created surfaces as a log open failure below
    if let Err(e) = config.prepare() {
        println!(
            "Warning: Failed to create output directory `{}': {}",
            config.out_dir().display(),
            e
        );
    }

    let Some(file_name) = cli.file_name else {
        println!("[Error]: -f option is not specified. To view the complete help message type in:");
        println!("    cmparser -h");
        return Err(Error::Argument("-f option is not specified".to_string()));
    };

    let mut sink = LogSink::create(&config.log_path()).inspect_err(|e| {
        println!("[Error]: {}", e);
    })?;

    sinkln!(sink, "[Info]: Reading proto message from '{}'...", file_name.display());
    let model = CaffeModel::load_from_file(&file_name).inspect_err(|e| {
        sinkln!(sink, "[Error]: {}", e);
    })?;

    let summary = model.walk(&config, &mut sink);
    sinkln!(
        sink,
        "[Info]: Parsed {} layers and {} blobs, {} files written, {} skipped",
        summary.layers,
        summary.blobs,
        summary.files_written,
        summary.files_skipped
    );
    Ok(())
}
