use std::path::PathBuf;
use std::process;

use clap::Parser;
use img2tool::*;
use log::{debug, info, LevelFilter};

mod logger;

/// Parse, create and extract IMG2 firmware image containers.
#[derive(Parser, Debug)]
#[command(
    name = "img2tool",
    version,
    about = "Parse, create and extract IMG2 firmware images"
)]
struct Cli {
    /// Create an IMG2 image at PATH with FILE as payload (empty when FILE is omitted)
    #[arg(
        short = 'c',
        long = "create",
        value_name = "PATH",
        conflicts_with_all = ["extract", "outfile"]
    )]
    create: Option<PathBuf>,

    /// Extract the payload of FILE
    #[arg(short = 'e', long = "extract")]
    extract: bool,

    /// Add an extension, <type>=<string> or <type>-<hexbytes> (repeatable),
    /// e.g. -E vers="hello world" or -E vers-41424344
    #[arg(
        short = 'E',
        long = "extension",
        value_name = "EXT",
        value_parser = parse_extension
    )]
    extensions: Vec<Extension>,

    /// Output path for the extracted payload
    #[arg(short = 'o', long = "outfile", value_name = "PATH")]
    outfile: Option<PathBuf>,

    /// Image type for -c (exactly 4 characters, e.g. krnl)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    image_type: Option<Tag>,

    /// Load address for -c (hex, e.g. 18000000)
    #[arg(
        short = 'a',
        long = "load-address",
        value_parser = parse_hex_u32,
        default_value = "0"
    )]
    load_addr: u32,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Raw payload for -c, IMG2 image otherwise
    #[arg()]
    file: Option<PathBuf>,
}

fn parse_hex_u32(s: &str) -> std::result::Result<u32, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(digits, 16).map_err(|_| format!("invalid hex value: {s}"))
}

fn log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::Error;
    }
    match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::StderrLogger::new(log_level(&cli)).init() {
        eprintln!("img2tool: {e}");
    }
    debug!("img2tool {VERSION}");

    // ---- Create mode ----
    if let Some(outfile) = &cli.create {
        let image_type = match cli.image_type {
            Some(t) => t,
            None => {
                eprintln!("Error: Option -t with the image type was not specified");
                process::exit(1);
            }
        };

        let params = Img2Params::builder(image_type)
            .load_addr(cli.load_addr)
            .extensions(cli.extensions.iter().cloned())
            .build();

        match create_image(&params, cli.file.as_deref(), outfile) {
            Ok(()) => info!("Created IMG2 file at {}", outfile.display()),
            Err(e) => {
                eprintln!("img2tool: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let imagefile = match &cli.file {
        Some(f) => f,
        None => {
            eprintln!(
                "Usage: img2tool [-e -o outfile] image\n\
                 \x20      img2tool -c outfile -t type [-E ext]... [payload]"
            );
            process::exit(1);
        }
    };

    // ---- Extract mode ----
    if cli.extract {
        let outfile = match &cli.outfile {
            Some(o) => o,
            None => {
                eprintln!("Error: Option -o with the output file was not specified");
                process::exit(1);
            }
        };
        match extract_payload(imagefile, outfile) {
            Ok(()) => info!("Extracted IMG2 payload to {}", outfile.display()),
            Err(e) => {
                eprintln!("img2tool: {}: {}", imagefile.display(), e);
                process::exit(1);
            }
        }
        return;
    }

    // ---- List mode ----
    match read_image(imagefile) {
        Ok(info) => print_image_info(&info),
        Err(e) => {
            eprintln!("img2tool: {}: {}", imagefile.display(), e);
            process::exit(1);
        }
    }
}
