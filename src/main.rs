use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use strkit::config::{Config, LineEndingMode};
use strkit::Operation;

#[derive(Subcommand)]
enum Command {
    /// Strip surrounding tabs, spaces, CR and LF
    Trim,
    /// Strip leading tabs, spaces, CR and LF
    Ltrim,
    /// Strip trailing tabs, spaces, CR and LF
    Rtrim,
    /// Remove the indentation shared by every line
    Unindent,
    /// Prefix every line
    Indent {
        /// Prefix (default: from config)
        #[arg(short, long)]
        prefix: Option<String>,
    },
    /// Print the smallest leading space/tab run across lines
    IndentWidth,
    /// Print the next string in odometer order
    Succ,
    /// Collapse runs of repeated characters
    Dedupe,
    /// Print the length in code points
    Len {
        /// Count grapheme clusters instead
        #[arg(long, conflicts_with = "bytes")]
        graphemes: bool,
        /// Count UTF-8 bytes instead
        #[arg(long)]
        bytes: bool,
    },
    /// Pad both sides to a width
    Pad {
        #[arg(short, long)]
        width: usize,
        /// Pad string (default: from config)
        #[arg(long)]
        with: Option<String>,
    },
    /// Pad the left side to a width
    Lpad {
        #[arg(short, long)]
        width: usize,
        #[arg(long)]
        with: Option<String>,
    },
    /// Pad the right side to a width
    Rpad {
        #[arg(short, long)]
        width: usize,
        #[arg(long)]
        with: Option<String>,
    },
    /// Print every match, one per line
    Grep { pattern: String },
    /// Print whether the pattern matches; exit status 1 when it does not
    IsMatch { pattern: String },
    /// Print a capture group (index or name) of the first match
    Group { pattern: String, group: String },
    /// Surround every match with markers
    Highlight {
        pattern: String,
        #[arg(long)]
        left: Option<String>,
        #[arg(long)]
        right: Option<String>,
    },
    /// Keep matching lines
    Filter {
        pattern: String,
        /// Keep the lines that do not match
        #[arg(short = 'v', long)]
        invert: bool,
    },
    /// Normalize path separators to backslashes
    WinPath,
    /// Normalize path separators to forward slashes
    LinuxPath,
}

impl From<Command> for Operation {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Trim => Operation::Trim,
            Command::Ltrim => Operation::Ltrim,
            Command::Rtrim => Operation::Rtrim,
            Command::Unindent => Operation::Unindent,
            Command::Indent { prefix } => Operation::Indent { prefix },
            Command::IndentWidth => Operation::IndentWidth,
            Command::Succ => Operation::Succ,
            Command::Dedupe => Operation::Dedupe,
            Command::Len { graphemes, bytes } => Operation::Len { graphemes, bytes },
            Command::Pad { width, with } => Operation::Pad { width, with },
            Command::Lpad { width, with } => Operation::Lpad { width, with },
            Command::Rpad { width, with } => Operation::Rpad { width, with },
            Command::Grep { pattern } => Operation::Grep { pattern },
            Command::IsMatch { pattern } => Operation::IsMatch { pattern },
            Command::Group { pattern, group } => Operation::Group { pattern, group },
            Command::Highlight {
                pattern,
                left,
                right,
            } => Operation::Highlight {
                pattern,
                left,
                right,
            },
            Command::Filter { pattern, invert } => Operation::Filter { pattern, invert },
            Command::WinPath => Operation::WinPath,
            Command::LinuxPath => Operation::LinuxPath,
        }
    }
}

#[derive(Parser)]
#[command(name = "strkit", about = "strkit — line-ending aware string utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Input text (default: stdin)
    #[arg(short, long, global = true)]
    text: Option<String>,

    /// Output line ending: preserve, lf, crlf (default: from config or preserve)
    #[arg(long, global = true)]
    line_ending: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["strkit.config.json", "config/strkit.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                log::debug!("using config {}", path.display());
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(ref mode) = cli.line_ending {
        config.line_ending = match mode.as_str() {
            "preserve" => LineEndingMode::Preserve,
            "lf" => LineEndingMode::Lf,
            "crlf" => LineEndingMode::Crlf,
            _ => die(&format!("invalid line ending: {}", mode)),
        };
    }

    let input = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| die(&format!("cannot read stdin: {}", e)));
            buf
        }
    };

    let op = Operation::from(cli.command);
    let result = strkit::apply(&input, &op, &config);

    if result.ends_with('\n') {
        print!("{}", result);
    } else {
        println!("{}", result);
    }

    if matches!(op, Operation::IsMatch { .. }) && result != "true" {
        process::exit(1);
    }
}
