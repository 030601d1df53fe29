use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::{fs, path::PathBuf, time::Instant};
use tinyc::{
    errors::FrontResult, frontend::lexer::Lexer, has_source_extension, open,
    printer::{print_tokens, render_ast}, Dialect,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "TINY front end: scans and parses a source file and dumps its syntax tree",
    long_about = "TINY front end: scans and parses a source file and dumps its syntax tree.\n\
                 On success the tree is written after an AST banner; on a syntax error the\n\
                 diagnostic is written instead and the exit status is 1.\n\
                 \n\
                 Example usage:\n\
                 tinyc sample.tny                    # Print the syntax tree\n\
                 tinyc sample.tny -o sample.ast      # Write the tree to a file\n\
                 tinyc sample.tny --tokens           # Print the token stream\n\
                 tinyc sample.tny --dialect core     # Reject procedures, loop control and floats\n\
                 tinyc sample.tny --timing           # Show scan/parse statistics"
)]
struct Cli {
    // The path to the file to parse
    path: PathBuf,

    // Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Language dialect
    #[arg(long, value_enum, default_value = "full")]
    dialect: DialectArg,

    // Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    // Show timing and size statistics
    #[arg(short, long)]
    timing: bool,

    // Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    // Only report errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectArg {
    /// Complete language
    Full,
    /// Without proc/call/break/continue and float literals
    Core,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Full => Dialect::Full,
            DialectArg::Core => Dialect::Core,
        }
    }
}

// Scan/parse statistics for --timing
#[derive(Debug, Default)]
struct CompilationStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_logging(args: &Cli) {
    let log_level = if args.quiet {
        log::LevelFilter::Error
    } else {
        match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
}

// Token dump phase (--tokens)
fn lexical_analysis(args: &Cli, dialect: Dialect, stats: &mut CompilationStats) -> FrontResult<String> {
    let lexer_start = Instant::now();
    let source = open(&args.path)?;
    let tokens = Lexer::new(source, dialect).collect::<FrontResult<Vec<_>>>()?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();
    info!("Lexical analysis completed in {:.3}s, {} tokens", stats.lexer_time, stats.token_count);
    Ok(print_tokens(&tokens))
}

// Parsing phase: scanning is interleaved with parsing
fn parsing_phase(args: &Cli, dialect: Dialect, stats: &mut CompilationStats) -> FrontResult<String> {
    let parser_start = Instant::now();
    let source = open(&args.path)?;
    let mut parser = tinyc::frontend::Parser::new(source, dialect)?;
    let result = parser.parse();
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.token_count = parser.tokens_scanned();
    let program = result?;
    stats.ast_size = program.node_count();
    info!("Parsing completed in {:.3}s, {} nodes", stats.parser_time, stats.ast_size);
    Ok(render_ast(&program))
}

fn write_output(output: &Option<PathBuf>, text: &str) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                fatal(&format!("Failed to write output file '{}': {}", path.display(), e));
            }
            debug!("Output written to: {}", path.display());
        }
        None => print!("{}", text),
    }
}

// Print compilation statistics
fn print_stats(stats: &CompilationStats) {
    println!("\n Statistics:");
    println!("  Lexical Analysis    {:>8.3}s", stats.lexer_time);
    println!("  Parsing             {:>8.3}s", stats.parser_time);
    println!("  Total Time          {:>8.3}s", stats.total_time);
    println!("  Tokens:             {}", stats.token_count);
    println!("  AST Nodes:          {}", stats.ast_size);
}

fn main() {
    let args = Cli::parse();
    init_logging(&args);

    info!("tinyc v{}", tinyc::VERSION);
    if !has_source_extension(&args.path) {
        warn!("Input file does not have .{} extension", tinyc::config::source::FILE_EXTENSION);
    }

    let dialect = Dialect::from(args.dialect);
    debug!("Input file: {:?}, dialect: {}", args.path, dialect);

    let start_time = Instant::now();
    let mut stats = CompilationStats::default();
    let outcome = if args.tokens {
        lexical_analysis(&args, dialect, &mut stats)
    } else {
        parsing_phase(&args, dialect, &mut stats)
    };
    stats.total_time = start_time.elapsed().as_secs_f64();

    match outcome {
        Ok(report) => {
            write_output(&args.output, &report);
            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) if e.is_syntax_error() => {
            write_output(&args.output, &format!("{}\n", e));
            if args.timing {
                print_stats(&stats);
            }
            std::process::exit(1);
        }
        Err(e) => fatal(&e.to_string()),
    }
}
