use clap::{Parser as ClapParser, Subcommand};
use sql2mongo::cli::{self, CliError, TranslateOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sql2mongo")]
#[command(about = "sql2mongo - Translate SQL statements into MongoDB shell commands")]
#[command(version)]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one SQL statement
    Translate {
        /// The SQL statement (reads from stdin if not provided)
        sql: Vec<String>,

        /// Read the statement from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the parsed statement before the command
        #[arg(long)]
        ast: bool,
    },

    /// Translate the built-in demo statements
    Demos,

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'sql2mongo docs' to list topics)
        topic: String,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Translate { sql, file, ast } => run_translate(sql, file, ast),
        Commands::Demos => {
            for outcome in cli::run_demos() {
                match outcome.render() {
                    Ok(text) => println!("{}", text),
                    Err(text) => eprintln!("{}", text),
                }
            }
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => cli::get_doc_topic(&topic).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_translate(sql: Vec<String>, file: Option<PathBuf>, ast: bool) -> Result<(), CliError> {
    let stdin = if sql.is_empty() && file.is_none() && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Some(buffer)
    } else {
        None
    };

    let options = TranslateOptions {
        sql,
        file,
        stdin,
        show_ast: ast,
    };
    if options.is_empty() {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let output = cli::execute_translate(&options)?;
    println!("{}", output.render());
    Ok(())
}
