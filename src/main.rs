mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use passgen::{assess, generate_password, CharacterClasses, OsEntropy};
use std::io::{self, IsTerminal, Write};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(
    name = "passgen",
    version,
    author,
    about = "Random password generator with a simple strength check"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print only the bare result
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print one random password
    Generate {
        /// Number of characters
        #[arg(short, long, default_value = "16", value_parser = ui::parse_length)]
        length: usize,

        /// Leave out uppercase letters A-Z
        #[arg(long)]
        no_upper: bool,

        /// Leave out lowercase letters a-z
        #[arg(long)]
        no_lower: bool,

        /// Leave out digits 0-9
        #[arg(long)]
        no_digits: bool,

        /// Leave out symbols such as !@#$%
        #[arg(long)]
        no_symbols: bool,
    },

    /// Score a password; prompts without echo when none is given
    Check {
        /// Password to score; read from standard input when omitted
        password: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: !cli.no_color && ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let stdout = io::stdout();

    match cli.command {
        None => {
            let hidden_input = io::stdin().is_terminal();
            let mut session = ui::Session::new(
                io::stdin().lock(),
                stdout.lock(),
                options,
                hidden_input,
            );
            session.run(OsEntropy)
        }
        Some(Command::Generate {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
        }) => {
            let classes = CharacterClasses {
                upper: !no_upper,
                lower: !no_lower,
                digits: !no_digits,
                symbols: !no_symbols,
            };
            if !classes.any() {
                anyhow::bail!("You have selected no characters");
            }

            let password = generate_password(&classes.alphabet(), length, OsEntropy)
                .context("Failed to generate password")?;
            ui::display_password(&mut stdout.lock(), &password, &options)
        }
        Some(Command::Check { password }) => {
            let password = match password {
                Some(password) => Zeroizing::new(password.into_bytes()),
                None if io::stdin().is_terminal() => {
                    print!("Enter your password: ");
                    io::stdout().flush()?;
                    let password =
                        rpassword::read_password().context("Failed to read password")?;
                    Zeroizing::new(password.into_bytes())
                }
                None => ui::read_secret_line(&mut io::stdin().lock())?
                    .context("No password given on standard input")?,
            };

            ui::display_strength(&mut stdout.lock(), &assess(password.as_slice()), &options)
        }
    }
}
