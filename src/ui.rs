use anyhow::{Context, Result};
use console::Style;
use passgen::{
    assess, generate_password, ByteSource, CharacterClasses, Error, Strength, Verdict,
};
use rpassword::read_password;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

pub const MAX_PASSWORD_LENGTH: usize = 1024 * 1024;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    Check,
    Quit,
}

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Generate),
        "2" => Some(MenuChoice::Check),
        "3" => Some(MenuChoice::Quit),
        _ => None,
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

pub fn parse_length(input: &str) -> std::result::Result<usize, String> {
    let length: i64 = input
        .trim()
        .parse()
        .map_err(|e| format!("Error reading password length: {}", e))?;

    if length < 1 {
        return Err("Password length must be a positive number. Please try again.".to_string());
    }

    let length = length as u64;
    if length > MAX_PASSWORD_LENGTH as u64 {
        return Err(format!(
            "Password length too long ({}, maximum is {})",
            length, MAX_PASSWORD_LENGTH
        ));
    }

    Ok(length as usize)
}

fn verdict_style(verdict: Verdict, options: &DisplayOptions) -> Style {
    if !options.color_support {
        return Style::new();
    }
    match verdict {
        Verdict::VeryGood | Verdict::Good => Style::new().green(),
        Verdict::Medium => Style::new().yellow(),
        Verdict::Weak => Style::new().red(),
    }
}

pub fn display_password<W: Write>(
    out: &mut W,
    password: &Zeroizing<String>,
    options: &DisplayOptions,
) -> Result<()> {
    if options.quiet {
        writeln!(out, "{}", &**password)?;
    } else {
        writeln!(out, "Your generated password is: {}", &**password)?;
    }
    Ok(())
}

pub fn display_strength<W: Write>(
    out: &mut W,
    strength: &Strength,
    options: &DisplayOptions,
) -> Result<()> {
    if options.quiet {
        writeln!(out, "{}", strength.score)?;
        return Ok(());
    }

    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let status = if strength.verdict >= Verdict::Good {
        check_ok
    } else {
        check_warn
    };
    let style = verdict_style(strength.verdict, options);

    writeln!(
        out,
        "{} Score {}/{}: {}",
        style.apply_to(format!("[{}]", status)),
        style.apply_to(strength.score),
        passgen::strength::MAX_SCORE,
        style.apply_to(strength.verdict)
    )?;
    Ok(())
}

/// Reads a password typed or piped on one line, dropping only the line ending.
pub fn read_secret_line<R: BufRead>(input: &mut R) -> Result<Option<Zeroizing<Vec<u8>>>> {
    let mut line = Zeroizing::new(Vec::new());
    let read = input
        .read_until(b'\n', &mut line)
        .context("Failed to read password")?;
    if read == 0 {
        return Ok(None);
    }
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    Ok(Some(line))
}

/// Line-based menu session over any reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    options: DisplayOptions,
    hidden_input: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: DisplayOptions, hidden_input: bool) -> Self {
        Self {
            input,
            output,
            options,
            hidden_input,
        }
    }

    /// Reads one raw line; bytes that are not valid UTF-8 are kept as they are.
    fn read_line(&mut self) -> Result<Option<Zeroizing<Vec<u8>>>> {
        let mut line = Zeroizing::new(Vec::new());
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<Zeroizing<Vec<u8>>>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nEnter 1 - Generate Password")?;
        writeln!(self.output, "Enter 2 - Password Strength Check")?;
        writeln!(self.output, "Enter 3 - Quit")?;
        write!(self.output, "\nChoice: ")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn run<S: ByteSource>(&mut self, mut source: S) -> Result<()> {
        writeln!(self.output, "Welcome to your Password Generator")?;

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed");
                writeln!(self.output)?;
                return Ok(());
            };

            match std::str::from_utf8(&line).ok().and_then(parse_menu_choice) {
                Some(MenuChoice::Generate) => self.request_password(&mut source)?,
                Some(MenuChoice::Check) => self.check_password()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Closing the program..")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Select one of the available commands!")?,
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>> {
        loop {
            let Some(line) = self.prompt(question)? else {
                return Ok(None);
            };
            match std::str::from_utf8(&line).ok().and_then(parse_yes_no) {
                Some(answer) => return Ok(Some(answer)),
                None => writeln!(self.output, "Please answer with either yes or no")?,
            }
        }
    }

    fn ask_classes(&mut self) -> Result<Option<CharacterClasses>> {
        writeln!(
            self.output,
            "\nAnswer the following questions with either yes or no"
        )?;

        let mut classes = CharacterClasses::NONE;
        let questions: [(&str, &mut bool); 4] = [
            ("Do you want to use Uppercase letters? ", &mut classes.upper),
            ("Do you want to use Lowercase letters? ", &mut classes.lower),
            ("Do you want to use Numbers? ", &mut classes.digits),
            ("Do you want to use Symbols? ", &mut classes.symbols),
        ];

        for (question, include) in questions {
            match self.ask_yes_no(question)? {
                Some(answer) => *include = answer,
                None => return Ok(None),
            }
        }

        Ok(Some(classes))
    }

    pub fn request_password<S: ByteSource>(&mut self, source: S) -> Result<()> {
        let Some(classes) = self.ask_classes()? else {
            return Ok(());
        };

        if !classes.any() {
            writeln!(self.output, "You have selected no characters")?;
            return Ok(());
        }

        let Some(line) = self.prompt("How long do you want your password to be? ")? else {
            return Ok(());
        };

        let length = match std::str::from_utf8(&line)
            .map_err(|e| format!("Error reading password length: {}", e))
            .and_then(parse_length)
        {
            Ok(length) => length,
            Err(message) => {
                writeln!(self.output, "{}", message)?;
                return Ok(());
            }
        };

        info!(?classes, length, "generating password");

        match generate_password(&classes.alphabet(), length, source) {
            Ok(password) => display_password(&mut self.output, &password, &self.options),
            Err(Error::InvalidRequest(reason)) => {
                writeln!(self.output, "{}", reason)?;
                Ok(())
            }
            Err(e @ Error::EntropySource(_)) => {
                warn!(error = %e, "password generation aborted");
                writeln!(self.output, "Could not generate a password: {}", e)?;
                Ok(())
            }
        }
    }

    fn read_secret(&mut self) -> Result<Option<Zeroizing<Vec<u8>>>> {
        if self.hidden_input {
            let password = read_password().context("Failed to read password")?;
            return Ok(Some(Zeroizing::new(password.into_bytes())));
        }

        read_secret_line(&mut self.input)
    }

    pub fn check_password(&mut self) -> Result<()> {
        write!(self.output, "\nEnter your password: ")?;
        self.output.flush()?;

        let Some(password) = self.read_secret()? else {
            return Ok(());
        };

        let strength = assess(password.as_slice());
        debug!(score = strength.score, "password scored");

        display_strength(&mut self.output, &strength, &self.options)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
