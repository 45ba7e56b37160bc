use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::Path,
};

use clap::Parser;
use codespan_reporting::{
    diagnostic::{Diagnostic, Label, Severity},
    files::SimpleFiles,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use log::debug;
use regex::Regex;
use stringkit::{inflector, random, text};

#[derive(Parser)]
#[command(disable_help_subcommand = true)]
enum Args {
    /// Convert text to the given casing. Reads one input per line from stdin when no text is given.
    Convert {
        case: Case,
        inputs: Vec<String>,
    },
    /// Check that identifiers, or file names with --files, use the given casing.
    Check(CheckArgs),
    /// Print a random string.
    Random(RandomArgs),
    /// Pluralize the last word of each argument.
    Plural {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

#[derive(clap::Args)]
struct CheckArgs {
    /// The casing every input must use.
    #[arg(long)]
    case: Case,
    /// Check that inputs also match the given regex.
    #[arg(long)]
    pattern: Option<Regex>,
    /// Treat inputs as directories and check the name of every file below them.
    /// Files ignored by .gitignore are skipped.
    #[arg(long)]
    files: bool,
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(clap::Args)]
struct RandomArgs {
    /// Number of characters to generate.
    #[arg(long, short, default_value_t = 16)]
    length: usize,
    /// Characters to pick from. Ignored with --password.
    #[arg(long, value_enum, default_value_t = Charset::Alnum)]
    charset: Charset,
    /// Use the operating system's secure generator.
    #[arg(long, conflicts_with = "password")]
    crypto: bool,
    /// Generate a password with at least one lowercase, uppercase, digit and symbol.
    #[arg(long)]
    password: bool,
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum Case {
    #[value(name = "CamelCase", aliases(["camel-case", "camel"]))]
    Camel,
    #[value(name = "kebab-case", aliases(["kebab"]))]
    Kebab,
    #[value(name = "snake_case", aliases(["snake-case", "snake"]))]
    Snake,
    #[value(name = "title", aliases(["title-case"]))]
    Title,
}

impl Case {
    fn inflector(self) -> inflector::Case {
        match self {
            Case::Camel => inflector::Case::Camel,
            Case::Kebab => inflector::Case::Kebab,
            Case::Snake => inflector::Case::Snake,
            Case::Title => inflector::Case::Title,
        }
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inflector())
    }
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum Charset {
    Lower,
    Upper,
    Numbers,
    Alnum,
    Token68,
}

impl Charset {
    fn alphabet(self) -> &'static str {
        match self {
            Charset::Lower => random::ALPHA_LOWER,
            Charset::Upper => random::ALPHA_UPPER,
            Charset::Numbers => random::NUMBERS,
            Charset::Alnum => random::ALPHA_NUMERIC,
            Charset::Token68 => random::TOKEN68,
        }
    }
}

type FileId = usize;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = &mut io::stdout().lock();

    match args {
        Args::Convert { case, inputs } => {
            let case = case.inflector();
            if inputs.is_empty() {
                debug!("converting stdin to {case} case");
                for line in io::stdin().lock().lines() {
                    writeln!(stdout, "{}", case.convert(&line?))?;
                }
            } else {
                for input in &inputs {
                    writeln!(stdout, "{}", case.convert(input))?;
                }
            }
        }
        Args::Check(args) => {
            Checker::new(args).check()?;
        }
        Args::Random(args) => {
            let generated = if args.password {
                if args.length < random::MIN_PASSWORD_LEN {
                    return Err(format!(
                        "password length must be at least {}",
                        random::MIN_PASSWORD_LEN
                    )
                    .into());
                }
                random::password_string(args.length)
            } else if args.crypto {
                random::crypto_string(args.charset.alphabet(), args.length)?
            } else {
                random::random_string(args.charset.alphabet(), args.length)?
            };
            writeln!(stdout, "{generated}")?;
        }
        Args::Plural { inputs } => {
            for input in &inputs {
                writeln!(stdout, "{}", text::plural(input))?;
            }
        }
    }

    Ok(())
}

struct Emitter {
    writer: StandardStream,
    config: codespan_reporting::term::Config,
    has_errors: bool,
}

impl Emitter {
    fn new() -> Self {
        Self {
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: codespan_reporting::term::Config::default(),
            has_errors: false,
        }
    }

    fn abort_if_errors(&self) {
        if self.has_errors {
            std::process::exit(1);
        }
    }

    fn emit(
        &mut self,
        db: &FilesDB,
        diagnostic: Diagnostic<FileId>,
    ) -> Result<(), codespan_reporting::files::Error> {
        if diagnostic.severity >= Severity::Error {
            self.has_errors = true;
        }
        term::emit(
            &mut self.writer.lock(),
            &self.config,
            &db.files,
            &diagnostic,
        )
    }
}

/// A name to check, located in the source it was taken from.
struct Identifier {
    file_id: FileId,
    span: std::ops::Range<usize>,
}

struct Checker {
    args: CheckArgs,
    db: FilesDB,
    emitter: Emitter,
}

impl Checker {
    fn new(args: CheckArgs) -> Self {
        Self {
            args,
            db: FilesDB::new(),
            emitter: Emitter::new(),
        }
    }

    fn check(&mut self) -> Result<(), Box<dyn Error>> {
        let identifiers = if self.args.files {
            self.collect_file_names()?
        } else {
            self.collect_arguments()
        };
        debug!(
            "checking {} identifiers for {} case",
            identifiers.len(),
            self.args.case
        );

        for identifier in &identifiers {
            self.report_inconsistent_casing(identifier)?;
            self.report_pattern_mismatch(identifier)?;
        }
        self.emitter.abort_if_errors();

        Ok(())
    }

    fn collect_arguments(&mut self) -> Vec<Identifier> {
        self.args
            .inputs
            .clone()
            .into_iter()
            .enumerate()
            .map(|(idx, input)| {
                let span = 0..input.len();
                let file_id = self.db.add(format!("argument {}", idx + 1), input);
                Identifier { file_id, span }
            })
            .collect()
    }

    fn collect_file_names(&mut self) -> Result<Vec<Identifier>, ignore::Error> {
        let mut identifiers = vec![];
        for root in self.args.inputs.clone() {
            debug!("walking {root}");
            for result in ignore::Walk::new(&root) {
                let entry = result?;

                let Some(file_type) = entry.file_type() else {
                    continue;
                };

                if file_type.is_file() {
                    if let Some(identifier) = self.file_name_identifier(entry.path()) {
                        identifiers.push(identifier);
                    }
                }
            }
        }
        Ok(identifiers)
    }

    /// The stem of the file name at `path`, with the name itself as source.
    fn file_name_identifier(&mut self, path: &Path) -> Option<Identifier> {
        let (Some(name), Some(stem)) = (
            path.file_name().and_then(|name| name.to_str()),
            path.file_stem().and_then(|stem| stem.to_str()),
        ) else {
            debug!("skipping {}: file name is not valid UTF-8", path.display());
            return None;
        };
        let span = 0..stem.len();
        let parent = path.parent().unwrap_or(Path::new(""));
        let file_id = self.db.add(parent.display().to_string(), name.to_string());
        Some(Identifier { file_id, span })
    }

    fn report_inconsistent_casing(
        &mut self,
        identifier: &Identifier,
    ) -> Result<(), Box<dyn Error>> {
        let case = self.args.case;
        let text = self.db.text(identifier)?;
        if !case.inflector().matches(text) {
            let suggestion = case.inflector().convert(text);
            let diagnostic = self.db.invalid_case_diagnostic(identifier, case, &suggestion);
            self.emit_diagnostic(diagnostic)?;
        }
        Ok(())
    }

    fn report_pattern_mismatch(&mut self, identifier: &Identifier) -> Result<(), Box<dyn Error>> {
        if let Some(re) = &self.args.pattern {
            if !re.is_match(self.db.text(identifier)?) {
                let diagnostic = self.db.pattern_mismatch_diagnostic(identifier, re);
                self.emitter.emit(&self.db, diagnostic)?;
            }
        }
        Ok(())
    }

    fn emit_diagnostic(
        &mut self,
        diagnostic: Diagnostic<FileId>,
    ) -> Result<(), codespan_reporting::files::Error> {
        self.emitter.emit(&self.db, diagnostic)
    }
}

struct FilesDB {
    pub files: SimpleFiles<String, String>,
}

impl FilesDB {
    fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
        }
    }

    fn add(&mut self, name: String, source: String) -> FileId {
        self.files.add(name, source)
    }

    fn text(&self, identifier: &Identifier) -> Result<&str, codespan_reporting::files::Error> {
        let file = self.files.get(identifier.file_id)?;
        Ok(&file.source()[identifier.span.clone()])
    }

    fn label(&self, identifier: &Identifier) -> Label<FileId> {
        Label::primary(identifier.file_id, identifier.span.clone())
    }

    fn invalid_case_diagnostic(
        &self,
        identifier: &Identifier,
        case: Case,
        suggestion: &str,
    ) -> Diagnostic<FileId> {
        let label = self
            .label(identifier)
            .with_message(format!("should be written as {suggestion}"));
        Diagnostic::error()
            .with_message(format!("name doesn't use {case} case"))
            .with_labels(vec![label])
    }

    fn pattern_mismatch_diagnostic(&self, identifier: &Identifier, re: &Regex) -> Diagnostic<FileId> {
        Diagnostic::error()
            .with_message(format!("name doesn't match pattern `{re}`"))
            .with_labels(vec![self.label(identifier)])
    }
}
