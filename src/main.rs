use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

use annotype::error::{AnnotypeError, DiagnosticError};
use annotype::lexer::{format_tokens, tokenize};
use annotype::{parse_type_annotation, NameMap, Renderer, TypeNode};

#[derive(Parser)]
#[command(name = "annotype")]
#[command(author, version, about = "Parse and render doc-comment type annotations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an annotation and print its type tree
    Parse {
        /// The annotation text, e.g. "(a, ?b) → c"
        annotation: String,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the tokens of an annotation
    Tokens {
        annotation: String,
    },

    /// Print an annotation in canonical form
    Fmt {
        annotation: String,
    },

    /// Check a file holding one annotation per line
    Check {
        /// Lines that are empty or start with '#' are skipped
        input: PathBuf,
    },

    /// Render an annotation as a TypeScript type
    Render {
        annotation: String,

        /// JSON name map with entity replacements and import origins
        #[arg(long)]
        names: Option<PathBuf>,

        /// Emit `export type <ALIAS> = ...;` instead of a bare type
        #[arg(long)]
        alias: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Parse { annotation, json } => parse(&annotation, json),
        Commands::Tokens { annotation } => tokens(&annotation),
        Commands::Fmt { annotation } => fmt(&annotation),
        Commands::Check { input } => check(input),
        Commands::Render {
            annotation,
            names,
            alias,
        } => render(&annotation, names, alias),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Annotation text registered for diagnostics
struct AnnotationSource {
    source: String,
    files: SimpleFiles<String, String>,
    file_id: usize,
}

impl AnnotationSource {
    fn new(name: String, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(name, source.clone());
        Self {
            source,
            files,
            file_id,
        }
    }

    fn from_file(path: &PathBuf) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read annotation file: {:?}", path))?;
        Ok(Self::new(path.display().to_string(), source))
    }

    /// Parse `text`, which starts at byte `offset` of the registered source
    fn parse_at(&self, text: &str, offset: usize) -> Result<TypeNode, Diagnostic<usize>> {
        parse_type_annotation(text).map_err(|e| {
            let mut diagnostic =
                DiagnosticError::new(AnnotypeError::from(e), self.file_id).to_diagnostic();
            for label in &mut diagnostic.labels {
                label.range = (label.range.start + offset)..(label.range.end + offset);
            }
            diagnostic
        })
    }

    fn report_error(&self, diagnostic: &Diagnostic<usize>) -> Result<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, diagnostic)?;
        Ok(())
    }

    /// Parse the whole source as one annotation, reporting failures
    fn parse_all(&self) -> Result<TypeNode> {
        match self.parse_at(&self.source, 0) {
            Ok(node) => Ok(node),
            Err(diagnostic) => {
                self.report_error(&diagnostic)?;
                anyhow::bail!("Parsing failed");
            }
        }
    }
}

fn annotation_source(annotation: &str) -> AnnotationSource {
    AnnotationSource::new("<annotation>".to_string(), annotation.to_string())
}

fn parse(annotation: &str, json: bool) -> Result<()> {
    let node = annotation_source(annotation).parse_all()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&node)?);
    } else {
        println!("{:#?}", node);
    }
    Ok(())
}

fn tokens(annotation: &str) -> Result<()> {
    let state = annotation_source(annotation);
    match tokenize(annotation) {
        Ok(tokens) => {
            println!("{}", "=== Tokens ===".blue().bold());
            println!("{}", format_tokens(&tokens));
            Ok(())
        }
        Err(e) => {
            let diagnostic =
                DiagnosticError::new(AnnotypeError::from(e), state.file_id).to_diagnostic();
            state.report_error(&diagnostic)?;
            anyhow::bail!("Lexical analysis failed");
        }
    }
}

fn fmt(annotation: &str) -> Result<()> {
    let node = annotation_source(annotation).parse_all()?;
    println!("{}", node);
    Ok(())
}

fn render(annotation: &str, names: Option<PathBuf>, alias: Option<String>) -> Result<()> {
    let names = match names {
        Some(path) => {
            let names = NameMap::load(&path)?;
            debug!("loaded {} name mappings from {:?}", names.len(), path);
            names
        }
        None => NameMap::new(),
    };

    let node = annotation_source(annotation).parse_all()?;
    let renderer = Renderer::new(&names);
    let rendered = match alias {
        Some(alias) => renderer.render_alias(&alias, &node),
        None => renderer.render(&node),
    };

    for line in rendered.import_lines() {
        println!("{}", line);
    }
    println!("{}", rendered.text);
    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    let state = AnnotationSource::from_file(&input)?;

    let mut checked = 0;
    let mut failed = 0;
    let mut offset = 0;
    for (index, raw_line) in state.source.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw_line.len();

        let line = raw_line.trim_end_matches(|c| c == '\n' || c == '\r');
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        checked += 1;
        match state.parse_at(line, line_start) {
            Ok(node) => debug!("line {}: {}", index + 1, node),
            Err(diagnostic) => {
                failed += 1;
                state.report_error(&diagnostic)?;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} annotations failed to parse", failed, checked);
    }

    info!("checked {} annotations", checked);
    println!(
        "{}: {} annotations parsed in {:?}",
        "success".green().bold(),
        checked,
        input
    );
    Ok(())
}
