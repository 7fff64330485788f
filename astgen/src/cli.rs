//! CLI: schema → one Python module per family.

use anyhow::Context;
use astgen_codegen::{ConsoleSink, DirectorySink, MemorySink, OutputSink, Tee};
use astgen_schema::Schema;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default location of the interpreter's AST node package.
const DEFAULT_OUT_DIR: &str = "src/pychart/_interpreter/ast_nodes";

/// generate AST node classes and visitors from a family schema
#[derive(Parser, Debug)]
#[command(name = "astgen", version, about)]
pub struct CommandLineInterface {
    /// XML schema file (the built-in interpreter schema if omitted)
    #[arg(long, short)]
    schema: Option<PathBuf>,

    /// directory the generated modules are written to
    #[arg(long, short, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// only generate the named families (repeatable)
    #[arg(long = "family", short = 'f')]
    families: Vec<String>,

    /// do not mirror generated modules to stdout
    #[arg(long, short, default_value_t = false)]
    quiet: bool,

    /// generate without writing any file
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// print each family's variants and dispatch methods, then exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// debug logging (RUST_LOG takes precedence)
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

impl CommandLineInterface {
    /// Installs the stderr log subscriber.
    pub fn init_tracing(&self) {
        let default_level = if self.verbose { "debug" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Runs the command.
    pub fn run(&self) -> anyhow::Result<()> {
        let schema = self.load_schema()?;
        astgen_schema::validate_schema(&schema).context("invalid schema")?;

        let schema = if self.families.is_empty() {
            schema
        } else {
            astgen_codegen::select_families(&schema, self.families.as_slice())?
        };

        if self.list {
            return print_listing(&schema);
        }

        let mut sink = self.sink();
        let written = astgen_codegen::write_schema(&schema, &mut *sink)
            .with_context(|| format!("failed to generate into {}", self.out_dir.display()))?;

        if self.dry_run {
            tracing::info!("Dry run: generated {} units, nothing written", written);
        } else {
            tracing::info!("Generated {} units in {}", written, self.out_dir.display());
        }
        Ok(())
    }

    fn load_schema(&self) -> anyhow::Result<Schema> {
        match &self.schema {
            Some(path) => astgen_schema::parse_schema_file(path)
                .with_context(|| format!("failed to load schema {}", path.display())),
            None => Ok(astgen_schema::interpreter_schema()),
        }
    }

    fn sink(&self) -> Box<dyn OutputSink> {
        let console = ConsoleSink::stdout();
        let directory = DirectorySink::new(&self.out_dir);
        match (self.quiet, self.dry_run) {
            (false, false) => Box::new(Tee::new(console, directory)),
            (false, true) => Box::new(console),
            (true, false) => Box::new(directory),
            (true, true) => Box::new(MemorySink::new()),
        }
    }
}

/// Prints one line per variant: family, variant, dispatch method, fields.
fn print_listing(schema: &Schema) -> anyhow::Result<()> {
    let ir = astgen_schema::SchemaIr::from_schema(schema);
    let mut stdout = std::io::stdout().lock();

    for family in &ir.families {
        writeln!(stdout, "{} -> {}", family.name, family.output_unit)?;
        for variant in &family.variants {
            let fields: Vec<String> = variant
                .fields
                .iter()
                .map(|f| format!("{}: {}", f.name, f.type_name))
                .collect();
            writeln!(
                stdout,
                "    {:<12} {}.{}({})",
                variant.name,
                family.visitor_name,
                variant.method_name,
                fields.join(", ")
            )?;
        }
    }

    Ok(())
}
