//! Command-line entry point: generate the AST node modules of the
//! interpreter, or of any schema given as XML.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::parse();
    command_line_interface.init_tracing();
    command_line_interface.run()
}
