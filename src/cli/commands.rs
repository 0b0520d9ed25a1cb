use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, tree_view};
use crate::domain::{read_records, TreeBuilder, WbsTree};
use crate::dot::{DotEmitter, RankDir};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Dot {
            file,
            out,
            rankdir,
            strict,
        }) => dot_command(file, out.as_deref(), *rankdir, *strict),
        Some(Commands::Tree { file, strict }) => tree_command(file, *strict),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Load and assemble the tree; shared by the dot and tree subcommands.
fn load_tree(file: &Path, strict: bool) -> CliResult<WbsTree> {
    debug!("reading {:?}, strict={}", file, strict);
    let records = read_records(file)?;
    let tree = TreeBuilder::new(strict).build(records)?;
    Ok(tree)
}

#[instrument]
fn dot_command(file: &Path, out: Option<&Path>, rankdir: RankDir, strict: bool) -> CliResult<()> {
    let tree = load_tree(file, strict)?;
    let dot = DotEmitter::new(rankdir).emit(&tree);

    match out {
        Some(path) => {
            fs::write(path, &dot).map_err(|source| CliError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
            output::action("Wrote", &path.display());
        }
        None => print!("{}", dot),
    }
    Ok(())
}

#[instrument]
fn tree_command(file: &Path, strict: bool) -> CliResult<()> {
    let tree = load_tree(file, strict)?;
    for &root in tree.roots() {
        println!("{}", tree_view::render(&tree, root));
    }
    Ok(())
}
