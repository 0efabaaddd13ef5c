use avl_collections::avl_tree::AvlTree;
use avl_collections::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "avl-demo", about = "Builds an AVL tree and prints its in-order traversal")]
struct Cli {
    /// Values to insert, in order.
    #[arg(allow_negative_numbers = true, default_values_t = [10, 20, 30, 40, 50, 25])]
    values: Vec<i64>,
    /// Value to remove after every insertion is done. May be repeated.
    #[arg(long = "delete", value_name = "VALUE", allow_negative_numbers = true)]
    delete: Vec<i64>,
    /// Validate the structure of the tree before printing it.
    #[arg(long)]
    check: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let mut tree = AvlTree::new();

    for value in &cli.values {
        let inserted = tree.insert(*value);
        debug!(value, inserted, height = tree.height(), "insert");
    }

    for value in &cli.delete {
        let removed = tree.remove(value).is_some();
        debug!(value, removed, height = tree.height(), "delete");
    }

    if cli.check {
        tree.check()?;
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "In-order traversal of the AVL tree:")?;
    tree.write_inorder(&mut handle)?;
    writeln!(handle)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{}", err);
        process::exit(1);
    }
}
