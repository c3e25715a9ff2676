use anyhow::Result;

fn main() -> Result<()> {
    tree_tally::cli::run()
}
