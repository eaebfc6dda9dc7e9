use anyhow::Result;

fn main() -> Result<()> {
    data_list_indexer::cli::commands::run()
}
