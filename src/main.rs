use tide::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
