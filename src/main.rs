use workhours::commands::Cli;
use workhours::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
