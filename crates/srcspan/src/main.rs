use clap::Parser;

fn main() -> anyhow::Result<()> {
    srcspan::init();

    let cli = srcspan::app::cli::Cli::parse();
    let mut stdout = std::io::stdout().lock();
    srcspan::app::cli::run(cli, &mut stdout)
}
