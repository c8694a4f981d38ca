mod cli;
mod platform;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = platform::run(cli) {
        platform::ui::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
