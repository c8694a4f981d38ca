//! Terminal output: `render` builds styled lines, this module prints them.

pub mod render;

use colored::{ColoredString, Colorize};
use screening_core::Theme;

pub use render::{Line, LineStyle};

pub fn print_lines(lines: &[Line], theme: Theme) {
    for line in lines {
        println!("{}", paint(line, theme));
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

fn paint(line: &Line, theme: Theme) -> ColoredString {
    let text = line.text.as_str();
    match (line.style, theme) {
        (LineStyle::Plain, _) => text.normal(),
        (LineStyle::Header, Theme::Light) => text.bold(),
        (LineStyle::Header, Theme::Dark) => text.bright_white().bold(),
        (LineStyle::Muted, _) => text.dimmed(),
        (LineStyle::Success, Theme::Light) => text.green(),
        (LineStyle::Success, Theme::Dark) => text.bright_green(),
        (LineStyle::Info, Theme::Light) => text.blue(),
        (LineStyle::Info, Theme::Dark) => text.bright_cyan(),
        (LineStyle::Warning, Theme::Light) => text.yellow(),
        (LineStyle::Warning, Theme::Dark) => text.bright_yellow(),
        (LineStyle::Error, Theme::Light) => text.red().bold(),
        (LineStyle::Error, Theme::Dark) => text.bright_red().bold(),
    }
}
