use clap::{Parser, Subcommand};
use kata_sort::SortArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sorting and searching algorithms implemented in rust
    Sort(SortArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Sort(sort_args) => sort_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_sort_commands() {
    assert!(Cli::try_parse_from(["kata", "sort", "run", "3", "-1", "2"]).is_ok());
    assert!(Cli::try_parse_from(["kata", "sort", "run", "-a", "quick-in-place", "3", "1"]).is_ok());
    assert!(Cli::try_parse_from(["kata", "sort", "search", "-t", "5", "1", "5", "9"]).is_ok());
    assert!(Cli::try_parse_from(["kata", "sort", "bench", "--max-size", "100"]).is_ok());

    // Values are required and must be numbers.
    assert!(Cli::try_parse_from(["kata", "sort", "run"]).is_err());
    assert!(Cli::try_parse_from(["kata", "sort", "run", "three"]).is_err());
    assert!(Cli::try_parse_from(["kata", "sort", "run", "-a", "bogo", "1"]).is_err());
}
