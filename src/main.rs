use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use toprated::{
    Res, cli, config, error,
    types::{SearchCriteria, SearchField},
    utils, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the catalog for top rated releases
    Search(SearchOptions),

    /// Handle the stored style list
    Styles(StylesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text query
    #[clap(long)]
    pub query: Option<String>,

    #[clap(long)]
    pub title: Option<String>,

    #[clap(long)]
    pub artist: Option<String>,

    #[clap(long)]
    pub label: Option<String>,

    #[clap(long)]
    pub genre: Option<String>,

    /// Style, checked against the stored style list
    #[clap(long)]
    pub style: Option<String>,

    #[clap(long)]
    pub country: Option<String>,

    #[clap(long)]
    pub year: Option<String>,

    /// Release format (defaults to vinyl)
    #[clap(long)]
    pub format: Option<String>,

    #[clap(long)]
    pub catalog_number: Option<String>,

    #[clap(long)]
    pub barcode: Option<String>,

    #[clap(long)]
    pub track: Option<String>,

    #[clap(long)]
    pub submitter: Option<String>,

    #[clap(long)]
    pub contributor: Option<String>,

    /// Entry type (release, master, artist, label)
    #[clap(long = "type")]
    pub kind: Option<String>,

    /// Additional criterion as key=value; can be repeated
    #[clap(
        long = "filter",
        value_parser = utils::parse_filter_pair,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub filters: Vec<(String, String)>,

    /// Only keep releases rated strictly above this value
    #[clap(long, default_value_t = 4.0)]
    pub min_rating: f64,

    /// Drop releases that have videos attached
    #[clap(long)]
    pub no_videos: bool,
}

impl SearchOptions {
    fn criteria(&self) -> Res<SearchCriteria> {
        let mut criteria = SearchCriteria::from_pairs(self.filters.clone())?;

        let flags = [
            (SearchField::Query, &self.query),
            (SearchField::Title, &self.title),
            (SearchField::Artist, &self.artist),
            (SearchField::Label, &self.label),
            (SearchField::Genre, &self.genre),
            (SearchField::Style, &self.style),
            (SearchField::Country, &self.country),
            (SearchField::Year, &self.year),
            (SearchField::Format, &self.format),
            (SearchField::CatalogNumber, &self.catalog_number),
            (SearchField::Barcode, &self.barcode),
            (SearchField::Track, &self.track),
            (SearchField::Submitter, &self.submitter),
            (SearchField::Contributor, &self.contributor),
            (SearchField::Type, &self.kind),
        ];

        // explicit flags win over --filter pairs
        for (field, value) in flags {
            if value.is_some() {
                criteria.set(field, value.clone());
            }
        }

        Ok(criteria)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle the stored style list",
    args_conflicts_with_subcommands = true
)]
pub struct StylesOptions {
    /// Subcommands under `styles` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<StylesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum StylesSubcommand {
    /// Rebuild the style list from your collection
    Update,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Search(opt) => match opt.criteria() {
            Ok(criteria) => cli::search(criteria, opt.min_rating, opt.no_videos).await,
            Err(e) => Err(e),
        },
        Command::Styles(opt) => match opt.command {
            Some(StylesSubcommand::Update) => cli::update_styles().await,
            None => cli::list_styles().await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
