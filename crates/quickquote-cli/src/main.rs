mod host;
mod storage;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use include_dir::{include_dir, Dir};
use quickquote_core::system::ManualTimers;
use quickquote_core::{AddRequest, Event, Outcome, QuickQuote, QuickQuoteConfig};
use quickquote_render_html::HtmlSurface;
use tracing_subscriber::EnvFilter;

use crate::host::{PrintNavigator, StdinDialog};
use crate::storage::FileStorage;

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

const STYLESHEET: &str = "quick-quote.css";

type Builder = QuickQuote<FileStorage, HtmlSurface, ManualTimers, StdinDialog, PrintNavigator>;

#[derive(Parser)]
#[command(name = "quickquote", about = "Build a product quote request from the terminal")]
struct Cli {
    /// JSON config file overriding the site defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the saved quote (default: <data dir>/quickquote).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Page the builder is considered to run on; the quote page is
    /// resolved relative to it.
    #[arg(long, global = true, default_value = "http://localhost/index.html")]
    location: String,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the items in the quote.
    List {
        /// Print the items as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add one unit of a product.
    Add {
        /// Product id; defaults to the name.
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        details: Option<String>,
    },
    /// Remove a product line.
    Remove { id: String },
    /// Raise a product's quantity.
    Inc {
        id: String,
        #[arg(long, default_value_t = 1)]
        by: u32,
    },
    /// Lower a product's quantity (never below 1).
    Dec {
        id: String,
        #[arg(long, default_value_t = 1)]
        by: u32,
    },
    /// Remove every item after confirmation.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the quote-request URL with the items pre-filled.
    Submit,
    /// Write the sidebar as a static HTML page plus its stylesheet.
    Render {
        /// Output directory.
        #[arg(long)]
        out: PathBuf,
        /// Ids of "add to quote" controls to place on the page.
        #[arg(long = "affordance")]
        affordances: Vec<String>,
        /// Render with the sidebar open.
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => QuickQuoteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => QuickQuoteConfig::default(),
    };
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .context("no data directory on this platform; pass --data-dir")?
            .join("quickquote"),
    };

    let assume_yes = matches!(cli.command, Command::Clear { yes: true });
    let affordances = match &cli.command {
        Command::Render { affordances, .. } => affordances.clone(),
        _ => Vec::new(),
    };
    let mut surface = HtmlSurface::new().with_affordances(affordances);
    surface.mount(&config.toast_message);

    let mut qq: Builder = QuickQuote::init(
        config,
        FileStorage::new(data_dir),
        surface,
        ManualTimers::new(),
        StdinDialog::new(assume_yes),
        PrintNavigator::new(cli.location),
    );

    match cli.command {
        Command::List { json } => list(&qq, json)?,
        Command::Add {
            id,
            name,
            image,
            details,
        } => {
            if id.is_none() && name.is_none() {
                bail!("add needs --id or --name");
            }
            qq.handle(Event::Add(AddRequest {
                id,
                name,
                image,
                details,
            }));
            list(&qq, false)?;
        }
        Command::Remove { id } => {
            qq.handle(Event::Remove(id));
            list(&qq, false)?;
        }
        Command::Inc { id, by } => adjust(&mut qq, id, i64::from(by))?,
        Command::Dec { id, by } => adjust(&mut qq, id, -i64::from(by))?,
        Command::Clear { .. } => match qq.handle(Event::ClearAll) {
            Outcome::Declined => println!("Quote left unchanged."),
            _ => println!("Quote cleared."),
        },
        Command::Submit => {
            if qq.store().is_empty() {
                bail!("the quote is empty");
            }
            if !matches!(qq.handle(Event::Submit), Outcome::Navigated(_)) {
                bail!("could not build the quote request URL");
            }
        }
        Command::Render { out, open, .. } => {
            if open {
                qq.handle(Event::ToggleOpen);
            }
            fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
            ASSETS
                .extract(&out)
                .with_context(|| format!("writing assets to {}", out.display()))?;
            let page = qq.surface().document("Quick Quote", Some(STYLESHEET));
            let index = out.join("index.html");
            fs::write(&index, page).with_context(|| format!("writing {}", index.display()))?;
            println!("{}", index.display());
        }
    }

    Ok(())
}

fn adjust(qq: &mut Builder, id: String, delta: i64) -> Result<()> {
    if qq.handle(Event::AdjustQuantity { id: id.clone(), delta }) == Outcome::Ignored {
        bail!("{id:?} is not in the quote");
    }
    list(qq, false)
}

fn list(qq: &Builder, json: bool) -> Result<()> {
    let items = qq.items();
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    if items.is_empty() {
        println!("Your quote is empty.");
        return Ok(());
    }
    for item in &items {
        if item.details.is_empty() {
            println!("{:>4} x {} [{}]", item.quantity, item.name, item.id);
        } else {
            println!(
                "{:>4} x {} [{}] {}",
                item.quantity, item.name, item.id, item.details
            );
        }
    }
    println!(
        "Total: {}",
        quickquote_core::view::item_count_label(qq.total_quantity())
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
