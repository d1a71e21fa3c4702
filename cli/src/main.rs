mod http;
mod render;

use std::io::{self, BufRead, Write};

use catalog::auth::{AuthGateway, StaticSession};
use catalog::{CatalogController, CatalogError, ProductDraft, RemoveOutcome, ViewMode};
use clap::{Args, Parser, Subcommand};

use crate::http::HttpBackend;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing access token; pass --token or set CATALOG_TOKEN")]
    MissingToken,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", .0.user_message())]
    Catalog(#[from] CatalogError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("server returned HTTP {0}")]
    Unhealthy(u16),
}

#[derive(Parser, Debug)]
#[command(name = "catalog-cli", about = "HypeStore product catalog CLI")]
struct Cli {
    #[arg(long, env = "CATALOG_BASE_URL", default_value = "http://127.0.0.1:5175")]
    base_url: String,

    /// Bearer token issued by the identity provider.
    #[arg(long, env = "CATALOG_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log request outcomes to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the dashboard server is up.
    Ping,
    /// List products.
    List {
        /// Case-insensitive match on name or category.
        #[arg(long, conflicts_with = "low_stock")]
        search: Option<String>,
        /// Only products with fewer than 10 units.
        #[arg(long, default_value_t = false)]
        low_stock: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show totals, low-stock products, and category counts.
    Stats {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Create a product.
    Create(CreateArgs),
    /// Update fields of an existing product.
    Update(UpdateArgs),
    /// Delete a product after confirmation.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    price: f64,
    #[arg(long = "category")]
    category_id: String,
    #[arg(long = "stock", allow_negative_numbers = true)]
    stock_quantity: i64,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long = "category")]
    category_id: Option<String>,
    #[arg(long = "stock", allow_negative_numbers = true)]
    stock_quantity: Option<i64>,
}

impl UpdateArgs {
    fn apply(&self, draft: &mut ProductDraft) {
        if let Some(name) = &self.name {
            draft.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            draft.description.clone_from(description);
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(category_id) = &self.category_id {
            draft.category_id.clone_from(category_id);
        }
        if let Some(stock) = self.stock_quantity {
            draft.stock_quantity = stock;
        }
    }
}

impl From<CreateArgs> for ProductDraft {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            price: args.price,
            category_id: args.category_id,
            stock_quantity: args.stock_quantity,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    if matches!(cli.command, Command::Ping) {
        return run_ping(&cli.base_url).await;
    }

    let session = StaticSession::new(cli.token.clone(), None);
    if !session.is_authenticated() {
        return Err(CliError::MissingToken);
    }

    let backend = HttpBackend::new(&cli.base_url, session.token())?;
    let mut controller = CatalogController::new(backend);
    controller.mount(&session).await?;

    run(&mut controller, cli.command).await
}

async fn run(controller: &mut CatalogController<HttpBackend>, command: Command) -> Result<(), CliError> {
    match command {
        Command::Ping => Ok(()),
        Command::List { search, low_stock, json } => {
            let view = if low_stock {
                ViewMode::LowStockOnly
            } else {
                ViewMode::search(search.unwrap_or_default())
            };
            controller.set_view(view);
            let products = controller.filtered_products();
            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else {
                print!("{}", render::product_table(&products));
            }
            Ok(())
        }
        Command::Stats { json } => {
            let stats = controller.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&render::stats_json(&stats))?);
            } else {
                print!("{}", render::stats_report(&stats));
            }
            Ok(())
        }
        Command::Create(args) => {
            controller.open_create();
            let draft = ProductDraft::from(args);
            save(controller, &draft).await?;
            println!("created {}", draft.name.trim());
            Ok(())
        }
        Command::Update(args) => {
            controller.open_edit(&args.id)?;
            let mut draft = controller.state().session_draft();
            args.apply(&mut draft);
            save(controller, &draft).await?;
            println!("updated {}", args.id);
            Ok(())
        }
        Command::Delete { id, yes } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stderr = io::stderr();
            let outcome = controller
                .remove(&id, |product| yes || confirm(product, &mut input, &mut stderr))
                .await?;
            match outcome {
                RemoveOutcome::Removed => println!("deleted {id}"),
                RemoveOutcome::Declined => println!("kept {id}"),
            }
            Ok(())
        }
    }
}

/// Submit the open form, printing per-field messages on validation failure.
async fn save(controller: &mut CatalogController<HttpBackend>, draft: &ProductDraft) -> Result<(), CliError> {
    match controller.create_or_update(draft).await {
        Err(CatalogError::Validation(errors)) => {
            eprint!("{}", render::field_errors(&errors));
            Err(CatalogError::Validation(errors).into())
        }
        other => other.map_err(CliError::from),
    }
}

/// Ask on `output` and read a yes/no answer from `input`. Anything but
/// `y`/`yes` declines.
fn confirm(product: &catalog::Product, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    let _ = write!(output, "delete \"{}\" ({})? [y/N] ", product.name, product.id);
    let _ = output.flush();
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}
