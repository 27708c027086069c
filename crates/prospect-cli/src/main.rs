mod export;
mod progress;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use prospect_core::{Coordinates, GeocodeFailurePolicy, ResultTable, SearchQuery, EXPORT_COLUMNS};
use prospect_places::{prospect, PlacesClient, SearchOptions};
use tracing_subscriber::EnvFilter;

use crate::progress::SpinnerProgress;

#[derive(Debug, Parser)]
#[command(name = "prospect")]
#[command(about = "Find businesses on Google Places and export their contacts")]
struct Cli {
    /// Business or legal name to search for. Prompted for when omitted.
    name: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    /// Center of the nearby search as "lat,lng". Skips geocoding.
    #[arg(long)]
    location: Option<Coordinates>,

    /// Nearby-search radius in meters [default: PROSPECT_SEARCH_RADIUS_M]
    #[arg(long)]
    radius: Option<u32>,

    /// Spreadsheet to write [default: PROSPECT_OUTPUT_PATH]
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Abort instead of falling back to text search when geocoding fails.
    #[arg(long)]
    strict_geocode: bool,

    /// Print the results without writing a spreadsheet.
    #[arg(long)]
    no_export: bool,
}

/// Name and region after prompting.
#[derive(Debug, PartialEq)]
struct Inputs {
    name: String,
    city: Option<String>,
    state: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = prospect_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let inputs = collect_inputs(&cli)?;
    let query = build_query(
        inputs,
        cli.location,
        cli.radius.unwrap_or(config.search_radius_m),
    );
    let policy = if cli.strict_geocode {
        GeocodeFailurePolicy::Abort
    } else {
        config.geocode_failure
    };
    tracing::info!(
        query = %query.text_query(),
        location = ?query.location,
        radius_m = ?query.radius_m,
        %policy,
        "starting prospecting run"
    );

    let client = PlacesClient::new(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?;
    let options = SearchOptions::from_config(&config);

    let progress = SpinnerProgress::new();
    let result = prospect(&client, query, policy, &options, &progress).await;
    progress.finish();
    let table = result?;

    if table.is_empty() {
        println!("no results");
        return Ok(());
    }

    print_table(&table);

    if cli.no_export {
        return Ok(());
    }

    let path = cli.output.unwrap_or(config.output_path);
    export::write_workbook(&path, &table)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("exported {} rows to {}", table.len(), path.display());

    Ok(())
}

/// Fills in missing inputs interactively.
///
/// Prompting only happens when the name itself was not given, so scripted
/// runs that pass a name never block on stdin. City and state may be left
/// blank at the prompt.
fn collect_inputs(cli: &Cli) -> anyhow::Result<Inputs> {
    if let Some(name) = &cli.name {
        anyhow::ensure!(!name.trim().is_empty(), "business name must not be blank");
        return Ok(Inputs {
            name: name.trim().to_string(),
            city: cli.city.clone(),
            state: cli.state.clone(),
        });
    }

    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt("Business or legal name")
        .interact_text()?;
    let city = match &cli.city {
        Some(city) => Some(city.clone()),
        None => Some(
            Input::<String>::with_theme(&theme)
                .with_prompt("City (optional)")
                .allow_empty(true)
                .interact_text()?,
        ),
    };
    let state = match &cli.state {
        Some(state) => Some(state.clone()),
        None => Some(
            Input::<String>::with_theme(&theme)
                .with_prompt("State (optional)")
                .allow_empty(true)
                .interact_text()?,
        ),
    };

    Ok(Inputs {
        name: name.trim().to_string(),
        city,
        state,
    })
}

/// Builds the query. The radius only takes part in the nearby search, which
/// also needs a location (given here or resolved later by geocoding).
fn build_query(inputs: Inputs, location: Option<Coordinates>, radius_m: u32) -> SearchQuery {
    let query = SearchQuery::new(inputs.name).with_region(inputs.city, inputs.state);
    match location {
        Some(location) => query.with_location(location, radius_m),
        None => SearchQuery {
            radius_m: Some(radius_m),
            ..query
        },
    }
}

fn print_table(table: &ResultTable) {
    println!("{}", EXPORT_COLUMNS.join("\t"));
    for record in table.export_records() {
        println!("{}", record.cells().join("\t"));
    }
}
