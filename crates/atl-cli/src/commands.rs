use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use dialoguer::Confirm;
use serde::Serialize;
use tracing::{info, info_span};

use atl_cli::import::load_session;
use atl_cli::listing::{ComponentListing, filter_competitions};
use atl_client::{API_URL_ENV, ApiClient, ClientConfig, ClientError, submit_batch};
use atl_map::FieldMapping;
use atl_model::CompetitionSummary;

use crate::cli::{
    ApiArgs, CompetitionsArgs, ComponentAddArgs, ComponentCommand, ComponentEditArgs,
    ComponentShowArgs, ComponentsArgs, DeleteArgs, DetectArgs, ImportArgs, ListArgs,
    RecordKindArg, RecordResultArgs, SetQuantityArgs,
};
use crate::render::{
    print_competition_summary, print_competitions, print_components, print_import_outcome,
    print_mapping, print_orders, print_preview, print_projects, print_stock_summary,
};

#[derive(Serialize)]
struct DetectReport<'a> {
    headers: &'a [String],
    rows: usize,
    mapping: &'a FieldMapping,
}

pub fn run_detect(args: &DetectArgs) -> Result<()> {
    let session = load_session(&args.file, &[])?;
    if args.json {
        let report = DetectReport {
            headers: session.headers(),
            rows: session.row_count(),
            mapping: session.mapping(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_mapping(&session);
    }
    Ok(())
}

pub fn run_import(args: &ImportArgs) -> Result<()> {
    let span = info_span!("import", path = %args.file.display());
    let _guard = span.enter();

    let session = load_session(&args.file, &args.overrides)?;
    print_mapping(&session);
    print_preview(&session.preview(args.preview));

    let batch = session.commit()?;
    if args.dry_run {
        println!(
            "Dry run: {} components would be imported ({} rows skipped)",
            batch.len(),
            batch.rejected
        );
        return Ok(());
    }

    if !args.yes && !confirm(&format!("Import {} components?", batch.len()))? {
        println!("Import cancelled.");
        return Ok(());
    }

    let client = connect(&args.api)?;
    let outcome = submit_batch(&client, &batch)
        .map_err(api_error)
        .context("failed to import components")?;
    print_import_outcome(&outcome);
    Ok(())
}

pub fn run_components(args: &ComponentsArgs) -> Result<()> {
    let client = connect(&args.api)?;
    let components = client
        .list_components()
        .map_err(api_error)
        .context("failed to load components")?;

    let listing = ComponentListing::new(&components, args.search.as_deref());
    info!(
        total = components.len(),
        shown = listing.shown.len(),
        "Loaded components"
    );

    if listing.shown.is_empty() {
        println!("No components found.");
    } else {
        print_components(&listing.shown);
    }
    print_stock_summary(&listing.summary);
    Ok(())
}

pub fn run_set_quantity(args: &SetQuantityArgs) -> Result<()> {
    let client = connect(&args.api)?;
    client
        .update_quantity(&args.id, args.quantity)
        .map_err(api_error)
        .with_context(|| format!("failed to update component {}", args.id))?;
    println!("Component {} quantity set to {}", args.id, args.quantity);
    Ok(())
}

pub fn run_component(command: &ComponentCommand) -> Result<()> {
    match command {
        ComponentCommand::Add(args) => run_component_add(args),
        ComponentCommand::Edit(args) => run_component_edit(args),
        ComponentCommand::Show(args) => run_component_show(args),
    }
}

fn run_component_add(args: &ComponentAddArgs) -> Result<()> {
    let record = args.fields.changes().to_new_record()?;
    let client = connect(&args.api)?;
    client
        .add_component(&record)
        .map_err(api_error)
        .with_context(|| format!("failed to add component {}", record.name))?;
    println!("Added component {}", record.name);
    Ok(())
}

fn run_component_edit(args: &ComponentEditArgs) -> Result<()> {
    let changes = args.fields.changes();
    let client = connect(&args.api)?;
    let component = client
        .get_component(&args.id)
        .map_err(api_error)
        .with_context(|| format!("failed to load component {}", args.id))?
        .ok_or_else(|| anyhow!("component {} not found", args.id))?;

    let record = changes.to_updated_record(component.to_record())?;
    client
        .update_component(&args.id, &record)
        .map_err(api_error)
        .with_context(|| format!("failed to update component {}", args.id))?;
    println!("Updated component {}", args.id);
    Ok(())
}

fn run_component_show(args: &ComponentShowArgs) -> Result<()> {
    let client = connect(&args.api)?;
    let component = client
        .get_component(&args.id)
        .map_err(api_error)
        .with_context(|| format!("failed to load component {}", args.id))?
        .ok_or_else(|| anyhow!("component {} not found", args.id))?;
    print_components(&[&component]);
    Ok(())
}

pub fn run_projects(args: &ListArgs) -> Result<()> {
    let client = connect(&args.api)?;
    let projects = client
        .list_projects()
        .map_err(api_error)
        .context("failed to load projects")?;
    info!(total = projects.len(), "Loaded projects");

    if projects.is_empty() {
        println!("No projects found.");
    } else {
        print_projects(&projects);
    }
    Ok(())
}

pub fn run_competitions(args: &CompetitionsArgs) -> Result<()> {
    let client = connect(&args.api)?;
    let competitions = client
        .list_competitions()
        .map_err(api_error)
        .context("failed to load competitions")?;

    let shown = filter_competitions(&competitions, args.status);
    info!(
        total = competitions.len(),
        shown = shown.len(),
        "Loaded competitions"
    );

    if shown.is_empty() {
        println!("No competitions found.");
    } else {
        print_competitions(&shown);
    }
    let today = Local::now().date_naive();
    print_competition_summary(&CompetitionSummary::from_competitions(
        &competitions,
        today,
    ));
    Ok(())
}

pub fn run_record_result(args: &RecordResultArgs) -> Result<()> {
    let client = connect(&args.api)?;
    let competition = client
        .get_competition(&args.id)
        .map_err(api_error)
        .with_context(|| format!("failed to load competition {}", args.id))?
        .ok_or_else(|| anyhow!("competition {} not found", args.id))?;

    let result = args.changes().apply(competition.to_result());
    client
        .update_competition_result(&args.id, &result)
        .map_err(api_error)
        .with_context(|| format!("failed to record result for {}", args.id))?;
    println!("Recorded result for {}: {}", competition.name, result.status);
    Ok(())
}

pub fn run_orders(args: &ListArgs) -> Result<()> {
    let client = connect(&args.api)?;
    let orders = client
        .list_orders()
        .map_err(api_error)
        .context("failed to load orders")?;
    info!(total = orders.len(), "Loaded orders");

    if orders.is_empty() {
        println!("No orders found.");
    } else {
        print_orders(&orders);
    }
    Ok(())
}

pub fn run_delete(args: &DeleteArgs) -> Result<()> {
    let kind = args.kind.label();
    if !args.yes && !confirm(&format!("Delete {kind} {}?", args.id))? {
        println!("Delete cancelled.");
        return Ok(());
    }

    let client = connect(&args.api)?;
    let deleted = match args.kind {
        RecordKindArg::Project => client.delete_project(&args.id),
        RecordKindArg::Competition => client.delete_competition(&args.id),
        RecordKindArg::Order => client.delete_order(&args.id),
    };
    deleted
        .map_err(api_error)
        .with_context(|| format!("failed to delete {kind} {}", args.id))?;
    println!("Deleted {kind} {}", args.id);
    Ok(())
}

fn connect(api: &ApiArgs) -> Result<ApiClient> {
    let url = api
        .api_url
        .as_deref()
        .ok_or_else(|| anyhow!("no API URL configured; pass --api-url or set {API_URL_ENV}"))?;
    let config = ClientConfig::new(url)
        .map_err(api_error)?
        .with_timeout(Duration::from_secs(api.timeout_secs));
    ApiClient::new(config).map_err(api_error)
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("confirmation requires a terminal; pass --yes to skip it")
}

/// Keeps the technical cause in the chain behind the short user message.
fn api_error(error: ClientError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}
