use crate::infra;
use clap::Args;
use ideaboard::catalog::{
    dedup, recalculate, AiFilter, ChanceLevel, Competition, Complexity, DedupKey, IdeaCatalog,
    IdeaDataset, QueryParams, ScoringEngine, SortDirection, SortKey,
};
use ideaboard::config::AppConfig;
use ideaboard::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DatasetArgs {
    /// Override the dataset path from APP_DATA_PATH
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text filter over niche, rationale, target user, and
    /// acquisition channel
    #[arg(long)]
    search: Option<String>,
    /// Restrict to one or more niches (repeatable)
    #[arg(long = "niche")]
    niches: Vec<String>,
    /// Filter by competition level
    #[arg(long, value_parser = infra::parse_competition)]
    competition: Option<Competition>,
    /// Filter by build complexity
    #[arg(long, value_parser = infra::parse_complexity)]
    complexity: Option<Complexity>,
    /// Filter by the chance of reaching the revenue threshold
    #[arg(long, value_parser = infra::parse_chance)]
    chance: Option<ChanceLevel>,
    /// Only AI-related ideas
    #[arg(long, conflicts_with = "non_ai")]
    ai: bool,
    /// Only ideas not classified as AI-related
    #[arg(long)]
    non_ai: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SortArgs {
    /// Sort key: score, mrr, mvp, niche, or date
    #[arg(long, value_parser = infra::parse_sort_key)]
    sort: Option<SortKey>,
    /// Sort ascending instead of the default descending
    #[arg(long)]
    ascending: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StatsArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    #[command(flatten)]
    filter: FilterArgs,
    #[command(flatten)]
    sort: SortArgs,
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Page size (defaults to APP_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<usize>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    /// Idea id to display
    id: String,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecalcArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    /// Report changes without rewriting the dataset
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DedupArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    /// Dedup key: url or name-url
    #[arg(long, value_parser = infra::parse_dedup_key, default_value = "url")]
    by: DedupKey,
    /// Report duplicates without rewriting the dataset
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
    #[command(flatten)]
    filter: FilterArgs,
    #[command(flatten)]
    sort: SortArgs,
    /// Output CSV path
    #[arg(long)]
    output: PathBuf,
}

pub(crate) fn run_stats(args: StatsArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = infra::dataset_path(config, args.dataset.data.as_ref());
    let catalog = IdeaCatalog::new(infra::load_ideas(&path)?);
    let summary = catalog.summary();

    if args.json {
        print_json(&summary);
        return Ok(());
    }

    println!("Idea catalog: {}", path.display());
    println!("- {} ideas tracked", summary.total_ideas);
    println!("- {} scoring 80 or above", summary.high_score_ideas);
    println!("- average score {}", summary.average_score);
    println!("- {} distinct niches", summary.niches.len());
    for niche in &summary.niches {
        println!("  - {niche}");
    }
    Ok(())
}

pub(crate) fn run_list(args: ListArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = infra::dataset_path(config, args.dataset.data.as_ref());
    let catalog = IdeaCatalog::new(infra::load_ideas(&path)?);
    let params = build_params(
        &args.filter,
        &args.sort,
        args.page,
        args.page_size,
        config,
    );
    let page = catalog.page(&params);

    if args.json {
        print_json(&page);
        return Ok(());
    }

    if params.has_active_filters() {
        println!(
            "{} of {} ideas match the active filters",
            page.total_items,
            catalog.total_count()
        );
    } else {
        println!("{} ideas above the revenue floor", page.total_items);
    }
    println!(
        "Page {}/{} ({} per page)",
        params.page,
        page.total_pages.max(1),
        params.page_size
    );

    for idea in &page.items {
        println!(
            "- [{:>3}] #{} {} | {} | ${:.0} MRR",
            idea.score, idea.id, idea.name, idea.niche, idea.mrr
        );
    }
    if page.items.is_empty() && page.total_items > 0 {
        println!("(page out of range; retry with --page 1)");
    }
    Ok(())
}

pub(crate) fn run_show(args: ShowArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = infra::dataset_path(config, args.dataset.data.as_ref());
    let catalog = IdeaCatalog::new(infra::load_ideas(&path)?);

    let Some(idea) = catalog.get(&args.id) else {
        println!("no idea with id {} in {}", args.id, path.display());
        return Ok(());
    };

    let breakdown = ScoringEngine::breakdown(idea);
    let components = ScoringEngine::components(idea);

    if args.json {
        print_json(&serde_json::json!({
            "idea": idea,
            "breakdown": breakdown,
            "components": components,
        }));
        return Ok(());
    }

    println!("{} ({})", idea.name, idea.niche);
    println!("URL: {}", idea.url);
    if let Some(target_user) = &idea.target_user {
        println!("Target user: {target_user}");
    }
    println!("Score: {}/100", breakdown.total);
    for component in &components {
        println!(
            "- {:<12} {:>2}/{:<2} {}",
            component.category.label(),
            component.points,
            component.category.cap(),
            component.notes
        );
    }
    if !idea.rationale.is_empty() {
        println!("Rationale: {}", idea.rationale);
    }
    Ok(())
}

pub(crate) fn run_recalc(args: RecalcArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = infra::dataset_path(config, args.dataset.data.as_ref());
    let mut ideas = infra::load_ideas(&path)?;

    let outcome = recalculate(&mut ideas);
    println!(
        "Rescored {} of {} ideas",
        outcome.updated, outcome.scanned
    );

    if args.dry_run {
        println!("Dry run; {} left untouched", path.display());
        return Ok(());
    }

    IdeaDataset::write_to_path(&path, &ideas)?;
    println!("Dataset rewritten: {}", path.display());
    Ok(())
}

pub(crate) fn run_dedup(args: DedupArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = infra::dataset_path(config, args.dataset.data.as_ref());
    let mut ideas = infra::load_ideas(&path)?;

    let outcome = dedup(&mut ideas, args.by);
    println!(
        "Removed {} duplicate(s) from {} record(s); ids renumbered from 1",
        outcome.removed, outcome.scanned
    );

    if args.dry_run {
        println!("Dry run; {} left untouched", path.display());
        return Ok(());
    }

    IdeaDataset::write_to_path(&path, &ideas)?;
    println!("Dataset rewritten: {}", path.display());
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = infra::dataset_path(config, args.dataset.data.as_ref());
    let catalog = IdeaCatalog::new(infra::load_ideas(&path)?);
    let params = build_params(&args.filter, &args.sort, 1, None, config);

    let sorted = IdeaCatalog::sort(
        catalog.filter(&params),
        params.sort_key,
        params.sort_direction,
    );

    let file = std::fs::File::create(&args.output)?;
    IdeaDataset::export_csv(file, &sorted)?;
    println!(
        "Exported {} idea(s) to {}",
        sorted.len(),
        args.output.display()
    );
    Ok(())
}

fn build_params(
    filter: &FilterArgs,
    sort: &SortArgs,
    page: usize,
    page_size: Option<usize>,
    config: &AppConfig,
) -> QueryParams {
    QueryParams {
        search: filter.search.clone().unwrap_or_default(),
        niches: filter.niches.clone(),
        competition: filter.competition,
        complexity: filter.complexity,
        chance: filter.chance,
        ai: if filter.ai {
            AiFilter::AiOnly
        } else if filter.non_ai {
            AiFilter::NonAi
        } else {
            AiFilter::All
        },
        sort_key: sort.sort.unwrap_or_default(),
        sort_direction: if sort.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        },
        page,
        page_size: page_size.unwrap_or(config.query.page_size),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("output unavailable: {err}"),
    }
}
