use std::{io, path::PathBuf, time::Instant};

use clap::{Parser, ValueEnum};
use scholar_rank::{
    error::Result,
    localization::Localizer,
    provider::{transform_response, JsonFileProvider, SearchProvider},
    scoring::aggregate::ACCURACY_THRESHOLD,
    scoring::impact::ImpactScorer,
    search::engine::{Order, SearchEngine, SortKey},
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Relevance,
    Impact,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => Self::Relevance,
            SortArg::Impact => Self::Impact,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => Self::Ascending,
            OrderArg::Desc => Self::Descending,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a captured search-provider response
    #[arg(long, default_value = "demos/sample-response.json")]
    results_path: PathBuf,

    /// Run one query and exit instead of prompting
    #[arg(short, long)]
    query: Option<String>,

    /// Sort key for the ranked output
    #[arg(long, value_enum, default_value = "relevance")]
    sort: SortArg,

    /// Sort direction
    #[arg(long, value_enum, default_value = "desc")]
    order: OrderArg,

    /// Maximum number of results to rank
    #[arg(short, long, default_value_t = 5)]
    limit: usize,

    /// Locale file overriding the bundled English strings
    #[arg(long)]
    locale: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let localizer = match &args.locale {
        Some(path) => Localizer::from_json(&std::fs::read_to_string(path)?)?,
        None => Localizer::english()?,
    };

    let provider = JsonFileProvider::new(args.results_path.clone());
    let engine = SearchEngine::new()?;
    let impact = ImpactScorer::new();

    if let Some(query) = args.query.clone() {
        return run_query(&args, &provider, &engine, &impact, &localizer, &query);
    }

    println!("Enter Search Query:");
    let mut buffer = String::new();

    loop {
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let query = buffer.trim().to_string();
        if query == "exit" {
            break;
        }

        run_query(&args, &provider, &engine, &impact, &localizer, &query)?;
        buffer.clear();
    }

    Ok(())
}

fn run_query(
    args: &Args,
    provider: &JsonFileProvider,
    engine: &SearchEngine,
    impact: &ImpactScorer,
    localizer: &Localizer,
    query: &str,
) -> Result<()> {
    let start = Instant::now();
    let raw = provider.search(query, args.limit)?;
    let response = transform_response(raw, query, impact);
    let ranked = engine.rank(query, response.topics, args.sort.into(), args.order.into());
    let elapsed = start.elapsed();

    println!(
        "{}:",
        localizer.lookup("topics.resultsFor", &[("query", query.to_string())])
    );

    for result in &ranked.results {
        println!(
            "  [relevance {:>3}] [impact {:>3}] {} ({})",
            result.relevance, result.topic.impact_score, result.topic.title, result.topic.url
        );
    }

    let count = ranked.results.len() as u64;
    println!("{} {}", count, localizer.pluralize(count, "topics.result"));
    println!("Time taken: {elapsed:?}");

    if !ranked.meets_threshold {
        println!("{}", localizer.lookup("topics.lowRelevanceWarning", &[]));
        println!(
            "{}",
            localizer.lookup(
                "topics.relevanceScore",
                &[
                    ("score", ranked.average_relevance.to_string()),
                    ("threshold", ACCURACY_THRESHOLD.to_string()),
                ],
            )
        );
        println!("{}", localizer.lookup("topics.tryRefining", &[]));
    }

    Ok(())
}
