//! Command implementations for the Wayfinder CLI.

use std::fs;
use std::sync::Arc;

use crate::catalog::MemoryCatalog;
use crate::cli::args::{Command, OutputFormat, RouteArgs, WayfinderArgs};
use crate::config::RouterConfig;
use crate::error::{Result, WayfinderError};
use crate::keywords::KeywordDictionary;
use crate::router::{ClassificationResult, QueryRouter, RouteExplanation};

/// Execute a CLI command.
pub fn execute_command(args: WayfinderArgs) -> Result<()> {
    match &args.command {
        Command::Route(route_args) => route_query(route_args, &args),
        Command::Explain(route_args) => explain_query(route_args, &args),
    }
}

fn build_router(args: &RouteArgs) -> Result<QueryRouter> {
    let catalog = Arc::new(MemoryCatalog::from_file(&args.catalog)?);

    let config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str::<RouterConfig>(&content)?
        }
        None => RouterConfig::default(),
    };

    match &args.keywords {
        Some(path) => {
            let keywords = KeywordDictionary::from_file(path)?;
            QueryRouter::with_keywords(catalog, config, keywords)
        }
        None => QueryRouter::new(catalog, config),
    }
}

fn query_text(args: &RouteArgs) -> Result<String> {
    if args.query.is_empty() {
        return Err(WayfinderError::invalid_config(
            "no query given; pass it after the catalog options",
        ));
    }
    Ok(args.query.join(" "))
}

fn route_query(route_args: &RouteArgs, cli_args: &WayfinderArgs) -> Result<()> {
    let router = build_router(route_args)?;
    let query = query_text(route_args)?;

    let result = router.route(&query)?;
    match cli_args.output_format {
        OutputFormat::Json => print_json(&result, cli_args.pretty)?,
        OutputFormat::Human => print_result(&result),
    }
    Ok(())
}

fn explain_query(route_args: &RouteArgs, cli_args: &WayfinderArgs) -> Result<()> {
    let router = build_router(route_args)?;
    let query = query_text(route_args)?;

    let explanation = router.explain(&query)?;
    match cli_args.output_format {
        OutputFormat::Json => print_json(&explanation, cli_args.pretty)?,
        OutputFormat::Human => print_explanation(&explanation),
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn print_result(result: &ClassificationResult) {
    println!(
        "intent: {} (confidence {:.2})",
        result.intent, result.intent_confidence
    );
    if result.candidates.is_empty() {
        println!("candidates: none");
    } else {
        println!("candidates:");
        for candidate in &result.candidates {
            println!(
                "  {:.2}  {}  [{} via {}]",
                candidate.confidence,
                candidate.display_name,
                candidate.product_id,
                candidate.strategy
            );
        }
    }
    if result.disambiguation_needed {
        println!("disambiguation needed: ask the user which product they meant");
    }
}

fn print_explanation(explanation: &RouteExplanation) {
    println!("normalized: '{}'", explanation.normalized_text);
    println!(
        "location score: {:.2} (confidence {:.2})",
        explanation.location_score, explanation.location_confidence
    );
    println!(
        "information score: {:.2} (confidence {:.2})",
        explanation.information_score, explanation.information_confidence
    );
    if !explanation.location_matches.is_empty() {
        let terms: Vec<String> = explanation
            .location_matches
            .iter()
            .map(|(t, w)| format!("{t} ({w:.1})"))
            .collect();
        println!("location keywords: {}", terms.join(", "));
    }
    if !explanation.information_matches.is_empty() {
        let terms: Vec<String> = explanation
            .information_matches
            .iter()
            .map(|(t, w)| format!("{t} ({w:.1})"))
            .collect();
        println!("information keywords: {}", terms.join(", "));
    }
    if explanation.negated {
        println!("negation detected - confidence reduced");
    }
    print_result(&explanation.result);
}
