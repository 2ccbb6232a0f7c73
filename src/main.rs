use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use taskrank::analysis::{SortingStrategy, SuggestionResult, analyze_tasks_at, suggest_tasks_at};
use taskrank::cli::{Args, Commands, TaskLoader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskrank=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Analyze {
            file,
            strategy,
            today,
            compact,
        } => {
            let tasks = TaskLoader::load(&file)
                .with_context(|| format!("failed to load tasks from {}", file.display()))?;
            let result = analyze_tasks_at(&tasks, &strategy, reference_date(today));
            let rendered = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{rendered}");
        }
        Commands::Suggest {
            file,
            count,
            strategy,
            today,
            json,
        } => {
            let tasks = TaskLoader::load(&file)
                .with_context(|| format!("failed to load tasks from {}", file.display()))?;
            let result = suggest_tasks_at(&tasks, count, &strategy, reference_date(today));
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_suggestions(&result);
            }
        }
        Commands::Strategies => print_strategies(),
    }

    Ok(())
}

fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    match today {
        Some(date) => {
            info!("using reference date {date}");
            date
        }
        None => Local::now().date_naive(),
    }
}

fn print_suggestions(result: &SuggestionResult) {
    println!("{}", result.message);
    println!();
    for suggestion in &result.suggestions {
        println!(
            "{} (score {:.2})",
            suggestion.recommendation, suggestion.priority_score
        );
        for reason in &suggestion.reasons {
            println!("   - {reason}");
        }
        println!();
    }
    println!(
        "Analyzed {} task(s) with strategy '{}'.",
        result.total_tasks_analyzed, result.strategy_used
    );
    if let Some(warning) = &result.warning {
        println!("{warning}");
    }
}

fn print_strategies() {
    println!("Available strategies (weights normalize to sum 1.0):");
    for strategy in SortingStrategy::ALL {
        let w = strategy.weights();
        println!(
            "  {:16} urgency {:.2}  importance {:.2}  effort {:.2}  dependency {:.2}",
            strategy.name(),
            w.urgency,
            w.importance,
            w.effort,
            w.dependency
        );
    }
}
