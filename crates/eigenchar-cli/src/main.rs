use clap::Parser;
use tracing_subscriber::EnvFilter;

use eigenchar_dataset::{load_labels, PagePaths};
use eigenchar_pipeline::{
    classify_page_files, train_pages, JsonModelStore, ModelStore, TrainConfig,
};

mod cli;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!("eigenchar v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Train {
            data_dir,
            model,
            config,
            pages,
        } => {
            let config = if let Some(config_path) = &config {
                let data = std::fs::read_to_string(config_path)?;
                serde_json::from_str(&data)?
            } else {
                TrainConfig::default()
            };

            let page_paths: Vec<PagePaths> = pages
                .iter()
                .map(|stem| PagePaths::from_stem(&data_dir.join(stem)))
                .collect();

            let trained = train_pages(&page_paths, &config)?;
            JsonModelStore.save(&trained, &model)?;

            println!(
                "trained on {} characters across {} pages -> {}",
                trained.train_count(),
                pages.len(),
                model.display()
            );
        }
        Command::Classify {
            model,
            data_dir,
            page,
        } => {
            let trained = JsonModelStore.load(&model)?;
            let page = PagePaths::from_stem(&data_dir.join(&page));
            let labels = classify_page_files(&page, &trained)?;
            println!("{}", labels.concat());
        }
        Command::Evaluate {
            model,
            data_dir,
            pages,
        } => {
            let trained = JsonModelStore.load(&model)?;

            let mut correct = 0usize;
            let mut total = 0usize;
            for stem in &pages {
                let page = PagePaths::from_stem(&data_dir.join(stem));
                let predicted = classify_page_files(&page, &trained)?;

                let mut truth = Vec::new();
                load_labels(&page.labels, &mut truth)?;
                if predicted.len() != truth.len() {
                    anyhow::bail!(
                        "{stem}: {} predictions but {} ground-truth labels",
                        predicted.len(),
                        truth.len()
                    );
                }

                let page_correct = predicted.iter().zip(&truth).filter(|(p, t)| p == t).count();
                println!("{stem}: {page_correct}/{} correct", truth.len());

                correct += page_correct;
                total += truth.len();
            }

            println!(
                "overall: {correct}/{total} ({:.1}%)",
                100.0 * correct as f64 / total.max(1) as f64
            );
        }
    }

    Ok(())
}
