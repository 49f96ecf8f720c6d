use clap::Parser;
use job_reclass_rust::{classifier, cli, config, error, loader, report};

use classifier::{CategoryMap, ClassifyOptions, Rules};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            input,
            output,
            policy,
            top,
            snippet,
            categories,
        } => {
            println!("🔧 job-reclass - job category audit\n");

            let policy = policy.unwrap_or(config.default_policy);
            let top = top.unwrap_or(config.top_combinations);
            let snippet_chars = snippet.unwrap_or(config.snippet_chars);

            // 1. Load and validate
            println!("[1/4] Loading jobs...");
            let jobs = loader::load_jobs(&input)?;
            println!("✔ {} jobs loaded\n", jobs.len());

            if jobs.is_empty() {
                return Err(error::JobReclassError::NoJobsFound(
                    input.display().to_string(),
                ));
            }

            // 2. Classify
            println!("[2/4] Classifying... (policy: {})", policy);
            let category_map = match categories {
                Some(path) => CategoryMap::from_file(&path)?,
                None => CategoryMap::standard(),
            };
            let rules = Rules::standard();
            let options = ClassifyOptions {
                policy,
                snippet_chars,
            };

            let mut results: Vec<_> = jobs
                .iter()
                .map(|job| classifier::classify_record(job, &rules, &category_map, &options))
                .collect();

            if cli.verbose {
                for result in &results {
                    println!("  #{}: {}", result.job_number, result.classification_logic);
                }
            }
            println!("✔ Classification complete\n");

            // 3. Write artifacts
            println!("[3/4] Writing artifacts...");
            report::sort_by_job_number(&mut results);

            let output_dir = match output {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    dir
                }
                None => {
                    let parent = input.parent().unwrap_or_else(|| Path::new("."));
                    if parent.as_os_str().is_empty() {
                        PathBuf::from(".")
                    } else {
                        parent.to_path_buf()
                    }
                }
            };

            let detail_path = output_dir.join(report::DETAIL_FILE_NAME);
            report::write_detail(&results, &detail_path)?;
            println!("✔ Detail: {}", detail_path.display());

            let summary = report::build_summary(&results, top);
            let summary_path = output_dir.join(report::SUMMARY_FILE_NAME);
            report::write_summary(&summary, &summary_path)?;
            println!("✔ Summary: {}\n", summary_path.display());

            // 4. Report
            println!("[4/4] Analysis complete!\n");
            report::print_summary(&summary);

            println!("\n✅ Done");
        }

        Commands::Report { input, output, top } => {
            println!("📊 job-reclass - summary report\n");

            let results = report::read_detail(&input)?;
            let summary = report::build_summary(&results, top.unwrap_or(config.top_combinations));

            if let Some(path) = output {
                report::write_summary(&summary, &path)?;
                println!("✔ Summary: {}\n", path.display());
            }

            report::print_summary(&summary);
        }

        Commands::Config {
            set_policy,
            set_top,
            set_snippet,
            show,
        } => {
            let mut config = config;

            if let Some(policy) = set_policy {
                config.set_policy(policy)?;
                println!("✔ Default policy set to {}", policy);
            }

            if let Some(top) = set_top {
                config.set_top_combinations(top)?;
                println!("✔ Top combinations set to {}", top);
            }

            if let Some(chars) = set_snippet {
                config.set_snippet_chars(chars)?;
                println!("✔ Snippet length set to {}", chars);
            }

            if show {
                println!("Settings:");
                println!("  Policy: {}", config.default_policy);
                println!("  Top combinations: {}", config.top_combinations);
                println!("  Snippet length: {}", config.snippet_chars);
            }
        }
    }

    Ok(())
}
