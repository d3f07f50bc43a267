use super::{load_config, CommandHandler};
use crate::engine::{Assembler, GenerationReport};
use crate::history::GitHistory;
use crate::io::DocumentWriter;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Handler for the `generate` command
pub struct GenerateCommand {
    pub config: PathBuf,
    pub dry_run: bool,
}

impl CommandHandler for GenerateCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let history = GitHistory::new(&config.root);
        let assembler = Assembler::new(&config, &history)?;

        let report = if self.dry_run {
            assembler.build()?.map(|generation| generation.report)
        } else {
            let writer = DocumentWriter::new(config.output_path());
            assembler.run(&writer)?
        };

        match report {
            Some(report) => {
                print_report(&report, self.dry_run);
                info!("Generation finished");
            }
            None => println!("No themes released, nothing to generate"),
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "generate"
    }
}

impl GenerateCommand {
    /// Create new generate command
    pub fn new(config: PathBuf, dry_run: bool) -> Self {
        Self { config, dry_run }
    }
}

fn print_report(report: &GenerationReport, dry_run: bool) {
    for category in &report.categories {
        println!(
            "{:<20} {:>5} items {:>4} pages",
            category.id, category.items, category.pages
        );
    }

    println!("Icon packs: {}", report.icon_packs);
    if let Some(complete) = report.complete_icon_packs {
        println!("Complete icon packs: {}", complete);
    }

    if !report.skipped.is_empty() {
        println!("Skipped {} invalid entries:", report.skipped.len());
        for name in &report.skipped {
            println!("  - {}", name);
        }
    }

    if dry_run {
        println!("Dry run, would write:");
        for path in &report.documents {
            println!("  {}", path.display());
        }
    } else {
        println!("Wrote {} documents", report.documents.len());
    }
}
