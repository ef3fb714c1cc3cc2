use clap::{Parser, Subcommand};
use std::path::PathBuf;
use therabot_core::compose::DecorationAssets;
use therabot_core::config::resolve_assets_dir;
use therabot_core::{display_label, DocumentComposer, KnowledgeBase, PrescriptionService};

#[derive(Parser)]
#[command(name = "therabot")]
#[command(about = "TheraBot prescription CLI")]
struct Cli {
    /// YAML knowledge table to use instead of the built-in one
    #[arg(long, global = true)]
    knowledge_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List known diseases
    List,
    /// Print the treatment and recommendation for a disease
    Lookup {
        /// Disease name, e.g. "gastric ulcer"
        name: String,
    },
    /// Render a prescription PDF for a disease
    Prescribe {
        /// Disease name, e.g. "gastric ulcer"
        name: String,
        /// Output file
        #[arg(long, short, default_value = "Prescription.pdf")]
        output: PathBuf,
        /// Directory holding the logo and signature images
        #[arg(long)]
        assets_dir: Option<PathBuf>,
    },
}

fn load_knowledge(path: Option<&PathBuf>) -> Result<KnowledgeBase, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => KnowledgeBase::from_path(path)?,
        None => KnowledgeBase::builtin()?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let knowledge = load_knowledge(cli.knowledge_file.as_ref())?;

    match cli.command {
        Some(Commands::List) => {
            for identifier in knowledge.identifiers() {
                println!("{} ({})", display_label(identifier), identifier);
            }
        }
        Some(Commands::Lookup { name }) => match knowledge.lookup(&name) {
            Ok(facts) => {
                println!("Treatment:\n{}\n", facts.treatment);
                println!("Recommendation:\n{}", facts.recommendation);
            }
            Err(e) => eprintln!("Error looking up disease: {}", e),
        },
        Some(Commands::Prescribe {
            name,
            output,
            assets_dir,
        }) => {
            let assets = DecorationAssets::load(&resolve_assets_dir(assets_dir));
            let service = PrescriptionService::new(knowledge, DocumentComposer::new(assets));
            match service.prescribe(&name) {
                Ok(prescription) => {
                    std::fs::write(&output, &prescription.bytes)?;
                    println!(
                        "Wrote prescription for {} to {}",
                        display_label(&prescription.disease),
                        output.display()
                    );
                }
                Err(e) => eprintln!("Error rendering prescription: {}", e),
            }
        }
        None => {
            println!("Use 'therabot --help' for commands");
        }
    }

    Ok(())
}
