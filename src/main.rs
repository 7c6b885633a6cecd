//! apptrack - Job Application Tracker
//!
//! Thin CLI over the application store: list, add, update, delete, and
//! summarize tracked job applications, with CSV export and import.

use anyhow::{bail, Context, Result};
use apptrack::application::ApplicationStore;
use apptrack::domain::{ApplicationDraft, ApplicationPatch};
use apptrack::infrastructure::{CsvExporter, FileStorage};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apptrack")]
#[command(about = "Track job applications - add, update, and summarize your pipeline")]
struct Cli {
    /// Directory holding the persisted application data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all applications
    List,

    /// Show one application in full
    Show {
        /// Application id
        id: String,
    },

    /// Add an application
    Add(AddArgs),

    /// Update fields of an existing application
    Update {
        /// Application id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an application
    Delete {
        /// Application id
        id: String,
    },

    /// Remove every application
    Clear {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },

    /// Show status counts
    Stats,

    /// Export all applications to a CSV file
    Export {
        /// Destination path
        path: PathBuf,
    },

    /// Import applications from a CSV file (ids are re-assigned)
    Import {
        /// Source path
        path: PathBuf,
    },
}

#[derive(Args)]
struct AddArgs {
    /// Company name
    company: String,

    /// Position title
    position: String,

    #[arg(long, default_value = "")]
    location: String,

    /// Application date (free-form, e.g. 2025-06-01)
    #[arg(long, default_value = "")]
    date: String,

    #[arg(long, default_value = "Not Applied")]
    status: String,

    #[arg(long, default_value = "")]
    priority: String,

    #[arg(long, default_value = "")]
    salary: String,

    /// Posting URL or where the role was found
    #[arg(long, default_value = "")]
    source: String,

    #[arg(long, default_value = "")]
    contact: String,

    /// Scheduled interview date, if any
    #[arg(long, default_value = "")]
    interview: String,

    /// Planned follow-up date, if any
    #[arg(long, default_value = "")]
    followup: String,

    #[arg(long, default_value = "")]
    notes: String,
}

impl AddArgs {
    fn into_draft(self) -> ApplicationDraft {
        ApplicationDraft {
            company: self.company,
            position: self.position,
            location: self.location,
            application_date: self.date,
            status: self.status,
            priority: self.priority,
            salary: self.salary,
            source: self.source,
            contact: self.contact,
            interview_date: self.interview,
            followup_date: self.followup,
            notes: self.notes,
        }
    }
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    position: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// Application date (free-form, e.g. 2025-06-01)
    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    status: Option<String>,

    #[arg(long)]
    priority: Option<String>,

    #[arg(long)]
    salary: Option<String>,

    #[arg(long)]
    source: Option<String>,

    #[arg(long)]
    contact: Option<String>,

    #[arg(long)]
    interview: Option<String>,

    #[arg(long)]
    followup: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

impl FieldArgs {
    fn into_patch(self) -> ApplicationPatch {
        ApplicationPatch {
            company: self.company,
            position: self.position,
            location: self.location,
            application_date: self.date,
            status: self.status,
            priority: self.priority,
            salary: self.salary,
            source: self.source,
            contact: self.contact,
            interview_date: self.interview,
            followup_date: self.followup,
            notes: self.notes,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let storage = match &cli.data_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::default_location(),
    };
    let mut store =
        ApplicationStore::open(storage).context("Failed to open the application store")?;

    match cli.command {
        Commands::List => {
            for record in store.applications() {
                println!(
                    "{:>13}  {:<19}  {:<30}  {}",
                    record.id, record.status, record.company, record.position
                );
            }
        }

        Commands::Show { id } => match store.get(&id) {
            Some(record) => {
                println!("Id:               {}", record.id);
                println!("Company:          {}", record.company);
                println!("Position:         {}", record.position);
                println!("Location:         {}", record.location);
                println!("Application date: {}", record.application_date);
                println!("Status:           {}", record.status);
                println!("Priority:         {}", record.priority);
                println!("Salary:           {}", record.salary);
                println!("Source:           {}", record.source);
                println!("Contact:          {}", record.contact);
                println!("Interview date:   {}", record.interview_date);
                println!("Follow-up date:   {}", record.followup_date);
                println!("Notes:            {}", record.notes);
            }
            None => bail!("No application with id {}", id),
        },

        Commands::Add(args) => {
            let id = store
                .add(args.into_draft())
                .context("Failed to add the application")?;
            println!("Added application {}", id);
        }

        Commands::Update { id, fields } => {
            let patch = fields.into_patch();
            if patch.is_empty() {
                bail!("Nothing to update - pass at least one field flag");
            }
            let known = store.get(&id).is_some();
            store
                .update(&id, &patch)
                .context("Failed to update the application")?;
            if known {
                println!("Updated application {}", id);
            } else {
                println!("No application with id {}, nothing updated", id);
            }
        }

        Commands::Delete { id } => {
            store
                .delete(&id)
                .context("Failed to delete the application")?;
            println!("Deleted application {}", id);
        }

        Commands::Clear { yes } => {
            if !yes {
                bail!("This removes every application; pass --yes to confirm");
            }
            store.clear_all().context("Failed to clear applications")?;
            println!("Cleared all applications");
        }

        Commands::Stats => {
            let stats = store.stats();
            println!("Total:       {}", stats.total);
            println!("Not applied: {}", stats.not_applied);
            println!("Pending:     {}", stats.pending);
            println!("Interviews:  {}", stats.interviews);
            println!("Offers:      {}", stats.offers);
        }

        Commands::Export { path } => {
            CsvExporter::export_to_csv(store.applications(), &path)
                .context("Failed to export applications")?;
            println!(
                "Exported {} applications to {}",
                store.applications().len(),
                path.display()
            );
        }

        Commands::Import { path } => {
            let drafts =
                CsvExporter::import_from_csv(&path).context("Failed to import applications")?;
            let count = drafts.len();
            for draft in drafts {
                store
                    .add(draft)
                    .context("Failed to store an imported application")?;
            }
            println!("Imported {} applications from {}", count, path.display());
        }
    }

    Ok(())
}
