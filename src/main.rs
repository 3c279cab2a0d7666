use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskdeck::models::{TaskFilter, TaskPriority, TaskStatus};
use taskdeck::store::TaskStore;
use taskdeck::{board, seed, view};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Interactive task board for the terminal")]
struct Cli {
    /// JSON file holding the initial task list (defaults to the built-in seed)
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive board
    Board,
    /// Render one frame to stdout and exit
    Show {
        /// Only show tasks with this status (pending, in-progress, completed)
        #[arg(long)]
        status: Option<TaskStatus>,

        /// Only show tasks with this priority (low, medium, high)
        #[arg(long)]
        priority: Option<TaskPriority>,

        /// Emit the visible tasks as JSON instead of the rendered board
        #[arg(long)]
        json: bool,
    },
}

/// Initialize tracing to stderr, keeping stdout clean for the board itself.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "taskdeck=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let tasks = match &cli.seed {
        Some(path) => seed::load(path)?,
        None => seed::default_tasks(),
    };
    tracing::debug!(count = tasks.len(), "seeded task collection");

    match cli.command {
        None | Some(Commands::Board) => board::run(TaskStore::new(tasks)),
        Some(Commands::Show {
            status,
            priority,
            json,
        }) => {
            let filter = TaskFilter { status, priority };
            if json {
                let visible = filter.apply(&tasks);
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                let today = Local::now().date_naive();
                let lines = view::render_board(&tasks, &filter, today, None);
                println!("{}", lines.join("\n"));
            }
            Ok(())
        }
    }
}
