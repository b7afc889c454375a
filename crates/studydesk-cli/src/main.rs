use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studydesk-cli", version, about = "Studydesk CLI")]
struct Cli {
    /// Acting user id (defaults to $STUDYDESK_USER, then "local")
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Assignment management
    Assignment {
        #[command(subcommand)]
        action: commands::assignment::AssignmentAction,
    },
    /// Exam management
    Exam {
        #[command(subcommand)]
        action: commands::exam::ExamAction,
    },
    /// Time slot management
    Slot {
        #[command(subcommand)]
        action: commands::slot::SlotAction,
    },
    /// Habit and goal tracking
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Grade records
    Grade {
        #[command(subcommand)]
        action: commands::grade::GradeAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Reading list
    Reading {
        #[command(subcommand)]
        action: commands::reading::ReadingAction,
    },
    /// Wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::WishlistAction,
    },
    /// Study task planning
    Study {
        #[command(subcommand)]
        action: commands::study::StudyAction,
    },
    /// Pomodoro session log
    Pomodoro {
        #[command(subcommand)]
        action: commands::pomodoro::PomodoroAction,
    },
    /// Unified calendar view
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// XP, level, and pomodoro statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let user = cli.user;
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action, user),
        Commands::Assignment { action } => commands::assignment::run(action, user),
        Commands::Exam { action } => commands::exam::run(action, user),
        Commands::Slot { action } => commands::slot::run(action, user),
        Commands::Habit { action } => commands::habit::run(action, user),
        Commands::Grade { action } => commands::grade::run(action, user),
        Commands::Journal { action } => commands::journal::run(action, user),
        Commands::Reading { action } => commands::reading::run(action, user),
        Commands::Wishlist { action } => commands::wishlist::run(action, user),
        Commands::Study { action } => commands::study::run(action, user),
        Commands::Pomodoro { action } => commands::pomodoro::run(action, user),
        Commands::Calendar { action } => commands::calendar::run(action, user),
        Commands::Stats { action } => commands::stats::run(action, user),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
