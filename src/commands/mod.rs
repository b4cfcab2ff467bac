pub mod dashboard;
pub mod delete;
pub mod doctor;
pub mod end;
pub mod export;
pub mod goal;
pub mod init;
pub mod insights;
pub mod log;
pub mod pause;
pub mod recent;
pub mod resume;
pub mod start;
pub mod status;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Begin a deep work session")]
    Start(start::StartArgs),
    #[command(about = "Pause the active session")]
    Pause,
    #[command(about = "Resume a paused session")]
    Resume,
    #[command(about = "Check the current session status")]
    Status(status::StatusArgs),
    #[command(about = "Complete the session and log it")]
    End,
    #[command(about = "Show the session history")]
    Log(log::LogArgs),
    #[command(about = "Show today's completed sessions")]
    Recent,
    #[command(about = "Show insights about your work patterns")]
    Insights,
    #[command(about = "Show a yearly contribution graph of your focus sessions")]
    Dashboard,
    #[command(about = "Delete a session from the log")]
    Delete,
    #[command(about = "Export session history to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Set or view your daily focus goal")]
    Goal(goal::GoalArgs),
    #[command(about = "Watch the current session and provide gentle reminders")]
    Watch(watch::WatchArgs),
    #[command(about = "Run a diagnostic check on your tide setup")]
    Doctor,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        if crate::libs::messages::macros::is_debug_mode() {
            crate::libs::trace::init();
        }
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Start(args) => start::cmd(args),
            Commands::Pause => pause::cmd(),
            Commands::Resume => resume::cmd(),
            Commands::Status(args) => status::cmd(args),
            Commands::End => end::cmd(),
            Commands::Log(args) => log::cmd(args),
            Commands::Recent => recent::cmd(),
            Commands::Insights => insights::cmd(),
            Commands::Dashboard => dashboard::cmd(),
            Commands::Delete => delete::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Goal(args) => goal::cmd(args),
            Commands::Watch(args) => watch::cmd(args),
            Commands::Doctor => doctor::cmd(),
        }
    }
}
