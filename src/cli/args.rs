use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "khashi", version, author, about = "A quiet terminal companion for presence in prayer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayers, presence average and review state
    Today,
    /// Mark a prayer as completed
    Mark {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
    },
    /// Set the presence score of a completed prayer
    Score {
        /// Prayer name
        prayer: String,
        /// Presence score, 10 to 100
        #[arg(value_parser = clap::value_parser!(u8).range(10..=100))]
        score: u8,
    },
    /// Close the day by naming the prayer you felt most present in
    Review {
        /// Prayer name
        prayer: String,
    },
    /// Show today's prayer times
    Times,
    /// Show the weekly presence trend
    Stats,
    /// Show or change notification preferences
    Settings {
        #[command(subcommand)]
        action: Option<SettingsCommands>,
    },
    /// Share today's presence average
    Share,
    /// Dump stored logs as JSON to stdout
    Export,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Flip a preference (reminders, daily-message)
    Toggle {
        key: String,
    },
}
