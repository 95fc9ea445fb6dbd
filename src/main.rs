use chrono::{NaiveDate, Utc};
use clap::Parser;
use mindcaps::application::meditate::{run_breathing, run_session};
use mindcaps::application::{
    init::init, list_entries::list_entries, ConfigService, GratitudeService, LogEntryService,
    SleepService, StatsService, ThemeService, TransferService,
};
use mindcaps::cli::{
    format_dashboard, format_entry_list, format_gratitude_list, format_sleep_list, format_stats,
    format_streak, Cli, Commands, GratitudeAction, SleepAction,
};
use mindcaps::domain::{ImportMode, Intensity, MeditationTimer, Mood, SleepQuality, Theme, TimerEvent};
use mindcaps::error::{MindcapsError, Result};
use mindcaps::infrastructure::{DayBoundary, FileSystemRepository, JournalRepository};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MINDCAPS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| MindcapsError::InvalidInput(format!("Invalid date: '{}'", value)))
}

fn parse_today(value: Option<String>) -> Result<Option<NaiveDate>> {
    value.as_deref().map(parse_date).transpose()
}

fn day_boundary(repo: &FileSystemRepository) -> Result<DayBoundary> {
    Ok(repo.load_config()?.timezone)
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        let repo = FileSystemRepository::discover()?;
        let boundary = day_boundary(&repo)?;
        let dashboard = StatsService::new(repo).dashboard()?;
        print!("{}", format_dashboard(&dashboard, boundary));
        return Ok(());
    };

    match command {
        Commands::Init { path, timezone } => {
            let timezone = DayBoundary::from_str(&timezone).map_err(MindcapsError::Config)?;
            init(&path, timezone)
        }
        Commands::Log {
            mood,
            intensity,
            note,
        } => {
            let mood = Mood::from_str(&mood).map_err(MindcapsError::InvalidInput)?;
            let intensity = Intensity::new(intensity)?;
            let repo = FileSystemRepository::discover()?;
            let entry =
                LogEntryService::new(repo).execute(mood, intensity, note.as_deref().unwrap_or(""))?;
            println!(
                "Logged {} {} ({}/10). Sentiment: {}",
                entry.mood.emoji(),
                entry.mood,
                entry.intensity.value(),
                entry.sentiment
            );
            Ok(())
        }
        Commands::List { limit } => {
            let repo = FileSystemRepository::discover()?;
            let boundary = day_boundary(&repo)?;
            let entries = list_entries(&repo, limit)?;
            println!("{}", format_entry_list(&entries, boundary).trim_end());
            Ok(())
        }
        Commands::Streak { today } => {
            let today = parse_today(today)?;
            let repo = FileSystemRepository::discover()?;
            let streak = StatsService::new(repo).streak(today)?;
            println!("{}", format_streak(streak));
            Ok(())
        }
        Commands::Stats { today } => {
            let today = parse_today(today)?;
            let repo = FileSystemRepository::discover()?;
            let summary = StatsService::new(repo).summary(today)?;
            print!("{}", format_stats(&summary));
            Ok(())
        }
        Commands::Gratitude { action } => {
            let repo = FileSystemRepository::discover()?;
            let boundary = day_boundary(&repo)?;
            let service = GratitudeService::new(repo);
            match action {
                GratitudeAction::Add { text } => {
                    let item = service.add(&text)?;
                    println!("Added gratitude (id {})", item.id);
                }
                GratitudeAction::List => {
                    println!("{}", format_gratitude_list(&service.list()?, boundary).trim_end());
                }
                GratitudeAction::Delete { id } => {
                    let removed = service.delete(id)?;
                    println!("Deleted: {}", removed.text);
                }
            }
            Ok(())
        }
        Commands::Sleep { action } => {
            let repo = FileSystemRepository::discover()?;
            let boundary = day_boundary(&repo)?;
            let service = SleepService::new(repo);
            match action {
                SleepAction::Log { hours, quality } => {
                    let quality =
                        SleepQuality::from_str(&quality).map_err(MindcapsError::InvalidInput)?;
                    let log = service.log(hours, quality)?;
                    println!("Sleep logged: {}h ({})", log.hours, log.quality);
                }
                SleepAction::List => {
                    println!("{}", format_sleep_list(&service.list()?, boundary).trim_end());
                }
            }
            Ok(())
        }
        Commands::Theme { value } => {
            let repo = FileSystemRepository::discover()?;
            let service = ThemeService::new(repo);
            let theme = match value.as_deref() {
                None => service.current()?,
                Some("toggle") => service.toggle()?,
                Some(v) => service.set(Theme::from_str(v).map_err(MindcapsError::InvalidInput)?)?,
            };
            println!("{}", theme);
            Ok(())
        }
        Commands::Meditate {
            breathing: true,
            rounds,
            ..
        } => {
            run_breathing(
                rounds,
                |secs| std::thread::sleep(Duration::from_secs(u64::from(secs))),
                |step| println!("Round {}: {}", step.round, step.phase),
            );
            println!("Done.");
            Ok(())
        }
        Commands::Meditate { minutes, .. } => {
            let mut timer = MeditationTimer::new(minutes.saturating_mul(60));
            println!("Meditation: {}", timer.display());
            run_session(
                &mut timer,
                || std::thread::sleep(Duration::from_secs(1)),
                |event, t| {
                    if let TimerEvent::Tick(_) = event {
                        print!("\r{}", t.display());
                        let _ = std::io::stdout().flush();
                    }
                },
            );
            println!("\rMeditation session complete! How do you feel?");
            Ok(())
        }
        Commands::Export { output } => {
            let repo = FileSystemRepository::discover()?;
            let service = TransferService::new(repo);
            match output {
                Some(path) if path == Path::new("-") => {
                    println!("{}", service.export_json()?);
                }
                Some(path) => {
                    let count = service.export_to(&path)?;
                    println!("Exported {} entries to {}", count, path.display());
                }
                None => {
                    let (path, count) =
                        service.export_backup(&PathBuf::from("."), Utc::now().date_naive())?;
                    println!("Exported {} entries to {}", count, path.display());
                }
            }
            Ok(())
        }
        Commands::Import { file, mode } => {
            let mode = ImportMode::from_str(&mode).map_err(MindcapsError::InvalidInput)?;
            let repo = FileSystemRepository::discover()?;
            let entries = TransferService::new(repo).import_file(&file, mode)?;
            println!("Data imported successfully! {} entries in journal", entries.len());
            Ok(())
        }
        Commands::Clear { yes } => {
            if !yes {
                return Err(MindcapsError::InvalidInput(
                    "Refusing to delete all entries without --yes".to_string(),
                ));
            }
            let repo = FileSystemRepository::discover()?;
            TransferService::new(repo).clear()?;
            println!("All entries deleted");
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("timezone = {}", config.timezone.as_str());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: mindcaps config [--list | <key> [<value>]]");
                println!("Valid keys: timezone");
                Ok(())
            }
        }
    }
}
