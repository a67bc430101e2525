use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

mod config;
mod groq;
mod models;
mod pipeline;
mod spotify;

#[cfg(test)]
mod pipeline_tests;

use crate::config::load_config;
use crate::groq::GroqClient;
use crate::models::{Language, Mood, Selection, TrackSlot};
use crate::pipeline::{run_pipeline, CatalogService, SessionStore, SuggestionService, ViewModel};
use crate::spotify::SpotifyClient;

#[derive(Parser)]
#[command(name = "moodify")]
#[command(about = "Mood-matched Spotify playlists with AI-generated descriptions")]
#[command(version)]
struct Args {
    /// Mood to search for (omit both selectors for interactive mode)
    #[arg(short, long, value_enum)]
    mood: Option<Mood>,

    /// Language to search for
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Reverse the AI suggestion text
    #[arg(short, long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load credentials from .env; all three are required before any interaction
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠️ Missing API keys: {e}");
            eprintln!("Set GROQ_API_KEY, SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET.");
            return Err(e);
        }
    };

    // The token exchange doubles as the connection test
    println!("Authenticating with Spotify...");
    let spotify = match SpotifyClient::connect(&config) {
        Ok(client) => {
            println!("✓ Spotify authentication successful");
            client
        }
        Err(e) => {
            eprintln!("✗ Spotify authentication failed: {e}");
            return Err(e);
        }
    };

    let groq = GroqClient::new(&config);
    let mut history = SessionStore::new();

    // One-shot mode when both selectors are given on the command line
    if let (Some(mood), Some(language)) = (args.mood, args.language) {
        let selection = Selection {
            mood,
            language,
            shuffle: args.shuffle,
        };
        let view = run_once(&groq, &spotify, &selection, &mut history)?;
        render_view(&view);
        return Ok(());
    }

    interactive_loop(&groq, &spotify, &mut history)
}

fn run_once(
    suggestions: &dyn SuggestionService,
    catalog: &dyn CatalogService,
    selection: &Selection,
    history: &mut SessionStore,
) -> Result<ViewModel> {
    println!(
        "\nGenerating playlist suggestion for {} / {}...",
        selection.mood, selection.language
    );
    Ok(run_pipeline(suggestions, catalog, selection, history)?)
}

/// Menu-driven session: pick mood and language, run the pipeline, render,
/// show recent selections, repeat until quit. History spans the loop.
fn interactive_loop(
    suggestions: &dyn SuggestionService,
    catalog: &dyn CatalogService,
    history: &mut SessionStore,
) -> Result<()> {
    println!("\n=== MOODiFY — your vibes, your playlist 🎵 ===");

    let stdin = io::stdin();
    loop {
        let Some(mood) = prompt_mood(&stdin)? else {
            break;
        };
        let Some(language) = prompt_language(&stdin)? else {
            break;
        };
        let shuffle = prompt_shuffle(&stdin)?;

        let selection = Selection {
            mood,
            language,
            shuffle,
        };

        println!("\nGenerating playlist suggestion...");
        match run_pipeline(suggestions, catalog, &selection, history) {
            Ok(view) => render_view(&view),
            // One generic line per failed run; the user may retrigger
            Err(e) => eprintln!("✗ Error: {e}"),
        }

        render_history(history);
    }

    println!("\nGoodbye!");
    Ok(())
}

/// Returns `None` when the user quits (q or end of input)
fn prompt_mood(stdin: &io::Stdin) -> Result<Option<Mood>> {
    println!("\n🎛 Moods:");
    for (i, mood) in Mood::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, mood.menu_label());
    }
    prompt_choice(stdin, "mood", Mood::ALL.len()).map(|choice| choice.map(|i| Mood::ALL[i]))
}

fn prompt_language(stdin: &io::Stdin) -> Result<Option<Language>> {
    println!("\n🌐 Languages:");
    for (i, language) in Language::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, language.label());
    }
    prompt_choice(stdin, "language", Language::ALL.len())
        .map(|choice| choice.map(|i| Language::ALL[i]))
}

/// Read a 1-based menu choice; `q` or EOF quits
fn prompt_choice(stdin: &io::Stdin, what: &str, count: usize) -> Result<Option<usize>> {
    loop {
        print!("Pick a {what} (1-{count}, q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if (1..=count).contains(&n) {
                return Ok(Some(n - 1));
            }
        }
        println!("Invalid choice: '{trimmed}'");
    }
}

fn prompt_shuffle(stdin: &io::Stdin) -> Result<bool> {
    print!("🔀 Shuffle AI suggestion? (y/N): ");
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn render_view(view: &ViewModel) {
    println!("\n🎤 AI Suggestion: {}", view.suggestion);

    if view.playlists.is_empty() {
        println!("\nNo valid playlists found. Try another mood or language!");
        return;
    }

    println!("\nFound {} playlists:", view.playlists.len());
    for (i, playlist) in view.playlists.iter().enumerate() {
        let summary = &playlist.summary;
        println!("\n{}. 🎵 {} - by {}", i + 1, summary.name, summary.owner_name);
        println!("   🎧 Open in Spotify: {}", summary.external_url);
        match &summary.image_url {
            Some(url) => println!("   Cover art: {url}"),
            None => println!("   (no cover art)"),
        }

        if playlist.tracks.is_empty() {
            println!("   No tracks available for this playlist");
            continue;
        }
        for slot in &playlist.tracks {
            match slot {
                TrackSlot::Track(track) => {
                    println!("   🎶 {} - {}", track.name, track.artist_name);
                    match &track.preview_url {
                        Some(url) => println!("      Preview: {url}"),
                        None => println!("      🔇 No preview available for this track"),
                    }
                }
                TrackSlot::Missing => println!("   Track information missing"),
            }
        }
    }
}

fn render_history(history: &SessionStore) {
    if history.is_empty() {
        return;
    }
    println!("\n🕒 Previous selections:");
    for entry in history.recent(5) {
        println!(
            "   Mood: {} | Language: {} ({})",
            entry.mood,
            entry.language,
            entry.at.format("%H:%M:%S")
        );
    }
}
