mod settings;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use ielts_coach_core::analysis::speech_analyzer::analyze_speech;
use ielts_coach_core::drill::domain::similarity_tier::SimilarityTier;
use ielts_coach_core::drill::pronunciation_drill::PronunciationDrill;
use ielts_coach_core::lexicon::vocabulary::topics;
use ielts_coach_core::matching::domain::word_matcher::{
    align_words, calculate_similarity, target_words,
};
use ielts_coach_core::report::feedback_reporter::{FeedbackReporter, JsonReporter, TextReporter};

use settings::{ReportFormat, Settings};

/// Offline speaking-practice scoring.
#[derive(Parser)]
#[command(name = "ielts-coach")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a spoken answer from its final transcript.
    Analyze {
        /// Transcript file ("-" or omitted reads stdin).
        transcript: Option<PathBuf>,

        /// Recording length in seconds.
        #[arg(long, default_value = "60")]
        duration: f64,

        /// Topic label (defaults to the saved setting).
        #[arg(long)]
        topic: Option<String>,

        /// Report format: text or json (defaults to the saved setting).
        #[arg(long)]
        format: Option<String>,
    },

    /// Align a spoken phrase against a reference phrase.
    Match {
        /// Reference phrase.
        #[arg(long)]
        target: String,

        /// Recognized speech.
        input: String,
    },

    /// Run a listen-and-repeat drill from three attempt transcripts.
    Drill {
        /// Reference phrase.
        #[arg(long)]
        target: String,

        /// Transcripts of the first, second and final attempt.
        #[arg(num_args = 3, required = true)]
        attempts: Vec<String>,

        /// Similarity percentage needed to pass (defaults to the saved setting).
        #[arg(long)]
        threshold: Option<u8>,
    },

    /// List known topics.
    Topics,

    /// Show or update saved defaults.
    Config {
        #[arg(long)]
        topic: Option<String>,

        #[arg(long)]
        format: Option<String>,

        #[arg(long)]
        threshold: Option<u8>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli.command)?;
    let settings = Settings::load();

    match cli.command {
        Command::Analyze {
            transcript,
            duration,
            topic,
            format,
        } => {
            let topic = topic.unwrap_or_else(|| settings.default_topic.clone());
            let format = format
                .as_deref()
                .and_then(ReportFormat::parse)
                .unwrap_or(settings.format);
            run_analyze(transcript.as_deref(), duration, &topic, format)
        }
        Command::Match { target, input } => {
            run_match(&target, &input);
            Ok(())
        }
        Command::Drill {
            target,
            attempts,
            threshold,
        } => run_drill(
            &target,
            &attempts,
            threshold.unwrap_or(settings.pass_threshold),
        ),
        Command::Topics => {
            for topic in topics() {
                println!("{topic}");
            }
            Ok(())
        }
        Command::Config {
            topic,
            format,
            threshold,
        } => {
            run_config(settings, topic, format, threshold);
            Ok(())
        }
    }
}

fn run_analyze(
    transcript_path: Option<&Path>,
    duration: f64,
    topic: &str,
    format: ReportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let transcript = read_transcript(transcript_path)?;
    log::info!(
        "Analyzing {} characters for topic '{topic}'",
        transcript.len()
    );

    let result = analyze_speech(&transcript, duration, topic);
    let reporter: Box<dyn FeedbackReporter> = match format {
        ReportFormat::Text => Box::new(TextReporter),
        ReportFormat::Json => Box::new(JsonReporter),
    };
    reporter.write_to(&result, &mut io::stdout().lock())?;
    Ok(())
}

fn run_match(target: &str, input: &str) {
    for line in match_lines(target, input) {
        println!("{line}");
    }
}

fn match_lines(target: &str, input: &str) -> Vec<String> {
    let alignment = align_words(target, input);
    let mut lines: Vec<String> = target_words(target)
        .iter()
        .zip(&alignment)
        .map(|(word, matched)| match matched {
            Some(m) => format!("  [x] {word} ({:?})", m.kind),
            None => format!("  [ ] {word}"),
        })
        .collect();
    let similarity = calculate_similarity(target, input);
    lines.push(format!(
        "Similarity: {similarity}% ({})",
        SimilarityTier::from_similarity(similarity)
    ));
    lines
}

fn run_drill(
    target: &str,
    attempts: &[String],
    threshold: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut drill = PronunciationDrill::new(target)?.with_pass_threshold(threshold);
    drill.start()?;

    for attempt in attempts {
        if let Some(cue) = drill.voice_cue() {
            log::debug!("Playing {:?} at rate {}", cue.voice, cue.rate);
        }
        let stage = drill.playback_finished()?;
        log::debug!("{stage}: {}s window", drill.attempt_seconds());
        drill.attempt_finished(attempt)?;
        println!(
            "Attempt {}: {}%",
            drill.attempt_scores().len(),
            drill.live_similarity()
        );
    }

    let outcome = drill
        .outcome()
        .ok_or("Drill did not reach feedback after three attempts")?;
    if outcome.passed {
        println!("Result: Passed ({}%)", outcome.score);
    } else {
        println!(
            "Result: Try Again ({}%, {}% needed)",
            outcome.score, threshold
        );
    }
    Ok(())
}

fn run_config(
    mut settings: Settings,
    topic: Option<String>,
    format: Option<String>,
    threshold: Option<u8>,
) {
    let changed = topic.is_some() || format.is_some() || threshold.is_some();
    if let Some(topic) = topic {
        settings.default_topic = topic;
    }
    if let Some(format) = format.as_deref().and_then(ReportFormat::parse) {
        settings.format = format;
    }
    if let Some(threshold) = threshold {
        settings.pass_threshold = threshold;
    }
    if changed {
        settings.save();
    }

    println!("topic: {}", settings.default_topic);
    println!("format: {}", settings.format);
    println!("threshold: {}%", settings.pass_threshold);
}

fn read_transcript(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(p) if p != Path::new("-") => Ok(fs::read_to_string(p)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn validate(command: &Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Analyze {
            transcript,
            duration,
            format,
            ..
        } => {
            if let Some(path) = transcript {
                if path != Path::new("-") && !path.exists() {
                    return Err(format!("Transcript file not found: {}", path.display()).into());
                }
            }
            if !duration.is_finite() || *duration < 0.0 {
                return Err(format!("Duration must be a non-negative number, got {duration}").into());
            }
            validate_format(format.as_deref())?;
        }
        Command::Drill { threshold, .. } | Command::Config { threshold, .. } => {
            if let Some(t) = threshold {
                if *t > 100 {
                    return Err(format!("Threshold must be between 0 and 100, got {t}").into());
                }
            }
            if let Command::Config { format, .. } = command {
                validate_format(format.as_deref())?;
            }
        }
        Command::Match { target, .. } => {
            if target.trim().is_empty() {
                return Err("Target phrase must not be empty".into());
            }
        }
        Command::Topics => {}
    }
    Ok(())
}

fn validate_format(format: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Some(f) if ReportFormat::parse(f).is_none() => {
            Err(format!("Format must be 'text' or 'json', got '{f}'").into())
        }
        _ => Ok(()),
    }
}
