use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use palaver::{
    analyze_conversation, attribute_speakers, parse_diarization_file, parse_evaluations_file,
    parse_whisper_file, render_transcript, segment_turns, write_transcript, AnalysisReport,
    NegotiationInfo, ScoreConfig,
};

#[derive(Parser)]
#[command(name = "palaver")]
#[command(author, version, about = "Sales negotiation transcript assembly and scoring pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the speaker transcript and produce the full score report
    Report {
        /// Transcription result with word timestamps (whisper JSON)
        #[arg(short, long)]
        transcription: PathBuf,

        /// Diarization turns (JSON array of start/end/speaker)
        #[arg(short, long)]
        diarization: PathBuf,

        /// Per-stage evaluations from the external grader (JSON)
        #[arg(short, long)]
        evaluations: PathBuf,

        /// Sales representative's display name
        #[arg(long)]
        sales_rep: String,

        /// Client company name
        #[arg(long, default_value = "")]
        client_company: String,

        /// Client representative's name
        #[arg(long, default_value = "")]
        client_rep: String,

        /// Negotiation date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output file for the report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the assembled transcript (text)
        #[arg(long)]
        transcript_output: Option<PathBuf>,

        /// Ideal share of speech for the representative, in percent
        #[arg(long, default_value = "25.0")]
        ideal_ratio: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Assemble the speaker transcript without scoring
    Transcript {
        /// Transcription result with word timestamps (whisper JSON)
        #[arg(short, long)]
        transcription: PathBuf,

        /// Diarization turns (JSON array of start/end/speaker)
        #[arg(short, long)]
        diarization: PathBuf,

        /// Output file (text); prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            transcription,
            diarization,
            evaluations,
            sales_rep,
            client_company,
            client_rep,
            date,
            output,
            transcript_output,
            ideal_ratio,
            verbose,
        } => {
            setup_logging(verbose);
            run_report(
                transcription,
                diarization,
                evaluations,
                NegotiationInfo {
                    sales_rep,
                    client_company,
                    client_rep,
                    date,
                },
                output,
                transcript_output,
                ideal_ratio,
            )
        }
        Commands::Transcript {
            transcription,
            diarization,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            run_transcript(transcription, diarization, output)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_report(
    transcription: PathBuf,
    diarization: PathBuf,
    evaluations: PathBuf,
    info: NegotiationInfo,
    output: Option<PathBuf>,
    transcript_output: Option<PathBuf>,
    ideal_ratio: f64,
) -> Result<()> {
    info!("Loading transcription from {:?}", transcription);
    let words = parse_whisper_file(&transcription).context("Failed to load transcription")?;
    info!("Loaded {} words", words.len());

    info!("Loading diarization from {:?}", diarization);
    let turns = parse_diarization_file(&diarization).context("Failed to load diarization")?;
    info!("Loaded {} diarization turns", turns.len());

    let evaluations =
        parse_evaluations_file(&evaluations).context("Failed to load evaluations")?;

    let config = ScoreConfig {
        ideal_ratio_percent: ideal_ratio,
        ..Default::default()
    };
    let analysis = analyze_conversation(&words, &turns, &evaluations, &info, &config);

    info!(
        "Assembled {} speaker turns, {} speakers",
        analysis.transcript.turns.len(),
        analysis.transcript.speakers.len()
    );
    match &analysis.rep_speaker {
        Some(label) => info!("Representative resolved as {}", label),
        None => info!("Representative not resolved; all speech counted as client"),
    }
    info!(
        "Balance: {} rep words, {} client words ({:.1}%)",
        analysis.balance.our_word_count,
        analysis.balance.client_word_count,
        analysis.balance.our_ratio_percent
    );

    println!("Total score: {}点", analysis.score.total_score);
    for component in &analysis.score.components {
        println!("  {}", component);
    }

    if let Some(path) = transcript_output {
        write_transcript(&analysis.transcript.turns, &path)?;
        info!("Transcript written to {:?}", path);
    }

    if let Some(path) = output {
        let report = AnalysisReport::new(&info, &analysis);
        report.write_json(&path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}

fn run_transcript(
    transcription: PathBuf,
    diarization: PathBuf,
    output: Option<PathBuf>,
) -> Result<()> {
    info!("Loading transcription from {:?}", transcription);
    let words = parse_whisper_file(&transcription).context("Failed to load transcription")?;
    info!("Loaded {} words", words.len());

    info!("Loading diarization from {:?}", diarization);
    let turns = parse_diarization_file(&diarization).context("Failed to load diarization")?;
    info!("Loaded {} diarization turns", turns.len());

    let attributed = attribute_speakers(&words, &turns);
    let transcript = segment_turns(&attributed);
    info!(
        "Assembled {} speaker turns, {} speakers",
        transcript.turns.len(),
        transcript.speakers.len()
    );

    match output {
        Some(path) => {
            write_transcript(&transcript.turns, &path)?;
            info!("Transcript written to {:?}", path);
        }
        None => print!("{}", render_transcript(&transcript.turns)),
    }

    Ok(())
}
