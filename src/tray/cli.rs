//! Terminal roller
//!
//! Drives the same [`DiceTray`] the window uses, stepping its clock one
//! animation slice at a time and printing each frame.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use super::orchestrator::{DiceTray, ANIMATION_STEPS, ROLL_DURATION};
use super::sound::{write_wav, ClipQueue, SAMPLE_RATE};
use super::types::{DieFace, DieKind, FaceState, HistoryEntry, RollResult};

#[derive(Clone, Debug, Default)]
pub struct RollOptions {
    /// Write the synthesized roll sound here
    pub wav: Option<PathBuf>,
    /// Print only the final history line
    pub quiet: bool,
    /// Print the history entry as JSON
    pub json: bool,
    /// Pace frames in real time instead of printing them back to back
    pub realtime: bool,
}

fn face_cell(face: &DieFace) -> String {
    let cell = format!("{}:{:>3}", face.kind, face.text);
    match face.state {
        FaceState::Rolling => cell.yellow().to_string(),
        FaceState::Settled => cell.bright_green().bold().to_string(),
        FaceState::Idle => cell.white().to_string(),
    }
}

fn frame_line(tray: &DiceTray<ClipQueue>) -> String {
    tray.selection()
        .map(|kind| face_cell(tray.face(kind)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One result as printed by `--json`, with the face label alongside the value
#[derive(Serialize)]
struct ResultReport {
    kind: DieKind,
    value: u32,
    label: String,
}

impl From<&RollResult> for ResultReport {
    fn from(result: &RollResult) -> Self {
        Self {
            kind: result.kind,
            value: result.value,
            label: result.formatted(),
        }
    }
}

#[derive(Serialize)]
struct EntryReport {
    number: u32,
    notation: String,
    results: Vec<ResultReport>,
}

fn entry_json(entry: &HistoryEntry) -> Result<String, String> {
    let report = EntryReport {
        number: entry.number,
        notation: entry.notation(),
        results: entry.results.iter().map(ResultReport::from).collect(),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to encode roll as JSON: {e}"))
}

fn entry_line(entry: &HistoryEntry) -> String {
    format!(
        "{} {}  {}",
        format!("#{}", entry.number).bold().white(),
        entry.notation().cyan(),
        entry.result_labels().join("  ").bright_green().bold()
    )
}

/// Roll `dice` once and return the history entry it produced.
///
/// Each kind is rolled at most once; repeats are ignored.
pub fn run_roll(dice: &[DieKind], options: &RollOptions) -> Result<HistoryEntry, String> {
    let mut tray = DiceTray::<ClipQueue>::new(options.wav.is_some());
    for &kind in dice {
        if !tray.is_selected(kind) {
            tray.toggle_selection(kind);
        }
    }

    if !tray.start_roll() {
        return Err("Select at least one die to roll".to_string());
    }

    let step = ROLL_DURATION / ANIMATION_STEPS;
    if !options.quiet && !options.json {
        println!("{} {}", "Rolling:".bold().white(), frame_line(&tray));
    }
    while tray.is_busy() {
        if options.realtime {
            std::thread::sleep(step);
        }
        tray.advance(step);
        if !options.quiet && !options.json {
            println!("         {}", frame_line(&tray));
        }
    }

    let entry = tray
        .latest_entry()
        .cloned()
        .ok_or_else(|| "Roll finished without a history entry".to_string())?;

    if options.json {
        println!("{}", entry_json(&entry)?);
    } else {
        println!("{}", entry_line(&entry));
    }

    if let Some(path) = &options.wav {
        let clip = tray
            .sound_mut()
            .output_mut()
            .and_then(|queue| queue.pop())
            .ok_or_else(|| "No roll sound was synthesized".to_string())?;
        write_wav(path, &clip, SAMPLE_RATE)?;
        if !options.json {
            println!(
                "{} {}",
                "Roll sound written to".dimmed(),
                path.display().to_string().cyan()
            );
        }
    }

    Ok(entry)
}

/// Parse `d20`, `D20` or `1d20`
pub fn parse_die_arg(s: &str) -> Result<DieKind, String> {
    let trimmed = s.trim();
    let die = trimmed
        .strip_prefix('1')
        .filter(|rest| rest.starts_with(['d', 'D']))
        .unwrap_or(trimmed);
    DieKind::parse(die).ok_or_else(|| {
        format!(
            "Unknown die type: {}. Valid: d4, d6, d8, d10, d12, d20, d100",
            s
        )
    })
}
