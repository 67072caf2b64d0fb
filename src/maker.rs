use std::path::Path;

use anyhow::{Context, Result};

use crate::assembler::{assemble, parse_cursor_override, Decision, Placement};
use crate::cli::Args;
use crate::preset::{catalog, find_preset};
use crate::resolver::Reason;
use crate::writer::write_outputs;

const DEFAULT_OUTPUT: &str = "rom";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub output: String,
    pub inputs: Vec<String>,
}

pub fn run(args: Args) -> Result<()> {
    let Some(job) = expand_preset(&args) else {
        print!("{}", catalog());
        return Ok(());
    };
    let placements = load_placements(&job.inputs)?;
    let assembly = assemble(&placements)?;
    report(&assembly.decisions);

    let (rom, hex) = write_outputs(&job.output, assembly.space.window())?;
    log::debug!("wrote {} and {}", rom.display(), hex.display());
    Ok(())
}

/// Prepends the preset files to the explicit inputs.
///
/// Returns `None` when the requested preset is unknown.
#[must_use]
pub fn expand_preset(args: &Args) -> Option<Job> {
    let Some(name) = &args.preset else {
        return Some(Job {
            output: args.output.clone().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            inputs: args.inputs.clone(),
        });
    };
    let preset = find_preset(name)?;

    let mut inputs = preset
        .files
        .iter()
        .map(|file| match &args.rom_dir {
            Some(dir) => Path::new(dir).join(file).to_string_lossy().into_owned(),
            None => (*file).to_string(),
        })
        .collect::<Vec<_>>();
    inputs.extend(args.inputs.iter().cloned());

    Some(Job {
        output: args.output.clone().unwrap_or_else(|| preset.name.to_string()),
        inputs,
    })
}

/// Reads every input. A `0x…` input that names no existing file moves the
/// guess instead.
pub fn load_placements(inputs: &[String]) -> Result<Vec<Placement>> {
    inputs.iter().map(|input| load_placement(input)).collect()
}

fn load_placement(input: &str) -> Result<Placement> {
    let path = Path::new(input);
    if input.starts_with("0x") && !path.exists() {
        return Ok(Placement::CursorOverride(parse_cursor_override(input)?));
    }

    let data = std::fs::read(path).with_context(|| format!("failed to read {input}"))?;
    log::debug!("read {input}: {} bytes", data.len());

    // Only the file name decides placement, not the directory it sits in.
    let name = path
        .file_name()
        .map_or_else(|| input.to_string(), |s| s.to_string_lossy().into_owned());
    Ok(Placement::File { name, data })
}

fn report(decisions: &[Decision]) {
    for decision in decisions {
        match decision {
            Decision::CursorMoved(addr) => log::info!("New default guess: {addr:#06x}"),
            Decision::Placed {
                name,
                start,
                len,
                reason,
            } => {
                match reason {
                    Reason::Matched(pattern) => log::info!(
                        "Choosing {start:#06x} for file '{name}' because of '{pattern}'."
                    ),
                    Reason::Guessed | Reason::Defaulted => {
                        log::info!("I don't know about file '{name}' so I just guess {start:#06x}.")
                    }
                }
                log::debug!("  {name}: {start:#06x}..{:#06x}", *start as usize + len);
            }
        }
    }
}
