use anyhow::Result;
use linkrank_core::{EngineStats, SearchEngine, SearchOutcome};
use std::io::{BufRead, Write};
use std::process::Command;

/// Menu loop: search, statistics, recompute, quit. Returns on choice 4 or end of input.
pub fn run<R: BufRead, W: Write>(engine: &mut SearchEngine, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        writeln!(out, "\n--- Search engine ---")?;
        writeln!(out, "1. Search documents by keyword")?;
        writeln!(out, "2. Show statistics")?;
        writeln!(out, "3. Recompute PageRank")?;
        writeln!(out, "4. Quit")?;
        write!(out, "Choose an option: ")?;
        out.flush()?;

        let Some(choice) = read_line(input)? else { return Ok(()) };
        match choice.trim() {
            "1" => {
                write!(out, "Word to search for: ")?;
                out.flush()?;
                let Some(query) = read_line(input)? else { return Ok(()) };
                let outcome = engine.search(&query)?;
                print_outcome(&outcome, out)?;
                if outcome.is_found() {
                    write!(out, "Open these documents? (y/n): ")?;
                    out.flush()?;
                    let answer = read_line(input)?.unwrap_or_default();
                    if answer.trim().eq_ignore_ascii_case("y") {
                        for hit in outcome.hits() {
                            writeln!(out, "Opening '{}'...", hit.name)?;
                            open_document(&hit.name);
                        }
                    } else {
                        writeln!(out, "No documents opened.")?;
                    }
                }
            }
            "2" => print_stats(&engine.stats()?, out)?,
            "3" => {
                let report = engine.recompute()?;
                writeln!(out, "PageRank recomputed ({} iterations).", report.iterations)?;
            }
            "4" => {
                writeln!(out, "Bye.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid option, try again.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn print_outcome<W: Write>(outcome: &SearchOutcome, out: &mut W) -> Result<()> {
    match outcome {
        SearchOutcome::NotFound { word } => writeln!(out, "The word '{word}' was not found.")?,
        SearchOutcome::Hits { word, hits } => {
            writeln!(out, "Results for '{word}':")?;
            for h in hits {
                if h.occurrences > 1 {
                    writeln!(out, " - {} (PageRank: {:.4}, {} occurrences)", h.name, h.score, h.occurrences)?;
                } else {
                    writeln!(out, " - {} (PageRank: {:.4})", h.name, h.score)?;
                }
            }
        }
    }
    Ok(())
}

pub fn print_stats<W: Write>(stats: &EngineStats, out: &mut W) -> Result<()> {
    writeln!(out, "\n--- Statistics ---")?;
    writeln!(out, "Words indexed: {}", stats.total_words_indexed)?;
    writeln!(out, "Documents: {}", stats.total_documents)?;
    writeln!(out, "Links: {} ({} documents without outgoing links)", stats.total_links, stats.dangling_documents)?;
    writeln!(out, "Top {} documents by PageRank:", stats.top.len())?;
    for (rank, d) in stats.top.iter().enumerate() {
        writeln!(out, " {}. [doc {}] {} (PageRank = {:.4})", rank + 1, d.doc_id, d.name, d.score)?;
    }
    Ok(())
}

fn open_document(path: &str) {
    launch(opener(), path);
}

fn opener() -> Command {
    if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    }
}

/// Run `cmd path` and wait for it to exit. Failures are logged, not fatal.
fn launch(mut cmd: Command, path: &str) -> bool {
    match cmd.arg(path).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            tracing::warn!(path, %status, "document opener failed");
            false
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "could not open document");
            false
        }
    }
}
