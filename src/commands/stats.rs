//! `tagpath stats` command - tag frequency and acceptance statistics

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::Session;
use tagpath_core::bail_invalid;
use tagpath_core::error::Result;
use tagpath_core::format::format_rate;
use tagpath_core::records::{format_header, format_tag_record};
use tagpath_core::stats::{tag_acceptance_report, tag_frequencies, TagAcceptance};

/// Execute the stats command
pub fn execute(cli: &Cli, session: &Session, top: usize) -> Result<()> {
    if top == 0 {
        bail_invalid!("stats top", "0 (must be at least 1)");
    }

    let frequencies = tag_frequencies(&session.catalog);
    let acceptance = tag_acceptance_report(&session.catalog, top);
    let occurrences: usize = frequencies.iter().map(|f| f.count).sum();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "problems": session.catalog.len(),
                "tag_occurrences": occurrences,
                "frequencies": frequencies,
                "acceptance": acceptance,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "{} problems, {} distinct tags, {} tag occurrences",
                session.catalog.len(),
                frequencies.len(),
                occurrences
            );
            if frequencies.is_empty() {
                return Ok(());
            }
            println!();
            println!("Most common tags:");
            for f in frequencies.iter().take(top) {
                println!("  {:<28} {:>5}  {:>6.1}%", f.tag, f.count, f.share * 100.0);
            }
            print_acceptance("Lowest average acceptance:", &acceptance.lowest);
            print_acceptance("Highest average acceptance:", &acceptance.highest);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "stats",
                    &[
                        ("problems", session.catalog.len().to_string()),
                        ("tags", frequencies.len().to_string()),
                        ("top", top.to_string()),
                    ],
                )
            );
            for f in &frequencies {
                println!(
                    "{}",
                    format_tag_record(
                        "freq",
                        &f.tag,
                        &[
                            ("count", f.count.to_string()),
                            ("share", format!("{:.4}", f.share)),
                        ],
                    )
                );
            }
            for (kind, entries) in [("low", &acceptance.lowest), ("high", &acceptance.highest)] {
                for t in entries {
                    println!(
                        "{}",
                        format_tag_record(
                            kind,
                            &t.tag,
                            &[
                                ("avg", format!("{:.2}", t.average_acceptance)),
                                ("problems", t.problems.to_string()),
                            ],
                        )
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_acceptance(heading: &str, entries: &[TagAcceptance]) {
    println!();
    println!("{}", heading);
    for t in entries {
        println!(
            "  {:<28} {:>7}  ({} problems)",
            t.tag,
            format_rate(t.average_acceptance),
            t.problems
        );
    }
}
