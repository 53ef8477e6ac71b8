//! `pathtrace pseudocode`: print the listing that step line numbers refer to

use crate::cli::{OutputFormat, PseudocodeArgs};
use crate::commands::dispatch::CommandContext;
use pathtrace_core::error::Result;
use pathtrace_core::records::escape_quotes;
use pathtrace_core::search::pseudocode::listing;

/// Execute the pseudocode command
pub fn execute(ctx: &CommandContext, args: &PseudocodeArgs) -> Result<()> {
    let algorithm = args.algorithm;
    let lines = listing(algorithm);

    match ctx.format() {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} pseudocode", algorithm);
                println!();
            }
            for entry in lines {
                println!("{:>2}  {}", entry.line, entry.text);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": algorithm,
                "lines": lines
                    .iter()
                    .map(|entry| serde_json::json!({ "line": entry.line, "text": entry.text }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H pathtrace=1 records=1 mode=pseudocode algorithm={} lines={}",
                algorithm,
                lines.len()
            );
            for entry in lines {
                println!("L {} \"{}\"", entry.line, escape_quotes(entry.text));
            }
        }
    }
    Ok(())
}
