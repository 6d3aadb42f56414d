//! `tagpath link` command - problem page URL

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::Session;
use tagpath_core::error::{Result, TagpathError};
use tagpath_core::links::{problem_link, Locale};
use tagpath_core::records::format_header;

/// Execute the link command
pub fn execute(cli: &Cli, session: &Session, id: u32, locale: Locale) -> Result<()> {
    let item = session
        .catalog
        .get(id)
        .ok_or(TagpathError::VertexNotFound { id })?;
    let url = problem_link(item, locale);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": id,
                "slug": item.slug(),
                "locale": locale,
                "url": url,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", url),
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "link",
                    &[
                        ("id", id.to_string()),
                        ("locale", locale.to_string()),
                        ("url", url),
                    ],
                )
            );
        }
    }

    Ok(())
}
