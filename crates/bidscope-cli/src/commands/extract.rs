//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use bidscope_ingest::{extract_text, extract_text_as};

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let text = match &args.as_extension {
        Some(extension) => extract_text_as(&args.file, extension)?,
        None => extract_text(&args.file)?,
    };

    if text.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!("No text extracted from {}", args.file.display()))
        );
    }

    println!("{}", formatter.format_extracted(&text)?);
    Ok(())
}
