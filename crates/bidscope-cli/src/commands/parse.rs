//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bidscope_analyzer::ResponseParser;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, formatter: &Formatter) -> Result<()> {
    let reply = read_reply(&args)?;

    let outcome = ResponseParser::new(!args.no_fallback).parse(&reply);
    debug!(
        "Parsed reply: {} sections found, fallback {}",
        outcome.sections_found.len(),
        if outcome.used_fallback { "used" } else { "not used" }
    );

    println!("{}", formatter.format_record(&outcome.record)?);
    Ok(())
}

fn read_reply(args: &ParseArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(path) = &args.file {
        Ok(fs::read_to_string(path)?)
    } else {
        Err(CliError::InvalidInput(
            "Must specify either a reply file or --stdin".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_requires_a_source() {
        let args = ParseArgs {
            file: None,
            stdin: false,
            no_fallback: false,
        };
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert!(matches!(
            execute_parse(args, &formatter),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reads_reply_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reply.md");
        fs::write(&path, "**Summary:** Roads\n**Overall Recommendation:** GO\n").unwrap();

        let args = ParseArgs {
            file: Some(path),
            stdin: false,
            no_fallback: false,
        };
        assert_eq!(read_reply(&args).unwrap(), "**Summary:** Roads\n**Overall Recommendation:** GO\n");

        let formatter = Formatter::new(OutputFormat::Json, false);
        assert!(execute_parse(args, &formatter).is_ok());
    }

    #[test]
    fn test_missing_reply_file() {
        let args = ParseArgs {
            file: Some(PathBuf::from("/definitely/not/here.md")),
            stdin: false,
            no_fallback: true,
        };
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert!(matches!(execute_parse(args, &formatter), Err(CliError::Io(_))));
    }
}
