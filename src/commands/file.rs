use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use oddjob::{textfile, Decode, Error};

use super::CmdResult;

#[derive(Args)]
pub struct FileArgs {
    #[command(subcommand)]
    command: FileCommand,
}

#[derive(Subcommand)]
enum FileCommand {
    /// Replace every occurrence of a substring in a file
    Replace {
        /// File path
        path: String,
        /// Substring to find
        old: String,
        /// Replacement text
        new: String,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Truncate a file to empty
    Clear {
        /// File path
        path: String,
    },
    /// Append data at end-of-file (from argument or stdin)
    Append {
        /// File path (created when missing)
        path: String,
        /// Data to append; read from stdin when omitted
        data: Option<String>,
    },
    /// Check whether a file contains a substring
    Contains {
        /// File path
        path: String,
        /// Substring to look for
        needle: String,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Print lines containing a substring
    Matching {
        /// File path
        path: String,
        /// Substring to look for
        needle: String,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Print lines not containing a substring
    Without {
        /// File path
        path: String,
        /// Substring to look for
        needle: String,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Remove all blank lines from a file
    StripEmpty {
        /// File path
        path: String,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Drop a trailing blank line and normalize the final newline
    TrimEnd {
        /// File path
        path: String,
        #[command(flatten)]
        decode: DecodeArgs,
    },
}

#[derive(Args, Default)]
struct DecodeArgs {
    /// Replace invalid UTF-8 instead of failing
    #[arg(long)]
    lossy: bool,
}

impl DecodeArgs {
    fn mode(&self) -> Decode {
        if self.lossy {
            Decode::Lossy
        } else {
            Decode::Strict
        }
    }
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileOpOutput {
    command: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    replacements: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes_appended: Option<usize>,
}

impl FileOpOutput {
    fn new(command: &str, path: &Path) -> Self {
        Self {
            command: format!("file.{}", command),
            path: path.display().to_string(),
            ..Default::default()
        }
    }
}

pub fn run(args: FileArgs, _global: &super::GlobalArgs) -> CmdResult<FileOpOutput> {
    match args.command {
        FileCommand::Replace {
            path,
            old,
            new,
            decode,
        } => {
            let path = expand(&path);
            let replacements = textfile::replace(&path, &old, &new, decode.mode())?;
            let out = FileOpOutput {
                replacements: Some(replacements),
                ..FileOpOutput::new("replace", &path)
            };
            Ok((out, 0))
        }
        FileCommand::Clear { path } => {
            let path = expand(&path);
            textfile::clear(&path)?;
            Ok((FileOpOutput::new("clear", &path), 0))
        }
        FileCommand::Append { path, data } => {
            let path = expand(&path);
            let data = match data {
                Some(data) => data,
                None => read_stdin()?,
            };
            textfile::append(&path, &data)?;
            let out = FileOpOutput {
                bytes_appended: Some(data.len()),
                ..FileOpOutput::new("append", &path)
            };
            Ok((out, 0))
        }
        FileCommand::Contains {
            path,
            needle,
            decode,
        } => {
            let path = expand(&path);
            let found = textfile::content_exists(&path, &needle, decode.mode())?;
            let out = FileOpOutput {
                found: Some(found),
                ..FileOpOutput::new("contains", &path)
            };
            Ok((out, 0))
        }
        FileCommand::Matching {
            path,
            needle,
            decode,
        } => {
            let path = expand(&path);
            let lines = textfile::lines_with_content(&path, &needle, decode.mode())?;
            let out = FileOpOutput {
                line_count: Some(lines.len()),
                lines: Some(lines),
                ..FileOpOutput::new("matching", &path)
            };
            Ok((out, 0))
        }
        FileCommand::Without {
            path,
            needle,
            decode,
        } => {
            let path = expand(&path);
            let lines = textfile::lines_without_content(&path, &needle, decode.mode())?;
            let out = FileOpOutput {
                line_count: Some(lines.len()),
                lines: Some(lines),
                ..FileOpOutput::new("without", &path)
            };
            Ok((out, 0))
        }
        FileCommand::StripEmpty { path, decode } => {
            let path = expand(&path);
            let removed = textfile::remove_empty_lines(&path, decode.mode())?;
            let out = FileOpOutput {
                removed: Some(removed),
                ..FileOpOutput::new("strip-empty", &path)
            };
            Ok((out, 0))
        }
        FileCommand::TrimEnd { path, decode } => {
            let path = expand(&path);
            let changed = textfile::remove_last_empty_line(&path, decode.mode())?;
            let out = FileOpOutput {
                changed: Some(changed),
                ..FileOpOutput::new("trim-end", &path)
            };
            Ok((out, 0))
        }
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Read append data from stdin when no argument was given.
fn read_stdin() -> oddjob::Result<String> {
    use std::io::{IsTerminal, Read};

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::validation_missing_value(
            "data",
            "No data argument and stdin is a TTY",
        ));
    }

    oddjob::log_status!("file", "Reading data from stdin");

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
    Ok(buf)
}
