//! Interactive mode, entered when `qj` runs without arguments.
//!
//! The listing, the menu and every prompt go to `out` (stderr). Only a
//! chosen bookmark's directory is handed back to the caller, which prints
//! it on stdout for the shell wrapper.

use crate::print::{write_bookmarks, write_messages, write_separator};
use quickjump::api::{CmdMessage, QuickJumpApi};
use quickjump::error::{QuickJumpError, Result};
use quickjump::store::StorageBackend;
use std::io::{BufRead, Write};
use std::path::Path;

const MENU: &str = "\
1) bookmark the current directory
2) edit the bookmarks
q) quit
or type a bookmark to jump to it";

const PROMPT: &str = "-> ";

pub fn run<B, R, W>(
    api: &mut QuickJumpApi<B>,
    cwd: &Path,
    mut input: R,
    mut out: W,
) -> Result<Option<String>>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    show_overview(api, &mut out)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "bye")?;
            return Ok(None);
        }

        match line.trim() {
            "" => continue,
            "q" => {
                writeln!(out, "bye")?;
                return Ok(None);
            }
            "1" => {
                let messages = match cwd.to_str() {
                    Some(path) => match api.add_bookmark(path) {
                        Ok(result) => result.messages,
                        Err(e @ QuickJumpError::CollisionExhausted { .. }) => {
                            vec![CmdMessage::error(e.to_string())]
                        }
                        Err(e) => return Err(e),
                    },
                    None => vec![CmdMessage::error(format!(
                        "Cannot bookmark non UTF-8 path {}",
                        cwd.display()
                    ))],
                };
                write_messages(&mut out, &messages)?;
            }
            "2" => {
                let result = api.edit()?;
                writeln!(out)?;
                write_messages(&mut out, &result.messages)?;
                writeln!(out)?;
                show_overview(api, &mut out)?;
            }
            key => match api.resolve(key) {
                Ok(result) => return Ok(result.resolved.map(|b| b.path)),
                Err(QuickJumpError::NotFound(_)) => {
                    write_messages(&mut out, &[CmdMessage::warning("# no such bookmark")])?;
                }
                Err(e) => return Err(e),
            },
        }
    }
}

fn show_overview<B, W>(api: &QuickJumpApi<B>, out: &mut W) -> Result<()>
where
    B: StorageBackend,
    W: Write,
{
    let listing = api.list()?;
    if !listing.listed.is_empty() {
        write_bookmarks(out, &listing.listed)?;
        write_separator(out)?;
    }
    writeln!(out, "{}", MENU)?;
    writeln!(out)?;
    Ok(())
}
