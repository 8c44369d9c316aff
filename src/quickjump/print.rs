//! Terminal output. Everything here goes to the writer it is given, which is
//! stderr in practice: stdout is reserved for the directory the shell
//! wrapper will `cd` into.

use colored::*;
use quickjump::api::{CmdMessage, MessageLevel};
use quickjump::model::Bookmark;
use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 78;

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One bookmark per line, keys padded to a common width.
pub fn write_bookmarks<W: Write>(out: &mut W, bookmarks: &[Bookmark]) -> io::Result<()> {
    let width = bookmarks.iter().map(|b| b.key.len()).max().unwrap_or(0);
    for bookmark in bookmarks {
        let key = format!("{:<width$}", bookmark.key, width = width);
        writeln!(out, "{}  {}", key.yellow(), bookmark.path)?;
    }
    Ok(())
}

pub fn write_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH).dimmed())
}

/// `# cd <path>`, quoted when the path has spaces, so the user sees where
/// the wrapper is about to go.
pub fn cd_hint(path: &str) -> String {
    if path.contains(' ') {
        format!("# cd \"{}\"", path)
    } else {
        format!("# cd {}", path)
    }
}

/// The jump target, the only thing qj ever writes to stdout.
pub fn write_jump_target<W: Write>(mut out: W, path: &str) -> io::Result<()> {
    writeln!(out, "{}", path)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bookmarks: &[Bookmark]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_bookmarks(&mut out, bookmarks).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn aligns_keys() {
        let listing = render(&[
            Bookmark::new("abc", "/tmp/x"),
            Bookmark::new("abcde", "/tmp/y"),
        ]);
        assert_eq!(listing, "abc    /tmp/x\nabcde  /tmp/y\n");
    }

    #[test]
    fn empty_listing_prints_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn messages_one_per_line() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_messages(
            &mut out,
            &[CmdMessage::success("abc\t/tmp/x"), CmdMessage::info("done")],
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abc\t/tmp/x\ndone\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn jump_target_is_one_line() {
        let mut out = Vec::new();
        write_jump_target(&mut out, "/tmp/my dir").unwrap();
        assert_eq!(out, b"/tmp/my dir\n");
    }

    #[test]
    fn closed_stdout_is_an_error_not_a_panic() {
        let err = write_jump_target(ClosedPipe, "/tmp/x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn cd_hint_quotes_spaces() {
        assert_eq!(cd_hint("/tmp/x"), "# cd /tmp/x");
        assert_eq!(cd_hint("/tmp/my dir"), "# cd \"/tmp/my dir\"");
    }
}
