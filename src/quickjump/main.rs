use clap::Parser;
use colored::*;
use quickjump::api::QuickJumpApi;
use quickjump::config::{project_dirs, QuickJumpConfig};
use quickjump::error::{QuickJumpError, Result};
use quickjump::store::fs::FsBackend;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

mod args;
mod browse;
mod print;

use args::Cli;

const CONFIG_DIR_ENV: &str = "QUICKJUMP_CONFIG_DIR";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: QuickJumpApi<FsBackend>,
    cwd: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    if let Some(dir) = cli.add {
        return handle_add(&mut ctx, dir);
    }
    if let Some(key) = cli.delete {
        return handle_remove(&mut ctx, &key);
    }
    if cli.wants_list() {
        return handle_list(&ctx);
    }
    if cli.edit {
        return handle_edit(&mut ctx);
    }
    if cli.check {
        return handle_check(&ctx);
    }

    match cli.bookmark {
        Some(key) => handle_jump(&ctx, &key),
        None => handle_browse(&mut ctx),
    }
}

/// Logs go to stderr; stdout belongs to the shell wrapper.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(QuickJumpError::Io)?;

    let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => project_dirs()?.config_dir().to_path_buf(),
    };
    let config = QuickJumpConfig::load(&config_dir)?;
    let policy = config.key_policy()?;
    let db_file = config.resolve_db_file(&config_dir, cli.db.clone(), || {
        Ok(project_dirs()?.data_dir().to_path_buf())
    })?;

    let api = QuickJumpApi::open(FsBackend::new(db_file), policy)?;
    if let Some(db) = api.db_path() {
        debug!(config_dir = %config_dir.display(), db_file = %db.display(), "opened database");
    }
    Ok(AppContext { api, cwd })
}

fn handle_jump(ctx: &AppContext, key: &str) -> Result<()> {
    let result = ctx.api.resolve(key)?;
    if let Some(bookmark) = result.resolved {
        eprintln!("{}", print::cd_hint(&bookmark.path).as_str().dimmed());
        print::write_jump_target(io::stdout(), &bookmark.path)?;
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => std::fs::canonicalize(&dir).map_err(QuickJumpError::Io)?,
        None => ctx.cwd.clone(),
    };
    let path = utf8_path(&dir)?;
    let result = ctx.api.add_bookmark(path)?;
    print::write_messages(&mut io::stderr(), &result.messages)?;
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, key: &str) -> Result<()> {
    let result = ctx.api.remove(key)?;
    print::write_messages(&mut io::stderr(), &result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    let mut err = io::stderr();
    print::write_bookmarks(&mut err, &result.listed)?;
    print::write_messages(&mut err, &result.messages)?;
    Ok(())
}

fn handle_edit(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.edit()?;
    print::write_messages(&mut io::stderr(), &result.messages)?;
    Ok(())
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.check()?;
    print::write_messages(&mut io::stderr(), &result.messages)?;
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let chosen = browse::run(&mut ctx.api, &ctx.cwd, stdin.lock(), io::stderr())?;
    if let Some(path) = chosen {
        print::write_jump_target(io::stdout(), &path)?;
    }
    Ok(())
}

fn utf8_path(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| QuickJumpError::InvalidPath(format!("{} is not UTF-8", path.display())))
}
