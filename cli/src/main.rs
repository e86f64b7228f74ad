//! LaunchGrid CLI — headless frontend for the launcher core.

mod worker;

use launchgrid_core::types::Config;
use launchgrid_core::{Grid, IconCache, PersistedState, Store};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();

    let Some(mut config) = resolve_config() else {
        eprintln!("launchgrid: could not determine a data directory");
        return ExitCode::FAILURE;
    };

    // `-clear` bypasses normal startup entirely: wipe and exit.
    if arg_refs
        .iter()
        .any(|a| a.eq_ignore_ascii_case("-clear") || a.eq_ignore_ascii_case("--clear"))
    {
        config.clear_icons = !arg_refs.contains(&"--keep-icons");
        return run_clear(config);
    }

    match run(&arg_refs, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("launchgrid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config() -> Option<Config> {
    if let Ok(dir) = std::env::var("LAUNCHGRID_DATA_DIR") {
        return Some(Config::new(PathBuf::from(dir)));
    }
    Config::from_user_dirs()
}

fn run_clear(config: Config) -> ExitCode {
    match Store::new(config).clear() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("launchgrid: clear failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[&str], config: Config) -> Result<(), String> {
    let icons = IconCache::new(config.icons_dir());
    let store = Store::new(config);

    match args {
        [] | ["list"] => cmd_list(&store),
        ["launch", name] => cmd_launch(&store, name),
        ["add", name, files @ ..] if !files.is_empty() => cmd_add(&store, &icons, name, files),
        ["new"] => cmd_new(&store, None),
        ["new", name] => cmd_new(&store, Some(name)),
        ["remove", name, path] => cmd_remove(&store, name, path),
        ["help" | "-h" | "--help"] => {
            print!("{}", usage());
            Ok(())
        }
        ["launch", ..] => Err("usage: launchgrid launch <container>".into()),
        ["add", ..] => Err("usage: launchgrid add <container> <file>...".into()),
        ["new", ..] => Err("usage: launchgrid new [name]".into()),
        ["remove", ..] => Err("usage: launchgrid remove <container> <entry-path>".into()),
        [cmd, ..] => Err(format!(
            "unknown command '{cmd}'. Run 'launchgrid help' for usage."
        )),
    }
}

fn usage() -> &'static str {
    "usage: launchgrid [command]\n\
     \n\
     \x20 list                      show containers and entries (default)\n\
     \x20 launch <container>        launch every entry of a container\n\
     \x20 add <container> <file>..  add entries to a container\n\
     \x20 new [name]                create a container\n\
     \x20 remove <container> <path> remove one entry\n\
     \x20 -clear [--keep-icons]     delete saved state and exit\n\
     \n\
     LAUNCHGRID_DATA_DIR overrides the data directory.\n"
}

/// Loads state with the startup validation pass applied, the same way a GUI
/// session starts. Prunes are persisted right away.
fn load_validated(store: &Store) -> Grid {
    let state = store.load();
    let pending = worker::spawn(state.containers);
    // A GUI frontend keeps rendering here while the worker scans
    let outcome = pending.wait();

    let grid = Grid::from_state(PersistedState {
        containers: outcome.containers,
        window_bounds: state.window_bounds,
    });

    if !outcome.removed.is_empty() {
        for r in &outcome.removed {
            println!(
                "pruned stale entry '{}' from '{}'",
                r.entry.display_name, r.container
            );
        }
        save_logged(store, &grid);
    }
    grid
}

/// Save failures are logged, never surfaced; the session carries on with its
/// in-memory state.
fn save_logged(store: &Store, grid: &Grid) {
    if let Err(e) = store.save(&grid.to_state()) {
        warn!(error = %e, "could not save state");
    }
}

fn find_container(grid: &Grid, name: &str) -> Result<usize, String> {
    grid.find(name)
        .ok_or_else(|| format!("no container named '{name}'"))
}

fn cmd_list(store: &Store) -> Result<(), String> {
    let grid = load_validated(store);
    for container in grid.containers() {
        if container.is_add_marker() {
            continue;
        }
        println!("{} ({} entries)", container.name, container.entries.len());
        for entry in &container.entries {
            println!("  {}  {}", entry.display_name, entry.file_path.display());
        }
    }
    Ok(())
}

fn cmd_launch(store: &Store, name: &str) -> Result<(), String> {
    let grid = load_validated(store);
    let index = find_container(&grid, name)?;

    let outcome = grid.launch(index);
    println!(
        "launched {} entries ({} failed)",
        outcome.launched, outcome.failed
    );
    Ok(())
}

fn cmd_add(store: &Store, icons: &IconCache, name: &str, files: &[&str]) -> Result<(), String> {
    let mut grid = load_validated(store);
    let index = find_container(&grid, name)?;

    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    let added = grid.add_entries(index, &paths, icons);
    println!("added {added} of {} files", paths.len());

    save_logged(store, &grid);
    Ok(())
}

fn cmd_new(store: &Store, name: Option<&str>) -> Result<(), String> {
    let mut grid = load_validated(store);
    let index = match name {
        Some(name) => grid.add_named_container(name),
        None => grid.add_container(),
    };
    println!("created container '{}'", grid.containers()[index].name);

    save_logged(store, &grid);
    Ok(())
}

fn cmd_remove(store: &Store, name: &str, path: &str) -> Result<(), String> {
    let mut grid = load_validated(store);
    let index = find_container(&grid, name)?;

    let entry = grid.containers()[index]
        .position_of(std::path::Path::new(path))
        .ok_or_else(|| format!("no entry with path '{path}' in '{name}'"))?;
    let removed = grid
        .remove_entry(index, entry)
        .ok_or_else(|| "entry vanished while removing".to_string())?;
    println!("removed '{}'", removed.display_name);

    save_logged(store, &grid);
    Ok(())
}
