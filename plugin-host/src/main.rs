//! Demo binary: load a plugin, call its two entry points, report, unload.
//!
//! ```text
//! plugin-host [LIBRARY_PATH] [NAME_SYMBOL] [OP_SYMBOL]
//! ```
//!
//! With no arguments it looks for the `plugin-basic` sample next to the
//! executable (build it first with `cargo build -p plugin-basic`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use plugin_host::{default_library_path, Plugin, NAME_SYMBOL, OP_SYMBOL};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(default_library_path);
    let name_symbol = args.next().unwrap_or_else(|| NAME_SYMBOL.to_owned());
    let op_symbol = args.next().unwrap_or_else(|| OP_SYMBOL.to_owned());

    println!("loading plugin: {}", path.display());

    // SAFETY: the demo trusts the library at `path` to be a plugin honoring
    // the host contract (the bundled `plugin-basic`, unless overridden).
    let plugin = unsafe { Plugin::open(&path) }
        .context("is the sample plugin built? try `cargo build -p plugin-basic`")?;
    println!("plugin library loaded");

    let name = plugin.name(&name_symbol)?;
    println!("plugin reports name: {name}");

    let (a, b) = (7, 35);
    let sum = plugin.compute(&op_symbol, a, b)?;
    println!("{a} + {b} = {sum}");

    // `plugin` drops here, unloading the library. Had any of the `?`s above
    // bailed out early, the drop would have run just the same.
    Ok(())
}
