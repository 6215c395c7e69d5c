//! Dynamic plugin loading over the platform's shared-library primitives.
//!
//! A plugin is any shared library (`.so`, `.dylib`, `.dll`) exposing two
//! entry points through the C ABI, discovered by string lookup:
//!
//! - a *name* function, `() -> *const c_char`, returning a static
//!   NUL-terminated string;
//! - a *binary operation*, `(c_int, c_int) -> c_int`.
//!
//! [`Plugin::open`] loads the library, [`Plugin::name`] and
//! [`Plugin::compute`] resolve and invoke the entry points, and dropping the
//! [`Plugin`] unloads the library. Because the library handle lives inside
//! the handle type, *every* exit path — early returns on missing symbols
//! included — releases the library; there is no manual close to forget.
//!
//! There is no state machine here and no algorithm: this crate is a thin,
//! scoped wrapper over `dlopen`/`dlsym`/`dlclose` and their Windows
//! equivalents, as provided by [`libloading`].

#![deny(missing_docs)]

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use log::debug;
use thiserror::Error;

/// Signature of the name entry point: `() -> *const c_char`.
pub type NameFn = unsafe extern "C" fn() -> *const c_char;

/// Signature of the binary-operation entry point:
/// `(c_int, c_int) -> c_int`.
pub type BinaryOpFn = unsafe extern "C" fn(c_int, c_int) -> c_int;

/// Conventional symbol name of the name entry point.
pub const NAME_SYMBOL: &str = "plugin_name";

/// Conventional symbol name of the binary-operation entry point.
pub const OP_SYMBOL: &str = "plugin_add";

/// Errors returned while loading or driving a plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The shared library could not be loaded at all.
    #[error("failed to load plugin library `{}`: {source}", path.display())]
    Load {
        /// Path that was passed to the loader.
        path: PathBuf,
        /// Underlying loader error.
        source: libloading::Error,
    },

    /// The library loaded but does not expose a required symbol.
    #[error("plugin does not expose symbol `{name}`: {source}")]
    MissingSymbol {
        /// Symbol name that failed to resolve.
        name: String,
        /// Underlying loader error.
        source: libloading::Error,
    },

    /// The name entry point returned a null pointer.
    #[error("plugin returned a null name pointer")]
    NullName,

    /// The name entry point returned bytes that are not valid UTF-8.
    #[error("plugin name is not valid UTF-8: {0}")]
    InvalidName(#[from] std::str::Utf8Error),
}

/// A loaded plugin library.
///
/// Owns the underlying [`Library`]; dropping the handle unloads it.
pub struct Plugin {
    library: Library,
    path: PathBuf,
}

impl Plugin {
    /// Loads the shared library at `path`.
    ///
    /// # Safety
    ///
    /// Loading a library executes its initialization routines, and the
    /// resolved entry points are later invoked through the signatures of
    /// [`NameFn`] and [`BinaryOpFn`]. The caller asserts that the file is a
    /// well-formed plugin honoring that contract; a library exporting the
    /// agreed symbol names with different signatures is undefined behavior.
    pub unsafe fn open(path: impl AsRef<Path>) -> Result<Self, PluginError> {
        let path = path.as_ref().to_path_buf();
        let library = unsafe { Library::new(&path) }.map_err(|source| PluginError::Load {
            path: path.clone(),
            source,
        })?;
        debug!("loaded plugin library {}", path.display());
        Ok(Self { library, path })
    }

    /// The path the plugin was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves `symbol` as the name entry point, invokes it, and copies the
    /// result into an owned `String`.
    pub fn name(&self, symbol: &str) -> Result<String, PluginError> {
        // SAFETY: `open`'s contract guarantees this symbol, if present,
        // has the `NameFn` signature.
        let entry: Symbol<'_, NameFn> =
            unsafe { self.library.get(symbol.as_bytes()) }.map_err(|source| {
                PluginError::MissingSymbol {
                    name: symbol.to_owned(),
                    source,
                }
            })?;
        debug!("resolved `{symbol}`");

        // SAFETY: signature guaranteed by `open`'s contract.
        let ptr = unsafe { entry() };
        if ptr.is_null() {
            return Err(PluginError::NullName);
        }
        // SAFETY: the contract requires a NUL-terminated string that stays
        // valid while the library is loaded; `self` keeps it loaded.
        let name = unsafe { CStr::from_ptr(ptr) }.to_str()?.to_owned();
        Ok(name)
    }

    /// Resolves `symbol` as the binary-operation entry point and invokes it
    /// with `a` and `b`.
    pub fn compute(&self, symbol: &str, a: i32, b: i32) -> Result<i32, PluginError> {
        // SAFETY: `open`'s contract guarantees this symbol, if present,
        // has the `BinaryOpFn` signature.
        let entry: Symbol<'_, BinaryOpFn> =
            unsafe { self.library.get(symbol.as_bytes()) }.map_err(|source| {
                PluginError::MissingSymbol {
                    name: symbol.to_owned(),
                    source,
                }
            })?;
        debug!("resolved `{symbol}`");

        // SAFETY: signature guaranteed by `open`'s contract.
        let result = unsafe { entry(a as c_int, b as c_int) };
        Ok(result as i32)
    }
}

impl Drop for Plugin {
    fn drop(&mut self) {
        debug!("unloading plugin library {}", self.path.display());
    }
}

/// Platform-specific file name of a shared library with the given stem,
/// e.g. `libdemo.so`, `libdemo.dylib`, or `demo.dll`.
pub fn platform_library_name(stem: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{stem}.dll")
    } else if cfg!(target_os = "macos") {
        format!("lib{stem}.dylib")
    } else {
        format!("lib{stem}.so")
    }
}

/// Default location of the sample plugin: next to the running executable,
/// which is where `cargo build -p plugin-basic` places it.
pub fn default_library_path() -> PathBuf {
    let file = platform_library_name("plugin_basic");
    match std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}
