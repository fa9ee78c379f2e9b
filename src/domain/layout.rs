//! Fixed file and folder names the installer produces in a project.

/// The `memory-bank/` output folder name.
pub const MEMORY_BANK_DIR: &str = "memory-bank";

/// Generated context document inside the memory bank.
pub const PRODUCT_CONTEXT_FILE: &str = "memory-bank/productContext.md";

/// The project gitignore file the append step may touch.
pub const GITIGNORE_FILE: &str = ".gitignore";
