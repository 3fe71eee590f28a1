//! Domain constants.

/// Extension of Solidity source files.
pub const SOLIDITY_EXT: &str = "sol";

/// Default directory holding installed dependency packages.
pub const DEFAULT_DEPENDENCIES_DIR: &str = "lib";

/// Default directory holding the sources inside a dependency package.
pub const DEFAULT_CONTRACTS_DIR: &str = "src";

/// Remappings file read from the project root.
pub const REMAPPINGS_FILE: &str = "remappings.txt";
