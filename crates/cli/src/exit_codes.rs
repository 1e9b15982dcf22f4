//! CLI exit code registry.
//!
//! Single source of truth for the `rlink` shell contract — scripts rely on
//! these values.
//!
//! | Range | Domain    | Description                                |
//! |-------|-----------|--------------------------------------------|
//! | 0     | Universal | Success                                    |
//! | 2     | Universal | CLI usage error (bad args, missing dir)    |
//! | 3-9   | pipeline  | Pipeline-specific codes                    |

/// Success - run completed and all outputs were written.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, input directory does not exist.
pub const EXIT_USAGE: u8 = 2;

/// Config file unreadable, unparseable, or failed validation.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// An input table could not be read, or its rows failed to parse.
pub const EXIT_READ: u8 = 4;

/// The output directory or an output file could not be written.
pub const EXIT_WRITE: u8 = 5;
