//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error (no command, existing config without --force)
pub const USAGE: i32 = 64;

/// Sequence rejected: unparsable value, empty, or over the length limit
pub const DATAERR: i32 = 65;

/// Sequence file cannot be read
pub const NOINPUT: i32 = 66;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
