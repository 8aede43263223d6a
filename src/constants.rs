//! Application constants for the address sorter
//!
//! Default locations, required column names and exit codes used throughout
//! the application.

// =============================================================================
// Directories and File Patterns
// =============================================================================

/// Default input directory, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Extension of files picked up from the input directory (case-sensitive)
pub const CSV_EXTENSION: &str = "csv";

/// UTF-8 byte order mark, as written by spreadsheet exports
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// =============================================================================
// Required Columns
// =============================================================================

/// Column holding the free-text address
pub const ADDRESS_COLUMN: &str = "address";

/// Column holding the phase, the primary sort key
pub const PHASE_COLUMN: &str = "phase";

// =============================================================================
// Exit Codes
// =============================================================================

/// Every discovered file was converted
pub const EXIT_SUCCESS: u8 = 0;

/// The run was aborted (configuration, input or output directory)
pub const EXIT_FATAL: u8 = 1;

/// The run completed but at least one file failed
pub const EXIT_FILE_FAILURES: u8 = 2;

// =============================================================================
// Logging
// =============================================================================

/// Target used in the default tracing filter
pub const LOG_TARGET: &str = "address_sort";
