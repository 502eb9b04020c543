/// Maximum content line length in octets, excluding the line break (RFC 5545 §3.1).
pub const MAX_LINE_OCTETS: usize = 75;

/// Line terminator for every physical line.
pub const CRLF: &str = "\r\n";

/// Prefix written before each folded continuation line.
pub const FOLD_PREFIX: char = ' ';

/// The only iCalendar version this workspace emits.
pub const ICALENDAR_VERSION: &str = "2.0";

pub const PRODID_VENDOR: &str = "Kunai";
pub const PRODID_PRODUCT: &str = "Kunai iCalendar";
pub const DEFAULT_PRODID: &str =
    const_str::concat!("-//", PRODID_VENDOR, "//", PRODID_PRODUCT, "//EN");

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "KUNAI";

/// Optional configuration file, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "kunai.toml";
