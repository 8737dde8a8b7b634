//! Conversions for values measured in clock ticks.

use once_cell::sync::Lazy;
use std::io;
use std::time::Duration;

/// Used when `sysconf(_SC_CLK_TCK)` fails.
const DEFAULT_CLOCK_TICKS: u64 = 100;

static CLOCK_TICKS: Lazy<u64> = Lazy::new(|| {
    let ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if ticks > 0 {
        ticks as u64
    } else {
        DEFAULT_CLOCK_TICKS
    }
});

/// Number of clock ticks per second.
pub fn clock_ticks() -> u64 {
    *CLOCK_TICKS
}

/// Convert a value in clock ticks (like `utime` or `starttime`) to a
/// `Duration`.
pub fn ticks_to_duration(ticks: u64) -> Duration {
    ticks_with_rate(ticks, clock_ticks())
}

fn ticks_with_rate(ticks: u64, rate: u64) -> Duration {
    let nanos = (ticks % rate) * 1_000_000_000 / rate;
    Duration::new(ticks / rate, nanos as u32)
}

/// Time since the system was booted, from `/proc/uptime`.
pub fn uptime() -> io::Result<Duration> {
    parse_uptime(&std::fs::read_to_string("/proc/uptime")?)
}

fn parse_uptime(contents: &str) -> io::Result<Duration> {
    let invalid = || io::Error::new(io::ErrorKind::InvalidData, "invalid /proc/uptime");

    let secs: f64 = contents
        .split_whitespace()
        .next()
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}
