//! The `ProcStat` record.
//!
//! Most of the code in this module is generated from the proc(5) manual
//! page. Only the `pid` and `comm` fields are parsed here, because the
//! `comm` field can contain spaces.

// The documentation is copied from proc(5), which contains things like
// `[pid]` or `[PT]`.
#![allow(rustdoc::broken_intra_doc_links)]

use crate::clock;
use crate::error::{Error, ParseError};
use crate::fields::{parse_char_field, parse_int_field, parse_uint_field};
use memchr::memmem;
use std::fs;
use std::time::Duration;

include!(concat!(env!("OUT_DIR"), "/procstat.rs"));

impl ProcStat {
    /// Parse the contents of a `/proc/[pid]/stat` file.
    ///
    /// Unknown fields at the end of the line are ignored.
    pub fn parse(line: &str) -> Result<ProcStat, ParseError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let bytes = line.as_bytes();

        let mut stat = ProcStat::default();

        let pid_end = memchr::memchr(b' ', bytes).ok_or(ParseError::MissingPid)?;
        stat.pid = parse_int_field(StatField::Pid, &line[..pid_end])? as i32;

        // The executable name is between the first " (" and the last ") ".
        let comm_begin = memmem::find(bytes, b" (");
        let comm_end = memmem::rfind(bytes, b") ");
        let (comm_begin, comm_end) = match (comm_begin, comm_end) {
            (Some(begin), Some(end)) if end > begin => (begin + 2, end),
            _ => return Err(ParseError::MissingComm),
        };

        stat.comm = line[comm_begin..comm_end].to_owned();

        let rest: Vec<&str> = line[comm_end + 2..].split(' ').collect();
        stat.parse_rest(&rest)?;

        Ok(stat)
    }

    /// Read `/proc/<pid>/stat`.
    pub fn read(pid: i32) -> Result<ProcStat, Error> {
        Self::read_path(format!("/proc/{}/stat", pid))
    }

    /// Read `/proc/<pid>/task/<tid>/stat`, for a single thread.
    pub fn read_task(pid: i32, tid: i32) -> Result<ProcStat, Error> {
        Self::read_path(format!("/proc/{}/task/{}/stat", pid, tid))
    }

    fn read_path(path: String) -> Result<ProcStat, Error> {
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(source) => return Err(Error::Io { path, source }),
        };

        ProcStat::parse(&contents).map_err(|source| Error::Parse { path, source })
    }

    /// Time spent in user and kernel mode.
    pub fn cpu_time(&self) -> Duration {
        clock::ticks_to_duration(self.utime.saturating_add(self.stime))
    }

    /// Time since the process was started, given the system uptime.
    ///
    /// Returns zero if `uptime` is before the start of the process.
    pub fn elapsed(&self, uptime: Duration) -> Duration {
        uptime
            .checked_sub(clock::ticks_to_duration(self.starttime))
            .unwrap_or_default()
    }
}
