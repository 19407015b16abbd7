use std::io::{self, Write};

use crate::core::config::data::Config;
use crate::core::mapper::ExpirationPolicy;
use crate::core::scopes::ScopeSplit;

impl Config {
    pub fn print_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Current configuration:")?;
        match self.scope_split {
            Some(split) => writeln!(out, "  scope-split: {}", split_name(split))?,
            None => writeln!(out, "  scope-split: (unset, legacy)")?,
        }
        match self.expiration {
            Some(policy) => writeln!(out, "  expiration: {}", expiration_name(policy))?,
            None => writeln!(out, "  expiration: (unset, omit)")?,
        }
        match &self.log_filter {
            Some(filter) => writeln!(out, "  log-filter: {filter}")?,
            None => writeln!(out, "  log-filter: (unset, {})", self.log_filter())?,
        }
        Ok(())
    }
}

pub fn split_name(split: ScopeSplit) -> &'static str {
    match split {
        ScopeSplit::Legacy => "legacy",
        ScopeSplit::Complete => "complete",
    }
}

pub fn expiration_name(policy: ExpirationPolicy) -> &'static str {
    match policy {
        ExpirationPolicy::Omit => "omit",
        ExpirationPolicy::Null => "null",
    }
}
