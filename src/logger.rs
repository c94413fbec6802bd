use std::io::{Result, Write};

/// Controls where logs for a specific channel are routed to
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Policy {
    Stdout,
    Stderr,
    Silent,
}

pub struct Policies {
    /// Where `trace()` on a Pipe or With writes the "--- label ---" header
    /// and the value.
    pub step: Policy,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            step: Policy::Stderr,
        }
    }
}

pub enum LogWriter<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    Stdout(&'a mut OUT),
    Stderr(&'a mut ERR),
    Silent,
}

impl<'a, OUT, ERR> Write for LogWriter<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Stdout(w) => w.write(bytes),
            Self::Stderr(w) => w.write(bytes),
            Self::Silent => Ok(bytes.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Stderr(w) => w.flush(),
            Self::Silent => Ok(()),
        }
    }
}

pub struct Logger<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub stdout: &'a mut OUT,
    pub stderr: &'a mut ERR,
    pub pol: Policies,
}

impl<'a, OUT, ERR> Logger<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub fn new(stdout: &'a mut OUT, stderr: &'a mut ERR) -> Self {
        Self {
            stdout,
            stderr,
            pol: Policies::default(),
        }
    }

    fn lw_for(&mut self, pol: Policy) -> LogWriter<OUT, ERR> {
        match pol {
            Policy::Stdout => LogWriter::Stdout(self.stdout),
            Policy::Stderr => LogWriter::Stderr(self.stderr),
            Policy::Silent => LogWriter::Silent,
        }
    }

    pub fn step(&mut self) -> LogWriter<OUT, ERR> {
        self.lw_for(self.pol.step)
    }

    /// Write one traced step: a header line, then the value's Debug form.
    pub fn trace(&mut self, label: &str, value: &impl std::fmt::Debug) -> Result<()> {
        let mut w = self.step();
        writeln!(w, "--- {} ---", label)?;
        writeln!(w, "{:?}", value)
    }
}
