use bytesize::ByteSize;
use std::fmt;
use std::time::Duration;

/// Data rate, displayed as e.g. `12.3 MB/s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    /// Creates a new [`Throughput`] from bytes per second.
    pub fn from_bytes_per_sec(bytes_per_sec: u64) -> Self {
        Self(ByteSize(bytes_per_sec))
    }

    /// Rate at which `total_bytes` were processed in `elapsed`; zero for an empty duration.
    pub fn from_elapsed(total_bytes: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            Self::from_bytes_per_sec((total_bytes as f64 / secs) as u64)
        } else {
            Self::from_bytes_per_sec(0)
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}
