use chrono::Local;
use std::fmt;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Local timestamps in a fixed `chrono` format.
#[derive(Debug, Clone, Copy)]
pub struct LocalTime {
    format: &'static str,
}

impl LocalTime {
    /// Time of day only, for the console (`13:45:01.123`)
    pub const CONSOLE: LocalTime = LocalTime { format: "%H:%M:%S%.3f" };
    /// Full date and offset, for log files (`2024-06-09 13:45:01.123+09:00`)
    pub const FILE: LocalTime = LocalTime { format: "%Y-%m-%d %H:%M:%S%.3f%:z" };
}

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(self.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_timestamps_carry_the_date() {
        let mut console = String::new();
        let mut file = String::new();
        LocalTime::CONSOLE.format_time(&mut Writer::new(&mut console)).unwrap();
        LocalTime::FILE.format_time(&mut Writer::new(&mut file)).unwrap();
        assert_eq!(console.len(), "13:45:01.123".len());
        assert_eq!(file.len(), "2024-06-09 13:45:01.123+09:00".len());
    }
}
