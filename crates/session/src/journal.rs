use std::io::{self, Write};

use crate::logging::{SessionLogEvent, SessionLogEventKind, SessionLogWriter};
use crate::snapshot::{SampleMarker, SessionSnapshot};

pub const JOURNAL_CSV_HEADER: &str = "t,price,marker,cash,shares,avg_buy_price,fortune\n";

pub struct JournalCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> JournalCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(JOURNAL_CSV_HEADER.as_bytes())
    }

    pub fn write_header_and_log(
        &mut self,
        tick: u64,
        log_writer: &mut dyn SessionLogWriter,
    ) -> io::Result<()> {
        self.write_header()?;
        self.writer.flush()?;
        log_writer.write(SessionLogEvent::new(
            tick,
            SessionLogEventKind::JournalWritten,
        ));
        Ok(())
    }

    pub fn append_snapshot_row(&mut self, snapshot: &SessionSnapshot) -> io::Result<()> {
        let marker = snapshot
            .markers
            .last()
            .copied()
            .unwrap_or(SampleMarker::None);

        writeln!(
            self.writer,
            "{},{},{},{},{},{},{}",
            snapshot.tick,
            snapshot.price,
            marker.as_str(),
            snapshot.cash,
            snapshot.shares,
            snapshot.avg_buy_price,
            snapshot.fortune,
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
