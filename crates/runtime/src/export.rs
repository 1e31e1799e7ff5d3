use std::io::{self, Write};

use core_sim::Snapshot;

use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};

pub const SNAPSHOT_CSV_HEADER: &str = "step,bid,ask,mid,event\n";
pub const EXPORT_FILE_NAME: &str = "simulation_log.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

pub struct SnapshotCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> SnapshotCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(SNAPSHOT_CSV_HEADER.as_bytes())
    }

    pub fn append_snapshots(&mut self, snapshots: &[Snapshot]) -> io::Result<()> {
        for snapshot in snapshots {
            let event = escape_csv_field(&snapshot.event);
            writeln!(
                self.writer,
                "{},{},{},{},{event}",
                snapshot.step, snapshot.bid, snapshot.ask, snapshot.mid
            )?;
        }
        Ok(())
    }

    /// Writes the whole log and records the export only once the bytes are
    /// flushed.
    pub fn write_log_and_record(
        &mut self,
        run_id: u64,
        snapshots: &[Snapshot],
        run_log_writer: &mut dyn RunLogWriter,
    ) -> io::Result<()> {
        self.write_header()?;
        self.append_snapshots(snapshots)?;
        self.writer.flush()?;
        run_log_writer.write(RunLogEvent::new(run_id, RunLogEventKind::ExportWritten));
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub fn snapshots_to_csv(snapshots: &[Snapshot]) -> io::Result<Vec<u8>> {
    let mut writer = SnapshotCsvWriter::new(Vec::new());
    writer.write_header()?;
    writer.append_snapshots(snapshots)?;
    Ok(writer.into_inner())
}

fn escape_csv_field(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | '\n' | '\r'));
    if !needs_quotes {
        return value.to_string();
    }

    let escaped = value.replace('"', "\"\"");
    format!("\"{escaped}\"")
}
