use core_sim::StepIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLogEventKind {
    RunStarted,
    StepRecorded,
    TradeExecuted,
    QuotesReset,
    RunCompleted,
    ExportWritten,
}

impl RunLogEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RunStarted => "run_started",
            Self::StepRecorded => "step_recorded",
            Self::TradeExecuted => "trade_executed",
            Self::QuotesReset => "quotes_reset",
            Self::RunCompleted => "run_completed",
            Self::ExportWritten => "export_written",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunLogEvent {
    pub run_id: u64,
    pub step: Option<StepIndex>,
    pub kind: RunLogEventKind,
    pub price: Option<f64>,
}

impl RunLogEvent {
    pub fn new(run_id: u64, kind: RunLogEventKind) -> Self {
        Self {
            run_id,
            step: None,
            kind,
            price: None,
        }
    }

    pub fn at_step(mut self, step: StepIndex) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

pub trait RunLogWriter {
    fn write(&mut self, event: RunLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryRunLogWriter {
    events: Vec<RunLogEvent>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunLogEvent] {
        &self.events
    }

    pub fn kinds(&self) -> Vec<RunLogEventKind> {
        self.events.iter().map(|event| event.kind).collect()
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        self.events.push(event);
    }
}

/// Forwards run journal entries to `tracing`. Per-step entries go to
/// `debug`, everything else to `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRunLogWriter;

impl RunLogWriter for TracingRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        let step = event.step.map(|step| step.value());
        match event.kind {
            RunLogEventKind::StepRecorded => tracing::debug!(
                run_id = event.run_id,
                step,
                kind = event.kind.as_str(),
                "simulation step recorded"
            ),
            _ => tracing::info!(
                run_id = event.run_id,
                step,
                price = event.price,
                kind = event.kind.as_str(),
                "simulation run event"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use core_sim::StepIndex;

    use super::{InMemoryRunLogWriter, RunLogEvent, RunLogEventKind, RunLogWriter};

    #[test]
    fn in_memory_writer_keeps_insertion_order() {
        let mut writer = InMemoryRunLogWriter::new();

        writer.write(RunLogEvent::new(1, RunLogEventKind::RunStarted));
        writer.write(
            RunLogEvent::new(1, RunLogEventKind::StepRecorded).at_step(StepIndex::base(0)),
        );
        writer.write(RunLogEvent::new(1, RunLogEventKind::RunCompleted));

        assert_eq!(
            writer.kinds(),
            vec![
                RunLogEventKind::RunStarted,
                RunLogEventKind::StepRecorded,
                RunLogEventKind::RunCompleted,
            ]
        );
        assert_eq!(writer.events()[1].step, Some(StepIndex::base(0)));
    }
}
