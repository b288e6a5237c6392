use crate::app::{ProgressEvent, ProgressSink};

pub struct ConsoleOutput;

impl ProgressSink for ConsoleOutput {
    fn event(&self, event: ProgressEvent) {
        println!("{}", event.message);
    }
}

pub struct SilentOutput;

impl ProgressSink for SilentOutput {
    fn event(&self, _event: ProgressEvent) {}
}
