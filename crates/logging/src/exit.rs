//! Process termination used by the fatal operations

use parking_lot::Mutex;

/// Ends the process after a fatal message has been written
pub trait Exit: Send + Sync {
    fn exit(&self, code: i32);
}

/// Calls [`std::process::exit`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Exit for ProcessExit {
    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}

/// Records requested exit codes instead of terminating
#[derive(Debug, Default)]
pub struct RecordingExit {
    codes: Mutex<Vec<i32>>,
}

impl RecordingExit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes requested so far, oldest first
    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().clone()
    }
}

impl Exit for RecordingExit {
    fn exit(&self, code: i32) {
        self.codes.lock().push(code);
    }
}
