// src/progress.rs

/// Pipeline steps reported to a `Progress` sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Search page fetched, profile link resolved.
    Search,
    /// Profile page fetched.
    Profile,
    /// Rows extracted, normalised and sorted.
    Extract,
}

impl Stage {
    pub const COUNT: usize = 3;

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Search => "search",
            Stage::Profile => "profile",
            Stage::Extract => "extract",
        }
    }
}

/// Lightweight progress reporting for a lookup.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
