//! Collaborators the managers report to. Both are fire-and-forget sinks.

/// Receives milestone completions, e.g. to queue a story message.
pub trait MilestoneNotifier {
    fn notify_milestone(&mut self, milestone_id: &str);
}

/// Receives formatted lines of user-facing text.
pub trait TextSink {
    fn write_line(&mut self, line: &str);
}

/// Records milestone IDs in notification order.
impl MilestoneNotifier for Vec<String> {
    fn notify_milestone(&mut self, milestone_id: &str) {
        self.push(milestone_id.to_string());
    }
}

/// Records every line written.
impl TextSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
