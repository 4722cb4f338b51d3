//! Domain-specific assertion macros for itca harnesses.
//!
//! These work on parsed `serde_json::Value` logs so they check what is
//! actually on disk, not the in-memory structs.

/// Assert that a parsed log is a rejected (partial) session.
#[macro_export]
macro_rules! assert_rejected_log {
    ($log:expr) => {{
        let log: &serde_json::Value = &$log;
        pretty_assertions::assert_eq!(
            log["outcome"],
            "User input did not match the expected decision space (IT Career Progression)."
        );
        pretty_assertions::assert_eq!(log["interactions"], serde_json::json!([]));
        assert!(
            log["final_advice"].is_null(),
            "assert_rejected_log! failed: final_advice = {}",
            log["final_advice"]
        );
    }};
}

/// Assert that a parsed log is a completed session with three ordered steps.
#[macro_export]
macro_rules! assert_completed_log {
    ($log:expr) => {{
        let log: &serde_json::Value = &$log;
        pretty_assertions::assert_eq!(log["outcome"], "Provided career advice.");
        let interactions = log["interactions"]
            .as_array()
            .expect("assert_completed_log! failed: interactions is not an array");
        let steps: Vec<u64> = interactions
            .iter()
            .map(|i| i["step"].as_u64().expect("step is not a number"))
            .collect();
        pretty_assertions::assert_eq!(steps, vec![1, 2, 3]);
        assert!(
            log["final_advice"].is_string(),
            "assert_completed_log! failed: final_advice = {}",
            log["final_advice"]
        );
    }};
}

/// Assert that a session id is a well-formed UUID string.
pub fn assert_uuid(value: &serde_json::Value) {
    let text = value.as_str().expect("session_id is not a string");
    let groups: Vec<usize> = text.split('-').map(str::len).collect();
    pretty_assertions::assert_eq!(groups, vec![8, 4, 4, 4, 12], "not a UUID: {text}");
}
