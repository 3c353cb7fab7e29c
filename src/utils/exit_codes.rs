//! Exit code utilities and mappings

use std::process::ExitStatus;

/// Get a human-readable description for a shell exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "invalid argument to exit",
        130 => "script terminated by Control-C",
        131..=255 => "terminated by signal",
        _ => "error",
    }
}

/// Exit code and description of a finished process
///
/// A process killed by a signal has no exit code; it is reported as -1.
pub fn describe_status(status: &ExitStatus) -> (i32, &'static str) {
    match status.code() {
        Some(code) => (code, get_exit_code_description(code)),
        None => (-1, "terminated by signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_exit_code_description() {
        assert_eq!(get_exit_code_description(0), "success");
        assert_eq!(get_exit_code_description(1), "general error");
        assert_eq!(get_exit_code_description(127), "command not found");
        assert_eq!(get_exit_code_description(130), "script terminated by Control-C");
        assert_eq!(get_exit_code_description(143), "terminated by signal");
        assert_eq!(get_exit_code_description(42), "error");
        assert_eq!(get_exit_code_description(-1), "error");
    }

    #[cfg(unix)]
    #[test]
    fn test_describe_status() {
        let status = std::process::Command::new("sh")
            .args(["-c", "exit 127"])
            .status()
            .unwrap();
        assert_eq!(describe_status(&status), (127, "command not found"));
    }
}
