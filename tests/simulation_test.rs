use std::process::{Command, Output};

fn run_bank_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bank_sim"))
        .args(args)
        .env("RUST_LOG", "warn,bank_sim=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Pull the value printed after `label` in the stats block
fn stat_value<'a>(stdout: &'a str, label: &str) -> &'a str {
    let line = stdout
        .lines()
        .find(|line| line.starts_with(label))
        .unwrap_or_else(|| panic!("Missing '{}' statistic in: {}", label, stdout));
    line[label.len()..].trim()
}

/// Test that the simulation runs to completion and reports statistics
#[test]
fn test_simulation_statistics_printed() {
    let output = run_bank_sim(&["3", "-t", "1", "--arrival-ticks", "1"]);
    assert!(
        output.status.success(),
        "Simulation failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stat_value(&stdout, "Total tellers:"), "1");
    assert_eq!(stat_value(&stdout, "Total customers:"), "3");
    assert_eq!(stat_value(&stdout, "Customers served:"), "3");
    assert_eq!(stat_value(&stdout, "Ticks elapsed:"), "3");
    assert_eq!(stat_value(&stdout, "Average wait time:"), "1.000");
}

/// Test that non-positive counts are clamped to one
#[test]
fn test_non_positive_counts_are_clamped() {
    let output = run_bank_sim(&["-5", "-t", "0"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stat_value(&stdout, "Total tellers:"), "1");
    assert_eq!(stat_value(&stdout, "Total customers:"), "1");
}

/// Test that verbose mode logs each tick without changing the outcome
#[test]
fn test_verbose_logs_ticks() {
    let quiet = run_bank_sim(&["4", "-t", "2", "--seed", "3"]);
    let verbose = run_bank_sim(&["4", "-t", "2", "--seed", "3", "-v"]);
    assert!(quiet.status.success() && verbose.status.success());

    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("[tick 0000]"), "No tick log found: {}", stderr);
    assert!(stderr.contains("left to serve"));

    let quiet_stdout = String::from_utf8_lossy(&quiet.stdout);
    let verbose_stdout = String::from_utf8_lossy(&verbose.stdout);
    for label in ["Ticks elapsed:", "Average wait time:", "Customers served:"] {
        assert_eq!(
            stat_value(&quiet_stdout, label),
            stat_value(&verbose_stdout, label)
        );
    }
}

/// Test that a zero arrival window is reported as an error
#[test]
fn test_invalid_arrival_ticks_fails() {
    let output = run_bank_sim(&["3", "--arrival-ticks", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid argument"), "stderr: {}", stderr);
}

/// Test that an extreme wait delta finishes the run instead of crashing
#[test]
fn test_max_wait_delta_completes() {
    let output = run_bank_sim(&["3", "--arrival-ticks", "1", "--wait-delta", "18446744073709551615"]);
    assert!(
        output.status.success(),
        "Simulation failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stat_value(&stdout, "Customers served:"), "3");
}
