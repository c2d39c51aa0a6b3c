use nqueens::search::{
    EstimateConfig, ParallelConfig, average_estimate, count_nodes, estimate_node_count,
    run_estimates, run_parallel_estimate,
};
use nqueens::QueensError;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_nqueens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nqueens"))
        .args(args)
        .output()
        .expect("Failed to execute nqueens")
}

#[test]
fn test_estimate_command_prints_average() {
    let output = run_nqueens(&["estimate", "8", "--trials", "50", "--seed", "3", "--each"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0. Estimate was: "), "{}", stdout);
    assert!(stdout.contains("49. Estimate was: "), "{}", stdout);
    assert!(stdout.contains("Average was: "), "{}", stdout);
}

#[test]
fn test_estimate_command_seeded_is_reproducible() {
    let args = ["estimate", "12", "--trials", "30", "--seed", "77"];
    let first = run_nqueens(&args);
    let second = run_nqueens(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_estimate_command_parallel() {
    let output = run_nqueens(&["estimate", "2", "--trials", "40", "-j", "4"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Average was: 7."), "{}", stdout);
}

#[test]
fn test_estimate_command_rejects_zero_trials() {
    let output = run_nqueens(&["estimate", "8", "--trials", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid trial count 0"), "stderr: {}", stderr);
}

#[test]
fn test_menu_command_session() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nqueens"))
        .args(["menu", "--seed", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn nqueens");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"p\n4\ns\n2\n2\nq\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2, 4, 1, 3."), "{}", stdout);
    assert!(stdout.contains("3, 1, 4, 2."), "{}", stdout);
    assert!(stdout.contains("Average was: 7."), "{}", stdout);
    assert!(stdout.contains("System exiting..."), "{}", stdout);
}

#[test]
fn test_menu_custom_sizes() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nqueens"))
        .args(["menu", "--sizes", "5,6"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn nqueens");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"p\n4\n6\nq\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Possible choices are 5, or 6."), "{}", stdout);
    assert!(stdout.contains("Must be 5, or 6. Please try again."), "{}", stdout);
    assert!(stdout.contains("2, 4, 6, 1, 3, 5."), "{}", stdout);
}

#[test]
fn test_estimate_invalid_size() {
    assert!(matches!(estimate_node_count(0), Err(QueensError::InvalidSize(0))));
    assert!(matches!(estimate_node_count(-1), Err(QueensError::InvalidSize(-1))));
    assert!(matches!(
        estimate_node_count(i64::MAX),
        Err(QueensError::InvalidSize(i64::MAX))
    ));
}

#[test]
fn test_estimates_bounded_statistically() {
    // Individual runs may overshoot; the mean of many runs must not
    for n in [4, 6, 8] {
        let truth = count_nodes(n).unwrap() as f64;
        let mean = average_estimate(n, 10_000).unwrap();
        assert!(mean >= 1.0);
        assert!(mean <= truth * 1.10, "n = {}: mean {} vs {}", n, mean, truth);
    }
}

#[test]
fn test_sequential_and_parallel_agree() {
    let truth = count_nodes(8).unwrap() as f64;

    let sequential = run_estimates(8, &EstimateConfig::default().with_trials(20_000).with_seed(4))
        .unwrap()
        .mean();
    let parallel = run_parallel_estimate(8, 20_000, &ParallelConfig::default().with_seed(4))
        .unwrap()
        .mean();

    for mean in [sequential, parallel] {
        assert!((mean - truth).abs() / truth < 0.10, "mean {} vs {}", mean, truth);
    }
}
