use nqueens::board::is_valid_solution;
use nqueens::search::{count_nodes, n_queens, solve_all};
use nqueens::QueensError;
use std::process::{Command, Output};

fn run_nqueens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nqueens"))
        .args(args)
        .output()
        .expect("Failed to execute nqueens")
}

fn assert_success(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_solve_four_queens_output() {
    let output = run_nqueens(&["solve", "4"]);
    let stdout = assert_success(&output);
    assert_eq!(stdout, "2, 4, 1, 3\n3, 1, 4, 2\n");
}

#[test]
fn test_solve_count_only() {
    let output = run_nqueens(&["solve", "8", "--count-only"]);
    let stdout = assert_success(&output);
    assert_eq!(stdout.trim(), "92");
}

#[test]
fn test_solve_with_stats() {
    let output = run_nqueens(&["solve", "6", "--stats"]);
    let stdout = assert_success(&output);
    assert!(stdout.contains("Search Statistics:"), "{}", stdout);
    assert!(stdout.contains("Solutions found: 4"), "{}", stdout);
}

#[test]
fn test_solve_rejects_zero() {
    let output = run_nqueens(&["solve", "0"]);
    assert!(!output.status.success(), "solve 0 should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid board size 0"), "stderr: {}", stderr);
}

#[test]
fn test_solve_rejects_negative() {
    let output = run_nqueens(&["solve", "-3"]);
    assert!(!output.status.success(), "solve -3 should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid board size -3"), "stderr: {}", stderr);
}

#[test]
fn test_solve_rejects_oversized_board() {
    let output = run_nqueens(&["solve", "9223372036854775807"]);
    assert!(!output.status.success(), "oversized solve should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid board size 9223372036854775807"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_nodes_command() {
    let output = run_nqueens(&["nodes", "8"]);
    let stdout = assert_success(&output);
    assert_eq!(stdout.trim(), "15721");
}

#[test]
fn test_library_solutions_match_known_counts() {
    let expected = [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (8, 92)];
    for (n, count) in expected {
        let mut seen = 0u64;
        let stats = n_queens(n, |cols| {
            assert!(is_valid_solution(cols), "invalid solution {:?}", cols);
            seen += 1;
        })
        .unwrap();
        assert_eq!(seen, count, "n = {}", n);
        assert_eq!(stats.solutions_found, count);
    }
}

#[test]
fn test_library_solutions_lexicographic() {
    let solutions = solve_all(8).unwrap();
    assert_eq!(solutions.first().unwrap(), &vec![1, 5, 8, 6, 3, 7, 2, 4]);
    assert!(solutions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_library_invalid_size() {
    assert!(matches!(count_nodes(0), Err(QueensError::InvalidSize(0))));
    assert!(matches!(
        count_nodes(i64::MAX),
        Err(QueensError::InvalidSize(i64::MAX))
    ));
}
