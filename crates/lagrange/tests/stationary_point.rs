use std::process::Command;

use approx::assert_relative_eq;
use lagrange::{MAX_ITERS_VAR, PRECISION, Point, Report, TRACE_VAR, driver, format_g, functions};
use lagrange_solvers::equation::{Status, hybrid, newton};

const EXPECTED_OUTPUT: &str = "x = 0.957782\ny = 0.289565\nλ = -4.07789\nf(x, y) = -3.16222\n";

#[test]
fn default_solve_prints_expected_report() {
    let solved = driver::solve_default().unwrap().require_converged().unwrap();

    assert_eq!(Report::from(&solved).to_string(), EXPECTED_OUTPUT);
}

#[test]
fn solution_zeroes_the_stationarity_system() {
    let solved = driver::solve_default().unwrap();
    let Point { x, y, lambda } = solved.point;

    assert_eq!(solved.status, Status::Converged);
    assert!(solved.residual_norm <= 1e-6);
    assert_relative_eq!(functions::g(x, y), 0.0, epsilon = 1e-6);
    assert_relative_eq!(
        functions::dfdx(x, y) - lambda * functions::dgdx(x, y),
        0.0,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        functions::dfdy(x, y) - lambda * functions::dgdy(x, y),
        0.0,
        epsilon = 1e-6
    );
}

#[test]
fn reported_objective_is_f_at_the_solution() {
    let solved = driver::solve_default().unwrap();
    let Point { x, y, .. } = solved.point;

    assert_eq!(
        format_g(solved.objective, PRECISION),
        format_g(functions::f(x, y), PRECISION)
    );
}

#[test]
fn repeated_solves_are_bit_identical() {
    let first = driver::solve_default().unwrap();
    let second = driver::solve_default().unwrap();

    assert_eq!(first.point.x.to_bits(), second.point.x.to_bits());
    assert_eq!(first.point.y.to_bits(), second.point.y.to_bits());
    assert_eq!(first.point.lambda.to_bits(), second.point.lambda.to_bits());
    assert_eq!(first.objective.to_bits(), second.objective.to_bits());
    assert_eq!(first.iters, second.iters);
}

#[test]
fn nearby_start_finds_the_same_point() {
    let origin = driver::solve_default().unwrap();
    let nearby = driver::solve(
        Point::new(0.01, 0.01, 0.01),
        &hybrid::Config::default(),
        (),
    )
    .unwrap();

    assert_eq!(nearby.status, Status::Converged);
    assert_relative_eq!(nearby.point.x, origin.point.x, epsilon = 1e-5);
    assert_relative_eq!(nearby.point.y, origin.point.y, epsilon = 1e-5);
    assert_relative_eq!(nearby.point.lambda, origin.point.lambda, epsilon = 1e-5);
}

#[test]
fn newton_with_analytic_jacobian_agrees() {
    let solved = driver::solve_newton(driver::INITIAL_GUESS, &newton::Config::default())
        .unwrap()
        .require_converged()
        .unwrap();

    assert_eq!(Report::from(&solved).to_string(), EXPECTED_OUTPUT);
}

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lagrange"));
    command.env_remove(TRACE_VAR).env_remove(MAX_ITERS_VAR);
    command
}

#[test]
fn binary_prints_four_lines() {
    let output = binary().output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_OUTPUT);
    assert!(output.stderr.is_empty());
}

#[test]
fn binary_traces_to_stderr_only() {
    let output = binary().env(TRACE_VAR, "1").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_OUTPUT);

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<_> = stderr.lines().collect();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line.starts_with("lagrange: iter ")));
    assert!(lines.last().unwrap().contains("accepted"));
}

#[test]
fn binary_fails_without_convergence() {
    let output = binary().env(MAX_ITERS_VAR, "1").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn binary_rejects_invalid_setting() {
    let output = binary().env(MAX_ITERS_VAR, "lots").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
