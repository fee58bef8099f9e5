use crate::{get_opts, run_drill, DrillResult, Opts};
use pretty_assertions::assert_eq;

fn opts(args: &[&str]) -> Opts {
    let argv = std::iter::once("drill").chain(args.iter().copied());
    match get_opts(|app| app.get_matches_from_safe(argv), false) {
        Ok(opts) => opts,
        Err(e) => panic!("{}", e),
    }
}

fn run(args: &[&str]) -> DrillResult {
    run_drill(opts(args))
}

#[test]
fn default_opts() {
    let opts = opts(&[]);
    assert_eq!(opts.course, "random");
    assert_eq!(opts.emit_format, "latex");
    assert_eq!(opts.count, 10);
    assert_eq!(opts.seed, None);
    assert!(!opts.answers && !opts.json && !opts.list && !opts.verbose);
}

#[test]
fn parse_opts() {
    let opts = opts(&[
        "summation", "-o", "pretty", "-n", "3", "--seed", "42", "--answers", "-v",
    ]);
    assert_eq!(opts.course, "summation");
    assert_eq!(opts.emit_format, "pretty");
    assert_eq!(opts.count, 3);
    assert_eq!(opts.seed, Some(42));
    assert!(opts.answers && opts.verbose);
}

#[test]
fn reject_bad_opts() {
    let parse = |args: &[&str]| {
        let argv = std::iter::once("drill").chain(args.iter().copied());
        get_opts(|app| app.get_matches_from_safe(argv), false).is_err()
    };
    assert!(parse(&["-o", "html"]));
    assert!(parse(&["-n", "ten"]));
    assert!(parse(&["--seed", "-1"]));
}

#[test]
fn list_courses() {
    let DrillResult { code, stdout, .. } = run(&["--list"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "\
random                 Random (all categories)
expansion              Expansion
factorization-monic    Factorization (x²)
factorization-general  Factorization (ax²)
completion-monic       Completing the square (x²)
completion-general     Completing the square (ax²)
equation               Quadratic equations
differentiation        Differentiation
integration            Definite integrals
summation              Summation
trigonometric          Trigonometric ratios"
    );
}

#[test]
fn unknown_course() {
    let DrillResult {
        code,
        stdout,
        stderr,
    } = run(&["sigma"]);
    assert_eq!(code, 1);
    assert_eq!(stdout, "");
    assert_eq!(
        stderr,
        "error: unknown course `sigma`; expected `random` or a category"
    );
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = run(&["--seed", "7", "--answers"]);
    let second = run(&["--seed", "7", "--answers"]);
    assert_eq!(first.code, 0);
    assert_eq!(first.stdout, second.stdout);
    assert!(first.stdout.starts_with("Random (all categories)\n\nQ1. "));
    assert!(first.stdout.contains("\n\nAnswers\n\nQ1: $$ "));
    assert!(first.stdout.contains("\nQ10. "));
}

#[test]
fn question_sheet() {
    let DrillResult { code, stdout, .. } = run(&["summation", "-o", "pretty", "-n", "2"]);
    assert_eq!(code, 0);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Summation");
    assert_eq!(lines[2], "Q1. Evaluate the sum.");
    assert!(lines[3].starts_with("    Σ[k=1.."), "{}", lines[3]);
    assert_eq!(lines[5], "Q2. Evaluate the sum.");
    assert!(!stdout.contains("Answers"));
}

#[test]
fn json_session() {
    let DrillResult { code, stdout, .. } =
        run(&["trigonometric", "--json", "-n", "1", "--seed", "1"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["course"], "trigonometric");
    assert_eq!(json["format"], "latex");
    let problems = json["problems"].as_array().unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0]["category"], "trigonometric");
    assert_eq!(problems[0]["instruction"], "Find the exact value.");
    assert!(problems[0]["problem"]["question"]
        .as_str()
        .unwrap()
        .starts_with("$$ \\"));
}
