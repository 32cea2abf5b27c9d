mod common;
use common::*;
use walle::mach::Color;

#[test]
fn test_goto_skips_lines() {
    let source = "\
Spawn(0, 0)
GoTo [End] (1 == 1)
Color(\"Red\")
End:";
    let (r, errors) = run(5, source);
    assert_eq!(errors, "");
    assert!(r.brush().is_transparent());
}

#[test]
fn test_goto_false_condition_falls_through() {
    let source = "\
Spawn(0, 0)
GoTo [End] (1 == 2)
Color(\"Red\")
End:";
    let (r, errors) = run(5, source);
    assert_eq!(errors, "");
    assert_eq!(r.brush().color(), Color::Red);
}

#[test]
fn test_goto_without_condition() {
    let (r, errors) = run(5, "Spawn(0, 0)\ngoto [end]\nColor(\"Red\")\nEND:");
    assert_eq!(errors, "");
    assert!(r.brush().is_transparent());
}

#[test]
fn test_loop() {
    let source = "\
Spawn(0, 0)
Color(\"Blue\")
n <- 0
step:
  DrawLine(1, 1, 1)
  n <- n + 1
  GoTo [step] (n < 5)
";
    let (r, errors) = run(10, source);
    assert_eq!(errors, "");
    assert_eq!(var(&r, "n"), "5");
    assert_eq!((r.cursor().x, r.cursor().y), (5, 5));
    for i in 0..=5 {
        assert_eq!(cell(&r, i, i), Some(Color::Blue));
    }
    assert_eq!(count(&r, Color::Blue), 6);
}

#[test]
fn test_jump_backwards_before_spawn() {
    let source = "\
i <- 0
again:
i <- i + 1
GoTo [again] (i < 3)
Spawn(i, i)";
    let (r, errors) = run(5, source);
    assert_eq!(errors, "");
    assert_eq!((r.cursor().x, r.cursor().y), (3, 3));
}

#[test]
fn test_undefined_label() {
    let (_, errors) = run(5, "Spawn(0, 0)\nGoTo [nowhere] (0)");
    assert_eq!(errors, "UNDEFINED LABEL IN 2; nowhere\n");
}

#[test]
fn test_label_errors_stop_before_running() {
    let (r, errors) = run(5, "Spawn(0, 0)\nloop:\nLoop:");
    assert_eq!(errors, "SYNTAX ERROR IN 3; DUPLICATE LABEL Loop\n");
    assert!(!r.cursor().spawned);
    let (r, errors) = run(5, "Spawn(0, 0)\n_start:");
    assert_eq!(errors, "INVALID LABEL IN 2; _start\n");
    assert!(!r.cursor().spawned);
}

#[test]
fn test_goto_syntax() {
    let (_, errors) = run(5, "a:\nSpawn(0, 0)\nGoTo a");
    assert!(errors.starts_with("SYNTAX ERROR IN 3"));
    let (_, errors) = run(5, "a:\nSpawn(0, 0)\nGoTo [a] 1 == 1");
    assert!(errors.starts_with("SYNTAX ERROR IN 3"));
    let (_, errors) = run(5, "a:\nSpawn(0, 0)\nGoTo [a] (1 +)");
    assert!(errors.starts_with("SYNTAX ERROR IN 3"));
}

#[test]
fn test_infinite_loop_runs_in_batches() {
    let mut r = walle::mach::Runtime::new(5);
    r.load("Spawn(0, 0)\nforever:\nGoTo [forever]").unwrap();
    assert_eq!(exec_n(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    assert!(r.is_running());
    r.interrupt();
    let s = exec(&mut r);
    assert!(s.starts_with("BREAK IN "));
    assert!(!r.is_running());
}
