use fivedraw_cli::run_with_input;
use std::io::Cursor;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut argv = vec!["fivedraw", "play", "--opponents", "1", "--seed", "42"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = run_with_input(argv, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn balances(stdout: &str) -> Vec<u32> {
    let line = stdout
        .lines()
        .rev()
        .find(|l| l.starts_with("Balances: "))
        .unwrap();
    line["Balances: ".len()..]
        .split_whitespace()
        .map(|kv| kv.rsplit('=').next().unwrap().parse().unwrap())
        .collect()
}

#[test]
fn quit_refunds_the_round() {
    let (code, stdout, _) = play(&["--rounds", "3"], "q\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Round aborted, all chips returned"));
    assert!(stdout.ends_with("Session rounds=1 balance=1000\n"));
}

#[test]
fn folding_twice_costs_two_antes() {
    // heads-up: the CPU opens round 1, the human opens round 2
    let (code, stdout, _) = play(&["--rounds", "2"], "f\nf\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Round 2 (dealer: "));
    assert_eq!(stdout.matches("YOU folds").count(), 2);
    assert!(stdout.contains("Session rounds=2 balance=980"));
    assert_eq!(balances(&stdout).iter().sum::<u32>(), 2000);
}

#[test]
fn calling_down_reaches_showdown() {
    let (code, stdout, _) = play(&["--rounds", "1", "--name", "Ann"], "c\n\nc\n");
    assert_eq!(code, 0, "{}", stdout);
    assert!(stdout.contains("-- Draw --"));
    assert!(stdout.contains("Discard (positions 1-5"));
    assert!(stdout.contains("-- Showdown --"));
    assert!(stdout.contains("Ann shows ["));
    assert!(stdout.contains(" wins "));
    assert_eq!(balances(&stdout).iter().sum::<u32>(), 2000);
}

#[test]
fn invalid_discard_is_reprompted() {
    let (code, stdout, stderr) = play(&["--rounds", "1"], "c\n9\n1 2\nc\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("'9' is not a card position (1-5)"));
    assert_eq!(stdout.matches("Discard (positions").count(), 2);
}

#[test]
fn eof_mid_round_exits_130() {
    let (code, _, stderr) = play(&["--rounds", "1"], "c\n");
    assert_eq!(code, 130);
    assert!(stderr.contains("Interrupted: Input closed in the middle of a round"));
}

#[test]
fn opponents_out_of_range_is_a_usage_error() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(Vec::new());
    let code = run_with_input(
        ["fivedraw", "play", "--opponents", "9"],
        &mut out,
        &mut err,
        &mut stdin,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("--opponents"));
}
