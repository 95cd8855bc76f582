use headsup_cli::run_with_input;
use std::io::Cursor;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut argv = vec!["headsup", "play", "--delay-ms", "0"];
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

#[test]
fn quit_at_first_prompt() {
    let (code, stdout, _) = play(&["--seed", "42"], "q\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("seed=42"));
    assert!(stdout.contains("== Hand 1 - pre-flop =="));
    assert!(stdout.contains("Opponent: ?? ??"));
    assert!(stdout.contains("Hands played: 0"));
}

#[test]
fn fold_reports_both_hands_and_settles() {
    let (code, stdout, _) = play(&["--seed", "42", "--hands", "1"], "fold\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Opponent wins, you folded! Your hand: "));
    assert!(stdout.contains(", Opponent's hand: "));
    assert!(stdout.contains("Stacks: you 1000, opponent 1000"));
    assert!(stdout.contains("Hands played: 1"));
}

#[test]
fn bet_against_passive_opponent_builds_the_pot() {
    let (code, stdout, _) = play(&["--seed", "3", "--opponent", "passive"], "bet\nbet\nq\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("== Hand 1 - flop =="));
    assert!(stdout.contains("== Hand 1 - turn =="));
    assert!(stdout.contains("Pot: 40   Table bet: 0"));
    assert!(stdout.contains("stack 980"));
}

#[test]
fn check_facing_nothing_then_illegal_call() {
    let (code, stdout, stderr) = play(&["--seed", "8", "--opponent", "passive"], "call\nq\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("Error: Illegal action: there is no bet to call"));
    assert!(!stdout.contains("You: call"));
}

#[test]
fn hand_limit_plays_back_to_back() {
    let (code, stdout, _) = play(&["--seed", "5", "--hands", "3"], "fold\nfold\nfold\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("== Hand 3 - pre-flop =="));
    assert!(stdout.contains("Hands played: 3"));
    assert!(!stdout.contains("Play another hand?"));
}

#[test]
fn closed_input_mid_hand_exits_130() {
    let (code, _, stderr) = play(&["--seed", "1"], "");
    assert_eq!(code, 130);
    assert!(stderr.contains("Interrupted"));
}

#[test]
fn unknown_opponent_is_an_error() {
    let (code, stdout, stderr) = play(&["--opponent", "shark"], "");
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown opponent policy: shark"));
}

#[test]
fn same_seed_replays_the_same_session() {
    let input = "check\ncheck\ncheck\ncheck\nn\n";
    let first = play(&["--seed", "77"], input);
    let second = play(&["--seed", "77"], input);
    assert_eq!(first.0, 0);
    assert_eq!(first.1, second.1);
}

#[test]
fn short_stacks_never_end_the_session_with_an_error() {
    let input = "bet\ncheck\ncall\nfold\n".repeat(200);
    for seed in 0..40u64 {
        let seed = seed.to_string();
        let (code, stdout, stderr) = play(
            &["--seed", &seed, "--stack", "20", "--opponent", "reference", "--hands", "3"],
            &input,
        );
        assert_eq!(code, 0, "seed {seed}: {stderr}");
        assert!(!stderr.contains("by opponent"), "seed {seed}: {stderr}");
        assert!(stdout.contains("Final stacks: "));
    }
}
