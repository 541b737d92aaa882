use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use zuccbot::oracle::{Oracle, OracleConfig};
use zuccbot::prophecy::PROPHECIES;
use zuccbot::responder::{EXIT_REPLY, NAME_REPLY};

fn test_config() -> OracleConfig {
    OracleConfig {
        time_unit: Duration::from_millis(100),
        seed: 0xDEAD_BEEF,
    }
}

/// Read printed lines until `want` shows up, or panic after `cap` lines.
/// Prophecies interleave with answers, so tests can never assume the next
/// line is theirs.
async fn expect_line<R>(lines: &mut tokio::io::Lines<BufReader<R>>, want: &str, cap: usize)
where
    R: tokio::io::AsyncRead + Unpin,
{
    for _ in 0..cap {
        let line = lines
            .next_line()
            .await
            .unwrap()
            .expect("output closed before expected line");
        if line == want {
            return;
        }
    }
    panic!("line not seen within {cap} messages: {want}");
}

#[tokio::test(start_paused = true)]
async fn question_is_answered_on_the_sink() {
    let (writer, reader) = tokio::io::duplex(64 * 1024);
    let oracle = Oracle::spawn_with_writer(test_config(), writer);
    let mut lines = BufReader::new(reader).lines();

    oracle.ask("Is zuckerbot dead?");

    let want = format!("\"Zuckerbot... dead... zuckerbot... {NAME_REPLY}\"");
    expect_line(&mut lines, &want, 50).await;
}

#[tokio::test(start_paused = true)]
async fn independent_questions_are_all_answered() {
    let (writer, reader) = tokio::io::duplex(64 * 1024);
    let oracle = Oracle::spawn_with_writer(test_config(), writer);
    let mut lines = BufReader::new(reader).lines();

    oracle.ask("banana");
    oracle.ask("Is zuckerbot dead?");

    // No ordering guarantee between the two, so hunt for each in turn;
    // whichever printed first is already behind us or still ahead.
    let exit = format!("\"Banana... banana... {EXIT_REPLY}\"");
    let name = format!("\"Zuckerbot... dead... zuckerbot... {NAME_REPLY}\"");

    let mut found_exit = false;
    let mut found_name = false;
    for _ in 0..100 {
        let line = lines.next_line().await.unwrap().expect("output closed");
        if line == exit {
            found_exit = true;
        } else if line == name {
            found_name = true;
        }
        if found_exit && found_name {
            return;
        }
    }
    panic!("missing answers: exit={found_exit} name={found_name}");
}

#[tokio::test(start_paused = true)]
async fn prophecies_flow_with_no_questions_asked() {
    let (writer, reader) = tokio::io::duplex(64 * 1024);
    let _oracle = Oracle::spawn_with_writer(test_config(), writer);
    let mut lines = BufReader::new(reader).lines();

    let line = lines.next_line().await.unwrap().expect("output closed");
    let unquoted = line
        .strip_prefix('"')
        .and_then(|l| l.strip_suffix('"'))
        .expect("message not quote-wrapped");
    assert!(PROPHECIES.contains(&unquoted), "got: {unquoted}");
}
