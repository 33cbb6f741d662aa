use crate::{Error, Poller};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use std::time::{Duration, Instant};

const CONTENT: &str = "Hello World!";

fn scratch_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pollwait-{}-{}.txt", name, process::id()));
    let _ = fs::remove_file(&path);
    path
}

fn read_file(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn write_after(path: PathBuf, delay: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(delay);
        fs::write(path, CONTENT).unwrap();
    })
}

#[test]
fn incrementing_counter_reaches_five() {
    super::setup();

    let mut counter = -1;
    let value = Poller::new(1000, 10)
        .poll_until(
            || {
                counter += 1;
                counter
            },
            |n| *n >= 5,
        )
        .unwrap();

    assert_eq!(value, 5);
}

#[test]
fn always_none_strict_times_out_and_safe_returns_none() {
    super::setup();

    let poller = Poller::new(100, 10);

    assert_eq!(poller.poll(|| None::<String>), Err(Error::Timeout));
    assert_eq!(poller.poll_safe(|| None::<String>), None);
}

#[test]
fn expired_timeout_still_accepts_first_value() {
    super::setup();

    let outcome = Poller::new(-1, 50).run(|| 7, |n| *n != 0);

    assert!(*outcome.accepted());
    assert_eq!(outcome.into_result(), Ok(7));
    assert_eq!(Poller::new(0, 50).poll(|| 7), Ok(7));
    assert_eq!(Poller::new(-1, 50).poll(|| 7), Ok(7));
}

#[test]
fn strict_and_safe_agree_on_success() {
    super::setup();

    let poller = Poller::new(1000, 0);
    let producer = || {
        let mut counter = 0u32;
        move || {
            counter += 1;
            counter * 10
        }
    };

    let strict = poller.poll_until(producer(), |n| *n > 35).unwrap();
    let safe = poller.poll_safe_until(producer(), |n| *n > 35);

    assert_eq!(strict, 40);
    assert_eq!(strict, safe);
}

#[test]
fn strict_and_safe_diverge_on_timeout() {
    super::setup();

    let poller = Poller::new(50, 5);

    assert_eq!(poller.poll_until(|| 3, |n| *n > 3), Err(Error::Timeout));
    assert_eq!(poller.poll_safe_until(|| 3, |n| *n > 3), 3);
}

#[test]
fn safe_uses_configured_timeout() {
    super::setup();

    let poller = Poller::new(100, 10);

    let start = Instant::now();
    let value = poller.poll_safe(|| 0u8);

    assert_eq!(value, 0);
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn file_content_is_polled_once_written() {
    super::setup();

    let path = scratch_file("vanilla");
    let writer = write_after(path.clone(), Duration::from_millis(300));

    let content = Poller::new(2000, 50).poll(|| read_file(&path)).unwrap();

    assert_eq!(content.as_deref(), Some(CONTENT));

    writer.join().unwrap();
    fs::remove_file(&path).unwrap();
}

#[test]
fn file_content_is_checked_by_custom_predicate() {
    super::setup();

    let path = scratch_file("custom-check");
    let writer = write_after(path.clone(), Duration::from_millis(300));

    let content = Poller::new(2000, 50)
        .poll_until(
            || read_file(&path),
            |content| match content {
                Some(content) => content == CONTENT,
                None => false,
            },
        )
        .unwrap();

    assert_eq!(content.unwrap(), CONTENT);

    writer.join().unwrap();
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_times_out() {
    super::setup();

    let path = scratch_file("missing");
    let poller = Poller::new(200, 20);

    assert_eq!(poller.poll(|| read_file(&path)), Err(Error::Timeout));
    assert_eq!(poller.poll_safe(|| read_file(&path)), None);
}

#[test]
fn free_functions_use_default_poller() {
    super::setup();

    assert_eq!(crate::poll(|| 1u8), Ok(1));
    assert_eq!(crate::poll_until(|| 2u8, |n| *n == 2), Ok(2));
    assert_eq!(crate::poll_safe(|| Some('x')), Some('x'));
    assert_eq!(crate::poll_safe_until(|| "a", |s| s.len() == 1), "a");
}
