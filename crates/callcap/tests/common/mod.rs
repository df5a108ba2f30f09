#![allow(dead_code)]

use callcap_logs::{CallRecord, Turn};
use chrono::NaiveDate;

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()
}

/// Every field captured and valid
pub fn complete_call(confirmed: bool, retry: bool) -> CallRecord {
    let mut turns = vec![
        Turn::agent("Good morning, may I have your name?"),
        Turn::user("My name is Ravi Kumar"),
        Turn::user("email is ravi@example.com"),
        Turn::user("phone 9876543210"),
        Turn::user("PAN ABCDE1234F"),
    ];
    if retry {
        turns.push(Turn::agent("Sorry, could you repeat that?"));
        turns.push(Turn::user("PAN ABCDE1234F"));
    }
    if confirmed {
        turns.push(Turn::agent("Please confirm, fan id: XYZ123"));
    } else {
        turns.push(Turn::agent("Noted, fan id: XYZ123"));
    }
    turns.push(Turn::user("Yes that's correct"));

    CallRecord::new().with_duration(120.0).with_turns(turns)
}

/// Short call that never captured a PAN
pub fn short_call_missing_pan(name_turn: &str, retry: bool) -> CallRecord {
    let mut turns = vec![
        Turn::user(name_turn),
        Turn::user("email is asha@example.in"),
        Turn::user("phone +91-9123456789"),
        Turn::agent("fan id: FAN-778"),
    ];
    if retry {
        turns.push(Turn::agent("I didn't catch your PAN"));
    }
    turns.push(Turn::user("ok bye"));

    CallRecord::new().with_duration(20.0).with_turns(turns)
}

/// 10 complete calls and 5 short, PAN-less calls, with a sprinkling of
/// retries, confirmations and one malformed name
pub fn mixed_batch() -> Vec<CallRecord> {
    let mut calls = Vec::new();
    for i in 0..10 {
        calls.push(complete_call(i < 9, i < 2));
    }
    calls.push(short_call_missing_pan("i am X", true));
    for _ in 0..4 {
        calls.push(short_call_missing_pan("my name is Asha", false));
    }
    calls
}
