#![allow(dead_code)]

use chrono::NaiveDate;
use wordgame_core::FixedClock;

/// Day 6 / 5 are valid.
pub fn wordle_clock() -> FixedClock {
    FixedClock(date(2021, 6, 25))
}

/// Day 17 / 16 are valid.
pub fn quordle_clock() -> FixedClock {
    FixedClock(date(2022, 2, 10))
}

/// Day 43 / 42 are valid.
pub fn octordle_clock() -> FixedClock {
    FixedClock(date(2022, 3, 8))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub const QUORDLE_ALL_SOLVED: &str = "Daily Quordle #17
5️⃣6️⃣
8️⃣7️⃣
quordle.com
🟩🟨⬜⬜🟨 ⬜⬜🟨⬜🟨
⬜🟨🟩⬜⬜ ⬜🟨⬜⬜⬜
⬜⬜⬜🟨⬜ ⬜⬜⬜⬜🟨
🟨⬜⬜🟩⬜ ⬜🟩🟨🟩🟨
🟩🟩🟩🟩🟩 ⬜⬜⬜🟩⬜
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩

⬜⬜⬜⬜🟨 ⬜⬜⬜⬜⬜
⬜🟩⬜⬜🟩 ⬜⬜⬜🟩⬜
⬜⬜⬜🟩⬜ ⬜⬜⬜⬜⬜
⬜⬜⬜🟨⬜ 🟩⬜⬜⬜⬜
⬜🟨⬜🟨⬜ ⬜⬜⬜⬜🟨
⬜⬜⬜🟨⬜ ⬜⬜⬜⬜🟩
⬜⬜🟨⬜⬜ 🟩🟩🟩🟩🟩
🟩🟩🟩🟩🟩 ⬛⬛⬛⬛⬛";

pub const QUORDLE_ONE_FAILED: &str = "Daily Quordle #17
6️⃣9️⃣
🟥8️⃣
quordle.com
⬜⬜⬜🟨⬜ ⬜⬜⬜⬜🟨
🟨🟨⬜⬜⬜ ⬜🟨⬜🟨⬜
⬜⬜🟨⬜⬜ ⬜🟩⬜⬜⬜
⬜⬜🟨⬜⬜ ⬜⬜⬜⬜🟩
🟨🟨🟩🟩🟨 ⬜⬜⬜🟨⬜
🟩🟩🟩🟩🟩 ⬜⬜⬜🟨⬜
⬛⬛⬛⬛⬛ ⬜⬜⬜⬜🟨
⬛⬛⬛⬛⬛ ⬜🟨⬜🟨⬜
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩

⬜⬜🟨⬜⬜ ⬜⬜⬜🟨⬜
⬜🟨⬜⬜🟨 ⬜🟨🟨🟨⬜
⬜⬜⬜⬜⬜ ⬜⬜⬜⬜⬜
⬜⬜⬜🟨⬜ ⬜🟩⬜⬜⬜
⬜⬜⬜🟨⬜ ⬜🟨⬜🟩⬜
⬜⬜⬜🟨⬜ 🟨⬜⬜🟩⬜
⬜⬜⬜⬜⬜ 🟩🟨⬜🟨⬜
⬜⬜⬜🟨⬜ 🟩🟩🟩🟩🟩
⬜⬜🟩⬜⬜ ⬛⬛⬛⬛⬛";

pub const QUORDLE_SECOND_FAILED: &str = "Daily Quordle #17
4️⃣🟥
5️⃣8️⃣
quordle.com
🟨⬜⬜🟩🟩 ⬜⬜⬜⬜🟨
⬜🟨⬜⬜🟨 🟩🟨⬜🟨🟩
🟩🟩⬜⬜⬜ ⬜🟨⬜⬜🟨
🟩🟩🟩🟩🟩 ⬜🟨⬜⬜🟨
⬛⬛⬛⬛⬛ ⬜⬜⬜⬜⬜
⬛⬛⬛⬛⬛ ⬜🟩🟨🟩⬜
⬛⬛⬛⬛⬛ ⬜🟨🟨⬜⬜
⬛⬛⬛⬛⬛ ⬜🟨🟨⬜⬜
⬛⬛⬛⬛⬛ 🟩🟩⬜🟩🟩

🟨⬜⬜⬜⬜ ⬜⬜⬜⬜🟨
⬜⬜⬜⬜⬜ ⬜🟩🟨🟨⬜
🟨⬜🟨⬜⬜ ⬜⬜⬜⬜⬜
🟨⬜🟩⬜⬜ ⬜⬜⬜⬜🟨
🟩🟩🟩🟩🟩 ⬜⬜⬜⬜⬜
⬛⬛⬛⬛⬛ ⬜🟨⬜🟨🟨
⬛⬛⬛⬛⬛ ⬜🟩⬜🟩🟩
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩";

pub const OCTORDLE_YESTERDAY: &str = "Daily Octordle #42
3️⃣4️⃣
🔟🕛
2️⃣6️⃣
1️⃣7️⃣
octordle.com
🟨⬜⬜⬜🟨 ⬜🟨⬜⬜⬜
⬜🟨⬜⬜🟨 ⬜⬜🟨⬜⬜
🟩🟩🟩🟩🟩 🟩⬜⬜⬜⬜
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩

⬜⬜⬜🟨⬜ 🟨⬜⬜⬜🟨
⬜⬜⬜🟨⬜ ⬜⬜⬜⬜🟨
⬜⬜⬜⬜🟨 ⬜🟨⬜🟨⬜
⬜⬜🟨⬜⬜ ⬜⬜⬜⬜🟩
⬜⬜⬜⬜⬜ ⬜⬜⬜⬜⬜
⬜⬜⬜⬜⬜ ⬜⬜⬜⬜⬜
⬜⬜⬜⬜⬜ ⬜⬜⬜🟨⬜
🟨🟨🟨⬜⬜ ⬜⬜⬜⬜⬜
🟩⬜🟩⬜⬜ 🟨⬜⬜⬜🟨
🟩🟩🟩🟩🟩 🟨⬜⬜⬜⬜
⬛⬛⬛⬛⬛ 🟨🟩🟩🟨🟩
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩

⬜⬜🟩🟩🟩 ⬜🟨⬜⬜⬜
🟩🟩🟩🟩🟩 ⬜🟨🟨⬜⬜
⬛⬛⬛⬛⬛ 🟩⬜🟨⬜⬜
⬛⬛⬛⬛⬛ 🟩⬜⬜🟩⬜
⬛⬛⬛⬛⬛ 🟩🟩🟨🟩⬜
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩

🟩🟩🟩🟩🟩 🟨🟨🟨⬜⬜
⬛⬛⬛⬛⬛ ⬜🟩🟨⬜⬜
⬛⬛⬛⬛⬛ ⬜⬜🟨🟩⬜
⬛⬛⬛⬛⬛ ⬜⬜⬜🟨⬜
⬛⬛⬛⬛⬛ ⬜⬜🟨🟨🟩
⬛⬛⬛⬛⬛ ⬜⬜⬜🟨🟨
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩";

pub const OCTORDLE_TODAY: &str = "Daily Octordle #43
5️⃣🕐
🟥🟥
9️⃣7️⃣
🔟🕚
octordle.com
⬜🟨🟨⬜🟨 ⬜⬜⬜⬜🟨
🟩⬜🟨🟨🟨 🟩⬜⬜⬜⬜
🟩🟨🟨🟨⬜ 🟩⬜⬜⬜⬜
🟩⬜🟩🟩🟩 🟩⬜⬜⬜⬜
🟩🟩🟩🟩🟩 🟩⬜⬜⬜⬜
⬛⬛⬛⬛⬛ 🟩⬜⬜🟨⬜
⬛⬛⬛⬛⬛ 🟩⬜⬜🟩⬜
⬛⬛⬛⬛⬛ ⬜🟨⬜⬜⬜
⬛⬛⬛⬛⬛ ⬜⬜🟨⬜⬜
⬛⬛⬛⬛⬛ ⬜🟨⬜⬜⬜
⬛⬛⬛⬛⬛ 🟨⬜⬜⬜⬜
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩⬜
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩

⬜🟩⬜🟨⬜ ⬜⬜🟩⬜⬜
⬜🟨⬜🟨⬜ ⬜🟨🟩⬜⬜
⬜⬜🟨⬜⬜ ⬜🟨⬜⬜⬜
⬜⬜⬜⬜🟨 ⬜⬜⬜🟨⬜
⬜⬜⬜⬜🟨 ⬜🟨⬜🟨⬜
⬜⬜🟩⬜⬜ ⬜⬜⬜🟨⬜
⬜⬜⬜⬜⬜ ⬜⬜⬜⬜⬜
⬜⬜⬜🟨⬜ ⬜⬜⬜⬜🟨
⬜⬜⬜🟨⬜ ⬜⬜⬜⬜🟨
⬜⬜⬜🟨⬜ 🟨⬜⬜⬜🟨
⬜⬜⬜⬜⬜ ⬜⬜⬜🟨⬜
⬜⬜🟨⬜⬜ ⬜🟨⬜⬜⬜
⬜⬜🟨⬜⬜ ⬜⬜⬜⬜🟩

⬜⬜⬜⬜⬜ ⬜⬜⬜⬜🟨
⬜⬜⬜⬜🟨 🟩⬜⬜⬜🟩
⬜⬜⬜🟨⬜ 🟩⬜⬜🟨⬜
⬜⬜🟨⬜⬜ 🟩🟩🟨⬜⬜
⬜🟨🟨⬜⬜ 🟩⬜🟨⬜⬜
⬜⬜🟨⬜🟨 🟩🟩⬜⬜🟩
⬜⬜⬜🟨🟨 🟩🟩🟩🟩🟩
🟨🟨🟨🟩🟩 ⬛⬛⬛⬛⬛
🟩🟩🟩🟩🟩 ⬛⬛⬛⬛⬛

⬜⬜🟨⬜⬜ ⬜⬜🟨⬜⬜
⬜⬜🟨⬜⬜ ⬜⬜🟨⬜🟨
⬜🟨⬜⬜⬜ ⬜🟨⬜🟨⬜
⬜⬜⬜🟨⬜ ⬜⬜🟨🟩⬜
⬜🟨⬜🟨⬜ ⬜⬜🟨🟩⬜
⬜⬜🟨⬜⬜ ⬜⬜⬜⬜🟨
⬜⬜⬜🟨⬜ ⬜⬜⬜🟨🟨
⬜🟩⬜🟩🟩 🟨🟨⬜⬜⬜
⬜⬜🟩🟩🟩 ⬜🟩🟨⬜⬜
🟩🟩🟩🟩🟩 🟨🟨🟨⬜⬜
⬛⬛⬛⬛⬛ 🟩🟩🟩🟩🟩";

/// Swap the day number in a multi-word submission's title.
pub fn replace_day(submission: &str, day: i64) -> String {
    let (title, rest) = submission.split_once('\n').unwrap();
    let (prefix, _) = title.split_once('#').unwrap();
    format!("{prefix}#{day}\n{rest}")
}

/// Swap the score lines of a multi-word submission for `scores`.
pub fn replace_scores(submission: &str, header_lines: usize, scores: &[&str]) -> String {
    let lines: Vec<&str> = submission.lines().collect();
    let mut out = vec![lines[0]];
    out.extend_from_slice(scores);
    out.extend_from_slice(&lines[header_lines..]);
    out.join("\n")
}
