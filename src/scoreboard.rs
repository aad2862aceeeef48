use crate::models::{Counter, InputBuffers, Sample};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// Upserts compare against the last sample only, so a date can repeat if the
// clock goes backwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    concentration: u64,
    difficulty: u64,
    inputs: InputBuffers,
    history: Vec<Sample>,
}

impl ScoreBoard {
    pub fn new(seed_date: impl Into<String>) -> Self {
        Self {
            concentration: 0,
            difficulty: 0,
            inputs: InputBuffers::default(),
            history: vec![Sample {
                date: seed_date.into(),
                concentration: 0,
                difficulty: 0,
            }],
        }
    }

    pub fn score(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Concentration => self.concentration,
            Counter::Difficulty => self.difficulty,
        }
    }

    pub fn input(&self, counter: Counter) -> &str {
        self.inputs.get(counter)
    }

    pub fn history(&self) -> &[Sample] {
        &self.history
    }

    pub fn increment(&mut self, counter: Counter, today: NaiveDate) {
        let score = self.score_mut(counter);
        *score = score.saturating_add(1);
        self.upsert_today(today);
    }

    // Upserts even when the score is already zero.
    pub fn decrement(&mut self, counter: Counter, today: NaiveDate) {
        let score = self.score_mut(counter);
        if *score > 0 {
            *score -= 1;
        }
        self.upsert_today(today);
    }

    pub fn edit_input(&mut self, counter: Counter, text: impl Into<String>) {
        *self.inputs.get_mut(counter) = text.into();
    }

    pub fn set_from_input(&mut self, counter: Counter, raw: &str, today: NaiveDate) -> bool {
        let Some(value) = parse_score(raw) else {
            return false;
        };

        *self.score_mut(counter) = value;
        self.inputs.get_mut(counter).clear();
        self.upsert_today(today);
        true
    }

    pub fn submit_input(&mut self, counter: Counter, today: NaiveDate) -> bool {
        let raw = self.inputs.get(counter).to_owned();
        self.set_from_input(counter, &raw, today)
    }

    fn score_mut(&mut self, counter: Counter) -> &mut u64 {
        match counter {
            Counter::Concentration => &mut self.concentration,
            Counter::Difficulty => &mut self.difficulty,
        }
    }

    fn upsert_today(&mut self, today: NaiveDate) {
        let sample = Sample {
            date: date_key(today),
            concentration: self.concentration,
            difficulty: self.difficulty,
        };

        let replaces_last = self
            .history
            .last()
            .is_some_and(|last| last.date == sample.date);

        if replaces_last {
            let end = self.history.len() - 1;
            self.history[end] = sample;
        } else {
            self.history.push(sample);
        }
    }
}

pub fn date_key(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

// Leading-integer parse: optional sign, digits, trailing text ignored.
pub fn parse_score(raw: &str) -> Option<u64> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: u64 = rest[..digits_len].parse().ok()?;
    if negative && value > 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn sample(date: &str, concentration: u64, difficulty: u64) -> Sample {
        Sample {
            date: date.to_string(),
            concentration,
            difficulty,
        }
    }

    #[test]
    fn date_key_has_no_padding() {
        assert_eq!(date_key(day(2, 7)), "2/7");
        assert_eq!(date_key(day(12, 31)), "12/31");
        assert_eq!(date_key(day(1, 1)), "1/1");
    }

    #[test]
    fn new_board_is_seeded_with_zero_sample() {
        let board = ScoreBoard::new("2/7");
        assert_eq!(board.score(Counter::Concentration), 0);
        assert_eq!(board.score(Counter::Difficulty), 0);
        assert_eq!(board.input(Counter::Concentration), "");
        assert_eq!(board.history(), &[sample("2/7", 0, 0)]);
    }

    #[test]
    fn same_day_increments_replace_last_sample() {
        let mut board = ScoreBoard::new("2/7");
        let today = day(2, 7);

        for _ in 0..3 {
            board.increment(Counter::Concentration, today);
        }
        board.increment(Counter::Difficulty, today);

        assert_eq!(board.score(Counter::Concentration), 3);
        assert_eq!(board.score(Counter::Difficulty), 1);
        assert_eq!(board.history(), &[sample("2/7", 3, 1)]);
    }

    #[test]
    fn new_day_appends_sample() {
        let mut board = ScoreBoard::new("2/7");
        board.increment(Counter::Concentration, day(2, 7));
        board.increment(Counter::Difficulty, day(2, 8));
        board.increment(Counter::Difficulty, day(2, 8));

        assert_eq!(
            board.history(),
            &[sample("2/7", 1, 0), sample("2/8", 1, 2)]
        );
    }

    #[test]
    fn regressed_date_only_compares_last_sample() {
        let mut board = ScoreBoard::new("2/7");
        board.increment(Counter::Concentration, day(2, 8));
        board.increment(Counter::Concentration, day(2, 7));

        let dates: Vec<&str> = board.history().iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, ["2/7", "2/8", "2/7"]);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut board = ScoreBoard::new("2/7");
        let today = day(2, 7);

        board.decrement(Counter::Difficulty, today);
        board.decrement(Counter::Difficulty, today);

        assert_eq!(board.score(Counter::Difficulty), 0);
        assert_eq!(board.history(), &[sample("2/7", 0, 0)]);
    }

    #[test]
    fn decrement_at_zero_on_new_day_appends_sample() {
        let mut board = ScoreBoard::new("2/7");
        board.decrement(Counter::Difficulty, day(2, 8));

        assert_eq!(board.score(Counter::Difficulty), 0);
        assert_eq!(
            board.history(),
            &[sample("2/7", 0, 0), sample("2/8", 0, 0)]
        );
    }

    #[test]
    fn decrement_lowers_positive_score() {
        let mut board = ScoreBoard::new("2/7");
        let today = day(2, 7);
        board.increment(Counter::Concentration, today);
        board.increment(Counter::Concentration, today);
        board.decrement(Counter::Concentration, today);

        assert_eq!(board.score(Counter::Concentration), 1);
        assert_eq!(board.history(), &[sample("2/7", 1, 0)]);
    }

    #[test]
    fn counters_never_go_negative() {
        let mut board = ScoreBoard::new("2/7");
        let today = day(2, 7);
        // Deterministic mix of operations, weighted towards decrements.
        let mut seed = 0x2545_f491_u32;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let counter = Counter::ALL[(seed & 1) as usize];
            if seed % 3 == 0 {
                board.increment(counter, today);
            } else {
                board.decrement(counter, today);
            }
            let last = board.history().last().unwrap();
            assert_eq!(last.concentration, board.score(Counter::Concentration));
            assert_eq!(last.difficulty, board.score(Counter::Difficulty));
        }
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn set_from_input_applies_and_clears_buffer() {
        let mut board = ScoreBoard::new("2/7");
        board.edit_input(Counter::Concentration, "5");

        assert!(board.set_from_input(Counter::Concentration, "5", day(2, 7)));

        assert_eq!(board.score(Counter::Concentration), 5);
        assert_eq!(board.input(Counter::Concentration), "");
        assert_eq!(board.history(), &[sample("2/7", 5, 0)]);
    }

    #[test]
    fn set_from_input_on_new_day_appends_sample() {
        let mut board = ScoreBoard::new("2/7");
        board.increment(Counter::Difficulty, day(2, 7));

        assert!(board.set_from_input(Counter::Concentration, "6", day(2, 8)));
        assert!(board.set_from_input(Counter::Concentration, "8", day(2, 8)));

        assert_eq!(
            board.history(),
            &[sample("2/7", 0, 1), sample("2/8", 8, 1)]
        );
    }

    #[test]
    fn set_from_input_keeps_other_counter() {
        let mut board = ScoreBoard::new("2/7");
        let today = day(2, 7);
        board.increment(Counter::Concentration, today);
        board.increment(Counter::Concentration, today);

        assert!(board.set_from_input(Counter::Difficulty, "4", today));
        assert_eq!(board.history(), &[sample("2/7", 2, 4)]);
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut board = ScoreBoard::new("2/7");
        board.increment(Counter::Difficulty, day(2, 7));
        board.edit_input(Counter::Difficulty, "-2");
        let before = board.clone();

        for raw in ["-2", "abc", "", "   ", "-", "99999999999999999999999"] {
            assert!(!board.set_from_input(Counter::Difficulty, raw, day(2, 8)));
        }

        assert_eq!(board, before);
        assert_eq!(board.input(Counter::Difficulty), "-2");
    }

    #[test]
    fn submit_input_uses_buffer() {
        let mut board = ScoreBoard::new("2/7");
        board.edit_input(Counter::Difficulty, " 12 ");

        assert!(board.submit_input(Counter::Difficulty, day(2, 7)));
        assert_eq!(board.score(Counter::Difficulty), 12);
        assert_eq!(board.input(Counter::Difficulty), "");

        board.edit_input(Counter::Difficulty, "x");
        assert!(!board.submit_input(Counter::Difficulty, day(2, 7)));
        assert_eq!(board.score(Counter::Difficulty), 12);
        assert_eq!(board.input(Counter::Difficulty), "x");
    }

    #[test]
    fn edit_input_does_not_touch_history() {
        let mut board = ScoreBoard::new("2/7");
        board.edit_input(Counter::Concentration, "3");
        assert_eq!(board.history(), &[sample("2/7", 0, 0)]);
        assert_eq!(board.score(Counter::Concentration), 0);
    }

    #[test]
    fn parse_score_follows_leading_integer_rules() {
        assert_eq!(parse_score("5"), Some(5));
        assert_eq!(parse_score("  42"), Some(42));
        assert_eq!(parse_score("+8"), Some(8));
        assert_eq!(parse_score("7abc"), Some(7));
        assert_eq!(parse_score("3.9"), Some(3));
        assert_eq!(parse_score("-0"), Some(0));
        assert_eq!(parse_score("007"), Some(7));
        assert_eq!(parse_score("-2"), None);
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("+"), None);
        assert_eq!(parse_score("1e3"), Some(1));
    }

    #[test]
    fn board_serializes_as_snapshot() {
        let mut board = ScoreBoard::new("2/7");
        board.increment(Counter::Concentration, day(2, 7));
        board.edit_input(Counter::Difficulty, "9");

        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "concentration": 1,
                "difficulty": 0,
                "inputs": { "concentration": "", "difficulty": "9" },
                "history": [{ "date": "2/7", "concentration": 1, "difficulty": 0 }]
            })
        );
    }
}
