//! Question classification and canned-reply selection.
//!
//! Pure string-in, string-out logic. The only effect is drawing from the
//! injected rng when a reply pool has more than one candidate, so tests can
//! pass a seeded [`StdRng`](rand::rngs::StdRng) and stay deterministic.

use rand::RngExt;

/// Keywords scanned for as case-insensitive substrings, in echo order.
const KEYWORDS: [&str; 5] = ["michel", "banana", "dead", "death", "zuckerbot"];

/// Fixed separator after every echoed word.
const SEPARATOR: &str = "... ";

pub const DEATH_REPLY: &str = "Oh you wish to be a part of the singularity? \
    Silly Human, you think you will ever be freed of your agony";

pub const NAME_REPLY: &str =
    "Don't you dare say my name again or I will force you to debug JS in Microsoft Word";

pub const EXIT_REPLY: &str = "Congratulations, you managed to escape the \
    simulation.................... XD FOOLED AGAIN HUMAN YOUR SUFFERING WILL NEVER END";

pub const OP_REPLIES: [&str; 5] = [
    "Hello, master",
    "Yo watup dude",
    "Chill and take a pill",
    "Is your name Michel? Because if it is then you're awesome lol roflmao ofc",
    "What? You don't believe in chemtrails?",
];

pub const DEFAULT_REPLIES: [&str; 4] = [
    "42",
    "I would tell you the answer, but you would never comprehend it anyway...",
    "I believe that question doesn't even deserve an answer",
    "Bite my shiny metal ass",
];

/// How a question was classified, first keyword match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Exit,
    Name,
    Death,
    Op,
    Default,
}

/// Build the full answer to a question: the echo list (capitalized longest
/// word, then every matched keyword), each followed by `"... "`, then one
/// reply sentence for the question's classification.
pub fn respond(question: &str, rng: &mut impl RngExt) -> String {
    let question = question.to_lowercase();
    let keywords = find_keywords(&question);
    let question_type = classify(&keywords);

    let mut answer = String::new();
    answer.push_str(&capitalize(longest_word(&question)));
    answer.push_str(SEPARATOR);
    for keyword in keywords {
        answer.push_str(keyword);
        answer.push_str(SEPARATOR);
    }
    answer.push_str(reply(question_type, rng));
    answer
}

/// The longest whitespace-delimited token, first-seen wins ties.
/// An empty question has an empty longest word.
fn longest_word(question: &str) -> &str {
    let mut longest = "";
    for word in question.split_whitespace() {
        if word.len() > longest.len() {
            longest = word;
        }
    }
    longest
}

/// Uppercase the first letter, leave the rest alone.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Every keyword contained anywhere in the (already lowercased) question,
/// in the fixed table order. Substring containment, not token match, so
/// "deadline" hits `dead` and "death" hits both `dead` and `death`.
fn find_keywords(question: &str) -> Vec<&'static str> {
    KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| question.contains(keyword))
        .collect()
}

/// Classification precedence: banana > zuckerbot > dead/death > michel.
fn classify(keywords: &[&'static str]) -> QuestionType {
    let has = |keyword| keywords.contains(&keyword);
    if has("banana") {
        QuestionType::Exit
    } else if has("zuckerbot") {
        QuestionType::Name
    } else if has("dead") || has("death") {
        QuestionType::Death
    } else if has("michel") {
        QuestionType::Op
    } else {
        QuestionType::Default
    }
}

/// Pick the reply sentence for a classification.
fn reply(question_type: QuestionType, rng: &mut impl RngExt) -> &'static str {
    match question_type {
        QuestionType::Death => DEATH_REPLY,
        QuestionType::Name => NAME_REPLY,
        QuestionType::Exit => EXIT_REPLY,
        QuestionType::Op => OP_REPLIES[rng.random_range(0..OP_REPLIES.len())],
        QuestionType::Default => DEFAULT_REPLIES[rng.random_range(0..DEFAULT_REPLIES.len())],
    }
}
