// A generic quiz system.
//
// A quiz is a series of questions. Each question has a prompt, a list of
// propositions and the expected answer. Questions can be free text, multiple
// choice or true/false, so answers are text, numbers or booleans, and the
// propositions always have the same type as the answer.
//
// 1. Close the set of answer kinds with a sealed trait `Answer`, implemented
//    for `String`, `i64` and `bool`.
// 2. Declare `Question<A: Answer>` (prompt, propositions, answer) with a
//    `check()` comparing a given answer to the expected one.
// 3. Declare `Item<A: Answer>` pairing a question with the answer given so
//    far. Recording an answer of the wrong kind must not compile
//    (solutions/rejects/quiz_answer_kind.rs holds the probe).
// 4. Declare `Entry` (one tag per answer kind) and `Quiz`, with `score()`
//    returning "correct / total".

use std::fmt;

// TODO: steps 1-4.

fn text(prompt: &str, propositions: &[&str], answer: &str) -> Item<String> {
    Item::new(Question::new(
        prompt,
        propositions.iter().map(|p| (*p).to_string()).collect(),
        answer.to_string(),
    ))
}

fn main() {
    let mut mutability = text(
        "Which keyword makes a binding mutable?",
        &["let", "mut", "static"],
        "mut",
    );
    mutability.answer("mut".to_string());

    let mut release = Item::new(Question::new(
        "In which year was Rust 1.0 released?",
        vec![2014, 2015, 2016],
        2015,
    ));
    println!(
        "propositions for {:?}: {:?}",
        release.question.prompt, release.question.propositions
    );
    release.answer(2015);

    let mut owning = text(
        "Which type owns its string data?",
        &["&str", "String", "char"],
        "String",
    );
    owning.answer("String".to_string());

    let mut aliasing = Item::new(Question::new(
        "A value can have two mutable references at the same time.",
        vec![true, false],
        false,
    ));
    aliasing.answer(false);

    let mut optionals = Item::new(Question::new(
        "`Option<T>` forces the absent case to be handled.",
        vec![true, false],
        true,
    ));
    optionals.answer(true);

    let mut enums = text(
        "Which keyword declares a new enumerated type?",
        &["struct", "enum", "union"],
        "enum",
    );
    enums.answer("enum".to_string());

    let quiz = Quiz {
        entries: vec![
            Entry::Text(mutability),
            Entry::Number(release),
            Entry::Text(owning),
            Entry::Flag(aliasing),
            Entry::Flag(optionals),
            Entry::Text(enums),
        ],
    };

    for entry in &quiz.entries {
        println!(
            "{} {}",
            if entry.is_correct() { "ok " } else { "ko " },
            entry.prompt()
        );
    }
    println!("Score: {}", quiz.score());
}
