// A generic quiz system, fully annotated.
//
// Reference solution for the `quiz` exercise. One `Question` type is
// parameterized over its answer kind; the set of kinds is closed by a sealed
// trait, and recording an answer of the wrong kind does not compile
// (see solutions/rejects/quiz_answer_kind.rs).

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for bool {}
}

// The three answer kinds the quiz knows about: free text, numbers, booleans.
trait Answer: sealed::Sealed + PartialEq + fmt::Debug {}

impl Answer for String {}
impl Answer for i64 {}
impl Answer for bool {}

struct Question<A: Answer> {
    prompt: String,
    propositions: Vec<A>,
    answer: A,
}

impl<A: Answer> Question<A> {
    fn new(prompt: &str, propositions: Vec<A>, answer: A) -> Self {
        Self {
            prompt: prompt.to_string(),
            propositions,
            answer,
        }
    }

    fn check(&self, answer: &A) -> bool {
        self.answer == *answer
    }
}

// One quiz item: a question plus the answer given so far. The answer has the
// same type as the question's propositions, by construction.
struct Item<A: Answer> {
    question: Question<A>,
    given: Option<A>,
}

impl<A: Answer> Item<A> {
    fn new(question: Question<A>) -> Self {
        Self {
            question,
            given: None,
        }
    }

    fn answer(&mut self, answer: A) {
        self.given = Some(answer);
    }

    fn is_correct(&self) -> bool {
        self.given
            .as_ref()
            .is_some_and(|given| self.question.check(given))
    }
}

// Questions of different kinds live side by side behind one tag per kind.
enum Entry {
    Text(Item<String>),
    Number(Item<i64>),
    Flag(Item<bool>),
}

impl Entry {
    fn is_correct(&self) -> bool {
        match self {
            Entry::Text(item) => item.is_correct(),
            Entry::Number(item) => item.is_correct(),
            Entry::Flag(item) => item.is_correct(),
        }
    }

    fn prompt(&self) -> &str {
        match self {
            Entry::Text(item) => &item.question.prompt,
            Entry::Number(item) => &item.question.prompt,
            Entry::Flag(item) => &item.question.prompt,
        }
    }
}

struct Quiz {
    entries: Vec<Entry>,
}

impl Quiz {
    fn score(&self) -> String {
        let correct = self.entries.iter().filter(|entry| entry.is_correct()).count();
        format!("{} / {}", correct, self.entries.len())
    }
}

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
