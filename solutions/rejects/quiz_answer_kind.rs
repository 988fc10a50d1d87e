// Probe: a free-text answer cannot be recorded on a numeric question.
// This file must NOT compile.

struct Question<A: PartialEq> {
    answer: A,
}

struct Item<A: PartialEq> {
    question: Question<A>,
    given: Option<A>,
}

impl<A: PartialEq> Item<A> {
    fn answer(&mut self, answer: A) {
        self.given = Some(answer);
    }

    fn is_correct(&self) -> bool {
        self.given
            .as_ref()
            .is_some_and(|given| *given == self.question.answer)
    }
}

fn main() {
    let mut release = Item {
        question: Question { answer: 2015_i64 },
        given: None,
    };
    release.answer("2015".to_string());
    println!("{}", release.is_correct());
}
