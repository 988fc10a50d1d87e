// Probe: a pizza holds exactly three toppings; a fourth must not type-check.
// This file must NOT compile.

#[derive(Debug, Clone, Copy)]
enum Topping {
    Bacon,
    Cheese,
    Olives,
    Onions,
}

type Pizza = [Topping; 3];

fn main() {
    let _three: Pizza = [Topping::Bacon, Topping::Cheese, Topping::Olives];
    let _four: Pizza = [
        Topping::Bacon,
        Topping::Cheese,
        Topping::Olives,
        Topping::Onions,
    ];
}
