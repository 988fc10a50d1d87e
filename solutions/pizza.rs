// Exactly-three-toppings pizzas, fully annotated.
//
// Reference solution for the `pizza` exercise. The pizza arity is an array
// length, so a fourth topping is a compile error
// (see solutions/rejects/pizza_fourth_topping.rs). Stock membership is a
// value property and stays a runtime check.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topping {
    Bacon,
    Cheese,
    Pepper,
    Mushrooms,
    Olives,
    Onions,
}

// An array, not a Vec: the customer picks exactly three toppings.
type Pizza = [Topping; 3];

fn toppings_of(pizza: &Pizza) -> impl Iterator<Item = Topping> + '_ {
    pizza.iter().copied()
}

#[derive(Debug, PartialEq, Eq)]
struct OutOfStock(Topping);

impl fmt::Display for OutOfStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "out of stock: {:?}", self.0)
    }
}

// A menu with `N` toppings in stock; the stock size is part of the type.
struct Menu<const N: usize> {
    stock: [Topping; N],
}

impl<const N: usize> Menu<N> {
    const fn new(stock: [Topping; N]) -> Self {
        Self { stock }
    }

    fn pizza(&self, toppings: Pizza) -> Result<Pizza, OutOfStock> {
        match toppings_of(&toppings).find(|topping| !self.stock.contains(topping)) {
            Some(missing) => Err(OutOfStock(missing)),
            None => Ok(toppings),
        }
    }
}

// The house has an infinite supply of cheese, onions and olives: the default
// stock for customers who do not pick a menu.
const HOUSE_STOCK: [Topping; 3] = [Topping::Cheese, Topping::Onions, Topping::Olives];

fn house_menu() -> Menu<3> {
    Menu::new(HOUSE_STOCK)
}

fn order<const N: usize>(label: &str, menu: &Menu<N>, toppings: Pizza) {
    match menu.pizza(toppings) {
        Ok(pizza) => println!("{label}: {pizza:?} ok"),
        Err(err) => println!("{label}: {err}"),
    }
}

fn main() {
    let in_stock = Menu::new([
        Topping::Bacon,
        Topping::Cheese,
        Topping::Olives,
        Topping::Onions,
    ]);

    order(
        "pizza 1",
        &in_stock,
        [Topping::Onions, Topping::Cheese, Topping::Olives],
    );
    order(
        "pizza 2",
        &in_stock,
        [Topping::Cheese, Topping::Olives, Topping::Bacon],
    );
    order(
        "pizza 3",
        &in_stock,
        [Topping::Bacon, Topping::Cheese, Topping::Mushrooms],
    );

    let house = house_menu();
    order("house 1", &house, [Topping::Cheese; 3]);
    order(
        "house 2",
        &house,
        [Topping::Onions, Topping::Cheese, Topping::Bacon],
    );
}
