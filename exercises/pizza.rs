// You're managing a pizza store that lets customers build their own pizza.
//
// A customer picks exactly three toppings among the six available options.
// The arity is part of the type: a fourth topping must be a compile error,
// not a runtime check (solutions/rejects/pizza_fourth_topping.rs holds the
// probe that proves it).

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

// TODO: declare `Pizza` as exactly three toppings.
type Pizza = /* TODO */;

// TODO: declare `toppings_of`, an iterator over a pizza's toppings.

// TODO: declare `OutOfStock` (which topping was missing) with a `Display`.

// TODO: declare `Menu<const N: usize>` holding `N` toppings in stock, with
// `new()` and `pizza()`; `pizza()` returns `Err(OutOfStock)` when a topping
// is not in stock.

// TODO: declare `house_menu()`: the house has an infinite supply of cheese,
// onions and olives, the default stock when no menu is picked.

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
