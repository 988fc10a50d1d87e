// Product catalog and shopping basket.
//
// Add the missing type declarations so this program compiles and prints the
// basket total. Encode the rules in types instead of comments:
//   - a product belongs to one or more of three categories: fruit, vegetable, meat;
//   - `customer` is the only role a user can have;
//   - looking up a product that is not in the catalog is an error value, not a panic.
//
// When you are done, `coach verify basics` reports every check passed.

use std::collections::HashMap;

// TODO: declare `Category` so that only fruit, vegetable and meat exist.

struct Product {
    reference: String,
    categories: Vec<Category>,
    price_usd: f64,
}

// TODO: declare `Role` so that `Customer` is the only possible value.

struct User {
    name: String,
    role: Role,
    basket: HashMap<String, u32>,
}

// TODO: declare `BasketError` with a variant naming the unknown reference,
// and implement `std::fmt::Display` for it.

fn total_price(user: &User, catalog: &[Product]) -> Result<f64, BasketError> {
    // TODO: sum price * quantity over the basket, failing on the first
    // reference that is missing from the catalog.
    todo!()
}

fn main() {
    let catalog = vec![
        Product {
            reference: "apple".to_string(),
            categories: vec![/* TODO: fruit */],
            price_usd: 0.25,
        },
        Product {
            reference: "tomato".to_string(),
            categories: vec![/* TODO: fruit and vegetable */],
            price_usd: 0.15,
        },
        Product {
            reference: "beef".to_string(),
            categories: vec![/* TODO: meat */],
            price_usd: 3.50,
        },
    ];

    let user = User {
        name: "Alice".to_string(),
        role: todo!("the one and only role"),
        basket: HashMap::from([("apple".to_string(), 6), ("tomato".to_string(), 2)]),
    };

    match total_price(&user, &catalog) {
        Ok(total) => println!("Total: {total:.2}"),
        Err(err) => println!("Basket rejected: {err}"),
    }
    println!("{} is a {:?}", user.name, user.role);

    let vegetables = catalog
        .iter()
        .filter(|product| /* TODO: keep the vegetables */ false)
        .count();
    println!("vegetables in catalog: {vegetables}");
}
