// Product catalog and shopping basket, fully annotated.
//
// Reference solution for the `basics` exercise. Every rule the untyped
// version stated in comments is carried by a type here: categories and roles
// are enums, and a missing product is an error value, not a panic.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Fruit,
    Vegetable,
    Meat,
}

struct Product {
    reference: String,
    categories: Vec<Category>,
    price_usd: f64,
}

impl Product {
    fn new(reference: &str, categories: &[Category], price_usd: f64) -> Self {
        Self {
            reference: reference.to_string(),
            categories: categories.to_vec(),
            price_usd,
        }
    }
}

// The only role the store knows about. Adding a second role later means
// adding a variant, and the compiler will point at every match that must
// learn about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Customer,
}

struct User {
    name: String,
    role: Role,
    basket: HashMap<String, u32>,
}

#[derive(Debug, PartialEq, Eq)]
enum BasketError {
    UnknownProduct(String),
}

impl fmt::Display for BasketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasketError::UnknownProduct(reference) => {
                write!(f, "product {reference} not found in the catalog")
            }
        }
    }
}

fn total_price(user: &User, catalog: &[Product]) -> Result<f64, BasketError> {
    let mut total = 0.0;
    for (reference, quantity) in &user.basket {
        let product = catalog
            .iter()
            .find(|product| product.reference == *reference)
            .ok_or_else(|| BasketError::UnknownProduct(reference.clone()))?;
        total += product.price_usd * f64::from(*quantity);
    }
    Ok(total)
}

fn main() {
    let catalog = vec![
        Product::new("apple", &[Category::Fruit], 0.25),
        Product::new("tomato", &[Category::Fruit, Category::Vegetable], 0.15),
        Product::new("beef", &[Category::Meat], 3.50),
    ];

    let user = User {
        name: "Alice".to_string(),
        role: Role::Customer,
        basket: HashMap::from([("apple".to_string(), 6), ("tomato".to_string(), 2)]),
    };

    match total_price(&user, &catalog) {
        Ok(total) => println!("Total: {total:.2}"),
        Err(err) => println!("Basket rejected: {err}"),
    }
    println!("{} is a {:?}", user.name, user.role);

    let vegetables = catalog
        .iter()
        .filter(|product| product.categories.contains(&Category::Vegetable))
        .count();
    println!("vegetables in catalog: {vegetables}");
}
