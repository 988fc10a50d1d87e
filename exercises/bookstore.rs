// You're managing a bookstore.
//
// Work through the steps; each one replaces a TODO below.
// 1. `Author` has a first and a last name. `Price` is either a dollar amount
//    or a label such as "Special Offer".
// 2. A `Book` has a title, authors, a price, and an edition.
// 3. The three editions are a discriminated variant: one `Edition` enum with
//    one struct per edition:
//      Paperback { pages: u32 }
//      Ebook { file_format: PDF | EPUB | MOBI, download_link: String }
//      Audiobook { duration: String, narrator: String }
// 4. The inventory maps ISBNs to books with a deterministic iteration order.
// 5. Predicates: `as_paperback`, `as_ebook` and `as_audiobook` on `Book`.
// 6. Each edition has a "format" of a different type (pages are a number,
//    file formats an enum, durations text). Express the mapping once, as a
//    trait with an associated `Format` type implemented by the three structs.
// 7. `format_label()` produces "224 pages", "EPUB" or "11 hours 45 minutes"
//    with one exhaustive match; no "no matching format" case can exist.

use std::collections::BTreeMap;
use std::fmt;

// TODO: steps 1-3, declare Author, Price, FileFormat, Paperback, Ebook,
// Audiobook, Edition and Book.

// TODO: step 6, declare the trait and implement it for the three editions.

// TODO: steps 5 and 7, the predicates and format_label() on Book.

type Inventory = BTreeMap<String, Book>;

fn main() {
    let inventory: Inventory = BTreeMap::from([
        // TODO: step 4, four books:
        //   "9780345391803" The Hitchhiker's Guide to the Galaxy, Douglas Adams,
        //                   $15.99, paperback with 224 pages
        //   "9780191509087" Pride and Prejudice, Jane Austen, "Special Offer",
        //                   EPUB at https://example.com/pride-and-prejudice.epub
        //   "9780261103870" The Lord of the Rings, J.R.R. Tolkien, $29.95,
        //                   11 hours 45 minutes narrated by Andy Serkis
        //   "9780441172719" Dune, Frank Herbert, $18.50, paperback with 658 pages
    ]);

    for (isbn, book) in &inventory {
        println!(
            "{isbn} {} by {} ({}) - {}",
            book.title,
            book.by_line(),
            book.format_label(),
            book.price
        );
    }

    let ebooks = inventory
        .values()
        .filter(|book| book.as_ebook().is_some())
        .count();
    println!("ebooks in stock: {ebooks}");

    let paperback_pages: u32 = inventory
        .values()
        .filter_map(Book::as_paperback)
        .map(|paperback| paperback.format())
        .sum();
    println!("paperback pages in stock: {paperback_pages}");

    if let Some(audiobook) = inventory["9780261103870"].as_audiobook() {
        println!("narrated by {}", audiobook.narrator);
    }
}
