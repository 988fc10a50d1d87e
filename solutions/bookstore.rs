// Bookstore inventory with three editions, fully annotated.
//
// Reference solution for the `bookstore` exercise. The edition is a
// discriminated variant: the tag lives in the enum, not in a marker field,
// and the format mapping is an associated type checked at compile time.

use std::collections::BTreeMap;
use std::fmt;

struct Author {
    first_name: String,
    last_name: String,
}

impl Author {
    fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

// A price is either a dollar amount or a label such as "Special Offer".
enum Price {
    Usd(f64),
    Label(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Usd(amount) => write!(f, "${amount:.2}"),
            Price::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Pdf,
    Epub,
    Mobi,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileFormat::Pdf => "PDF",
            FileFormat::Epub => "EPUB",
            FileFormat::Mobi => "MOBI",
        })
    }
}

struct Paperback {
    pages: u32,
}

struct Ebook {
    file_format: FileFormat,
    download_link: String,
}

struct Audiobook {
    duration: String,
    narrator: String,
}

// Each edition states the type of its "format" field once; the association
// is checked by the compiler, not looked up at run time.
trait Formatted {
    type Format: fmt::Display;
    fn format(&self) -> Self::Format;
}

impl Formatted for Paperback {
    type Format = u32;
    fn format(&self) -> u32 {
        self.pages
    }
}

impl Formatted for Ebook {
    type Format = FileFormat;
    fn format(&self) -> FileFormat {
        self.file_format
    }
}

impl Formatted for Audiobook {
    type Format = String;
    fn format(&self) -> String {
        self.duration.clone()
    }
}

enum Edition {
    Paperback(Paperback),
    Ebook(Ebook),
    Audiobook(Audiobook),
}

struct Book {
    title: String,
    authors: Vec<Author>,
    price: Price,
    edition: Edition,
}

impl Book {
    fn as_paperback(&self) -> Option<&Paperback> {
        match &self.edition {
            Edition::Paperback(paperback) => Some(paperback),
            _ => None,
        }
    }

    fn as_ebook(&self) -> Option<&Ebook> {
        match &self.edition {
            Edition::Ebook(ebook) => Some(ebook),
            _ => None,
        }
    }

    fn as_audiobook(&self) -> Option<&Audiobook> {
        match &self.edition {
            Edition::Audiobook(audiobook) => Some(audiobook),
            _ => None,
        }
    }

    // The match is exhaustive, so the "no matching book format" failure of a
    // field-sniffing design simply cannot be expressed here.
    fn format_label(&self) -> String {
        match &self.edition {
            Edition::Paperback(paperback) => format!("{} pages", paperback.format()),
            Edition::Ebook(ebook) => ebook.format().to_string(),
            Edition::Audiobook(audiobook) => audiobook.format(),
        }
    }

    fn by_line(&self) -> String {
        self.authors
            .iter()
            .map(Author::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// BTreeMap keeps the inventory iteration order deterministic (sorted by ISBN).
type Inventory = BTreeMap<String, Book>;

fn main() {
    let inventory: Inventory = BTreeMap::from([
        (
            "9780345391803".to_string(),
            Book {
                title: "The Hitchhiker's Guide to the Galaxy".to_string(),
                authors: vec![Author::new("Douglas", "Adams")],
                price: Price::Usd(15.99),
                edition: Edition::Paperback(Paperback { pages: 224 }),
            },
        ),
        (
            "9780191509087".to_string(),
            Book {
                title: "Pride and Prejudice".to_string(),
                authors: vec![Author::new("Jane", "Austen")],
                price: Price::Label("Special Offer".to_string()),
                edition: Edition::Ebook(Ebook {
                    file_format: FileFormat::Epub,
                    download_link: "https://example.com/pride-and-prejudice.epub".to_string(),
                }),
            },
        ),
        (
            "9780261103870".to_string(),
            Book {
                title: "The Lord of the Rings".to_string(),
                authors: vec![Author::new("J.R.R.", "Tolkien")],
                price: Price::Usd(29.95),
                edition: Edition::Audiobook(Audiobook {
                    duration: "11 hours 45 minutes".to_string(),
                    narrator: "Andy Serkis".to_string(),
                }),
            },
        ),
        (
            "9780441172719".to_string(),
            Book {
                title: "Dune".to_string(),
                authors: vec![Author::new("Frank", "Herbert")],
                price: Price::Usd(18.50),
                edition: Edition::Paperback(Paperback { pages: 658 }),
            },
        ),
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
        .map(Formatted::format)
        .sum();
    println!("paperback pages in stock: {paperback_pages}");

    if let Some(audiobook) = inventory["9780261103870"].as_audiobook() {
        println!("narrated by {}", audiobook.narrator);
    }
}
