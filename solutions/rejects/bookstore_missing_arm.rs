// Probe: every edition must be handled; dropping the audiobook arm is a type
// error, not a runtime "no matching format".
// This file must NOT compile.

enum Edition {
    Paperback { pages: u32 },
    Ebook { file_format: &'static str },
    Audiobook { duration: &'static str },
}

fn format_label(edition: &Edition) -> String {
    match edition {
        Edition::Paperback { pages } => format!("{pages} pages"),
        Edition::Ebook { file_format } => (*file_format).to_string(),
    }
}

fn main() {
    println!("{}", format_label(&Edition::Paperback { pages: 224 }));
}
