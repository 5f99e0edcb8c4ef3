//! Print a text file line by line, then split it by commas

use text_file_reader::TextFileReader;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "<some text file>".to_owned());
    let reader = TextFileReader::new();

    // Every line is printed while iterating
    let lines = reader.stream_lines(&path).count();
    println!("-- {} lines", lines);

    let fields = reader.read_with_delimiter(&path, r"\s*,\s*");
    println!("-- {} fields: {:?}", fields.len(), fields);
}
