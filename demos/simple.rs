//! Read a given line of a text file and count its lines

use text_file_reader::TextFileReader;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "<some text file>".to_owned());
    let reader = TextFileReader::new();

    // -1 if the file can't be read. The reason gets logged
    let line_count = reader.count_lines(&path);
    println!("{} has {} lines", path, line_count);

    // Read line 30
    match reader.read_line_by_number(&path, 30) {
        Some(line) => println!("line 30: {}", line),
        None => println!("there is no line 30"),
    }
}
