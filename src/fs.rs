use std::fs;
use std::path::Path;

pub fn read_bytes(file_path: &Path) -> Result<Vec<u8>, std::io::Error> {
    fs::read(file_path)
}

pub fn read_text(file_path: &Path) -> Result<String, std::io::Error> {
    fs::read_to_string(file_path)
}

pub fn save_bytes(file_path: &Path, contents: &[u8]) -> Result<(), std::io::Error> {
    fs::write(file_path, contents)
}

pub fn save_text(file_path: &Path, contents_text: &str) -> Result<(), std::io::Error> {
    fs::write(file_path, contents_text)
}
