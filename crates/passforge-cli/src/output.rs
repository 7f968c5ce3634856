use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;

/// Write a single password with the flat-file header format.
pub fn save_password(path: &Path, password: &str) -> io::Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    fs::write(path, render_single(&timestamp.to_string(), password))
}

/// Write a numbered password list with the flat-file header format.
pub fn save_passwords(path: &Path, passwords: &[String]) -> io::Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    fs::write(path, render_list(&timestamp.to_string(), passwords))
}

fn render_single(timestamp: &str, password: &str) -> String {
    format!("Generated password ({timestamp}):\n{password}\n")
}

fn render_list(timestamp: &str, passwords: &[String]) -> String {
    let mut contents = format!("Generated passwords ({timestamp}):\n");
    contents.push_str(&"=".repeat(40));
    contents.push('\n');
    for (index, password) in passwords.iter().enumerate() {
        contents.push_str(&format!("{}. {password}\n", index + 1));
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::{render_list, render_single};

    #[test]
    fn single_password_file_format() {
        let contents = render_single("2025-01-02 03:04:05", "s3cret!");
        assert_eq!(
            contents,
            "Generated password (2025-01-02 03:04:05):\ns3cret!\n"
        );
    }

    #[test]
    fn password_list_is_numbered() {
        let passwords = vec!["one".to_string(), "two".to_string()];
        let contents = render_list("2025-01-02 03:04:05", &passwords);
        assert!(contents.starts_with("Generated passwords (2025-01-02 03:04:05):\n"));
        assert!(contents.contains("\n1. one\n"));
        assert!(contents.contains("\n2. two\n"));
    }
}
