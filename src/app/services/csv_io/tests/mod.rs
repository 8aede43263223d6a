//! Tests for CSV loading and writing


use std::io::Write;
use tempfile::NamedTempFile;

/// Write `content` to a temporary `.csv` file
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const SAMPLE_CSV: &str = "\
id,address,phase,notes
1,10 Oak St,1,corner lot
2,2 Oak St,1,
3,5 Elm St,1,\"quoted, with comma\"
";
