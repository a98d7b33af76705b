//! Integration tests for the processor module
//!
//! Tests the complete processing pipeline against temporary bulletin
//! directories laid out the way the fetcher leaves them.


use crate::parser::tests::{analysis_info, bulletin_xml, forecast_info, warning_area};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FIRST_FILE: &str = "20220917185000_0_VPTW60_010000.xml";
pub const SECOND_FILE: &str = "20220917214500_0_VPTW60_010000.xml";

/// A bulletin with one analysis block and one forecast block
pub fn sample_bulletin() -> String {
    bulletin_xml(&[
        analysis_info(
            "+30.9+130.5/",
            Some((45, 65)),
            &[
                warning_area("暴風域", Some(25), &[("", "110")]),
                warning_area("強風域", Some(15), &[("南東", "650"), ("北西", "440")]),
            ],
        ),
        forecast_info("2022-09-19T03:00:00+09:00", "+35.0+135.0/", &[("", "90")]),
    ])
}

/// Create `<temp>/xml/` holding the given (file name, content) pairs
pub fn create_input_dir(temp_dir: &TempDir, files: &[(&str, String)]) -> PathBuf {
    let input_dir = temp_dir.path().join("xml");
    fs::create_dir_all(&input_dir).unwrap();
    for (name, content) in files {
        fs::write(input_dir.join(name), content).unwrap();
    }
    input_dir
}
