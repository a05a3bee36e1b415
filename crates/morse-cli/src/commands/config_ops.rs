use std::path::Path;

use super::{load_settings_file, load_table_file};

pub fn table_export() {
    print!("{}", morse_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let (_, table) = die!(load_table_file(Path::new(file)), "Error in {file}: {}");
    println!("OK: {} codes", table.len());
}

pub fn settings_export() {
    print!("{}", morse_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let (_, s) = die!(load_settings_file(Path::new(file)), "Error in {file}: {}");
    println!(
        "OK: resolver.open_length={}, resolver.wildcard={:?}",
        s.resolver.open_length,
        s.resolver.wildcard()
    );
}
