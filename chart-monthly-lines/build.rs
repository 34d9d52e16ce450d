use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the daily temperature fixture to OUT_DIR for include_str.
    // An empty placeholder makes the app fetch the CSV at runtime instead.
    let src = Path::new("../fixtures/temperature_daily.csv");
    let dest = Path::new(&out_dir).join("temperature_daily.csv");
    if src.exists() {
        fs::copy(src, dest).unwrap();
    } else {
        fs::write(dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/temperature_daily.csv");
}
