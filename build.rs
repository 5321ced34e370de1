use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "gallery.config.json";

// Ships the sample gallery config beside the binary so `cargo run` finds it.
fn main() {
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        return;
    };
    let source = manifest_dir.join(CONFIG_FILE);
    if !source.is_file() {
        return;
    }

    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let target_dir = env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join("target"));
    let binary_dir = target_dir.join(profile);

    if let Err(e) = install_config(&source, &binary_dir) {
        println!(
            "cargo:warning=could not install {} into {}: {}",
            CONFIG_FILE,
            binary_dir.display(),
            e
        );
    }
}

fn install_config(source: &Path, binary_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(binary_dir)?;
    fs::copy(source, binary_dir.join(CONFIG_FILE))?;
    Ok(())
}
