//! Stages the trunk output where `include_dir!` picks it up.

use std::error::Error;
use std::fs;
use std::path::Path;

const FRONTEND_DIST: &str = "../frontend/dist";
const STAGED_DIST: &str = "static/dist";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={FRONTEND_DIST}");

    let staged = Path::new(STAGED_DIST);
    if Path::new(FRONTEND_DIST).is_dir() {
        if staged.exists() {
            fs::remove_dir_all(staged)?;
        }
        fs::create_dir_all(staged)?;
        let options = fs_extra::dir::CopyOptions::new()
            .overwrite(true)
            .content_only(true);
        fs_extra::dir::copy(FRONTEND_DIST, staged, &options)?;
    } else {
        // Embedding an empty bundle still compiles; the host logs it at start.
        fs::create_dir_all(staged)?;
    }
    Ok(())
}
