// Stages the static site into `dist/` so the build output is self-contained.
// The wasm bundle itself is produced by `cargo run` (see src/main.rs), which
// invokes wasm-pack with `static/pkg` as its output directory.
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let dist = Path::new("dist");
    if dist.exists() {
        fs::remove_dir_all(dist).ok();
    }
    fs::create_dir_all(dist).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(err) = fs_extra::dir::copy(static_dir, dist, &options) {
            println!("cargo:warning=failed to stage static assets: {err}");
        }
    }
}
