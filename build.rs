//! Puts `memory.x` on the linker search path for the RP2040 target.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap_or_default();
    if !target.starts_with("thumbv6m") {
        return;
    }

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    File::create(out.join("memory.x"))
        .expect("creating memory.x in OUT_DIR")
        .write_all(include_bytes!("memory.x"))
        .expect("writing memory.x");
    println!("cargo:rustc-link-search={}", out.display());
}
