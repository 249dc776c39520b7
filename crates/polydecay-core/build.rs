// File: crates/polydecay-core/build.rs
// Summary: Links the Windows system libraries Skia's font backend needs when rendering charts.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
