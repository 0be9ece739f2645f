use std::{env, process::Command};

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|stdout| parse_version(&stdout))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=HELLO_WORLD_RUSTC_VERSION={version}");
}

// "rustc 1.82.0 (f6e511eec 2024-10-15)" -> "1.82.0"
fn parse_version(stdout: &str) -> Option<String> {
    stdout.split_whitespace().nth(1).map(str::to_string)
}
