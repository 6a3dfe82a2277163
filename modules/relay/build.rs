use std::env;

fn main() {
  println!("cargo:rerun-if-changed=build.rs");
  if env::var_os("CARGO_FEATURE_IRAM").is_none() {
    return;
  }
  // The tick hook trampoline lives in `.iram1`; the atomics and handle helpers
  // it calls only fold into it when the crate is optimized.
  if env::var("OPT_LEVEL").is_ok_and(|level| level == "0") {
    println!(
      "cargo:warning=tickbridge-relay-rs: `iram` at opt-level 0 leaves tick hook callees in flash; set \
       [profile.dev.package.tickbridge-relay-rs] opt-level = \"s\""
    );
  }
}
