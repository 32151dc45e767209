//! Browser smoke tests, run with `wasm-pack test --headless` or
//! `cargo test --target wasm32-unknown-unknown`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use portfolio::terminal::{evaluate, Evaluation};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn terminal_help_responds_in_browser() {
    let Evaluation::Respond { echo, lines } = evaluate("help") else {
        panic!("help should resolve");
    };
    assert_eq!(echo, "$ help");
    assert!(!lines.is_empty());
}

#[wasm_bindgen_test]
fn terminal_clear_and_empty_behave() {
    assert_eq!(evaluate("clear"), Evaluation::Clear);
    assert_eq!(evaluate("   "), Evaluation::Noop);
}
