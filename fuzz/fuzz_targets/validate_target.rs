#![no_main]

use checkit::{validate, ValidationRequest};
use libfuzzer_sys::fuzz_target;

const KINDS: [&str; 7] = ["cpf", "cnpj", "cep", "email", "phone", "creditCard", "unknown"];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    if let Ok(text) = std::str::from_utf8(rest) {
        let kind = KINDS[usize::from(selector) % KINDS.len()];
        let _ = validate(&ValidationRequest::new(kind, text));
    }
});
