//! Property-based tests using `proptest`.
//!
//! Validators never panic on arbitrary input, generated values always
//! validate, and validation is a pure function of its input.

use checkit::engine::generator::{
    generate_card_number_with, generate_cep_with, generate_cnpj_with, generate_cpf_with,
    generate_email_with, generate_phone_with,
};
use checkit::engine::BRANDS;
use checkit::{
    validate, validate_cep, validate_cnpj, validate_cpf, validate_credit_card, validate_email,
    validate_phone, CreditCardOptions, DocumentFormat, DocumentOptions, EmailOptions, PhoneOptions,
    ValidationRequest,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------- Never-panic properties ----------

proptest! {
    #[test]
    fn cpf_never_panics(s in "\\PC*") {
        let _ = validate_cpf(&s, &DocumentOptions::default());
    }

    #[test]
    fn cnpj_never_panics(s in "\\PC*") {
        let _ = validate_cnpj(&s, &DocumentOptions::default());
    }

    #[test]
    fn cep_never_panics(s in "\\PC*") {
        let _ = validate_cep(&s, &DocumentOptions::default());
    }

    #[test]
    fn phone_never_panics(s in "\\PC*") {
        let _ = validate_phone(&s, &PhoneOptions::default());
    }

    #[test]
    fn email_never_panics(s in "\\PC*") {
        let _ = validate_email(&s, &EmailOptions::default());
    }

    #[test]
    fn credit_card_never_panics(s in "[0-9 -]{0,40}") {
        let _ = validate_credit_card(&s, &CreditCardOptions::default());
    }

    #[test]
    fn dispatcher_never_panics(kind in "\\PC{0,12}", value in "\\PC{0,64}") {
        let _ = validate(&ValidationRequest::new(kind, value));
    }
}

// ---------- Round-trip: valid CPFs must validate ----------

/// Valid CPF string (digits only, 11 chars) built from nine random digits.
fn valid_cpf_strategy() -> impl Strategy<Value = String> {
    prop::array::uniform9(0u8..10u8).prop_map(|digits| {
        let mut d: Vec<u8> = digits.to_vec();

        for weight_start in [10u32, 11] {
            let sum: u32 = d
                .iter()
                .enumerate()
                .map(|(i, &v)| u32::from(v) * (weight_start - i as u32))
                .sum();
            let r = sum % 11;
            d.push(if r < 2 { 0 } else { (11 - r) as u8 });
        }

        d.iter().map(|v| char::from(b'0' + v)).collect::<String>()
    }).prop_filter("reject all-same-digit CPFs", |cpf| {
        let bytes = cpf.as_bytes();
        !bytes.iter().all(|&b| b == bytes[0])
    })
}

proptest! {
    #[test]
    fn valid_cpf_roundtrip(cpf in valid_cpf_strategy()) {
        let result = validate_cpf(&cpf, &DocumentOptions::default());
        prop_assert!(result.is_valid, "CPF should validate: {}", cpf);
    }

    #[test]
    fn repeated_digit_cpf_rejected(d in 0u8..10u8) {
        let cpf = char::from(b'0' + d).to_string().repeat(11);
        prop_assert!(!validate_cpf(&cpf, &DocumentOptions::default()).is_valid);
    }
}

// ---------- Round-trip: generators against validators ----------

proptest! {
    #[test]
    fn generated_documents_validate(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let opts = DocumentOptions::default();

        let cpf = generate_cpf_with(&mut rng);
        prop_assert!(validate_cpf(&cpf, &opts).is_valid, "{}", cpf);

        let cnpj = generate_cnpj_with(&mut rng);
        prop_assert!(validate_cnpj(&cnpj, &opts).is_valid, "{}", cnpj);

        let cep = generate_cep_with(&mut rng);
        prop_assert!(validate_cep(&cep, &opts).is_valid, "{}", cep);

        let phone = generate_phone_with(&mut rng);
        prop_assert!(validate_phone(&phone, &PhoneOptions::default()).is_valid, "{}", phone);

        let email = generate_email_with(&mut rng);
        prop_assert!(validate_email(&email, &EmailOptions::default()).is_valid, "{}", email);
    }

    #[test]
    fn generated_cards_validate_with_brand(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for brand in &BRANDS {
            for &length in brand.lengths {
                let number = generate_card_number_with(&mut rng, brand, length);
                prop_assert_eq!(number.len(), length);
                let result = validate_credit_card(&number, &CreditCardOptions::default());
                prop_assert!(result.is_valid, "{} {}", brand.name, number);
                prop_assert_eq!(
                    result.message,
                    Some(format!("Cartão {} válido", brand.name))
                );
            }
        }
    }
}

// ---------- Idempotence ----------

proptest! {
    #[test]
    fn validation_is_pure(s in "[0-9./ -]{0,20}") {
        let opts = DocumentOptions::default();
        prop_assert_eq!(validate_cpf(&s, &opts), validate_cpf(&s, &opts));
        prop_assert_eq!(validate_cnpj(&s, &opts), validate_cnpj(&s, &opts));
        let card = CreditCardOptions::default();
        prop_assert_eq!(validate_credit_card(&s, &card), validate_credit_card(&s, &card));
    }

    #[test]
    fn formatted_value_is_canonical(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let opts = DocumentOptions::default();

        let cpf = generate_cpf_with(&mut rng);
        let formatted = validate_cpf(&cpf, &opts).value.unwrap();
        prop_assert_eq!(validate_cpf(&formatted, &opts).value, Some(formatted.clone()));

        let cnpj = generate_cnpj_with(&mut rng);
        let formatted = validate_cnpj(&cnpj, &opts).value.unwrap();
        prop_assert_eq!(validate_cnpj(&formatted, &opts).value, Some(formatted.clone()));

        let raw = DocumentOptions { format: DocumentFormat::Raw, ..DocumentOptions::default() };
        let digits = validate_cep(&generate_cep_with(&mut rng), &raw).value.unwrap();
        prop_assert_eq!(digits.len(), 8);
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

// ---------- Length boundaries ----------

#[test]
fn length_boundaries_use_specific_messages() {
    let opts = DocumentOptions::default();
    let cases: [(fn(&str, &DocumentOptions) -> checkit::ValidationResult, &str, &str); 3] = [
        (validate_cpf, "1234567890", "CPF deve ter 11 dígitos"),
        (validate_cnpj, "1122233300018", "CNPJ deve ter 14 dígitos"),
        (validate_cep, "0131010", "CEP deve ter 8 dígitos"),
    ];
    for (validator, short, message) in cases {
        let long = format!("{short}99");
        for input in [short.to_string(), long] {
            let result = validator(&input, &opts);
            assert!(!result.is_valid);
            assert_eq!(result.message.as_deref(), Some(message), "{input}");
        }
    }

    for phone in ["119876543", "119876543210"] {
        let result = validate_phone(phone, &PhoneOptions::default());
        assert_eq!(
            result.message.as_deref(),
            Some("Telefone deve ter 10 ou 11 dígitos")
        );
    }
}

#[test]
fn empty_input_respects_allow_empty() {
    let strict = DocumentOptions::default();
    let lenient = DocumentOptions {
        allow_empty: true,
        ..DocumentOptions::default()
    };
    assert!(!validate_cpf("", &strict).is_valid);
    assert!(validate_cpf("", &lenient).is_valid);
    assert!(validate_cnpj("", &lenient).is_valid);
    assert!(validate_cep("", &lenient).is_valid);
    assert!(validate_phone("", &PhoneOptions { allow_empty: true, ..PhoneOptions::default() }).is_valid);
    assert!(validate_email("", &EmailOptions { allow_empty: true, ..EmailOptions::default() }).is_valid);
    assert!(validate_credit_card(
        "",
        &CreditCardOptions { allow_empty: true, ..CreditCardOptions::default() }
    )
    .is_valid);
}
