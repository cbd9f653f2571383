use anon_core::{AnonTask, CountrySelection, TaskSelection};
use anon_engine::TextAnonymizer;
use proptest::prelude::*;

const CARD: &str = "4273 9666 4581 5642";
const BTC: &str = "1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i";
const EMAIL: &str = "ana@example.com";
const IP: &str = "192.168.1.20";

fn token() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(CARD),
        Just(BTC),
        Just(EMAIL),
        Just(IP),
        Just("hola"),
        Just("datos"),
        Just("cliente:"),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..16).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn placeholders_are_fixed_points(doc in document()) {
        let mut anon =
            TextAnonymizer::new("en", CountrySelection::None, TaskSelection::All, None).unwrap();

        let first = anon.process(&doc);
        let second = anon.process(&first);
        prop_assert_eq!(&first, &second);

        for raw in [CARD, BTC, EMAIL, IP] {
            prop_assert!(!first.contains(raw), "{} survived in {}", raw, first);
        }
    }

    #[test]
    fn stats_count_documents_and_hits(filler in "[a-z]{1,10}", docs in 1usize..8) {
        let mut anon =
            TextAnonymizer::new("en", CountrySelection::None, AnonTask::CreditCard, None).unwrap();

        for _ in 0..docs {
            let out = anon.process(&format!("{} {}", filler, CARD));
            prop_assert_eq!(out, format!("{} <CREDIT_CARD>", filler));
        }

        prop_assert_eq!(anon.stats().calls(), docs);
        prop_assert_eq!(anon.stats().hits(AnonTask::CreditCard), docs);
    }
}
