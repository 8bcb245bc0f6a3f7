//! Property tests: any in-bounds vector decodes into the declared domain,
//! and re-encoding the decoded value round-trips.

use mixspace::variable::{ChoiceVar, QrandintVar, QuniformVar, RandintVar, UniformVar};
use mixspace::{Space, Value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn randint_decode_lands_in_domain(x in -0.499_f64..6.499) {
        let var = RandintVar::new(0, 6).unwrap();
        let v = var.decode(&[x]).unwrap();
        prop_assert!((0..=6).contains(&v));

        let encoded = var.encode(v).unwrap();
        prop_assert_eq!(var.decode(&encoded).unwrap(), v);
    }

    #[test]
    fn qrandint_decode_stays_on_step(x in -2.9_f64..24.4) {
        let var = QrandintVar::new(-2, 23, 5).unwrap();
        let v = var.decode(&[x]).unwrap();
        prop_assert!((-2..=23).contains(&v));
        prop_assert_eq!((v - -2) % 5, 0);

        let encoded = var.encode(v).unwrap();
        prop_assert_eq!(var.decode(&encoded).unwrap(), v);
    }

    #[test]
    fn quniform_decode_stays_on_step(x in -11.209_f64..9.909) {
        let var = QuniformVar::new(-11.1, 9.99, 0.22).unwrap();
        let v = var.decode(&[x]).unwrap();
        prop_assert!((-11.1..=9.99).contains(&v));

        let k = ((v - -11.1) / 0.22).round();
        prop_assert!(k >= 0.0);
        prop_assert_eq!(v, -11.1 + k * 0.22);

        let encoded = var.encode(v).unwrap();
        prop_assert_eq!(var.decode(&encoded).unwrap(), v);
    }

    #[test]
    fn choice_decode_returns_a_declared_item(window in prop::collection::vec(0.0_f64..1.0, 3)) {
        let var = ChoiceVar::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let v = var.decode(&window).unwrap();
        prop_assert!(var.items().contains(&v));
    }

    #[test]
    fn space_decode_then_encode_round_trips(
        c in prop::collection::vec(0.0_f64..1.0, 2),
        n in -0.499_f64..6.499,
        x in 0.0_f64..1.0,
    ) {
        let space = Space::new(vec![
            ChoiceVar::new(vec!["lo".into(), "hi".into()]).unwrap().into(),
            RandintVar::new(0, 6).unwrap().into(),
            UniformVar::new(0.0, 1.0).unwrap().into(),
        ]);

        let vector = [c[0], c[1], n, x];
        let decoded = space.decode(&vector).unwrap();
        prop_assert_eq!(decoded.len(), space.decoded_len());
        prop_assert!(matches!(decoded[1], Value::Int(_)));

        // Decoded tuples are fixed points: encode then decode changes nothing.
        let reencoded = space.encode(&decoded).unwrap();
        prop_assert_eq!(space.decode(&reencoded).unwrap(), decoded);
    }
}
