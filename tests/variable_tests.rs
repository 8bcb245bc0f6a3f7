use mixspace::variable::{ChoiceVar, GridVar, QrandintVar, QuniformVar, RandintVar, UniformVar, Var};
use mixspace::{Error, Value};

#[test]
fn choice_one_hot_encoding() {
    let var = ChoiceVar::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
    assert_eq!(var.encoded_len(), 3);
    assert_eq!(var.bounds(), vec![(0.0, 1.0); 3]);

    assert_eq!(var.encode(&"b".into()).unwrap(), vec![0.0, 1.0, 0.0]);
    assert_eq!(var.decode(&[0.1, 0.9, 0.2]).unwrap(), Value::from("b"));
}

#[test]
fn choice_tie_prefers_lowest_index() {
    let var = ChoiceVar::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
    assert_eq!(var.decode(&[0.5, 0.5, 0.0]).unwrap(), Value::from("a"));
    // An all-equal window is a tie across every index.
    assert_eq!(var.decode(&[0.0, 0.0, 0.0]).unwrap(), Value::from("a"));
}

#[test]
fn choice_round_trip_every_item() {
    let var = ChoiceVar::new(vec!["x".into(), "y".into(), "z".into()]).unwrap();
    for item in var.items().to_vec() {
        let encoded = var.encode(&item).unwrap();
        assert_eq!(var.decode(&encoded).unwrap(), item);
    }
}

#[test]
fn choice_duplicate_items_first_match_wins() {
    let var = ChoiceVar::new(vec!["x".into(), "x".into(), "y".into()]).unwrap();
    assert_eq!(var.encode(&"x".into()).unwrap(), vec![1.0, 0.0, 0.0]);
    // Both duplicate positions decode to equal values.
    assert_eq!(var.decode(&[0.9, 0.1, 0.0]).unwrap(), var.decode(&[0.1, 0.9, 0.0]).unwrap());
}

#[test]
fn choice_single_item() {
    let var = ChoiceVar::new(vec!["only".into()]).unwrap();
    assert_eq!(var.encoded_len(), 1);
    assert_eq!(var.encode(&"only".into()).unwrap(), vec![1.0]);
    assert_eq!(var.decode(&[0.0]).unwrap(), Value::from("only"));
}

fn double(x: i64) -> i64 {
    x * 2
}

fn negate(x: i64) -> i64 {
    -x
}

#[test]
fn choice_opaque_items_round_trip_by_identity() {
    let ops = vec![
        Value::opaque(double as fn(i64) -> i64),
        Value::opaque(negate as fn(i64) -> i64),
    ];
    let var = ChoiceVar::new(ops.clone()).unwrap();

    let encoded = var.encode(&ops[1]).unwrap();
    assert_eq!(encoded, vec![0.0, 1.0]);

    let decoded = var.decode(&encoded).unwrap();
    assert_eq!(decoded, ops[1]);
    let op = decoded.downcast_ref::<fn(i64) -> i64>().unwrap();
    assert_eq!(op(21), -21);

    // A separately wrapped copy of the same function is a different item.
    assert!(matches!(
        var.encode(&Value::opaque(negate as fn(i64) -> i64)),
        Err(Error::UnknownValue)
    ));
}

#[test]
fn grid_orders_by_position_not_value() {
    let var = GridVar::new(vec!["good".into(), "better".into(), "best".into()]).unwrap();
    assert_eq!(var.encoded_len(), 1);

    let (low, high) = var.bounds()[0];
    assert!((low - -0.5).abs() < 1e-9 && (high - 2.5).abs() < 1e-9);

    assert_eq!(var.encode(&"better".into()).unwrap(), vec![1.0]);
    assert_eq!(var.decode(&[2.2]).unwrap(), Value::from("best"));
    assert_eq!(var.decode(&[-0.4]).unwrap(), Value::from("good"));
}

#[test]
fn grid_round_trip_every_value() {
    let values: Vec<Value> = [0.01, 0.1, 1.0, 10.0, 100.0].map(Value::from).to_vec();
    let var = GridVar::new(values.clone()).unwrap();
    for value in values {
        let encoded = var.encode(&value).unwrap();
        assert_eq!(var.decode(&encoded).unwrap(), value);
    }
    // Out-of-band window values clamp to the extreme positions.
    assert_eq!(var.decode(&[9.9]).unwrap(), Value::from(100.0));
}

#[test]
fn randint_bounds_are_half_step_padded() {
    let var = RandintVar::new(0, 6).unwrap();
    let (low, high) = var.bounds()[0];
    assert!((low - -0.5).abs() < 1e-9, "low ≈ -0.5, got {low}");
    assert!((high - 6.5).abs() < 1e-9, "high ≈ 6.5, got {high}");
    // One ulp inside the half-step ends, so boundary decodes stay in range.
    assert!(low > -0.5);
    assert!(high < 6.5);
}

#[test]
fn randint_rounds_and_clamps() {
    let var = RandintVar::new(0, 6).unwrap();
    assert_eq!(var.decode(&[3.4]).unwrap(), 3);
    assert_eq!(var.decode(&[3.6]).unwrap(), 4);
    assert_eq!(var.decode(&[-0.5]).unwrap(), 0);
    assert_eq!(var.decode(&[6.9]).unwrap(), 6);
}

#[test]
fn randint_round_trip_every_value() {
    let var = RandintVar::new(-3, 4).unwrap();
    for v in -3..=4 {
        assert_eq!(var.decode(&var.encode(v).unwrap()).unwrap(), v);
    }
    assert!(matches!(var.encode(5), Err(Error::OutOfDomain { .. })));
}

#[test]
fn qrandint_decodes_to_nearest_valid_step() {
    let var = QrandintVar::new(0, 12, 3).unwrap();
    assert_eq!(var.last_valid(), 12);
    assert_eq!(var.decode(&[5.0]).unwrap(), 6);

    let (low, high) = var.bounds()[0];
    let mut x = low;
    while x <= high {
        let v = var.decode(&[x]).unwrap();
        assert_eq!(v % 3, 0, "decoded {v} is off-step");
        assert!((0..=12).contains(&v), "decoded {v} out of range");
        x += 0.1;
    }
}

#[test]
fn qrandint_sequence_is_anchored_at_lower() {
    let var = QrandintVar::new(1, 10, 2).unwrap();
    assert_eq!(var.last_valid(), 9);
    for v in [1, 3, 5, 7, 9] {
        assert_eq!(var.decode(&var.encode(v).unwrap()).unwrap(), v);
    }
    // 4 is between valid steps 3 and 5.
    assert!(matches!(var.encode(4), Err(Error::OutOfDomain { .. })));
    // Exactly half-way between 1 and 3: ties round away from zero.
    assert_eq!(var.decode(&[2.0]).unwrap(), 3);
}

#[test]
fn qrandint_step_larger_than_range_collapses_to_lower() {
    let var = QrandintVar::new(5, 6, 10).unwrap();
    assert_eq!(var.last_valid(), 5);
    assert_eq!(var.decode(&[100.0]).unwrap(), 5);
    assert_eq!(var.decode(&[-100.0]).unwrap(), 5);
}

#[test]
fn uniform_bounds_are_exact_and_decode_is_identity() {
    let var = UniformVar::new(1.2, 3.4).unwrap();
    assert_eq!(var.bounds(), vec![(1.2, 3.4)]);
    assert_eq!(var.decode(&[1.2]).unwrap(), 1.2);
    assert_eq!(var.decode(&[2.345]).unwrap(), 2.345);
    assert_eq!(var.decode(&[3.4]).unwrap(), 3.4);

    assert_eq!(var.encode(3.4).unwrap(), vec![3.4]);
    assert!(matches!(var.encode(3.5), Err(Error::OutOfDomain { .. })));
}

#[test]
fn quniform_values_stay_on_the_anchored_sequence() {
    let var = QuniformVar::new(-11.1, 9.99, 0.22).unwrap();
    assert!(var.last_valid() <= 9.99);

    let (low, high) = var.bounds()[0];
    let mut x = low;
    while x <= high {
        let v = var.decode(&[x]).unwrap();
        assert!((-11.1..=9.99).contains(&v), "decoded {v} out of range");
        // Reconstructing k reproduces v bit-for-bit.
        let k = ((v - -11.1) / 0.22).round();
        assert!(k >= 0.0);
        assert_eq!(v, -11.1 + k * 0.22);
        x += 0.05;
    }
}

#[test]
fn quniform_round_trip_on_constructed_domain_values() {
    let var = QuniformVar::new(0.0, 9.99, 0.2).unwrap();
    for k in 0..=49 {
        let v = 0.0 + f64::from(k) * 0.2;
        let encoded = var.encode(v).unwrap();
        assert_eq!(var.decode(&encoded).unwrap(), v);
    }
    assert!(matches!(var.encode(0.3), Err(Error::OutOfDomain { .. })));
    assert!(matches!(var.encode(10.0), Err(Error::OutOfDomain { .. })));
}

#[test]
fn quniform_step_larger_than_range_collapses_to_lower() {
    let var = QuniformVar::new(0.0, 0.5, 0.7).unwrap();
    assert_eq!(var.last_valid(), 0.0);
    assert_eq!(var.decode(&[0.49]).unwrap(), 0.0);
}

#[test]
fn construction_is_validated_eagerly() {
    assert!(matches!(ChoiceVar::new(vec![]), Err(Error::EmptyChoices)));
    assert!(matches!(GridVar::new(vec![]), Err(Error::EmptyChoices)));
    assert!(matches!(
        RandintVar::new(3, 2),
        Err(Error::InvalidBounds { .. })
    ));
    assert!(matches!(
        QrandintVar::new(0, 10, 0),
        Err(Error::InvalidStep)
    ));
    assert!(matches!(
        UniformVar::new(2.0, 1.0),
        Err(Error::InvalidBounds { .. })
    ));
    assert!(matches!(
        UniformVar::new(f64::NAN, 1.0),
        Err(Error::InvalidBounds { .. })
    ));
    assert!(matches!(
        QuniformVar::new(0.0, 1.0, -0.1),
        Err(Error::InvalidStep)
    ));
    assert!(matches!(
        QuniformVar::new(0.0, 1.0, f64::NAN),
        Err(Error::InvalidStep)
    ));
}

#[test]
fn decode_rejects_wrong_width_windows() {
    let choice = ChoiceVar::new(vec!["a".into(), "b".into()]).unwrap();
    assert!(matches!(
        choice.decode(&[0.5]),
        Err(Error::DimensionMismatch {
            expected: 2,
            got: 1
        })
    ));

    let randint = RandintVar::new(0, 6).unwrap();
    assert!(matches!(
        randint.decode(&[1.0, 2.0]),
        Err(Error::DimensionMismatch {
            expected: 1,
            got: 2
        })
    ));
}

#[test]
fn var_dispatches_to_each_variant() {
    let vars: Vec<Var> = vec![
        ChoiceVar::new(vec!["a".into(), "b".into()]).unwrap().into(),
        GridVar::new(vec![10.0.into(), 20.0.into()]).unwrap().into(),
        RandintVar::new(0, 5).unwrap().into(),
        QrandintVar::new(0, 12, 3).unwrap().into(),
        UniformVar::new(-1.0, 1.0).unwrap().into(),
        QuniformVar::new(0.0, 1.0, 0.25).unwrap().into(),
    ];
    let values = [
        Value::from("b"),
        Value::from(20.0),
        Value::from(4),
        Value::from(9),
        Value::from(0.5),
        Value::from(0.75),
    ];

    for (var, value) in vars.iter().zip(&values) {
        let encoded = var.encode(value).unwrap();
        assert_eq!(encoded.len(), var.encoded_len());
        assert_eq!(var.bounds().len(), var.encoded_len());
        assert_eq!(&var.decode(&encoded).unwrap(), value);
    }
}

#[test]
fn var_encode_rejects_mismatched_value_variants() {
    let var = Var::from(RandintVar::new(0, 5).unwrap());
    assert!(matches!(
        var.encode(&Value::from(2.0)),
        Err(Error::UnknownValue)
    ));

    let var = Var::from(UniformVar::new(0.0, 1.0).unwrap());
    assert!(matches!(var.encode(&Value::from(1)), Err(Error::UnknownValue)));
}
