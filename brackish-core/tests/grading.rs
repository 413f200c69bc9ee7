use brackish_core::{
    DefaultStandardizer, NameIndexStandardizer, Parity, ParityAssignment, StructureError, Weight,
    WeightAssignment,
};

fn three_generators() -> brackish_core::GeneratorSet {
    DefaultStandardizer
        .standardize(None, None, Some(3))
        .unwrap()
}

#[test]
fn uniform_weights_default_to_one() {
    let gens = three_generators();
    let weights = WeightAssignment::uniform(gens.len());
    for id in gens.ids() {
        assert_eq!(weights.weight(id), Some(Weight::from_integer(1)));
    }
}

#[test]
fn explicit_weights_keep_order() {
    let gens = three_generators();
    let weights = WeightAssignment::from_weights(
        vec![
            Weight::new(1, 2),
            Weight::from_integer(1),
            Weight::from_integer(2),
        ],
        &gens,
    )
    .unwrap();
    let collected: Vec<_> = weights.iter().map(|(_, w)| w).collect();
    assert_eq!(
        collected,
        vec![Weight::new(1, 2), Weight::from_integer(1), Weight::from_integer(2)],
    );
}

#[test]
fn negative_weights_are_rejected_with_the_generator_name() {
    let gens = three_generators();
    let err = WeightAssignment::from_weights(
        vec![
            Weight::from_integer(1),
            Weight::from_integer(-1),
            Weight::from_integer(1),
        ],
        &gens,
    )
    .unwrap_err();
    match err {
        StructureError::NonPositiveWeight { generator, .. } => assert_eq!(generator, "a1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parity_bits_round_trip() {
    assert_eq!(Parity::from_bit(0).unwrap(), Parity::Even);
    assert_eq!(Parity::from_bit(1).unwrap(), Parity::Odd);
    assert_eq!(Parity::Odd.bit(), 1);
    assert!(Parity::Odd.is_odd());
    assert!(matches!(
        Parity::from_bit(2).unwrap_err(),
        StructureError::InvalidParityBit(2),
    ));
}

#[test]
fn parity_assignment_from_bits() {
    let gens = three_generators();
    let parity = ParityAssignment::from_bits(&[0, 1, 0], &gens).unwrap();
    let odd: Vec<_> = parity
        .iter()
        .filter(|(_, p)| p.is_odd())
        .map(|(id, _)| id.as_index())
        .collect();
    assert_eq!(odd, vec![1]);

    let err = ParityAssignment::from_bits(&[0, 1], &gens).unwrap_err();
    assert!(matches!(
        err,
        StructureError::ParityCountMismatch { expected: 3, got: 2 },
    ));
}
