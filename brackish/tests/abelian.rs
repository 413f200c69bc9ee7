use brackish::{
    AbelianBuilder, GeneratorSet, GeneratorSpec, IndexSet, NameIndexStandardizer, NameSpec,
    Parity, StructureError, StructureResult, Weight,
};
use num_bigint::BigInt;
use num_rational::BigRational;

fn abelian(ngens: usize) -> brackish::GradedStructure<BigRational> {
    AbelianBuilder::new().ngens(ngens).build().unwrap()
}

#[test]
fn defaults_give_one_generator_named_a() {
    let algebra = AbelianBuilder::new().build::<BigRational>().unwrap();
    assert_eq!(algebra.ngens(), 1);
    assert_eq!(algebra.generator_set().name(brackish::GeneratorId::new(0)), Some("a"));
    assert!(!algebra.is_super());
}

#[test]
fn default_weights_are_one_and_parity_absent() {
    for ngens in 1..=4 {
        let algebra = abelian(ngens);
        assert_eq!(algebra.ngens(), ngens);
        for id in algebra.generator_set().ids() {
            assert_eq!(algebra.weights().weight(id), Some(Weight::from_integer(1)));
        }
        assert!(algebra.parity().is_none());
    }
}

#[test]
fn brackets_vanish_for_all_pairs_and_derivative_orders() {
    let algebra = abelian(3);
    let gens = algebra.generators();
    for x in &gens {
        for y in &gens {
            for m in 0..4 {
                for n in 0..4 {
                    assert!(algebra.bracket(&x.t(m), &y.t(n)).is_zero());
                }
            }
        }
    }
}

#[test]
fn no_central_elements_and_empty_coefficient_table() {
    let with_parity = AbelianBuilder::new()
        .ngens(2)
        .parity(vec![Parity::Even, Parity::Odd])
        .build::<BigRational>()
        .unwrap();
    let with_weights = AbelianBuilder::new()
        .ngens(2)
        .weights(vec![Weight::new(1, 2), Weight::from_integer(3)])
        .build::<BigRational>()
        .unwrap();

    for algebra in [abelian(1), abelian(5), with_parity, with_weights] {
        assert!(algebra.central_elements().is_empty());
        assert!(algebra.structure_coefficients().is_empty());
    }
}

#[test]
fn display_lists_generators_in_order_over_the_ring() {
    assert_eq!(
        abelian(2).to_string(),
        "The Abelian Lie conformal algebra with generators (a0, a1) over Rational Field",
    );
    assert_eq!(
        abelian(1).to_string(),
        "The Abelian Lie conformal algebra with generators (a) over Rational Field",
    );

    let over_z = AbelianBuilder::new().ngens(2).build::<BigInt>().unwrap();
    assert_eq!(
        over_z.to_string(),
        "The Abelian Lie conformal algebra with generators (a0, a1) over Integer Ring",
    );
}

#[test]
fn default_naming_carries_display_labels() {
    let algebra = abelian(2);
    assert_eq!(
        algebra.generator_set().display_labels(),
        Some(&["a_{0}".to_owned(), "a_{1}".to_owned()][..]),
    );

    let named = AbelianBuilder::new()
        .names(vec!["x", "y"])
        .build::<BigRational>()
        .unwrap();
    assert!(named.generator_set().display_labels().is_none());
}

#[test]
fn identical_arguments_build_equal_independent_structures() {
    let build = || {
        AbelianBuilder::new()
            .ngens(3)
            .weights(vec![
                Weight::from_integer(1),
                Weight::new(3, 2),
                Weight::from_integer(2),
            ])
            .parity(vec![Parity::Even, Parity::Odd, Parity::Even])
            .build::<BigRational>()
            .unwrap()
    };
    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert_eq!(first.generator_set(), second.generator_set());
    assert_eq!(first.weights(), second.weights());
    assert_eq!(first.parity(), second.parity());
}

#[test]
fn inconsistent_names_and_index_set_propagate_unchanged() {
    let err = AbelianBuilder::new()
        .names(vec!["x", "y", "z"])
        .index_set(IndexSet::integral(2))
        .build::<BigRational>()
        .unwrap_err();
    assert!(matches!(
        err,
        StructureError::InconsistentGeneratorSpecification(_),
    ));
}

#[test]
fn non_positive_weights_are_rejected() {
    let err = AbelianBuilder::new()
        .ngens(2)
        .weights(vec![Weight::from_integer(0), Weight::from_integer(1)])
        .build::<BigRational>()
        .unwrap_err();
    assert!(matches!(err, StructureError::NonPositiveWeight { .. }));

    let err = AbelianBuilder::new()
        .ngens(2)
        .weights(vec![Weight::from_integer(1)])
        .build::<BigRational>()
        .unwrap_err();
    assert!(matches!(
        err,
        StructureError::WeightCountMismatch { expected: 2, got: 1 },
    ));
}

#[test]
fn parity_count_must_match_generators() {
    let err = AbelianBuilder::new()
        .ngens(3)
        .parity(vec![Parity::Odd])
        .build::<BigRational>()
        .unwrap_err();
    assert!(matches!(
        err,
        StructureError::ParityCountMismatch { expected: 3, got: 1 },
    ));
}

#[test]
fn parity_makes_the_structure_super() {
    let algebra = AbelianBuilder::new()
        .ngens(2)
        .parity(vec![Parity::Even, Parity::Odd])
        .build::<BigRational>()
        .unwrap();
    assert!(algebra.is_super());
    let parity = algebra.parity().unwrap();
    assert_eq!(parity.parity(brackish::GeneratorId::new(0)), Some(Parity::Even));
    assert_eq!(parity.parity(brackish::GeneratorId::new(1)), Some(Parity::Odd));
}

#[test]
fn builder_accepts_resolved_generator_specs() {
    let by_count = AbelianBuilder::from_spec(GeneratorSpec::ByCount(2))
        .build::<BigRational>()
        .unwrap();
    assert_eq!(by_count.ngens(), 2);

    let by_names = AbelianBuilder::from_spec(GeneratorSpec::ByNames(vec![
        "x".to_owned(),
        "y".to_owned(),
    ]))
    .build::<BigRational>()
    .unwrap();
    assert!(by_names.generator_by_name("y").is_some());

    let by_index_set =
        AbelianBuilder::from_spec(GeneratorSpec::ByIndexSet(IndexSet::from_entries(vec![
            "L", "G",
        ])))
        .build::<BigRational>()
        .unwrap();
    assert_eq!(by_index_set.generator_set().joined_names(), "L, G");
}

#[test]
fn standardizer_errors_surface_through_build_with() {
    struct RejectEverything;

    impl NameIndexStandardizer for RejectEverything {
        fn standardize(
            &self,
            _names: Option<NameSpec>,
            _index_set: Option<IndexSet>,
            _ngens: Option<usize>,
        ) -> StructureResult<GeneratorSet> {
            Err(StructureError::InconsistentGeneratorSpecification(
                "rejected by fake".into(),
            ))
        }
    }

    let err = AbelianBuilder::new()
        .ngens(2)
        .build_with::<BigRational, _>(&RejectEverything)
        .unwrap_err();
    assert!(matches!(
        err,
        StructureError::InconsistentGeneratorSpecification(_),
    ));
}
