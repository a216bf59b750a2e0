//! Behavioral properties of the INTERSECTS predicate under both strategies.

use eventfilter_spatial::{
    Argument, IntersectionStrategy, IntersectsConfig, IntersectsError, SpatialError,
    SpatialIntersects,
};
use std::sync::Arc;
use std::thread;

const SQUARE: &str = "POLYGON((0 0,0 2,2 2,2 0,0 0))";

const SAMPLES: &[&str] = &[
    "POINT(1 1)",
    "POINT(10 10)",
    "POINT(2 2)",
    "LINESTRING(-1 -1, 3 3)",
    "LINESTRING(5 0, 5 10)",
    "POLYGON((0 0,0 2,2 2,2 0,0 0))",
    "POLYGON((0 0,4 0,0 4,0 0))",
    "POLYGON((4 4,4 2,2 4,4 4))",
    "MULTIPOINT((9 9),(1.5 1.5))",
    "MULTIPOLYGON(((20 20,21 20,21 21,20 20)),((1 1,1 3,3 3,1 1)))",
    "GEOMETRYCOLLECTION(POINT(7 7),LINESTRING(6 0,6 1))",
];

fn predicate(strategy: IntersectionStrategy) -> SpatialIntersects {
    SpatialIntersects::new(&IntersectsConfig::new(strategy))
}

fn strategies() -> [IntersectionStrategy; 2] {
    [IntersectionStrategy::BoundingBox, IntersectionStrategy::Exact]
}

#[test]
fn example_scenarios() {
    for strategy in strategies() {
        let p = predicate(strategy);
        assert_eq!(p.evaluate("POINT(1 1)", SQUARE), Ok(true));
        assert_eq!(p.evaluate("POINT(10 10)", SQUARE), Ok(false));

        let err = p.evaluate("not a geometry", "POINT(1 1)").unwrap_err();
        assert!(matches!(
            err,
            IntersectsError::GeometryParse {
                argument: Argument::First,
                source: SpatialError::WktParse(_),
            }
        ));
        assert_eq!(err.argument().index(), 1);
    }
}

#[test]
fn result_is_symmetric() {
    for strategy in strategies() {
        let p = predicate(strategy);
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(
                    p.evaluate(a, b).unwrap(),
                    p.evaluate(b, a).unwrap(),
                    "{} / {} under {}",
                    a,
                    b,
                    strategy
                );
            }
        }
    }
}

#[test]
fn exact_implies_bounding_box() {
    let bbox = predicate(IntersectionStrategy::BoundingBox);
    let exact = predicate(IntersectionStrategy::Exact);
    for a in SAMPLES {
        for b in SAMPLES {
            if exact.evaluate(a, b).unwrap() {
                assert!(bbox.evaluate(a, b).unwrap(), "{} / {}", a, b);
            }
        }
    }
}

#[test]
fn strategies_diverge_on_overlapping_envelopes() {
    let lower = "POLYGON((0 0,4 0,0 4,0 0))";
    let upper = "POLYGON((4 4,4 2,2 4,4 4))";
    assert_eq!(
        predicate(IntersectionStrategy::BoundingBox).evaluate(lower, upper),
        Ok(true)
    );
    assert_eq!(
        predicate(IntersectionStrategy::Exact).evaluate(lower, upper),
        Ok(false)
    );
}

#[test]
fn parse_errors_are_attributed_in_argument_order() {
    for strategy in strategies() {
        let p = predicate(strategy);
        let cases = [
            ("POINT(1 1", "POINT(1 1)", Argument::First),
            ("POINT(1 1)", "POINT(1 1", Argument::Second),
            ("POINT(1 1", "POINT(1 1", Argument::First),
            ("", SQUARE, Argument::First),
            (SQUARE, "CIRCLE(0 0, 1)", Argument::Second),
        ];
        for (a, b, expected) in cases {
            match p.evaluate(a, b) {
                Err(IntersectsError::GeometryParse { argument, .. }) => {
                    assert_eq!(argument, expected, "{:?} / {:?}", a, b)
                }
                other => panic!("expected parse error for {:?} / {:?}, got {:?}", a, b, other),
            }
        }
    }
}

#[test]
fn empty_geometry_never_aliases_to_false_under_bounding_box() {
    let p = predicate(IntersectionStrategy::BoundingBox);
    let err = p.evaluate("GEOMETRYCOLLECTION EMPTY", SQUARE).unwrap_err();
    assert!(matches!(
        err,
        IntersectsError::ExtentComputation {
            argument: Argument::First,
            ..
        }
    ));
}

#[test]
fn repeated_evaluation_is_deterministic() {
    for strategy in strategies() {
        let p = predicate(strategy);
        let first: Vec<_> = SAMPLES.iter().map(|s| p.evaluate(s, SQUARE)).collect();
        for _ in 0..10 {
            let again: Vec<_> = SAMPLES.iter().map(|s| p.evaluate(s, SQUARE)).collect();
            assert_eq!(first, again);
        }
    }
}

#[test]
fn concurrent_evaluation_matches_sequential() {
    let p = Arc::new(predicate(IntersectionStrategy::Exact));
    let expected: Vec<_> = SAMPLES
        .iter()
        .map(|s| p.evaluate(s, SQUARE).unwrap())
        .collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let p = Arc::clone(&p);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for _ in 0..50 {
                    for (sample, want) in SAMPLES.iter().zip(expected.iter()) {
                        assert_eq!(p.evaluate(sample, SQUARE).unwrap(), *want);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
