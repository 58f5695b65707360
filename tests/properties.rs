//! Properties of expressions over randomly generated vectors

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exprvec::vector::types::{ElementKind, Numeric};
use exprvec::vector::{to_text, TryAdd};
use exprvec::{assign, vector, Error, Expression, Vector};

fn kind_of<E: Expression>(_: &E) -> ElementKind {
    <E::Elem as Numeric>::KIND
}

fn random_ints(rng: &mut StdRng, n: usize) -> Vector<i32> {
    (0..n).map(|_| rng.gen_range(-1000..1000)).collect()
}

fn random_doubles(rng: &mut StdRng, n: usize) -> Vector<f64> {
    (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

#[test]
fn sizes_are_conserved() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in [0, 1, 2, 17, 256] {
        let a = random_ints(&mut rng, n);
        let b = random_doubles(&mut rng, n);
        let e = (&a + &b) * 3_i8 - 1_i64;
        assert_eq!(e.size(), n);
        assert_eq!((2.0_f32 - &b).size(), n);
        assert_eq!(Vector::<f64>::from_expr(e).unwrap().size(), n);
    }
}

#[test]
fn elements_match_promoted_arithmetic() {
    let mut rng = StdRng::seed_from_u64(12);
    let a = random_ints(&mut rng, 64);
    let b = random_doubles(&mut rng, 64);
    let k: i16 = rng.gen_range(1..100);

    let sum = &a + &b;
    let diff = &a - &b;
    let scaled = &a * k;
    let quot = &b / k;
    for i in 0..64 {
        let (x, y) = (a[i], b[i]);
        assert_eq!(sum.at(i), x as f64 + y);
        assert_eq!(diff.at(i), x as f64 - y);
        assert_eq!(scaled.at(i), x * k as i32);
        assert_eq!(quot.at(i), y / k as f64);
    }
}

#[test]
fn scalars_commute_where_defined() {
    let mut rng = StdRng::seed_from_u64(13);
    let a = random_ints(&mut rng, 32);
    let k = 7_i64;
    for i in 0..a.size() {
        assert_eq!((&a + k).at(i), (k + &a).at(i));
        assert_eq!((&a * k).at(i), (k * &a).at(i));
        assert_eq!((&a - k).at(i) + k, a[i] as i64);
    }
}

#[test]
fn repeated_reads_are_identical() {
    let mut rng = StdRng::seed_from_u64(14);
    let a = random_doubles(&mut rng, 16);
    let b = random_doubles(&mut rng, 16);
    let e = 0.5_f64 * (&a - &b) + 1_i32;
    let first = e.to_vec().unwrap();
    for _ in 0..3 {
        assert_eq!(e.to_vec().unwrap(), first);
    }
    // in any order
    for i in (0..16).rev() {
        assert_eq!(e.at(i), first[i]);
    }
}

#[test]
fn aliased_assignment_is_order_independent() {
    let mut rng = StdRng::seed_from_u64(15);
    let mut v = random_ints(&mut rng, 50);
    let before = v.clone();
    assign!(v = 2_i32 * &v - &before + 1_i32).unwrap();
    for i in 0..50 {
        assert_eq!(v[i], before[i] + 1);
    }
}

#[test]
fn mismatched_sums_are_reported_on_every_path() {
    let mut rng = StdRng::seed_from_u64(17);
    for (m, n) in [(2, 3), (3, 2), (0, 5), (9, 1)] {
        let a = random_ints(&mut rng, m);
        let b = random_doubles(&mut rng, n);
        let mismatch = Error::DimensionMismatch(m, n);
        let e = &a + &b;

        assert_eq!(e.iter().err(), Some(mismatch.clone()));
        assert_eq!(e.to_vec(), Err(mismatch.clone()));
        assert_eq!(to_text(&e), Err(mismatch.clone()));
        assert_eq!(format!("{e}"), mismatch.to_string());
        assert_eq!((e * 2_i8).to_string(), mismatch.to_string());
    }
}

#[test]
fn rendering_has_one_separator_per_gap() {
    let mut rng = StdRng::seed_from_u64(16);
    for n in 1..20 {
        let a = random_ints(&mut rng, n);
        let text = to_text(&(&a + 1_i32)).unwrap();
        assert_eq!(text.matches(' ').count(), n - 1);
        assert!(!text.starts_with(' ') && !text.ends_with(' '));
    }
}

#[test]
fn readers_can_share_expressions_across_threads() {
    let a: Vector<i64> = (0..1000).collect();
    let b: Vector<f32> = (0..1000).map(|i| i as f32 * 0.5).collect();
    let e = &a + &b;

    let totals: Vec<f32> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| e.iter().map(|it| it.sum::<f32>())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });

    assert!(totals.windows(2).all(|w| w[0] == w[1]));
}

// Scenarios

#[test]
fn integer_vectors_add() {
    let a: Vector<i32> = vector![1, 2, 3, 4];
    let b: Vector<i32> = vector![10, 20, 30, 40];
    let r = Vector::<i32>::from_expr(&a + &b).unwrap();
    assert_eq!(r.as_slice(), &[11, 22, 33, 44]);
    assert_eq!(r.kind(), ElementKind::I32);
}

#[test]
fn integer_vector_scaled_by_double() {
    let a: Vector<i32> = vector![1, 2, 3];
    let e = &a * 0.5_f64;
    assert_eq!(kind_of(&e), ElementKind::F64);
    let r = Vector::<f64>::from_expr(e).unwrap();
    assert_eq!(r.as_slice(), &[0.5, 1.0, 1.5]);
}

#[test]
fn mixed_expression_is_double() {
    let a: Vector<i8> = vector![0, 1, 2, 3];
    let c: Vector<f64> = vector![0.01, 0.02, 0.03, 0.04];
    let e = 1.05_f64 + 0.5_f32 * &c + &a * 2_i32 - 2_i32;
    assert_eq!(kind_of(&e), ElementKind::F64);
    let r = Vector::<f64>::from_expr(e).unwrap();
    assert_eq!(r.size(), 4);
    assert!((r[0] - (-0.945)).abs() < 1e-12);
}

#[test]
fn mismatched_vectors_fail() {
    let a: Vector<i32> = vector![1, 2];
    let b: Vector<i32> = vector![1, 2, 3];
    assert_eq!(
        Vector::<i32>::from_expr(&a + &b),
        Err(Error::DimensionMismatch(2, 3))
    );
    assert_eq!((&a).try_add(&b).err(), Some(Error::DimensionMismatch(2, 3)));
}

#[test]
fn self_referencing_assignment() {
    let mut v: Vector<i32> = vector![1, 2, 3];
    assign!(v = &v + 10_i32).unwrap();
    assert_eq!(v.as_slice(), &[11, 12, 13]);
}
