use statr::{
    mean, median, quartiles, range_of,
    regression::LinearFit,
    sample::normalize,
    stats::{self, normal_density, stddev},
    Error, Sample,
};

#[test]
fn range_of_sample() {
    assert_eq!(stats::range_of(&[1., 3., 7., 2.]).unwrap(), 6.0);
    assert_eq!(range_of!(1, 3, 7, 2).unwrap(), 6.0);
}

#[test]
fn mean_of_sample() {
    assert_eq!(stats::mean(&[1., 2., 3., 4.]).unwrap(), 2.5);
    assert_eq!(mean!(1, 2, 3, 4).unwrap(), 2.5);
}

#[test]
fn median_of_odd_and_even_samples() {
    assert_eq!(stats::median(&[1., 2., 3., 4., 5.]).unwrap(), 3.0);
    assert_eq!(stats::median(&[1., 2., 3., 4.]).unwrap(), 2.5);
    assert_eq!(median!(1, 2, 3, 4, 5).unwrap(), 3.0);
    assert_eq!(median!(1.5, 2.5).unwrap(), 2.0);
}

#[test]
fn quartiles_of_seven() {
    assert_eq!(
        stats::quartiles(&[1., 2., 3., 4., 5., 6., 7.]).unwrap(),
        (2.0, 4.0, 6.0)
    );
    assert_eq!(quartiles!(7, 6, 5, 4, 3, 2, 1).unwrap(), (2.0, 4.0, 6.0));
}

#[test]
fn population_stddev() {
    let data = [2., 4., 4., 4., 5., 5., 7., 9.];
    assert_eq!(stddev(&data, false).unwrap(), 2.0);
}

#[test]
fn standard_normal_peak() {
    let peak = normal_density(0., 0., 1.).unwrap();
    assert!((peak - 0.398942).abs() < 1e-6);
}

#[test]
fn fitted_line() {
    let fit = LinearFit::new(&[1., 2., 3., 4.], &[3., 5., 7., 9.]).unwrap();
    assert!((fit.slope - 2.0).abs() < 1e-12);
    assert!((fit.intercept - 1.0).abs() < 1e-12);
    assert!((fit.r_value - 1.0).abs() < 1e-12);
    assert!((fit.predict(10.) - 21.0).abs() < 1e-12);
}

#[test]
fn lazy_and_parsed_samples() {
    let squares = (1..=5).map(|i| f64::from(i * i));
    assert_eq!(normalize(squares, stats::median).unwrap(), 9.0);

    let sample: Sample = "2 4 4 4 5 5 7 9".parse().unwrap();
    assert_eq!(stddev(&sample, false).unwrap(), 2.0);
}

#[test]
fn errors_reach_the_caller() {
    assert!(matches!(stats::mean(&[]), Err(Error::Empty)));
    assert!(matches!(stats::quartiles(&[3.]), Err(Error::Empty)));
    assert!(matches!(stddev(&[3.], true), Err(Error::DivisionByZero)));
    assert!(matches!(
        normal_density(1., 0., 0.),
        Err(Error::DivisionByZero)
    ));
    assert!(matches!(
        "1 two 3".parse::<Sample>(),
        Err(Error::TypeMismatch { .. })
    ));
}
