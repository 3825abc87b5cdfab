//! UncertainNetworkData tests
//!
//! Accessors, reference impedance broadcasting and comment handling.

use ndarray::{Array2, Array3};
use num_complex::Complex64;
use muncon_core::format::{sample_to_complex, SParamFormat};
use muncon_core::network::{pad_ports, swap_s12_s21};
use muncon_core::UncertainNetworkData;

fn z0_re(data: &UncertainNetworkData) -> Vec<f64> {
    data.reference_impedances().iter().map(|z| z.re).collect()
}

/// Helper to create a small 2-port measurement
fn create_test_data() -> UncertainNetworkData {
    let nfreq = 3;
    let mut s = Array3::<Complex64>::zeros((nfreq, 2, 2));
    for f in 0..nfreq {
        s[[f, 0, 0]] = Complex64::new(0.1, 0.01 * f as f64);
        s[[f, 0, 1]] = Complex64::new(0.9, 0.0);
        s[[f, 1, 0]] = Complex64::new(0.8, 0.0);
        s[[f, 1, 1]] = Complex64::new(0.2, 0.0);
    }

    let mut data = UncertainNetworkData::new();
    data.set_ports(2);
    data.set_reference_impedance(50.0);
    data.set_frequencies(vec![1e9, 2e9, 3e9]);
    data.set_s_parameters(s);
    data.set_covariance(Array2::eye(nfreq * 2 * 2 * 2) * 1e-4);
    data
}

#[test]
fn test_z0_broadcast_short_input() {
    let mut data = UncertainNetworkData::new();
    data.set_ports(3);
    data.set_reference_impedances([5.0, 10.0]);
    assert_eq!(z0_re(&data), vec![5.0, 5.0, 5.0]);
}

#[test]
fn test_z0_matching_length_kept() {
    let mut data = UncertainNetworkData::new();
    data.set_ports(3);
    data.set_reference_impedances(vec![1.0, 2.0, 3.0]);
    assert_eq!(z0_re(&data), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_z0_scalar_broadcast() {
    let mut data = UncertainNetworkData::new();
    data.set_ports(3);
    data.set_reference_impedance(50.0);
    assert_eq!(z0_re(&data), vec![50.0, 50.0, 50.0]);
}

#[test]
fn test_z0_long_input_broadcasts_first() {
    let mut data = UncertainNetworkData::new();
    data.set_ports(2);
    data.set_reference_impedances([75.0, 50.0, 25.0]);
    assert_eq!(z0_re(&data), vec![75.0, 75.0]);
}

#[test]
fn test_comments_append_in_order() {
    let mut data = UncertainNetworkData::new();
    assert!(data.comments().is_empty());
    data.add_comment("x");
    data.add_comment(String::from("y"));
    assert_eq!(data.comments(), ["x", "y"]);

    data.set_comments(vec!["replaced".to_string()]);
    assert_eq!(data.comments(), ["replaced"]);
}

#[test]
fn test_accessors_round_trip() {
    let data = create_test_data();
    assert_eq!(data.ports(), 2);
    assert_eq!(data.nfreq(), 3);
    assert_eq!(data.frequencies(), &[1e9, 2e9, 3e9]);
    assert_eq!(data.s_parameters().dim(), (3, 2, 2));
    assert_eq!(data.s_parameters()[[2, 0, 0]], Complex64::new(0.1, 0.02));
    assert_eq!(data.covariance().dim(), (24, 24));
    assert!(data.standard_uncertainties().iter().all(|u| (u - 0.01).abs() < 1e-12));
}

#[test]
fn test_clone_is_independent() {
    let data = create_test_data();
    let mut copy = data.clone();
    copy.add_comment("copy only");
    copy.set_ports(4);
    assert!(data.comments().is_empty());
    assert_eq!(data.ports(), 2);
}

#[test]
fn test_fill_from_db_samples() {
    // A 1-port DB sweep, converted and padded to 2 ports.
    let raw = [(0.0, 0.0), (-20.0, 0.0)];
    let mut s = Array3::<Complex64>::zeros((raw.len(), 1, 1));
    for (f, sample) in raw.iter().enumerate() {
        s[[f, 0, 0]] = sample_to_complex(*sample, SParamFormat::DB).unwrap();
    }

    let mut data = UncertainNetworkData::new();
    data.set_ports(2);
    data.set_s_parameters(pad_ports(&s, 2).unwrap());

    let s = data.s_parameters();
    assert!((s[[1, 0, 0]].re - 0.1).abs() < 1e-9);
    assert_eq!(s[[1, 1, 1]], Complex64::new(0.0, 0.0));
}

#[test]
fn test_swap_on_container_data() {
    let data = create_test_data();
    let mut s = data.s_parameters().clone();
    swap_s12_s21(&mut s).unwrap();
    assert_eq!(s[[0, 0, 1]], Complex64::new(0.8, 0.0));
    assert_eq!(s[[0, 1, 0]], Complex64::new(0.9, 0.0));
}
