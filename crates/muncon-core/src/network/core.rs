//! Uncertain network data container

use ndarray::{Array1, Array2, Array3};
use num_complex::Complex64;
use tracing::{debug, warn};

use crate::constants::DEFAULT_Z0;

/// S-parameter measurements of an N-port network with their full covariance.
///
/// Created empty and filled through setters. No shape checks are made
/// between fields; the layout of `covariance` is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct UncertainNetworkData {
    /// Number of ports
    ports: usize,
    /// Reference impedance (per port)
    z0: Array1<Complex64>,
    /// Frequency points in Hz
    frequencies: Vec<f64>,
    /// S-parameter data [nfreq, nports, nports]
    s: Array3<Complex64>,
    /// Covariance of the flattened S-parameter entries
    covariance: Array2<f64>,
    /// Comments
    comments: Vec<String>,
}

impl UncertainNetworkData {
    /// Create an empty container (0 ports, no data)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ports(&mut self, ports: usize) {
        self.ports = ports;
    }

    #[inline]
    pub fn ports(&self) -> usize {
        self.ports
    }

    /// Set per-port reference impedances.
    ///
    /// If the number of values equals the port count they are stored as-is.
    /// Otherwise the first value is repeated for every port, even when more
    /// values than ports were given. An empty input falls back to
    /// `DEFAULT_Z0`. Call `set_ports` first.
    ///
    /// # Example
    /// ```
    /// use muncon_core::UncertainNetworkData;
    /// let mut data = UncertainNetworkData::new();
    /// data.set_ports(3);
    /// data.set_reference_impedances([5.0, 10.0]);
    /// assert!(data.reference_impedances().iter().all(|z| z.re == 5.0));
    /// ```
    pub fn set_reference_impedances<I, T>(&mut self, z0: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Complex64>,
    {
        let values: Vec<Complex64> = z0.into_iter().map(Into::into).collect();

        self.z0 = if values.len() == self.ports {
            Array1::from_vec(values)
        } else if let Some(&first) = values.first() {
            if values.len() > self.ports && self.ports > 0 {
                // Extra values are dropped, not truncated.
                warn!(
                    given = values.len(),
                    ports = self.ports,
                    "more reference impedances than ports, broadcasting the first"
                );
            } else {
                debug!(
                    given = values.len(),
                    ports = self.ports,
                    "broadcasting reference impedance to all ports"
                );
            }
            Array1::from_elem(self.ports, first)
        } else {
            debug!(ports = self.ports, "no reference impedance given, using default");
            Array1::from_elem(self.ports, Complex64::new(DEFAULT_Z0, 0.0))
        };
    }

    /// Set the same reference impedance on every port
    pub fn set_reference_impedance<T: Into<Complex64>>(&mut self, z0: T) {
        self.set_reference_impedances(std::iter::once(z0.into()));
    }

    pub fn reference_impedances(&self) -> &Array1<Complex64> {
        &self.z0
    }

    /// Set the frequency points (Hz). Ordering is not checked.
    pub fn set_frequencies(&mut self, frequencies: Vec<f64>) {
        self.frequencies = frequencies;
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Set S-parameters shaped [nfreq, nports, nports]
    pub fn set_s_parameters(&mut self, s: Array3<Complex64>) {
        self.s = s;
    }

    pub fn s_parameters(&self) -> &Array3<Complex64> {
        &self.s
    }

    pub fn set_covariance(&mut self, covariance: Array2<f64>) {
        self.covariance = covariance;
    }

    pub fn covariance(&self) -> &Array2<f64> {
        &self.covariance
    }

    pub fn set_comments(&mut self, comments: Vec<String>) {
        self.comments = comments;
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Append a single comment
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.frequencies.len()
    }

    /// Standard uncertainties: square roots of the covariance diagonal.
    ///
    /// Negative variances (numerical noise) are clamped to zero.
    pub fn standard_uncertainties(&self) -> Array1<f64> {
        self.covariance.diag().mapv(|v| v.max(0.0).sqrt())
    }
}
