//! Dispersion models: index of refraction as a function of wavelength.
//!
//! Wavelengths are in micrometers throughout.

use crate::Scalar;

/// Three-term Sellmeier equation, `n² = 1 + Σ Bᵢ·λ²/(λ² − Cᵢ)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sellmeier<F> {
    pub b: [F; 3],
    pub c: [F; 3],
}

impl<F: Scalar> Sellmeier<F> {
    pub fn new(b: [F; 3], c: [F; 3]) -> Self {
        Sellmeier { b, c }
    }

    /// All coefficients zero, so `n = 1` everywhere.
    pub fn air() -> Self {
        Sellmeier {
            b: [F::zero(); 3],
            c: [F::zero(); 3],
        }
    }

    /// Wavelength-independent index `ior`.
    pub fn constant(ior: F) -> Self {
        let mut b = [F::zero(); 3];
        b[0] = ior * ior - F::one();
        Sellmeier {
            b,
            c: [F::zero(); 3],
        }
    }

    pub fn ior(&self, wavelength: F) -> F {
        let l2 = wavelength * wavelength;
        let mut n2 = F::one();
        for i in 0..3 {
            n2 += self.b[i] * l2 / (l2 - self.c[i]);
        }
        n2.sqrt()
    }

    pub fn is_air(&self) -> bool {
        *self == Self::air()
    }
}

/// Schott/Laurent power series,
/// `n² = A₀ + A₁λ² + A₂λ⁻² + A₃λ⁻⁴ + A₄λ⁻⁶ + A₅λ⁻⁸`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Laurent<F> {
    pub a: [F; 6],
}

impl<F: Scalar> Laurent<F> {
    pub fn new(a: [F; 6]) -> Self {
        Laurent { a }
    }

    pub fn air() -> Self {
        Self::constant(F::one())
    }

    pub fn constant(ior: F) -> Self {
        let mut a = [F::zero(); 6];
        a[0] = ior * ior;
        Laurent { a }
    }

    pub fn ior(&self, wavelength: F) -> F {
        let l2 = wavelength * wavelength;
        let inv = F::one() / l2;
        // Horner over the negative powers: A₂λ⁻² + A₃λ⁻⁴ + A₄λ⁻⁶ + A₅λ⁻⁸.
        let negative = inv * (self.a[2] + inv * (self.a[3] + inv * (self.a[4] + inv * self.a[5])));
        (self.a[0] + self.a[1] * l2 + negative).sqrt()
    }

    pub fn is_air(&self) -> bool {
        *self == Self::air()
    }
}

/// The material behind a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Glass<F> {
    Sellmeier(Sellmeier<F>),
    Laurent(Laurent<F>),
}

impl<F: Scalar> Default for Glass<F> {
    fn default() -> Self {
        Self::air()
    }
}

impl<F: Scalar> From<Sellmeier<F>> for Glass<F> {
    fn from(s: Sellmeier<F>) -> Self {
        Glass::Sellmeier(s)
    }
}

impl<F: Scalar> From<Laurent<F>> for Glass<F> {
    fn from(l: Laurent<F>) -> Self {
        Glass::Laurent(l)
    }
}

impl<F: Scalar> Glass<F> {
    pub fn air() -> Self {
        Glass::Sellmeier(Sellmeier::air())
    }

    pub fn constant(ior: F) -> Self {
        Glass::Sellmeier(Sellmeier::constant(ior))
    }

    #[inline]
    pub fn ior(&self, wavelength: F) -> F {
        match self {
            Glass::Sellmeier(s) => s.ior(wavelength),
            Glass::Laurent(l) => l.ior(wavelength),
        }
    }

    /// True for the air sentinel of either formula, compared exactly.
    pub fn is_air(&self) -> bool {
        match self {
            Glass::Sellmeier(s) => s.is_air(),
            Glass::Laurent(l) => l.is_air(),
        }
    }

    /// Convert the coefficients to another scalar with the same primal type.
    ///
    /// Lifted coefficients are constants: any derivative carried by `self`
    /// is dropped.
    pub fn lift<T: Scalar<Float = F::Float>>(&self) -> Glass<T> {
        let conv = |v: F| T::from_f(v.detach());
        match self {
            Glass::Sellmeier(s) => Glass::Sellmeier(Sellmeier {
                b: s.b.map(conv),
                c: s.c.map(conv),
            }),
            Glass::Laurent(l) => Glass::Laurent(Laurent { a: l.a.map(conv) }),
        }
    }
}
