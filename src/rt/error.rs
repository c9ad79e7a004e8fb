use thiserror::Error;

/// Why a ray failed to make it through a lens.
///
/// Surface indices refer to positions in [`Lens::surfaces`](crate::Lens).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    #[error("ray misses surface {surface}")]
    Miss { surface: usize },

    #[error("ray blocked by the aperture of surface {surface}")]
    Vignetted { surface: usize },

    #[error("total internal reflection at surface {surface}")]
    TotalInternalReflection { surface: usize },

    #[error("invalid surface range {first}..={last} for a lens with {len} surfaces")]
    InvalidRange {
        first: usize,
        last: usize,
        len: usize,
    },

    #[error("lens has no surfaces")]
    EmptyLens,
}

pub type Result<T> = std::result::Result<T, TraceError>;
