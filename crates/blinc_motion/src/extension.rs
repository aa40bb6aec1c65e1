//! Shared behaviour of motion token sets

/// How [`ThemeExtension::lerp_with`] combines two token sets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LerpStrategy {
    /// Return the target set unchanged, ignoring `t`
    #[default]
    PreferTarget,
    /// Blend every slot by `t`
    Blend,
}

/// A token set a theme can carry, override and transition between
pub trait ThemeExtension: Clone + PartialEq {
    /// Partial set of slot values; `None` keeps the current value
    type Overrides: Default;

    /// Copy of `self` with every supplied override applied
    fn copy_with(&self, overrides: &Self::Overrides) -> Self;

    /// Slot-by-slot blend towards `other`, `t` in `[0, 1]`
    fn blend(&self, other: &Self, t: f32) -> Self;

    /// Theme transition step
    ///
    /// Returns `other` whenever it is present and `self` otherwise. `t` is
    /// not consulted; use [`lerp_with`](Self::lerp_with) with
    /// [`LerpStrategy::Blend`] for a real interpolation.
    fn lerp(&self, other: Option<&Self>, t: f32) -> Self {
        self.lerp_with(other, t, LerpStrategy::PreferTarget)
    }

    fn lerp_with(&self, other: Option<&Self>, t: f32, strategy: LerpStrategy) -> Self {
        match (other, strategy) {
            (None, _) => self.clone(),
            (Some(other), LerpStrategy::PreferTarget) => other.clone(),
            (Some(other), LerpStrategy::Blend) => self.blend(other, t.clamp(0.0, 1.0)),
        }
    }
}
