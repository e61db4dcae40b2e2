use crate::StartLayout;

/// Settings for translating solutions.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranslatorConfig {
    /// Orientation of the cube when the first move is expanded.
    pub start_layout: StartLayout,
    /// Whether to run [`crate::cancel_opposite_spins()`] before the other
    /// optimization passes.
    ///
    /// The current expansion tables never produce a canceling pair, so this is
    /// off by default.
    pub cancel_opposite_spins: bool,
}
